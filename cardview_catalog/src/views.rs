// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card views: what each kind of window shows, and the render pass that wires it up.
//!
//! ## Overview
//!
//! A [`CardView`] decides which components a window composes for the current
//! [`Environment`]. [`render_view`] then runs one render pass: it measures the cards,
//! resolves every card component through the engine, resolves the window's app controls
//! against its [`ViewState`], and builds the two dispatch tables clicks are routed through.
//!
//! | view | card controls | menu | badges | app controls |
//! |---|---|---|---|---|
//! | [`HandView`] | play, discard?, show?, faces | yes | defaults | draw, pass, reset? |
//! | [`PileView`] | play, discard?, show?, delete\*, faces | yes | defaults | shuffle, pass, reset |
//! | [`DeckView`] | edit, delete, faces | yes | defaults, drawn | shuffle, deal, reset |
//! | [`CardSheet`] | faces | no | defaults, name | none |
//!
//! `?` marks controls that depend on settings: a configured discard pile, the show-card and
//! hand-reset options. `*` marks controls offered to game masters only.
//!
//! Every view shows the color markers.

use std::cell::Cell;
use std::fmt;

use cardview_components::diagnostics::DiagnosticSink;
use cardview_components::dispatch::DispatchTable;
use cardview_components::resolve::{RenderContext, render_context, resolve_controls};
use cardview_components::types::{ComponentSet, ResolvedControl};

use crate::badges::{self, CardBadge};
use crate::controls::{self, AppControl, CardControl};
use crate::document::{Card, Cards};
use crate::layout::{ImageMetadata, MeasureError, Measured, measure_cards};
use crate::markers;
use crate::positions::{LocalStorage, PositionsError, WindowPosition, WindowPositions};
use crate::settings::{Environment, Toggles, ViewKind};

/// State of one open view window, shared with its app controls.
#[derive(Debug)]
pub struct ViewState {
    uuid: String,
    sort_standard: Cell<bool>,
}

impl ViewState {
    /// State for a window showing the document `uuid`, in shuffled order.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            sort_standard: Cell::new(false),
        }
    }

    /// Uuid of the document shown.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Whether cards are listed in standard rather than shuffled order.
    pub fn sort_standard(&self) -> bool {
        self.sort_standard.get()
    }

    /// Switch between standard and shuffled order.
    pub fn set_sort_standard(&self, standard: bool) {
        self.sort_standard.set(standard);
    }

    /// Record that the window moved to `position`.
    pub fn remember_position<S: LocalStorage>(
        &self,
        positions: &mut WindowPositions<S>,
        position: WindowPosition,
    ) -> Result<(), PositionsError> {
        positions.store(self.uuid.clone(), position)
    }

    /// Record that the window closed.
    pub fn forget_position<S: LocalStorage>(
        &self,
        positions: &mut WindowPositions<S>,
    ) -> Result<bool, PositionsError> {
        positions.remove(&self.uuid)
    }
}

/// Components a view composes for one render pass.
///
/// `E` is the click event handed to every control handler.
pub struct Components<D, P, E = ()> {
    /// Card controls, context menu, badges and markers.
    pub cards: ComponentSet<D, P, E>,
    /// Controls shown once on the window.
    pub app_controls: Vec<AppControl<P, E>>,
}

impl<D, P, E> fmt::Debug for Components<D, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components")
            .field("cards", &self.cards)
            .field("app_controls", &self.app_controls)
            .finish()
    }
}

/// A kind of window displaying cards.
pub trait CardView {
    /// Kind of document shown.
    fn kind(&self) -> ViewKind;

    /// Initial window width, if the view has one.
    fn default_width(&self) -> Option<f64> {
        None
    }

    /// Compose the components for `env`.
    fn components<D, P, E>(&self, env: &Environment) -> Components<D, P, E>
    where
        D: Card + 'static,
        P: Cards + 'static,
        E: 'static;
}

/// A player's hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandView;

/// A pile of played cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct PileView;

/// A deck to draw from.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckView;

/// The sheet of a single card.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardSheet;

/// Play, then discard and show-card when enabled.
fn playable<D, P, E>(env: &Environment) -> Vec<CardControl<D, P, E>>
where
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
{
    let toggles = env.toggles();
    let mut list = vec![controls::play()];
    if toggles.contains(Toggles::DISCARD_PILE) {
        list.push(controls::discard(env.settings.discard_pile.as_str()));
    }
    if toggles.contains(Toggles::SHOW_CARD) {
        list.push(controls::show_card(env.is_gm, env.socket.clone()));
    }
    list
}

fn context_menu<D, P, E>(toggles: Toggles) -> Vec<CardControl<D, P, E>>
where
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
{
    let mut menu = vec![controls::color_toggles(), controls::edit()];
    if toggles.contains(Toggles::GM) {
        menu.push(controls::console_log());
    }
    menu
}

fn card_set<D: Card + 'static, P: Cards + 'static, E>(
    controls: Vec<CardControl<D, P, E>>,
    context_menu: Vec<CardControl<D, P, E>>,
    badges: Vec<CardBadge<D, P>>,
) -> ComponentSet<D, P, E> {
    ComponentSet {
        controls,
        context_menu,
        badges,
        markers: markers::default_markers(),
        card_classes: Vec::new(),
    }
}

impl CardView for HandView {
    fn kind(&self) -> ViewKind {
        ViewKind::Hand
    }

    fn default_width(&self) -> Option<f64> {
        Some(600.0)
    }

    fn components<D, P, E>(&self, env: &Environment) -> Components<D, P, E>
    where
        D: Card + 'static,
        P: Cards + 'static,
        E: 'static,
    {
        let toggles = env.toggles();
        let mut card_controls = playable(env);
        card_controls.extend(controls::default_controls());

        let mut app_controls = vec![controls::draw(), controls::pass()];
        if toggles.contains(Toggles::HAND_RESET) {
            app_controls.push(controls::reset());
        }

        Components {
            cards: card_set(
                card_controls,
                context_menu(toggles),
                badges::default_badges(toggles),
            ),
            app_controls,
        }
    }
}

impl CardView for PileView {
    fn kind(&self) -> ViewKind {
        ViewKind::Pile
    }

    fn default_width(&self) -> Option<f64> {
        Some(660.0)
    }

    fn components<D, P, E>(&self, env: &Environment) -> Components<D, P, E>
    where
        D: Card + 'static,
        P: Cards + 'static,
        E: 'static,
    {
        let toggles = env.toggles();
        let mut card_controls = playable(env);
        if toggles.contains(Toggles::GM) {
            card_controls.push(controls::delete());
        }
        card_controls.extend(controls::default_controls());

        Components {
            cards: card_set(
                card_controls,
                context_menu(toggles),
                badges::default_badges(toggles),
            ),
            app_controls: vec![controls::shuffle(), controls::pass(), controls::reset()],
        }
    }
}

impl CardView for DeckView {
    fn kind(&self) -> ViewKind {
        ViewKind::Deck
    }

    fn default_width(&self) -> Option<f64> {
        Some(660.0)
    }

    fn components<D, P, E>(&self, env: &Environment) -> Components<D, P, E>
    where
        D: Card + 'static,
        P: Cards + 'static,
        E: 'static,
    {
        let toggles = env.toggles();
        let mut card_controls = vec![controls::edit(), controls::delete()];
        card_controls.extend(controls::default_controls());
        let mut card_badges = badges::default_badges(toggles);
        card_badges.push(badges::drawn());

        Components {
            cards: card_set(card_controls, context_menu(toggles), card_badges),
            app_controls: vec![controls::shuffle(), controls::deal(), controls::reset()],
        }
    }
}

impl CardView for CardSheet {
    fn kind(&self) -> ViewKind {
        ViewKind::Card
    }

    fn components<D, P, E>(&self, env: &Environment) -> Components<D, P, E>
    where
        D: Card + 'static,
        P: Cards + 'static,
        E: 'static,
    {
        let mut card_badges = badges::default_badges(env.toggles());
        card_badges.push(badges::name());

        Components {
            cards: card_set(controls::default_controls(), Vec::new(), card_badges),
            app_controls: Vec::new(),
        }
    }
}

/// Result of one render pass of a view window.
pub struct RenderedView<D, P, E = ()> {
    /// CSS classes of the window.
    pub classes: Vec<String>,
    /// Card sizes.
    pub layout: Measured,
    /// Resolved card components and the card-level dispatch table.
    pub cards: RenderContext<D, P, E>,
    /// Resolved app controls.
    pub app_controls: Vec<ResolvedControl>,
    /// Dispatch table of the app controls.
    pub app_dispatch: DispatchTable<ViewState, P, E>,
}

impl<D, P, E> RenderedView<D, P, E> {
    /// Route a click on a card control with class list `classes`.
    ///
    /// `event` is handed to each handler. Returns the number of handlers run; none run when
    /// the control is disabled.
    pub fn click_card<'c>(
        &self,
        classes: impl IntoIterator<Item = &'c str>,
        disabled: bool,
        event: &E,
        card: &D,
        pile: &P,
    ) -> usize {
        self.cards
            .dispatch
            .dispatch_enabled(classes, disabled, event, card, pile)
    }

    /// Route a click on an app control with class list `classes`.
    pub fn click_app<'c>(
        &self,
        classes: impl IntoIterator<Item = &'c str>,
        disabled: bool,
        event: &E,
        state: &ViewState,
        pile: &P,
    ) -> usize {
        self.app_dispatch
            .dispatch_enabled(classes, disabled, event, state, pile)
    }
}

impl<D, P, E> fmt::Debug for RenderedView<D, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedView")
            .field("classes", &self.classes)
            .field("layout", &self.layout)
            .field("cards", &self.cards)
            .field("app_controls", &self.app_controls)
            .field("app_dispatch", &self.app_dispatch)
            .finish()
    }
}

/// Run one render pass of `view` over the `cards` of `pile`.
///
/// Configuration problems in the composed descriptors go to `sink`; only reading card
/// images can fail.
pub fn render_view<V, D, P, E, M, S>(
    view: &V,
    state: &ViewState,
    cards: &[D],
    pile: &P,
    env: &Environment,
    images: &M,
    sink: &mut S,
) -> Result<RenderedView<D, P, E>, MeasureError<M::Error>>
where
    V: CardView,
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
    M: ImageMetadata + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let kind = view.kind();
    let layout = measure_cards(cards, env.settings.card_height, images)?;
    let Components {
        cards: set,
        app_controls,
    } = view.components::<D, P, E>(env);

    let context = render_context(cards, pile, &set, sink);
    let resolved_app = resolve_controls(state, pile, &app_controls, sink);
    let app_dispatch = DispatchTable::build(&app_controls, sink);

    tracing::debug!(
        target: "cardview::views",
        kind = kind.name(),
        uuid = state.uuid(),
        cards = cards.len(),
        card_bindings = context.dispatch.len(),
        app_bindings = app_dispatch.len(),
        "rendered view"
    );

    Ok(RenderedView {
        classes: kind.classes(env.settings.view_flags(kind)),
        layout,
        cards: context,
        app_controls: resolved_app,
        app_dispatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::{FixedImages, TestCard, TestPile, environment};
    use cardview_components::diagnostics::{ConfigError, IgnoreDiagnostics};
    use kurbo::Size;

    fn classes(list: &[CardControl<TestCard, TestPile>]) -> Vec<&str> {
        list.iter().filter_map(|c| c.class.as_deref()).collect()
    }

    fn app_classes(list: &[AppControl<TestPile>]) -> Vec<&str> {
        list.iter().filter_map(|c| c.class.as_deref()).collect()
    }

    fn compose<V: CardView>(
        view: V,
        settings: Settings,
        gm: bool,
    ) -> Components<TestCard, TestPile> {
        let (env, _) = environment(settings, gm);
        view.components(&env)
    }

    #[test]
    fn hand_without_discard_pile_has_no_discard_control() {
        let (env, _) = environment(Settings::default(), false);
        let cards = [TestCard::new("a")];
        let pile = TestPile::default();
        let state = ViewState::new("Cards.hand");
        let mut sink = Vec::new();
        let view: RenderedView<TestCard, TestPile> = render_view(
            &HandView,
            &state,
            &cards,
            &pile,
            &env,
            &FixedImages(Size::new(100.0, 200.0)),
            &mut sink,
        )
        .unwrap();

        let resolved: Vec<_> = view.cards.items[0]
            .controls
            .iter()
            .filter_map(|c| c.class.as_deref())
            .collect();
        assert_eq!(resolved, ["play-card", "card-faces"]);
        assert!(!view.cards.dispatch.contains("discard-card"));
        assert!(view.cards.dispatch.contains("play-card"));
        assert!(sink.is_empty());
    }

    #[test]
    fn hand_with_discard_and_show_card() {
        let settings = Settings {
            discard_pile: "discard".into(),
            show_card: true,
            hand_reset: true,
            ..Settings::default()
        };
        let c = compose(HandView, settings, false);
        assert_eq!(
            classes(&c.cards.controls),
            ["play-card", "discard-card", "show-card", "card-faces"]
        );
        assert_eq!(
            app_classes(&c.app_controls),
            ["draw-cards", "pass-cards", "reset-pile"]
        );
        assert_eq!(classes(&c.cards.context_menu), ["color-toggles", "edit-card"]);
    }

    #[test]
    fn pile_offers_delete_and_console_to_game_master() {
        let gm = compose(PileView, Settings::default(), true);
        assert_eq!(
            classes(&gm.cards.controls),
            ["play-card", "delete-card", "card-faces"]
        );
        assert_eq!(
            classes(&gm.cards.context_menu),
            ["color-toggles", "edit-card", "console-log"]
        );
        assert_eq!(
            app_classes(&gm.app_controls),
            ["shuffle-pile", "pass-cards", "reset-pile"]
        );

        let player = compose(PileView, Settings::default(), false);
        assert_eq!(classes(&player.cards.controls), ["play-card", "card-faces"]);
    }

    #[test]
    fn deck_and_sheet_composition() {
        let deck = compose(DeckView, Settings::default(), false);
        assert_eq!(
            classes(&deck.cards.controls),
            ["edit-card", "delete-card", "card-faces"]
        );
        let badges: Vec<_> = deck.cards.badges.iter().filter_map(|b| b.class.as_deref()).collect();
        assert_eq!(badges, ["card-suit", "card-value", "card-drawn"]);
        assert_eq!(
            app_classes(&deck.app_controls),
            ["shuffle-pile", "deal-pile", "reset-pile"]
        );
        assert_eq!(deck.cards.markers.len(), 7);

        let sheet = compose(CardSheet, Settings::default(), true);
        assert_eq!(classes(&sheet.cards.controls), ["card-faces"]);
        assert!(sheet.cards.context_menu.is_empty());
        assert!(sheet.app_controls.is_empty());
        assert_eq!(
            sheet.cards.badges.last().and_then(|b| b.class.as_deref()),
            Some("card-name")
        );
    }

    #[test]
    fn render_pass_wires_layout_classes_and_clicks() {
        let settings = Settings {
            card_height: 100.0,
            fade_deck: true,
            ..Settings::default()
        };
        let (env, _) = environment(settings, false);
        let cards = [
            TestCard::new("a").with_img("a.png"),
            TestCard::new("b").with_size(Size::new(80.0, 100.0)),
        ];
        let pile = TestPile::default();
        let state = ViewState::new("Cards.deck");
        state.set_sort_standard(true);
        let mut sink: Vec<ConfigError> = Vec::new();
        let view = render_view(
            &DeckView,
            &state,
            &cards,
            &pile,
            &env,
            &FixedImages(Size::new(50.0, 100.0)),
            &mut sink,
        )
        .unwrap();

        assert_eq!(view.classes, ["monarch", "monarch-deck", "sheet", "fade"]);
        assert_eq!(view.layout.card_width, 80.0);
        assert_eq!(view.cards.items.len(), 2);
        assert_eq!(view.app_controls[0].label, "CARDS.Shuffle");
        assert!(sink.is_empty());

        let shuffle = "app-control shuffle-pile".split_whitespace();
        assert_eq!(view.click_app(shuffle, false, &(), &state, &pile), 1);
        assert!(!state.sort_standard());
        let edit = ["card-control", "edit-card"];
        assert_eq!(view.click_card(edit, true, &(), &cards[0], &pile), 0);
        assert_eq!(view.click_card(edit, false, &(), &cards[0], &pile), 1);
        assert_eq!(cards[0].requests(), ["sheet"]);
        assert_eq!(pile.requests(), ["shuffle"]);
    }

    #[test]
    fn discard_control_follows_discard_pile_toggle() {
        let settings = Settings {
            discard_pile: "discard".into(),
            ..Settings::default()
        };
        let (env, _) = environment(settings, false);
        assert!(env.toggles().contains(Toggles::DISCARD_PILE));
        let pile: Components<TestCard, TestPile> = PileView.components(&env);
        assert_eq!(
            classes(&pile.cards.controls),
            ["play-card", "discard-card", "card-faces"]
        );

        let card = TestCard::new("c");
        let table = DispatchTable::build(&pile.cards.controls, &mut IgnoreDiagnostics);
        table.dispatch(["discard-card"], &(), &card, &TestPile::default());
        assert_eq!(card.requests(), ["pass:discard"]);
    }

    #[test]
    fn clicks_hand_the_host_event_to_handlers() {
        use cardview_components::dispatch::ActionBinding;
        use std::rc::Rc;

        struct Click {
            shift: bool,
        }

        let (env, _) = environment(Settings::default(), false);
        let cards = [TestCard::new("a")];
        let pile = TestPile::default();
        let state = ViewState::new("Cards.hand");
        let mut view: RenderedView<TestCard, TestPile, Click> = render_view(
            &HandView,
            &state,
            &cards,
            &pile,
            &env,
            &FixedImages(Size::new(100.0, 200.0)),
            &mut IgnoreDiagnostics,
        )
        .unwrap();

        view.cards.dispatch.merge(DispatchTable::from_bindings([ActionBinding {
            class: "play-card".into(),
            handler: Rc::new(|click: &Click, card: &TestCard, pile: &TestPile| {
                if click.shift {
                    pile.play_dialog(card.id());
                }
            }),
        }]));
        view.click_card(["play-card"], false, &Click { shift: false }, &cards[0], &pile);
        view.click_card(["play-card"], false, &Click { shift: true }, &cards[0], &pile);
        view.click_app(["draw-cards"], false, &Click { shift: false }, &state, &pile);
        assert_eq!(pile.requests(), ["play:a", "draw"]);
    }

    #[test]
    fn card_sheet_renders_single_card() {
        let (env, _) = environment(Settings::default(), false);
        let card = TestCard::new("solo").with_faces(2, Some(0));
        let pile = TestPile::default();
        let state = ViewState::new("Cards.deck.Card.solo");
        let view = render_view(
            &CardSheet,
            &state,
            std::slice::from_ref(&card),
            &pile,
            &env,
            &FixedImages(Size::new(1.0, 1.0)),
            &mut IgnoreDiagnostics,
        )
        .unwrap();
        let item = &view.cards.items[0];
        assert_eq!(item.badges.last().map(|b| b.text.as_str()), Some("Card solo"));
        assert!(view.app_dispatch.is_empty());

        view.click_card(["next-face"], false, &(), &card, &pile);
        assert_eq!(card.face(), Some(1));
    }

    #[test]
    fn window_positions_follow_view_state() {
        use std::collections::HashMap;

        #[derive(Default)]
        struct Memory(HashMap<String, String>);
        impl LocalStorage for Memory {
            fn get_item(&self, key: &str) -> Option<String> {
                self.0.get(key).cloned()
            }
            fn set_item(&mut self, key: &str, value: String) {
                self.0.insert(key.into(), value);
            }
        }

        let mut positions = WindowPositions::load(Memory::default()).unwrap();
        let state = ViewState::new("Cards.hand");
        state
            .remember_position(&mut positions, WindowPosition::new(1.0, 2.0, 600.0, None))
            .unwrap();
        assert_eq!(positions.get("Cards.hand").map(|p| p.width), Some(600.0));
        assert!(state.forget_position(&mut positions).unwrap());
        assert!(positions.is_empty());
        assert_eq!(HandView.default_width(), Some(600.0));
        assert_eq!(CardSheet.default_width(), None);
    }
}
