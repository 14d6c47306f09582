// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a hand.
//!
//! Implements the document traits over plain in-memory structs, renders a hand view, prints
//! the resolved components as JSON, and clicks a few controls.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cardview_demos --example render_hand`

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use cardview_catalog::arrange::{SortEntry, sort_card_after};
use cardview_catalog::document::{Card, Cards, get_property, set_property};
use cardview_catalog::layout::ImageMetadata;
use cardview_catalog::settings::{Environment, Settings};
use cardview_catalog::socket::Socket;
use cardview_catalog::views::{HandView, RenderedView, ViewState, render_view};
use cardview_components::diagnostics::TracingSink;
use kurbo::Size;
use serde_json::Value;

struct DemoCard {
    id: String,
    name: String,
    value: i64,
    face: Cell<Option<usize>>,
    sort: i64,
    flags: RefCell<Value>,
}

impl DemoCard {
    fn new(id: &str, name: &str, value: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            face: Cell::new(Some(0)),
            sort: value * 100_000,
            flags: RefCell::new(Value::Null),
        }
    }
}

impl Card for DemoCard {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn suit(&self) -> &str {
        "hearts"
    }
    fn value(&self) -> Option<i64> {
        Some(self.value)
    }
    fn kind(&self) -> &str {
        "base"
    }
    fn drawn(&self) -> bool {
        true
    }
    fn face(&self) -> Option<usize> {
        self.face.get()
    }
    fn face_count(&self) -> usize {
        2
    }
    fn is_owner(&self) -> bool {
        true
    }
    fn source_id(&self) -> &str {
        "deck"
    }
    fn img(&self) -> Option<&str> {
        Some("cards/hearts.webp")
    }
    fn explicit_size(&self) -> Option<Size> {
        None
    }
    fn sort(&self) -> i64 {
        self.sort
    }
    fn flag(&self, scope: &str, key: &str) -> Option<Value> {
        get_property(&self.flags.borrow(), &format!("{scope}.{key}")).cloned()
    }

    fn set_face(&self, face: Option<usize>) {
        println!("  {}: face -> {face:?}", self.id);
        self.face.set(face);
    }
    fn set_flag(&self, scope: &str, key: &str, value: Value) {
        println!("  {}: {scope}.{key} -> {value}", self.id);
        set_property(&mut self.flags.borrow_mut(), &format!("{scope}.{key}"), value);
    }
    fn open_sheet(&self) {
        println!("  {}: open sheet", self.id);
    }
    fn delete_dialog(&self) {
        println!("  {}: delete?", self.id);
    }
    fn pass_to(&self, pile_id: &str) {
        println!("  {}: pass to {pile_id}", self.id);
    }
}

struct DemoHand;

impl Cards for DemoHand {
    fn id(&self) -> &str {
        "hand"
    }
    fn name(&self) -> &str {
        "My Hand"
    }
    fn play_dialog(&self, card_id: &str) {
        println!("  hand: play {card_id}?");
    }
    fn deal_dialog(&self) {
        println!("  hand: deal?");
    }
    fn reset_dialog(&self) {
        println!("  hand: reset?");
    }
    fn draw_dialog(&self) {
        println!("  hand: draw?");
    }
    fn pass_dialog(&self) {
        println!("  hand: pass?");
    }
    fn shuffle(&self) {
        println!("  hand: shuffle");
    }
    fn update_sort(&self, updates: Vec<SortEntry>) {
        for u in updates {
            println!("  hand: sort {} = {}", u.id, u.sort);
        }
    }
}

struct PrintSocket;

impl Socket for PrintSocket {
    fn emit(&self, channel: &str, payload: &str) {
        println!("  socket {channel}: {payload}");
    }
}

/// Every card image is portrait 2:3.
struct PortraitImages;

impl ImageMetadata for PortraitImages {
    type Error = Infallible;

    fn dimensions(&self, _path: &str) -> Result<Size, Self::Error> {
        Ok(Size::new(400.0, 600.0))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_json(
        r#"{ "showCard": true, "discardPile": "discard", "handReset": true, "fadeHand": true }"#,
    )?;
    let env = Environment::new(settings, true, Rc::new(PrintSocket));
    let hand = DemoHand;
    let cards = [
        DemoCard::new("c1", "Ace of Hearts", 1),
        DemoCard::new("c2", "Two of Hearts", 2),
    ];
    let state = ViewState::new("hand-window");

    let view = render_view(
        &HandView,
        &state,
        &cards,
        &hand,
        &env,
        &PortraitImages,
        &mut TracingSink,
    )?;

    println!("== Window ==");
    println!("  classes: {}", view.classes.join(" "));
    println!(
        "  card size: {} x {}",
        view.layout.card_width, view.layout.card_height
    );
    println!("== {} ==", cards[0].name);
    println!("{}", serde_json::to_string_pretty(&view.cards.items[0])?);

    println!("== Clicks ==");
    let clicks = [
        (&cards[0], "next-face"),
        (&cards[0], "toggle-marker-red"),
        (&cards[1], "show-card"),
        (&cards[1], "discard-card"),
    ];
    for (card, class) in clicks {
        let ran = view.click_card([class], false, &(), card, &hand);
        tracing::info!(card = card.id(), class, ran, "clicked card control");
    }
    let ran = view.click_app(["draw-cards"], false, &(), &state, &hand);
    tracing::info!(window = state.uuid(), ran, "clicked draw");

    println!("== Drop c1 after c2 ==");
    sort_card_after(&hand, &cards, &cards[0], Some(&cards[1]));

    // Markers changed, so the host re-renders.
    let view: RenderedView<DemoCard, DemoHand> = render_view(
        &HandView,
        &state,
        &cards,
        &hand,
        &env,
        &PortraitImages,
        &mut TracingSink,
    )?;
    let shown: Vec<_> = view.cards.items[0]
        .markers
        .iter()
        .filter(|m| m.show)
        .filter_map(|m| m.class.as_deref())
        .collect();
    println!("== Markers shown on {} ==", cards[0].id);
    println!("  {shown:?}");
    Ok(())
}
