// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control catalog.
//!
//! ## Overview
//!
//! Each function builds one fresh [`ControlDescriptor`]. Card controls resolve against
//! `(card, collection)`; app controls, shown once per view window, resolve against
//! `(view state, collection)`.
//!
//! Labels and tooltips are translation keys; the host localizes them when rendering.
//! Classes are stable: hosts and themes may style and dispatch on them.

use std::rc::Rc;

use cardview_components::field::FieldValue;
use cardview_components::types::ControlDescriptor;
use serde_json::Value;

use crate::colors::{Color, MARKERS_FLAG};
use crate::document::{Card, Cards, FLAG_SCOPE};
use crate::socket::{Socket, SocketMessage};
use crate::views::ViewState;

/// A control shown on each card.
pub type CardControl<D, P, E = ()> = ControlDescriptor<D, P, E>;

/// A control shown once on a view window.
pub type AppControl<P, E = ()> = ControlDescriptor<ViewState, P, E>;

/// Face navigation group: previous face, next face, flip.
pub fn faces<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::group(
        "card-faces",
        vec![face_previous(), face_next(), flip_face()],
    )
}

/// Show the next face. Hidden for cards with fewer than two faces.
pub fn face_next<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("CARD.FaceNext")
        .icon("fas fa-caret-up")
        .class("next-face")
        .disabled(FieldValue::computed(|card: &D, _: &P| {
            !card.has_next_face() || !card.is_owner()
        }))
        .hide(FieldValue::computed(|card: &D, _: &P| card.face_count() < 2))
        .on_click(|_, card: &D, _: &P| card.set_face(Some(card.face().map_or(0, |f| f + 1))))
}

/// Show the previous face, or the back from the first face.
pub fn face_previous<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("CARD.FacePrevious")
        .icon("fas fa-caret-down")
        .class("prev-face")
        .disabled(FieldValue::computed(|card: &D, _: &P| {
            !card.has_previous_face() || !card.is_owner()
        }))
        .hide(FieldValue::computed(|card: &D, _: &P| card.face_count() < 2))
        .on_click(|_, card: &D, _: &P| {
            card.set_face(card.face().and_then(|f| f.checked_sub(1)));
        })
}

/// Flip a single-faced card between its face and its back.
pub fn flip_face<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("monarch.label.flipCard")
        .icon("fas fa-sync-alt fa-rotate-270")
        .class("flip-face")
        .disabled(FieldValue::computed(|card: &D, _: &P| {
            !card.is_owner() && card.face_count() > 0
        }))
        .hide(FieldValue::computed(|card: &D, _: &P| card.face_count() > 1))
        .on_click(|_, card: &D, _: &P| {
            card.set_face(match card.face() {
                None => Some(0),
                Some(_) => None,
            });
        })
}

/// Play the card through the collection's play dialog.
pub fn play<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("CARD.Play")
        .aria(FieldValue::computed(|card: &D, _: &P| {
            format!("Play {}", card.name())
        }))
        .icon("fas fa-chevron-circle-right")
        .class("play-card")
        .disabled(FieldValue::computed(|card: &D, _: &P| !card.is_owner()))
        .on_click(|_, card: &D, pile: &P| pile.play_dialog(card.id()))
}

/// Open the card's sheet.
pub fn edit<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("CARD.Edit")
        .icon("fas fa-edit")
        .class("edit-card")
        .on_click(|_, card: &D, _: &P| card.open_sheet())
}

/// Delete the card after confirmation.
pub fn delete<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("CARD.Delete")
        .icon("fas fa-trash")
        .class("delete-card")
        .on_click(|_, card: &D, _: &P| card.delete_dialog())
}

/// Pass the card to the discard pile `pile_id`.
pub fn discard<D: Card + 'static, P: Cards + 'static, E: 'static>(
    pile_id: impl Into<String>,
) -> CardControl<D, P, E> {
    let pile_id: String = pile_id.into();
    ControlDescriptor::new()
        .tooltip("monarch.label.discard")
        .icon("fas fa-caret-square-down")
        .class("discard-card")
        .disabled(FieldValue::computed(|card: &D, _: &P| !card.is_owner()))
        .on_click(move |_, card: &D, _: &P| card.pass_to(&pile_id))
}

/// Show the card to every connected user. Only a game master may use it.
pub fn show_card<D: Card + 'static, P: Cards + 'static, E: 'static>(
    is_gm: bool,
    socket: Rc<dyn Socket>,
) -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("monarch.label.showCard")
        .icon("fas fa-eye")
        .class("show-card")
        .disabled(!is_gm)
        .on_click(move |_, card: &D, _: &P| {
            let message = SocketMessage::ShowCard {
                card: card.id().to_owned(),
                pile: card.source_id().to_owned(),
            };
            if let Err(error) = crate::socket::send(&*socket, &message) {
                tracing::error!(target: "cardview::socket", %error, "failed to show card");
            }
        })
}

/// Toggle the `color` marker on the card.
pub fn marker_toggle<D, P, E>(color: Color) -> CardControl<D, P, E>
where
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
{
    ControlDescriptor::new()
        .tooltip(format!("monarch.markerToggles.{color}"))
        .icon("fas fa-circle")
        .color(color.hex())
        .class(format!("toggle-marker-{color}"))
        .on_click(move |_, card: &D, _: &P| {
            let key = color.flag_key();
            let set = card.flag_set(FLAG_SCOPE, &key);
            card.set_flag(FLAG_SCOPE, &key, Value::Bool(!set));
        })
}

/// Clear every color marker on the card.
pub fn clear_color_markers<D, P, E>() -> CardControl<D, P, E>
where
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
{
    ControlDescriptor::new()
        .tooltip("monarch.label.clearColorMarkers")
        .icon("fas fa-times-circle")
        .class("clear-color-markers")
        .color("#BBBBBB")
        .on_click(|_, card: &D, _: &P| card.set_flag(FLAG_SCOPE, MARKERS_FLAG, Value::Null))
}

/// One toggle per palette color, then [`clear_color_markers`].
pub fn color_toggles<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    let toggles: Vec<CardControl<D, P, E>> = Color::ALL
        .into_iter()
        .map(marker_toggle::<D, P, E>)
        .chain([clear_color_markers()])
        .collect();
    ControlDescriptor::group("color-toggles", toggles)
}

/// Log the card for debugging.
pub fn console_log<D: Card + 'static, P: Cards + 'static, E: 'static>() -> CardControl<D, P, E> {
    ControlDescriptor::new()
        .tooltip("monarch.label.consoleLog")
        .icon("fas fa-terminal")
        .class("console-log")
        .on_click(|_, card: &D, pile: &P| {
            tracing::info!(
                target: "cardview::console",
                {
                    card.id = card.id(),
                    card.name = card.name(),
                    card.face = ?card.face(),
                    pile.id = pile.id(),
                    pile.name = pile.name(),
                },
                "card"
            );
        })
}

/// The controls every card view starts from.
pub fn default_controls<D, P, E>() -> Vec<CardControl<D, P, E>>
where
    D: Card + 'static,
    P: Cards + 'static,
    E: 'static,
{
    vec![faces()]
}

/// Shuffle the collection and drop back to shuffled order.
pub fn shuffle<P: Cards + 'static, E: 'static>() -> AppControl<P, E> {
    ControlDescriptor::new()
        .label("CARDS.Shuffle")
        .icon("fas fa-random")
        .class("shuffle-pile")
        .on_click(|_, view: &ViewState, pile: &P| {
            view.set_sort_standard(false);
            pile.shuffle();
        })
}

/// Deal cards from the collection.
pub fn deal<P: Cards + 'static, E: 'static>() -> AppControl<P, E> {
    ControlDescriptor::new()
        .label("CARDS.Deal")
        .icon("fas fa-share-square")
        .class("deal-pile")
        .on_click(|_, _: &ViewState, pile: &P| pile.deal_dialog())
}

/// Reset the collection.
pub fn reset<P: Cards + 'static, E: 'static>() -> AppControl<P, E> {
    ControlDescriptor::new()
        .label("CARDS.Reset")
        .icon("fas fa-undo")
        .class("reset-pile")
        .on_click(|_, _: &ViewState, pile: &P| pile.reset_dialog())
}

/// Draw cards into the collection.
pub fn draw<P: Cards + 'static, E: 'static>() -> AppControl<P, E> {
    ControlDescriptor::new()
        .label("CARDS.Draw")
        .icon("fas fa-plus")
        .class("draw-cards")
        .on_click(|_, _: &ViewState, pile: &P| pile.draw_dialog())
}

/// Pass cards out of the collection.
pub fn pass<P: Cards + 'static, E: 'static>() -> AppControl<P, E> {
    ControlDescriptor::new()
        .label("CARDS.Pass")
        .icon("fas fa-share-square")
        .class("pass-cards")
        .on_click(|_, _: &ViewState, pile: &P| pile.pass_dialog())
}
