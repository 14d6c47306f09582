// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge catalog.

use cardview_components::field::FieldValue;
use cardview_components::types::BadgeDescriptor;

use crate::document::{Card, Cards};
use crate::settings::Toggles;

/// A badge shown on each card.
pub type CardBadge<D, P> = BadgeDescriptor<D, P>;

/// The card's name.
pub fn name<D: Card + 'static, P: Cards + 'static>() -> CardBadge<D, P> {
    BadgeDescriptor::new(
        "CARD.Name",
        FieldValue::computed(|card: &D, _: &P| card.name().to_owned()),
    )
    .class("card-name")
}

/// The card's suit.
pub fn suit<D: Card + 'static, P: Cards + 'static>() -> CardBadge<D, P> {
    BadgeDescriptor::new(
        "CARD.Suit",
        FieldValue::computed(|card: &D, _: &P| card.suit().to_owned()),
    )
    .class("card-suit")
}

/// The card's value; empty when it has none.
pub fn value<D: Card + 'static, P: Cards + 'static>() -> CardBadge<D, P> {
    BadgeDescriptor::new(
        "CARD.Value",
        FieldValue::computed(|card: &D, _: &P| {
            card.value().map(|v| v.to_string()).unwrap_or_default()
        }),
    )
    .class("card-value")
}

/// The card's type.
pub fn kind<D: Card + 'static, P: Cards + 'static>() -> CardBadge<D, P> {
    BadgeDescriptor::new(
        "CARD.Type",
        FieldValue::computed(|card: &D, _: &P| card.kind().to_owned()),
    )
    .class("card-type")
}

/// Shown only on cards drawn from their deck.
pub fn drawn<D: Card + 'static, P: Cards + 'static>() -> CardBadge<D, P> {
    BadgeDescriptor::new("CARD.Drawn", "CARD.Drawn")
        .hide(FieldValue::computed(|card: &D, _: &P| !card.drawn()))
        .class("card-drawn")
}

/// Suit, value and type badges, each only when toggled on.
pub fn default_badges<D: Card + 'static, P: Cards + 'static>(
    toggles: Toggles,
) -> Vec<CardBadge<D, P>> {
    let mut badges = Vec::new();
    if toggles.contains(Toggles::SHOW_SUIT) {
        badges.push(suit());
    }
    if toggles.contains(Toggles::SHOW_VALUE) {
        badges.push(value());
    }
    if toggles.contains(Toggles::SHOW_TYPE) {
        badges.push(kind());
    }
    badges
}
