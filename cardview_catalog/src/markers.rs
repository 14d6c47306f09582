// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker catalog.

use cardview_components::field::FieldValue;
use cardview_components::types::{DEFAULT_MARKER_ICON, MarkerDescriptor};

use crate::colors::Color;
use crate::document::{Card, Cards, FLAG_SCOPE};

/// A marker shown on each card.
pub type CardMarker<D, P> = MarkerDescriptor<D, P>;

/// A dot of `color`, shown while the card's `markers.<color>` flag is set.
pub fn color_marker<D: Card + 'static, P: Cards + 'static>(color: Color) -> CardMarker<D, P> {
    let key = color.flag_key();
    MarkerDescriptor::new(format!("monarch.markers.{color}"))
        .class(format!("marker-{color}"))
        .icon(DEFAULT_MARKER_ICON)
        .color(color.hex())
        .show(FieldValue::computed(move |card: &D, _: &P| {
            card.flag_set(FLAG_SCOPE, &key)
        }))
}

/// One color marker per palette color, in palette order.
pub fn default_markers<D: Card + 'static, P: Cards + 'static>() -> Vec<CardMarker<D, P>> {
    Color::ALL.into_iter().map(color_marker::<D, P>).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestCard, TestPile};
    use cardview_components::resolve::resolve_marker;
    use serde_json::Value;

    #[test]
    fn markers_follow_flags() {
        let pile = TestPile::default();
        let card = TestCard::new("c");
        card.set_flag(FLAG_SCOPE, "markers.green", Value::Bool(true));

        let markers: Vec<CardMarker<TestCard, TestPile>> = default_markers();
        let shown: Vec<_> = markers
            .iter()
            .map(|m| resolve_marker(&card, &pile, m))
            .filter(|m| m.show)
            .collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].class.as_deref(), Some("marker-green"));
        assert_eq!(shown[0].color, "#00ff00");
        assert_eq!(shown[0].icon, "fas fa-circle");
        assert_eq!(shown[0].tooltip, "monarch.markers.green");
    }
}
