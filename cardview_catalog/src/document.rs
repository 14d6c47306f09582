// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host document traits: cards and card collections.
//!
//! ## Overview
//!
//! Views never own game state. The host implements [`Card`] and [`Cards`] over its own
//! documents; the catalog reads them while resolving and issues requests from click handlers.
//!
//! Reads are synchronous and side-effect free. Requests take `&self`: the host queues or
//! applies them however it likes, typically followed by a re-render.
//!
//! Flags are JSON values addressed by a scope and a dotted key. [`get_property`] and
//! [`set_property`] implement that addressing over a [`serde_json::Value`] tree, for hosts
//! that keep flags as plain JSON.

use kurbo::Size;
use serde_json::{Map, Value};

use crate::arrange::SortEntry;

/// Flag scope used for all data the catalog stores on cards.
pub const FLAG_SCOPE: &str = "monarch";

/// A playing card.
pub trait Card {
    /// Document id.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Suit, or `""`.
    fn suit(&self) -> &str;
    /// Numeric value, if any.
    fn value(&self) -> Option<i64>;
    /// Card type, e.g. `"base"`.
    fn kind(&self) -> &str;
    /// Whether the card has been drawn from its deck.
    fn drawn(&self) -> bool;
    /// Index of the face shown, or `None` when the back is shown.
    fn face(&self) -> Option<usize>;
    /// Number of faces.
    fn face_count(&self) -> usize;
    /// Whether the current user owns the card.
    fn is_owner(&self) -> bool;
    /// Id of the collection the card originally came from.
    fn source_id(&self) -> &str;
    /// Image path of the face shown, if any.
    fn img(&self) -> Option<&str>;
    /// Explicit width and height, when both are set.
    fn explicit_size(&self) -> Option<Size>;
    /// Integer sort key within the collection.
    fn sort(&self) -> i64;
    /// Flag stored under `scope` at dotted `key`.
    fn flag(&self, scope: &str, key: &str) -> Option<Value>;

    /// Switch to `face`, or to the back for `None`.
    fn set_face(&self, face: Option<usize>);
    /// Store `value` under `scope` at dotted `key`. `Value::Null` clears it.
    fn set_flag(&self, scope: &str, key: &str, value: Value);
    /// Open the card's own sheet.
    fn open_sheet(&self);
    /// Ask the user to confirm deleting the card.
    fn delete_dialog(&self);
    /// Move the card to the collection `pile_id`.
    fn pass_to(&self, pile_id: &str);

    /// Whether a later face exists. Also `true` while the back is shown.
    fn has_next_face(&self) -> bool {
        match self.face() {
            None => true,
            Some(face) => face < self.face_count().saturating_sub(1),
        }
    }

    /// Whether an earlier face, or the back, exists.
    fn has_previous_face(&self) -> bool {
        self.face().is_some()
    }

    /// Whether the flag under `scope` at `key` is set to a truthy value.
    fn flag_set(&self, scope: &str, key: &str) -> bool {
        self.flag(scope, key).as_ref().is_some_and(truthy)
    }
}

/// A collection of cards: a deck, a hand or a pile.
pub trait Cards {
    /// Document id.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;

    /// Open the dialog to play `card_id` from this collection.
    fn play_dialog(&self, card_id: &str);
    /// Open the dialog to deal cards from this collection.
    fn deal_dialog(&self);
    /// Open the dialog to reset this collection.
    fn reset_dialog(&self);
    /// Open the dialog to draw cards into this collection.
    fn draw_dialog(&self);
    /// Open the dialog to pass cards out of this collection.
    fn pass_dialog(&self);
    /// Shuffle the collection.
    fn shuffle(&self);
    /// Apply new sort keys to cards of this collection.
    fn update_sort(&self, updates: Vec<SortEntry>);
}

/// JavaScript-style truthiness of a flag value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read the value at dotted `path` below `root`.
pub fn get_property<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, key| node.get(key))
}

/// Write `value` at dotted `path` below `root`, creating intermediate objects.
///
/// Non-object values in the way are replaced by objects.
pub fn set_property(root: &mut Value, path: &str, value: Value) {
    insert_path(root, path.split('.'), value);
}

fn insert_path<'p>(node: &mut Value, mut keys: impl Iterator<Item = &'p str>, value: Value) {
    let Some(key) = keys.next() else {
        *node = value;
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        insert_path(map.entry(key).or_insert(Value::Null), keys, value);
    }
}
