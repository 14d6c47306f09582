// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop ordering of cards within a collection.
//!
//! Cards are ordered by an integer sort key spaced [`SORT_INTEGER_DENSITY`] apart. Dropping a
//! card onto another places it directly *after* the drop target. Usually only the dragged card
//! needs a new key; when there is no room between neighbours, every card is renumbered.

use crate::document::{Card, Cards};

/// Spacing between sort keys when cards are (re)numbered.
pub const SORT_INTEGER_DENSITY: i64 = 100_000;

/// A card id with its sort key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortEntry {
    /// Card id.
    pub id: String,
    /// Sort key.
    pub sort: i64,
}

impl SortEntry {
    /// Pair `id` with `sort`.
    pub fn new(id: impl Into<String>, sort: i64) -> Self {
        Self {
            id: id.into(),
            sort,
        }
    }
}

/// Compute the sort updates that place `source` right after `target`.
///
/// `siblings` are the other cards of the collection, in any order; an entry with the source's
/// id is ignored. With no target, or a target that is not among the siblings, the source goes
/// before the first sibling.
pub fn sort_after(
    source: &str,
    target: Option<&str>,
    siblings: impl IntoIterator<Item = SortEntry>,
) -> Vec<SortEntry> {
    let mut siblings: Vec<SortEntry> = siblings.into_iter().filter(|s| s.id != source).collect();
    siblings.sort_by_key(|s| s.sort);

    if siblings.is_empty() {
        return vec![SortEntry::new(source, SORT_INTEGER_DENSITY)];
    }

    // Index of the sibling the source lands after; `None` means before everything.
    let idx = match target {
        Some(target) => siblings.iter().position(|s| s.id == target),
        None => Some(0),
    };
    let min = idx.map(|i| siblings[i].sort);
    let max = siblings.get(idx.map_or(0, |i| i + 1)).map(|s| s.sort);

    match (min, max) {
        (None, Some(max)) => vec![SortEntry::new(source, max - SORT_INTEGER_DENSITY)],
        (Some(min), None) => vec![SortEntry::new(source, min + SORT_INTEGER_DENSITY)],
        (Some(min), Some(max)) if (max - min).abs() > 1 => {
            vec![SortEntry::new(source, (min + max + 1).div_euclid(2))]
        }
        _ => {
            let at = idx.map_or(0, |i| i + 1);
            siblings.insert(at, SortEntry::new(source, 0));
            siblings
                .into_iter()
                .zip(1..)
                .map(|(s, i)| SortEntry::new(s.id, i * SORT_INTEGER_DENSITY))
                .collect()
        }
    }
}

/// Handle a drop of `source` onto `target` within `pile`, requesting the new sort keys.
pub fn sort_card_after<D: Card, P: Cards + ?Sized>(
    pile: &P,
    cards: &[D],
    source: &D,
    target: Option<&D>,
) {
    let siblings = cards.iter().map(|c| SortEntry::new(c.id(), c.sort()));
    let updates = sort_after(source.id(), target.map(|t| t.id()), siblings);
    tracing::debug!(
        target: "cardview::arrange",
        card = source.id(),
        updates = updates.len(),
        "sorting card"
    );
    pile.update_sort(updates);
}
