// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window position persistence.
//!
//! ## Overview
//!
//! Every open view window records where it is, keyed by the uuid of the document it shows.
//! The whole map is written to browser-style local storage under [`STORAGE_KEY`] on every
//! change, so the windows can be reopened in place after a reload.
//!
//! ```
//! use std::collections::HashMap;
//! use cardview_catalog::positions::{LocalStorage, WindowPosition, WindowPositions};
//!
//! #[derive(Default)]
//! struct Memory(HashMap<String, String>);
//!
//! impl LocalStorage for Memory {
//!     fn get_item(&self, key: &str) -> Option<String> { self.0.get(key).cloned() }
//!     fn set_item(&mut self, key: &str, value: String) { self.0.insert(key.into(), value); }
//! }
//!
//! let mut positions = WindowPositions::load(Memory::default()).unwrap();
//! positions.store("Cards.deck", WindowPosition::new(10.0, 20.0, 660.0, Some(400.0))).unwrap();
//!
//! // A later session sees the same windows, with heights left to the layout.
//! let reloaded = WindowPositions::load(positions.into_storage()).unwrap();
//! let (uuid, position) = reloaded.restorable().next().unwrap();
//! assert_eq!(uuid, "Cards.deck");
//! assert_eq!(position.height, None);
//! ```

use std::collections::BTreeMap;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Local-storage key holding every window position.
pub const STORAGE_KEY: &str = "monarch-windows";

/// Key/value string storage that survives reloads.
pub trait LocalStorage {
    /// Value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set_item(&mut self, key: &str, value: String);
}

/// Placement of one window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPosition {
    /// Left edge, in pixels.
    pub left: f64,
    /// Top edge, in pixels.
    pub top: f64,
    /// Width, in pixels.
    pub width: f64,
    /// Height in pixels; `None` lets the window size itself.
    pub height: Option<f64>,
    /// Scale factor.
    pub scale: f64,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: None,
            scale: 1.0,
        }
    }
}

impl WindowPosition {
    /// An unscaled window at `(left, top)`.
    pub fn new(left: f64, top: f64, width: f64, height: Option<f64>) -> Self {
        Self {
            left,
            top,
            width,
            height,
            scale: 1.0,
        }
    }

    /// Window bounds, once the height is known.
    pub fn rect(&self) -> Option<Rect> {
        self.height.map(|height| {
            Rect::from_origin_size(Point::new(self.left, self.top), (self.width, height))
        })
    }
}

/// Errors from reading or writing stored positions.
#[derive(Debug, thiserror::Error)]
pub enum PositionsError {
    /// The stored value is not a position map, or a position could not be encoded.
    #[error("malformed window positions: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Window positions, mirrored to local storage.
#[derive(Debug)]
pub struct WindowPositions<S> {
    storage: S,
    positions: BTreeMap<String, WindowPosition>,
}

impl<S: LocalStorage> WindowPositions<S> {
    /// Read stored positions. A missing, empty or `null` entry loads as no positions.
    pub fn load(storage: S) -> Result<Self, PositionsError> {
        let positions = match storage.get_item(STORAGE_KEY) {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str::<Option<BTreeMap<String, WindowPosition>>>(&json)?
                    .unwrap_or_default()
            }
            _ => BTreeMap::new(),
        };
        tracing::debug!(
            target: "cardview::positions",
            windows = positions.len(),
            "loaded window positions"
        );
        Ok(Self { storage, positions })
    }

    /// Record the position of window `uuid` and persist.
    pub fn store(
        &mut self,
        uuid: impl Into<String>,
        position: WindowPosition,
    ) -> Result<(), PositionsError> {
        self.positions.insert(uuid.into(), position);
        self.persist()
    }

    /// Forget window `uuid`, persisting only if it was known. Returns whether it was.
    pub fn remove(&mut self, uuid: &str) -> Result<bool, PositionsError> {
        if self.positions.remove(uuid).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Stored position of window `uuid`.
    pub fn get(&self, uuid: &str) -> Option<&WindowPosition> {
        self.positions.get(uuid)
    }

    /// Number of stored windows.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no window is stored.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions to reopen windows at, with heights left to the layout.
    pub fn restorable(&self) -> impl Iterator<Item = (&str, WindowPosition)> + '_ {
        self.positions.iter().map(|(uuid, position)| {
            (
                uuid.as_str(),
                WindowPosition {
                    height: None,
                    ..*position
                },
            )
        })
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), PositionsError> {
        let json = serde_json::to_string(&self.positions)?;
        self.storage.set_item(STORAGE_KEY, json);
        Ok(())
    }
}
