// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker color palette.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A marker color. [`Color::ALL`] lists the palette in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `#ff0000`
    Red,
    /// `#00ff00`
    Green,
    /// `#0000ff`
    Blue,
    /// `#ffff00`
    Yellow,
    /// `#800080`
    Purple,
    /// `#000000`
    Black,
    /// `#ffffff`
    White,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Black,
        Self::White,
    ];

    /// Lowercase name, as used in classes, flag keys and translation keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// CSS hex value.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ff0000",
            Self::Green => "#00ff00",
            Self::Blue => "#0000ff",
            Self::Yellow => "#ffff00",
            Self::Purple => "#800080",
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }

    /// Look a color up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Card flag key holding this color's marker state, e.g. `markers.red`.
    pub fn flag_key(self) -> String {
        format!("{MARKERS_FLAG}.{}", self.name())
    }
}

/// Card flag key under which all color markers live.
pub const MARKERS_FLAG: &str = "markers";

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not in the palette.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown marker color `{0}`")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_order_and_values() {
        let names: Vec<_> = Color::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["red", "green", "blue", "yellow", "purple", "black", "white"]
        );
        assert_eq!(Color::Purple.hex(), "#800080");
        assert_eq!(Color::Red.flag_key(), "markers.red");
    }

    #[test]
    fn names_round_trip_through_parsing() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        assert_eq!(
            "mauve".parse::<Color>(),
            Err(UnknownColor("mauve".into()))
        );
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Color::Yellow).unwrap(), "\"yellow\"");
    }
}
