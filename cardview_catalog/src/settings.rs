// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User settings and the render environment derived from them.
//!
//! ## Overview
//!
//! [`Settings`] mirrors the options a user can change. It deserializes from the host's JSON
//! settings object with camelCase keys; every key is optional.
//!
//! Composition never reads settings directly. It reads an [`Environment`], which bundles the
//! settings with the current user and the outbound socket, and condenses the boolean options
//! into [`Toggles`].

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::socket::Socket;

/// Card height used when none is configured.
pub const DEFAULT_CARD_HEIGHT: f64 = 210.0;

/// User-configurable options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Show the suit badge.
    pub show_suit: bool,
    /// Show the value badge.
    pub show_value: bool,
    /// Show the type badge.
    pub show_type: bool,
    /// Offer a reset control on hands.
    pub hand_reset: bool,
    /// Offer a control to show a card to everyone.
    pub show_card: bool,
    /// Display height of every card, in pixels.
    pub card_height: f64,
    /// Id of the discard pile, or `""` for none.
    pub discard_pile: String,
    /// Transparent background for hands.
    pub transparent_hand: bool,
    /// Transparent background for piles.
    pub transparent_pile: bool,
    /// Transparent background for decks.
    pub transparent_deck: bool,
    /// Fade hands while not hovered.
    pub fade_hand: bool,
    /// Fade piles while not hovered.
    pub fade_pile: bool,
    /// Fade decks while not hovered.
    pub fade_deck: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_suit: true,
            show_value: true,
            show_type: false,
            hand_reset: false,
            show_card: false,
            card_height: DEFAULT_CARD_HEIGHT,
            discard_pile: String::new(),
            transparent_hand: false,
            transparent_pile: false,
            transparent_deck: false,
            fade_hand: false,
            fade_pile: false,
            fade_deck: false,
        }
    }
}

/// Errors from loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings object is not valid JSON or has mistyped fields.
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Card height must be a positive, finite number of pixels.
    #[error("invalid card height {0}")]
    CardHeight(f64),
}

impl Settings {
    /// Load settings from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        if !(settings.card_height.is_finite() && settings.card_height > 0.0) {
            return Err(SettingsError::CardHeight(settings.card_height));
        }
        Ok(settings)
    }

    /// The configured discard pile, if any.
    pub fn discard_pile(&self) -> Option<&str> {
        Some(self.discard_pile.as_str()).filter(|id| !id.is_empty())
    }

    /// Appearance flags for views of `kind`.
    pub fn view_flags(&self, kind: ViewKind) -> ViewFlags {
        let (transparent, fade) = match kind {
            ViewKind::Hand => (self.transparent_hand, self.fade_hand),
            ViewKind::Pile => (self.transparent_pile, self.fade_pile),
            ViewKind::Deck => (self.transparent_deck, self.fade_deck),
            ViewKind::Card => (false, false),
        };
        let mut flags = ViewFlags::empty();
        flags.set(ViewFlags::TRANSPARENT, transparent);
        flags.set(ViewFlags::FADE, fade);
        flags
    }
}

bitflags::bitflags! {
    /// Boolean options that decide which components a view composes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Toggles: u8 {
        /// Suit badge.
        const SHOW_SUIT    = 0b0000_0001;
        /// Value badge.
        const SHOW_VALUE   = 0b0000_0010;
        /// Type badge.
        const SHOW_TYPE    = 0b0000_0100;
        /// Show-card control.
        const SHOW_CARD    = 0b0000_1000;
        /// Reset control on hands.
        const HAND_RESET   = 0b0001_0000;
        /// A discard pile is configured.
        const DISCARD_PILE = 0b0010_0000;
        /// The current user is a game master.
        const GM           = 0b0100_0000;
    }
}

bitflags::bitflags! {
    /// Appearance flags of a view window.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// Transparent background.
        const TRANSPARENT = 0b01;
        /// Faded while not hovered.
        const FADE        = 0b10;
    }
}

/// The kind of document a view displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// A player's hand.
    Hand,
    /// A pile.
    Pile,
    /// A deck.
    Deck,
    /// A single card.
    Card,
}

impl ViewKind {
    /// Lowercase name, as used in CSS classes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hand => "hand",
            Self::Pile => "pile",
            Self::Deck => "deck",
            Self::Card => "card",
        }
    }

    /// CSS classes of a view window of this kind.
    pub fn classes(self, flags: ViewFlags) -> Vec<String> {
        let mut classes = vec![
            "monarch".to_owned(),
            format!("monarch-{}", self.name()),
            "sheet".to_owned(),
        ];
        if flags.contains(ViewFlags::TRANSPARENT) {
            classes.push("transparent".to_owned());
        }
        if flags.contains(ViewFlags::FADE) {
            classes.push("fade".to_owned());
        }
        classes
    }
}

/// Everything composition may depend on besides the documents themselves.
#[derive(Clone)]
pub struct Environment {
    /// Current settings.
    pub settings: Settings,
    /// Whether the current user is a game master.
    pub is_gm: bool,
    /// Outbound broadcast channel.
    pub socket: Rc<dyn Socket>,
}

impl Environment {
    /// Bundle settings, user role and socket.
    pub fn new(settings: Settings, is_gm: bool, socket: Rc<dyn Socket>) -> Self {
        Self {
            settings,
            is_gm,
            socket,
        }
    }

    /// Condense the boolean options into [`Toggles`].
    pub fn toggles(&self) -> Toggles {
        let s = &self.settings;
        let mut toggles = Toggles::empty();
        toggles.set(Toggles::SHOW_SUIT, s.show_suit);
        toggles.set(Toggles::SHOW_VALUE, s.show_value);
        toggles.set(Toggles::SHOW_TYPE, s.show_type);
        toggles.set(Toggles::SHOW_CARD, s.show_card);
        toggles.set(Toggles::HAND_RESET, s.hand_reset);
        toggles.set(Toggles::DISCARD_PILE, s.discard_pile().is_some());
        toggles.set(Toggles::GM, self.is_gm);
        toggles
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("settings", &self.settings)
            .field("is_gm", &self.is_gm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::socket::NullSocket;

    #[test]
    fn missing_keys_take_defaults() {
        let s = Settings::from_json(r#"{ "showType": true, "discardPile": "abc" }"#).unwrap();
        assert!(s.show_suit);
        assert!(s.show_value);
        assert!(s.show_type);
        assert_eq!(s.card_height, DEFAULT_CARD_HEIGHT);
        assert_eq!(s.discard_pile(), Some("abc"));
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Settings::from_json(r#"{ "showSuit": "yes" }"#),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "cardHeight": 0 }"#),
            Err(SettingsError::CardHeight(_))
        ));
    }

    #[test]
    fn toggles_reflect_settings_and_user() {
        let settings = Settings {
            show_value: false,
            show_card: true,
            discard_pile: "discard".into(),
            ..Settings::default()
        };
        let env = Environment::new(settings, true, Rc::new(NullSocket));
        assert_eq!(
            env.toggles(),
            Toggles::SHOW_SUIT | Toggles::SHOW_CARD | Toggles::DISCARD_PILE | Toggles::GM
        );

        let env = Environment::new(Settings::default(), false, Rc::new(NullSocket));
        assert_eq!(env.toggles(), Toggles::SHOW_SUIT | Toggles::SHOW_VALUE);
    }

    #[test]
    fn view_classes_follow_flags() {
        let settings = Settings {
            transparent_hand: true,
            fade_pile: true,
            ..Settings::default()
        };
        let hand = ViewKind::Hand.classes(settings.view_flags(ViewKind::Hand));
        assert_eq!(hand, ["monarch", "monarch-hand", "sheet", "transparent"]);
        let pile = ViewKind::Pile.classes(settings.view_flags(ViewKind::Pile));
        assert_eq!(pile, ["monarch", "monarch-pile", "sheet", "fade"]);
        assert!(settings.view_flags(ViewKind::Card).is_empty());
    }
}
