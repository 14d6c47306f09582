// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardview Catalog: ready-made card views on top of [`cardview_components`].
//!
//! ## Overview
//!
//! This crate supplies the card-game half of cardview: the controls, badges and markers a
//! tabletop host shows on hands, piles, decks and single cards, the rules that compose them
//! from user settings, and the small amount of window state those views keep.
//!
//! The host stays in charge of documents, markup and events. It implements
//! [`Card`](crate::document::Card) and [`Cards`](crate::document::Cards) over its own data,
//! calls [`render_view`](crate::views::render_view) whenever a window renders, and routes
//! clicks back through the returned dispatch tables.
//!
//! ## Modules
//!
//! - [`views`]: the four view kinds and the render pass.
//! - [`controls`], [`badges`], [`markers`]: the component catalog.
//! - [`settings`]: user options, [`Toggles`](crate::settings::Toggles) and the
//!   [`Environment`](crate::settings::Environment) composition reads.
//! - [`document`]: host document traits and flag helpers.
//! - [`layout`]: card sizing from explicit dimensions or image metadata.
//! - [`arrange`]: drag-and-drop sort keys.
//! - [`positions`]: window positions persisted to local storage.
//! - [`socket`]: messages broadcast between clients.
//! - [`colors`]: the marker palette.
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing`. Pass
//! [`TracingSink`](cardview_components::diagnostics::TracingSink) to
//! [`render_view`](crate::views::render_view) to log descriptor problems as warnings under the
//! `cardview::config` target; render passes log at debug level under `cardview::views`.

pub mod arrange;
pub mod badges;
pub mod colors;
pub mod controls;
pub mod document;
pub mod layout;
pub mod markers;
pub mod positions;
pub mod settings;
pub mod socket;
pub mod views;

#[cfg(test)]
mod testing;
