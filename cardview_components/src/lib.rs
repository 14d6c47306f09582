// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardview Components: a declarative, `no_std` engine for per-item UI components.
//!
//! ## Overview
//!
//! Card views render a list of items (cards), each decorated with controls (buttons), badges
//! (text pills) and markers (colored icons). This crate lets such views be described as data:
//! a [`ComponentSet`](crate::types::ComponentSet) of descriptors whose fields are either
//! literal or computed from the item and its container.
//!
//! It does not render markup and does not listen for events. It resolves descriptors into
//! plain view-data and builds a class → handler table that a host can dispatch clicks through.
//!
//! ## Workflow
//!
//! 1) Describe: build [`ControlDescriptor`](crate::types::ControlDescriptor),
//!    [`BadgeDescriptor`](crate::types::BadgeDescriptor) and
//!    [`MarkerDescriptor`](crate::types::MarkerDescriptor) values. Any field may be a
//!    [`FieldValue::Computed`](crate::field::FieldValue::Computed) callback.
//! 2) Resolve: [`render_context`](crate::resolve::render_context) evaluates every descriptor
//!    for every item, backfilling missing labels, and returns a
//!    [`RenderContext`](crate::resolve::RenderContext).
//! 3) Dispatch: when an element is clicked, pass its class list to
//!    [`DispatchTable::dispatch`](crate::dispatch::DispatchTable::dispatch).
//!
//! Resolution never fails. Descriptors with missing labels or classes are reported to a
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and rendered as best they can be.
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use cardview_components::diagnostics::IgnoreDiagnostics;
//! use cardview_components::field::FieldValue;
//! use cardview_components::resolve::render_context;
//! use cardview_components::types::{BadgeDescriptor, ComponentSet, ControlDescriptor};
//!
//! struct Card { name: &'static str, drawn: bool }
//! struct Deck;
//!
//! let edits = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&edits);
//! let set: ComponentSet<Card, Deck> = ComponentSet {
//!     controls: vec![
//!         ControlDescriptor::new()
//!             .class("edit-card")
//!             .tooltip("Edit")
//!             .icon("fas fa-edit")
//!             .on_click(move |_, _, _| counter.set(counter.get() + 1)),
//!     ],
//!     badges: vec![
//!         BadgeDescriptor::new("Drawn", "Drawn")
//!             .hide(FieldValue::computed(|card: &Card, _: &Deck| !card.drawn)),
//!     ],
//!     ..ComponentSet::default()
//! };
//!
//! let cards = [Card { name: "Ace", drawn: true }, Card { name: "Two", drawn: false }];
//! let ctx = render_context(&cards, &Deck, &set, &mut IgnoreDiagnostics);
//!
//! assert_eq!(ctx.items[0].controls[0].label, "Edit");
//! assert!(!ctx.items[0].badges[0].hidden);
//! assert!(ctx.items[1].badges[0].hidden);
//!
//! ctx.dispatch.dispatch(["card-control", "edit-card"], &(), &cards[1], &Deck);
//! assert_eq!(edits.get(), 1);
//! # let _ = cards[0].name;
//! ```
//!
//! ## Features
//!
//! - `tracing`: adds [`TracingSink`](crate::diagnostics::TracingSink) and trace events for
//!   each render pass.
//! - `serde`: derives `Serialize` for resolved view-data.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod diagnostics;
pub mod dispatch;
pub mod field;
pub mod resolve;
pub mod types;
