// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution engine.
//!
//! ## Overview
//!
//! Turns descriptors into resolved view-data for a single `(item, container)` pair, and
//! whole [`ComponentSet`]s into a [`RenderContext`] for a list of items.
//!
//! ## Label reconciliation
//!
//! Controls carry up to three strings: `label`, `tooltip` and `aria`. After resolving each
//! independently (default `""`), [`reconcile_labels`] backfills them:
//!
//! - an empty tooltip takes the label, then an empty label takes the tooltip;
//! - an empty aria takes the tooltip (never the label directly).
//!
//! A leaf control left with neither label nor tooltip is reported as
//! [`ConfigError::MissingLabel`] and still rendered, with empty strings.
//!
//! ## Purity
//!
//! Resolution only reads items and containers. Resolving the same descriptor for the same
//! pair twice yields equal results as long as the descriptor's callbacks are pure.

use alloc::string::String;
use alloc::vec::Vec;

use crate::diagnostics::{ConfigError, DiagnosticSink};
use crate::dispatch::DispatchTable;
use crate::field::resolve;
use crate::types::{
    BadgeDescriptor, ComponentSet, ControlDescriptor, DEFAULT_COLOR, DEFAULT_MARKER_ICON,
    ItemView, MarkerDescriptor, ResolvedBadge, ResolvedControl, ResolvedMarker,
};

/// The three reconciled strings of a control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    /// Visible label.
    pub label: String,
    /// Hover text.
    pub tooltip: String,
    /// Accessible label.
    pub aria: String,
}

/// Resolve and backfill a control's label, tooltip and aria.
pub fn reconcile_labels<I, C, E, S>(
    item: &I,
    container: &C,
    descriptor: &ControlDescriptor<I, C, E>,
    sink: &mut S,
) -> Labels
where
    S: DiagnosticSink + ?Sized,
{
    let mut label = resolve(descriptor.label.as_ref(), String::new(), item, container);
    let mut tooltip = resolve(descriptor.tooltip.as_ref(), String::new(), item, container);
    let mut aria = resolve(descriptor.aria.as_ref(), String::new(), item, container);

    if tooltip.is_empty() {
        tooltip.clone_from(&label);
    }
    if label.is_empty() {
        label.clone_from(&tooltip);
    }
    if aria.is_empty() {
        aria.clone_from(&tooltip);
    }

    // Both are equal here, so checking one covers both.
    if !descriptor.is_group() && label.is_empty() {
        sink.report(ConfigError::MissingLabel {
            class: descriptor.class.as_deref().unwrap_or("<unnamed>").into(),
        });
    }

    Labels {
        label,
        tooltip,
        aria,
    }
}

/// Resolve a control and its children for one item.
pub fn resolve_control<I, C, E, S>(
    item: &I,
    container: &C,
    descriptor: &ControlDescriptor<I, C, E>,
    sink: &mut S,
) -> ResolvedControl
where
    S: DiagnosticSink + ?Sized,
{
    let Labels {
        label,
        tooltip,
        aria,
    } = reconcile_labels(item, container, descriptor, sink);

    ResolvedControl {
        label,
        tooltip,
        aria,
        icon: resolve(descriptor.icon.as_ref(), String::new(), item, container),
        color: resolve(descriptor.color.as_ref(), DEFAULT_COLOR.into(), item, container),
        class: descriptor.class.clone(),
        disabled: resolve(descriptor.disabled.as_ref(), false, item, container),
        hidden: resolve(descriptor.hide.as_ref(), false, item, container),
        controls: resolve_controls(item, container, &descriptor.children, sink),
    }
}

/// Resolve a list of controls for one item, preserving order.
pub fn resolve_controls<I, C, E, S>(
    item: &I,
    container: &C,
    descriptors: &[ControlDescriptor<I, C, E>],
    sink: &mut S,
) -> Vec<ResolvedControl>
where
    S: DiagnosticSink + ?Sized,
{
    descriptors
        .iter()
        .map(|d| resolve_control(item, container, d, sink))
        .collect()
}

/// Resolve a badge for one item.
pub fn resolve_badge<I, C>(
    item: &I,
    container: &C,
    descriptor: &BadgeDescriptor<I, C>,
) -> ResolvedBadge {
    ResolvedBadge {
        tooltip: resolve(descriptor.tooltip.as_ref(), String::new(), item, container),
        text: resolve(descriptor.text.as_ref(), String::new(), item, container),
        class: descriptor.class.clone(),
        hidden: resolve(descriptor.hide.as_ref(), false, item, container),
    }
}

/// Resolve a marker for one item.
pub fn resolve_marker<I, C>(
    item: &I,
    container: &C,
    descriptor: &MarkerDescriptor<I, C>,
) -> ResolvedMarker {
    ResolvedMarker {
        tooltip: resolve(descriptor.tooltip.as_ref(), String::new(), item, container),
        class: descriptor.class.clone(),
        icon: resolve(
            descriptor.icon.as_ref(),
            DEFAULT_MARKER_ICON.into(),
            item,
            container,
        ),
        color: resolve(descriptor.color.as_ref(), DEFAULT_COLOR.into(), item, container),
        show: resolve(descriptor.show.as_ref(), false, item, container),
    }
}

/// Resolve every descriptor list of `set` for one item.
pub fn resolve_item<I, C, E, S>(
    item: &I,
    container: &C,
    set: &ComponentSet<I, C, E>,
    sink: &mut S,
) -> ItemView
where
    S: DiagnosticSink + ?Sized,
{
    ItemView {
        controls: resolve_controls(item, container, &set.controls, sink),
        context_menu: resolve_controls(item, container, &set.context_menu, sink),
        badges: set
            .badges
            .iter()
            .map(|b| resolve_badge(item, container, b))
            .collect(),
        markers: set
            .markers
            .iter()
            .map(|m| resolve_marker(item, container, m))
            .collect(),
        classes: set
            .card_classes
            .iter()
            .map(|c| c.get(item, container))
            .filter(|c| !c.is_empty())
            .collect(),
    }
}

/// Resolved view-data for one render pass of a view.
///
/// Produced by [`render_context`] or [`render_item`] and discarded when the view re-renders
/// or closes.
pub struct RenderContext<I, C, E = ()> {
    /// One entry per item, in input order.
    pub items: Vec<ItemView>,
    /// Click handlers of the set's controls and context-menu controls, keyed by class.
    pub dispatch: DispatchTable<I, C, E>,
}

impl<I, C, E> core::fmt::Debug for RenderContext<I, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderContext")
            .field("items", &self.items)
            .field("dispatch", &self.dispatch)
            .finish()
    }
}

/// Resolve `set` for every item of a container and build its dispatch table.
///
/// Context-menu bindings are added after control bindings, so on a shared class the
/// context-menu handler wins.
pub fn render_context<'a, I, C, E, S>(
    items: impl IntoIterator<Item = &'a I>,
    container: &C,
    set: &ComponentSet<I, C, E>,
    sink: &mut S,
) -> RenderContext<I, C, E>
where
    I: 'a,
    S: DiagnosticSink + ?Sized,
{
    let items: Vec<ItemView> = items
        .into_iter()
        .map(|item| resolve_item(item, container, set, sink))
        .collect();
    let dispatch = DispatchTable::build(set.controls.iter().chain(&set.context_menu), sink);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        items = items.len(),
        bindings = dispatch.len(),
        "resolved render context"
    );

    RenderContext { items, dispatch }
}

/// Resolve `set` for a single standalone item.
pub fn render_item<I, C, E, S>(
    item: &I,
    container: &C,
    set: &ComponentSet<I, C, E>,
    sink: &mut S,
) -> RenderContext<I, C, E>
where
    S: DiagnosticSink + ?Sized,
{
    render_context(core::iter::once(item), container, set, sink)
}
