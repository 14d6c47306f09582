// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptor and view-data types.
//!
//! ## Overview
//!
//! Descriptors ([`ControlDescriptor`], [`BadgeDescriptor`], [`MarkerDescriptor`]) are static
//! templates whose fields may be computed per item. They are built fresh for every render
//! request and consumed by [`resolve`](crate::resolve), which produces the matching resolved
//! view-data ([`ResolvedControl`], [`ResolvedBadge`], [`ResolvedMarker`]).
//!
//! Descriptors are generic over the item type `I`, its container `C`, and the click event `E`
//! passed to control handlers.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::field::FieldValue;

/// Icon color used when a control or marker does not set one.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Marker icon used when a marker does not set one: a filled circle.
pub const DEFAULT_MARKER_ICON: &str = "fas fa-circle";

/// A string-valued descriptor field.
pub type TextField<I, C> = FieldValue<String, I, C>;

/// A boolean-valued descriptor field.
pub type FlagField<I, C> = FieldValue<bool, I, C>;

/// Click handler bound to a control: `(event, item, container)`.
pub type ClickHandler<I, C, E> = Rc<dyn Fn(&E, &I, &C)>;

/// A control (button) template, optionally grouping nested controls.
///
/// Controls form a tree through [`children`](Self::children). The `class` is never computed:
/// it is the stable identifier that click dispatch keys on.
pub struct ControlDescriptor<I, C, E = ()> {
    /// Visible label.
    pub label: Option<TextField<I, C>>,
    /// Hover text.
    pub tooltip: Option<TextField<I, C>>,
    /// Accessible label for screen readers.
    pub aria: Option<TextField<I, C>>,
    /// Icon classes.
    pub icon: Option<TextField<I, C>>,
    /// Icon color.
    pub color: Option<TextField<I, C>>,
    /// CSS class; also the dispatch key for [`on_click`](Self::on_click).
    pub class: Option<String>,
    /// Whether the control is rendered inert.
    pub disabled: Option<FlagField<I, C>>,
    /// Whether the control is left out of the rendered output.
    pub hide: Option<FlagField<I, C>>,
    /// Action performed when the control is clicked.
    pub on_click: Option<ClickHandler<I, C, E>>,
    /// Nested controls rendered as a group. Empty means this is a leaf.
    pub children: Vec<Self>,
}

impl<I, C, E> ControlDescriptor<I, C, E> {
    /// An empty control.
    pub fn new() -> Self {
        Self {
            label: None,
            tooltip: None,
            aria: None,
            icon: None,
            color: None,
            class: None,
            disabled: None,
            hide: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// A group control with the given class and children.
    pub fn group(class: impl Into<String>, children: Vec<Self>) -> Self {
        Self::new().class(class).children(children)
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<TextField<I, C>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<TextField<I, C>>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the accessible label.
    pub fn aria(mut self, aria: impl Into<TextField<I, C>>) -> Self {
        self.aria = Some(aria.into());
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<TextField<I, C>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the icon color.
    pub fn color(mut self, color: impl Into<TextField<I, C>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the disabled state.
    pub fn disabled(mut self, disabled: impl Into<FlagField<I, C>>) -> Self {
        self.disabled = Some(disabled.into());
        self
    }

    /// Set the hidden state.
    pub fn hide(mut self, hide: impl Into<FlagField<I, C>>) -> Self {
        self.hide = Some(hide.into());
        self
    }

    /// Set the click handler.
    pub fn on_click(mut self, handler: impl Fn(&E, &I, &C) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Set the nested controls.
    pub fn children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Returns `true` if this control groups other controls.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// The literal label or tooltip, for naming this control in diagnostics.
    pub fn literal_text(&self) -> Option<&str> {
        [&self.label, &self.tooltip]
            .into_iter()
            .find_map(|f| match f {
                Some(FieldValue::Value(s)) if !s.is_empty() => Some(s.as_str()),
                _ => None,
            })
    }
}

impl<I, C, E> Default for ControlDescriptor<I, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C, E> Clone for ControlDescriptor<I, C, E> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            tooltip: self.tooltip.clone(),
            aria: self.aria.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            class: self.class.clone(),
            disabled: self.disabled.clone(),
            hide: self.hide.clone(),
            on_click: self.on_click.clone(),
            children: self.children.clone(),
        }
    }
}

impl<I, C, E> core::fmt::Debug for ControlDescriptor<I, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlDescriptor")
            .field("class", &self.class)
            .field("label", &self.label)
            .field("tooltip", &self.tooltip)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// A text badge template. Badges are always leaves.
pub struct BadgeDescriptor<I, C> {
    /// Hover text.
    pub tooltip: Option<TextField<I, C>>,
    /// Badge content; may contain markup.
    pub text: Option<TextField<I, C>>,
    /// CSS class.
    pub class: Option<String>,
    /// Whether the badge is left out of the rendered output.
    pub hide: Option<FlagField<I, C>>,
}

impl<I, C> BadgeDescriptor<I, C> {
    /// A badge with the given tooltip and text.
    pub fn new(tooltip: impl Into<TextField<I, C>>, text: impl Into<TextField<I, C>>) -> Self {
        Self {
            tooltip: Some(tooltip.into()),
            text: Some(text.into()),
            class: None,
            hide: None,
        }
    }

    /// Set the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the hidden state.
    pub fn hide(mut self, hide: impl Into<FlagField<I, C>>) -> Self {
        self.hide = Some(hide.into());
        self
    }
}

impl<I, C> Clone for BadgeDescriptor<I, C> {
    fn clone(&self) -> Self {
        Self {
            tooltip: self.tooltip.clone(),
            text: self.text.clone(),
            class: self.class.clone(),
            hide: self.hide.clone(),
        }
    }
}

impl<I, C> core::fmt::Debug for BadgeDescriptor<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BadgeDescriptor")
            .field("class", &self.class)
            .field("tooltip", &self.tooltip)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// An icon marker template, shown on a card when [`show`](Self::show) resolves `true`.
pub struct MarkerDescriptor<I, C> {
    /// Hover text.
    pub tooltip: Option<TextField<I, C>>,
    /// CSS class.
    pub class: Option<String>,
    /// Icon classes; defaults to [`DEFAULT_MARKER_ICON`].
    pub icon: Option<TextField<I, C>>,
    /// Icon color; defaults to [`DEFAULT_COLOR`].
    pub color: Option<TextField<I, C>>,
    /// Whether the marker is displayed; defaults to `false`.
    pub show: Option<FlagField<I, C>>,
}

impl<I, C> MarkerDescriptor<I, C> {
    /// A marker with the given tooltip.
    pub fn new(tooltip: impl Into<TextField<I, C>>) -> Self {
        Self {
            tooltip: Some(tooltip.into()),
            class: None,
            icon: None,
            color: None,
            show: None,
        }
    }

    /// Set the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<TextField<I, C>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the icon color.
    pub fn color(mut self, color: impl Into<TextField<I, C>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the visibility.
    pub fn show(mut self, show: impl Into<FlagField<I, C>>) -> Self {
        self.show = Some(show.into());
        self
    }
}

impl<I, C> Clone for MarkerDescriptor<I, C> {
    fn clone(&self) -> Self {
        Self {
            tooltip: self.tooltip.clone(),
            class: self.class.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            show: self.show.clone(),
        }
    }
}

impl<I, C> core::fmt::Debug for MarkerDescriptor<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarkerDescriptor")
            .field("class", &self.class)
            .field("tooltip", &self.tooltip)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// All descriptor lists a card view renders for each of its items.
pub struct ComponentSet<I, C, E = ()> {
    /// Controls shown on each card.
    pub controls: Vec<ControlDescriptor<I, C, E>>,
    /// Controls shown in each card's context menu.
    pub context_menu: Vec<ControlDescriptor<I, C, E>>,
    /// Badges shown on each card.
    pub badges: Vec<BadgeDescriptor<I, C>>,
    /// Markers shown on each card.
    pub markers: Vec<MarkerDescriptor<I, C>>,
    /// Extra CSS classes applied to each card element.
    pub card_classes: Vec<TextField<I, C>>,
}

impl<I, C, E> Default for ComponentSet<I, C, E> {
    fn default() -> Self {
        Self {
            controls: Vec::new(),
            context_menu: Vec::new(),
            badges: Vec::new(),
            markers: Vec::new(),
            card_classes: Vec::new(),
        }
    }
}

impl<I, C, E> core::fmt::Debug for ComponentSet<I, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentSet")
            .field("controls", &self.controls)
            .field("context_menu", &self.context_menu)
            .field("badges", &self.badges)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

/// A control resolved for one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedControl {
    /// Visible label.
    pub label: String,
    /// Hover text.
    pub tooltip: String,
    /// Accessible label.
    pub aria: String,
    /// Icon classes.
    pub icon: String,
    /// Icon color.
    pub color: String,
    /// CSS class, copied from the descriptor.
    pub class: Option<String>,
    /// Whether the control is inert.
    pub disabled: bool,
    /// Whether the control is omitted from output.
    pub hidden: bool,
    /// Resolved children, in descriptor order.
    pub controls: Vec<ResolvedControl>,
}

/// A badge resolved for one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedBadge {
    /// Hover text.
    pub tooltip: String,
    /// Badge content.
    pub text: String,
    /// CSS class.
    pub class: Option<String>,
    /// Whether the badge is omitted from output.
    pub hidden: bool,
}

/// A marker resolved for one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedMarker {
    /// Hover text.
    pub tooltip: String,
    /// CSS class.
    pub class: Option<String>,
    /// Icon classes.
    pub icon: String,
    /// Icon color.
    pub color: String,
    /// Whether the marker is displayed.
    pub show: bool,
}

/// Everything resolved for one item of a view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemView {
    /// Resolved card controls.
    pub controls: Vec<ResolvedControl>,
    /// Resolved context-menu controls.
    pub context_menu: Vec<ResolvedControl>,
    /// Resolved badges.
    pub badges: Vec<ResolvedBadge>,
    /// Resolved markers.
    pub markers: Vec<ResolvedMarker>,
    /// Resolved extra CSS classes.
    pub classes: Vec<String>,
}
