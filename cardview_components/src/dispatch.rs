// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event dispatch table: class name → click handler.
//!
//! ## Overview
//!
//! Views delegate clicks by CSS class. [`DispatchTable::build`] flattens a control forest into
//! ordered [`ActionBinding`]s (pre-order: a parent before its children, siblings in document
//! order) and then into a map.
//!
//! ## Policies
//!
//! - A control without a class is reported as [`ConfigError::MissingClass`] and skipped along
//!   with its children; its siblings are still visited.
//! - Controls without a handler contribute nothing but their children.
//! - When two bindings share a class, the **last one wins**. The catalog relies on this
//!   being stable, so it is kept rather than deduplicated some other way.
//!
//! ## Dispatch
//!
//! [`DispatchTable::dispatch`] takes the class list of the clicked element and invokes every
//! bound handler in class-list order, so an element carrying two bound classes fires both.
//!
//! ```
//! use core::cell::RefCell;
//! use std::rc::Rc;
//! use cardview_components::diagnostics::IgnoreDiagnostics;
//! use cardview_components::dispatch::DispatchTable;
//! use cardview_components::types::ControlDescriptor;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let (a, b) = (Rc::clone(&log), Rc::clone(&log));
//! let controls: Vec<ControlDescriptor<(), ()>> = vec![
//!     ControlDescriptor::new().class("edit-card").tooltip("Edit")
//!         .on_click(move |_, _, _| a.borrow_mut().push("edit")),
//!     ControlDescriptor::new().class("highlight").tooltip("Highlight")
//!         .on_click(move |_, _, _| b.borrow_mut().push("highlight")),
//! ];
//! let table = DispatchTable::build(&controls, &mut IgnoreDiagnostics);
//!
//! let classes = "card-control edit-card highlight".split_whitespace();
//! let fired = table.dispatch(classes, &(), &(), &());
//! assert_eq!(fired, 2);
//! assert_eq!(*log.borrow(), ["edit", "highlight"]);
//! ```

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::diagnostics::{ConfigError, DiagnosticSink};
use crate::types::{ClickHandler, ControlDescriptor};

/// A class bound to the handler that runs when an element with that class is clicked.
pub struct ActionBinding<I, C, E = ()> {
    /// CSS class the handler is keyed by.
    pub class: String,
    /// Handler shared with the originating descriptor.
    pub handler: ClickHandler<I, C, E>,
}

impl<I, C, E> Clone for ActionBinding<I, C, E> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<I, C, E> core::fmt::Debug for ActionBinding<I, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionBinding")
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// Flatten a control forest into ordered bindings.
///
/// Order is pre-order over the forest. Duplicate classes are kept; see
/// [`DispatchTable::from_bindings`] for how they collapse.
pub fn bindings<'a, I, C, E, S>(
    forest: impl IntoIterator<Item = &'a ControlDescriptor<I, C, E>>,
    sink: &mut S,
) -> Vec<ActionBinding<I, C, E>>
where
    I: 'a,
    C: 'a,
    E: 'a,
    S: DiagnosticSink + ?Sized,
{
    let mut out = Vec::new();
    for control in forest {
        flatten_into(control, &mut out, sink);
    }
    out
}

fn flatten_into<I, C, E, S>(
    control: &ControlDescriptor<I, C, E>,
    out: &mut Vec<ActionBinding<I, C, E>>,
    sink: &mut S,
) where
    S: DiagnosticSink + ?Sized,
{
    let Some(class) = control.class.as_ref().filter(|c| !c.is_empty()) else {
        sink.report(ConfigError::MissingClass {
            label: control.literal_text().unwrap_or("<unlabeled>").into(),
        });
        return;
    };
    if let Some(handler) = &control.on_click {
        out.push(ActionBinding {
            class: class.clone(),
            handler: Rc::clone(handler),
        });
    }
    for child in &control.children {
        flatten_into(child, out, sink);
    }
}

/// Class → handler lookup for one render pass.
pub struct DispatchTable<I, C, E = ()> {
    handlers: BTreeMap<String, ClickHandler<I, C, E>>,
}

impl<I, C, E> DispatchTable<I, C, E> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Flatten `forest` and collect its bindings.
    pub fn build<'a, S>(
        forest: impl IntoIterator<Item = &'a ControlDescriptor<I, C, E>>,
        sink: &mut S,
    ) -> Self
    where
        I: 'a,
        C: 'a,
        E: 'a,
        S: DiagnosticSink + ?Sized,
    {
        Self::from_bindings(bindings(forest, sink))
    }

    /// Collect ordered bindings; on duplicate classes the last binding wins.
    pub fn from_bindings(bindings: impl IntoIterator<Item = ActionBinding<I, C, E>>) -> Self {
        let mut table = Self::new();
        for ActionBinding { class, handler } in bindings {
            table.handlers.insert(class, handler);
        }
        table
    }

    /// Add every binding of `other`; on shared classes `other` wins.
    pub fn merge(&mut self, other: Self) {
        self.handlers.extend(other.handlers);
    }

    /// Handler bound to `class`, if any.
    pub fn get(&self, class: &str) -> Option<&ClickHandler<I, C, E>> {
        self.handlers.get(class)
    }

    /// Returns `true` if a handler is bound to `class`.
    pub fn contains(&self, class: &str) -> bool {
        self.handlers.contains_key(class)
    }

    /// Bound classes, in lexicographic order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of bound classes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no class is bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler of every bound class in `classes`, in the given order.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch<'c>(
        &self,
        classes: impl IntoIterator<Item = &'c str>,
        event: &E,
        item: &I,
        container: &C,
    ) -> usize {
        let mut fired = 0;
        for class in classes {
            if let Some(handler) = self.handlers.get(class) {
                handler(event, item, container);
                fired += 1;
            }
        }
        fired
    }

    /// Like [`dispatch`](Self::dispatch), but does nothing when the clicked element is disabled.
    pub fn dispatch_enabled<'c>(
        &self,
        classes: impl IntoIterator<Item = &'c str>,
        disabled: bool,
        event: &E,
        item: &I,
        container: &C,
    ) -> usize {
        if disabled {
            return 0;
        }
        self.dispatch(classes, event, item, container)
    }
}

impl<I, C, E> Default for DispatchTable<I, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C, E> core::fmt::Debug for DispatchTable<I, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
