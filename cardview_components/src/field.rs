// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value resolver: fields that are either a literal or computed per item.
//!
//! ## Overview
//!
//! Every displayable property of a descriptor (label, icon, color, disabled, ...) is a
//! [`FieldValue`]: either a literal value shared by all items, or a callback evaluated against
//! the `(item, container)` pair being rendered.
//! [`resolver`] normalizes an optional field into a uniform callback, substituting a default
//! when the field is absent, and [`resolve`] evaluates it directly.
//!
//! ## Minimal example
//!
//! ```
//! use cardview_components::field::{resolve, FieldValue};
//!
//! struct Card { name: &'static str }
//!
//! let literal: FieldValue<String, Card, ()> = "Edit".into();
//! let computed: FieldValue<String, Card, ()> = FieldValue::computed(|c: &Card, _| c.name.into());
//!
//! let card = Card { name: "Ace of Spades" };
//! assert_eq!(resolve(Some(&literal), String::new(), &card, &()), "Edit");
//! assert_eq!(resolve(Some(&computed), String::new(), &card, &()), "Ace of Spades");
//! assert_eq!(resolve::<String, Card, ()>(None, "fallback".into(), &card, &()), "fallback");
//! ```

use alloc::rc::Rc;
use alloc::string::String;

/// Callback computing a field from an item and its container.
pub type Compute<T, I, C> = Rc<dyn Fn(&I, &C) -> T>;

/// A descriptor field: a literal value, or a value computed per `(item, container)`.
///
/// Callbacks must be free of rendering side effects; the engine may call them any number
/// of times while resolving a render pass.
pub enum FieldValue<T, I, C> {
    /// The same value for every item.
    Value(T),
    /// A value derived from the item being rendered and its container.
    Computed(Compute<T, I, C>),
}

impl<T, I, C> FieldValue<T, I, C> {
    /// Wrap a callback as a computed field.
    pub fn computed(f: impl Fn(&I, &C) -> T + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    /// Evaluate the field for `item` in `container`.
    pub fn get(&self, item: &I, container: &C) -> T
    where
        T: Clone,
    {
        match self {
            Self::Value(v) => v.clone(),
            Self::Computed(f) => f(item, container),
        }
    }

    /// Returns `true` if the field is a callback.
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl<T: Clone, I, C> Clone for FieldValue<T, I, C> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Computed(f) => Self::Computed(Rc::clone(f)),
        }
    }
}

impl<T: core::fmt::Debug, I, C> core::fmt::Debug for FieldValue<T, I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T, I, C> From<T> for FieldValue<T, I, C> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<I, C> From<&str> for FieldValue<String, I, C> {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

/// Normalize an optional field into a callback.
///
/// A computed field is evaluated as-is; a literal always yields itself; an absent field
/// always yields `default`.
pub fn resolver<'a, T, I, C>(
    field: Option<&'a FieldValue<T, I, C>>,
    default: T,
) -> impl Fn(&I, &C) -> T + 'a
where
    T: Clone + 'a,
{
    move |item: &I, container: &C| match field {
        Some(f) => f.get(item, container),
        None => default.clone(),
    }
}

/// Resolve an optional field for one `(item, container)` pair.
pub fn resolve<T, I, C>(
    field: Option<&FieldValue<T, I, C>>,
    default: T,
    item: &I,
    container: &C,
) -> T
where
    T: Clone,
{
    match field {
        Some(f) => f.get(item, container),
        None => default,
    }
}
