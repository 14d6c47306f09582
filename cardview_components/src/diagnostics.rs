// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration diagnostics.
//!
//! Resolution never fails. Malformed descriptors are rendered with empty text or left out of
//! the dispatch table, and the problem is reported to a [`DiagnosticSink`] supplied by the
//! caller.

use alloc::string::String;
use alloc::vec::Vec;

/// A non-fatal problem with a descriptor catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A leaf control resolved with neither a label nor a tooltip.
    #[error("control `{class}` has no label or tooltip")]
    MissingLabel {
        /// Class of the offending control, or `<unnamed>` if it has none.
        class: String,
    },
    /// A control has no class, so its handler and children cannot be bound.
    #[error("control `{label}` has no class and was left out of the dispatch table")]
    MissingClass {
        /// Literal label or tooltip of the offending control, or `<unlabeled>`.
        label: String,
    },
}

/// Receives configuration diagnostics produced during resolution.
pub trait DiagnosticSink {
    /// Report one diagnostic.
    fn report(&mut self, error: ConfigError);
}

/// Collects diagnostics in report order.
impl DiagnosticSink for Vec<ConfigError> {
    fn report(&mut self, error: ConfigError) {
        self.push(error);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, error: ConfigError) {
        (**self).report(error);
    }
}

/// A sink that drops every diagnostic.
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    #[inline]
    fn report(&mut self, _error: ConfigError) {}
}

/// A sink that emits each diagnostic as a `tracing` warning.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
    fn report(&mut self, error: ConfigError) {
        tracing::warn!(target: "cardview::config", %error, "invalid component descriptor");
    }
}
