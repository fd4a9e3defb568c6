// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active toasts.
//!
//! The registry is a pure value: every transforming operation returns a new
//! `Registry` and leaves the receiver untouched. Insertion order is
//! most-recently-shown-first, which is also the order the render layer
//! receives.

use crate::toast::{Toast, ToastId};
use std::collections::VecDeque;

/// The ordered collection of active toasts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    toasts: VecDeque<Toast>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry with `toast` prepended. Never fails.
    #[must_use]
    pub fn insert(&self, toast: Toast) -> Self {
        let mut toasts = self.toasts.clone();
        toasts.push_front(toast);
        Self { toasts }
    }

    /// Applies `transform` to the toast whose id matches, leaving all others
    /// unchanged.
    ///
    /// A missing id is a no-op, not an error: events may race against a
    /// toast's removal by the tick pass.
    #[must_use]
    pub fn map_matching(&self, id: ToastId, transform: impl Fn(&Toast) -> Toast) -> Self {
        let toasts = self
            .toasts
            .iter()
            .map(|toast| {
                if toast.id() == id {
                    transform(toast)
                } else {
                    toast.clone()
                }
            })
            .collect();
        Self { toasts }
    }

    /// Applies `f` to every toast, dropping any toast for which `f` returns
    /// `None`.
    ///
    /// The tick pass uses this to advance and garbage-collect toasts in one
    /// traversal.
    #[must_use]
    pub fn filter_map_toasts(&self, mut f: impl FnMut(&Toast) -> Option<Toast>) -> Self {
        let toasts = self.toasts.iter().filter_map(|toast| f(toast)).collect();
        Self { toasts }
    }

    /// Returns the toast with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    /// Iterates over the toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether the registry holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
