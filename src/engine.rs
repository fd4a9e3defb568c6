// SPDX-License-Identifier: MPL-2.0
//! Serialized event entry points and the render feed.
//!
//! The `Engine` is the application-owned object that replaces any global
//! notification bus: create one at startup, feed it events in arrival order,
//! and hand its frames to the renderer. `&mut self` on every entry point is
//! what guarantees the reducer is never re-entered.

use crate::config::Config;
use crate::reducer::{reduce, Event};
use crate::registry::Registry;
use crate::sampler;
use crate::toast::{HoverDirection, Level, Status, Toast, ToastId};

/// One entry of the render feed: everything the renderer needs to draw a
/// toast, read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastFrame {
    pub id: ToastId,
    pub content: String,
    pub level: Level,
    pub status: Status,
    /// Linear progress of the current phase, in `[0, 1]`.
    pub progress: f32,
}

/// Owns the toast registry and applies events to it, one reducer step per
/// call.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
    registry: Registry,
    needs_tick: bool,
}

impl Engine {
    /// Creates an engine with the given animation durations.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: Registry::new(),
            needs_tick: false,
        }
    }

    /// Shows a new toast at clock time `t` and returns its id.
    ///
    /// Always requests a follow-up tick, kick-starting the animation loop if
    /// it had gone quiet.
    pub fn show(&mut self, content: impl Into<String>, level: Level, t: u64) -> ToastId {
        let id = ToastId::new();
        self.apply(Event::Show {
            id,
            content: content.into(),
            level,
            t,
        });
        id
    }

    /// Starts the removal animation for a toast at clock time `t`.
    ///
    /// Idempotent on an already-discarded toast and a silent no-op on an
    /// unknown id; always requests a follow-up tick.
    pub fn discard(&mut self, id: ToastId, t: u64) {
        self.apply(Event::Discard { id, t });
    }

    /// Begins a hover transition on a toast at clock time `t`.
    ///
    /// Ignored for a toast mid-removal and a silent no-op on an unknown id;
    /// always requests a follow-up tick.
    pub fn hover(&mut self, id: ToastId, direction: HoverDirection, t: u64) {
        self.apply(Event::Hover { id, direction, t });
    }

    /// Advances every animating toast to clock time `t`.
    ///
    /// Returns whether at least one toast still needs a follow-up tick; the
    /// caller's event loop should schedule one exactly when it does.
    pub fn tick(&mut self, t: u64) -> bool {
        self.apply(Event::Tick { t });
        self.needs_tick
    }

    fn apply(&mut self, event: Event) {
        let step = reduce(event, &self.registry, &self.config);
        self.registry = step.registry;
        self.needs_tick = step.needs_tick;
    }

    /// Returns whether the most recent event requested a follow-up tick.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.needs_tick
    }

    /// Returns the render feed at clock time `t`, newest toast first.
    #[must_use]
    pub fn frames(&self, t: u64) -> Vec<ToastFrame> {
        self.registry
            .iter()
            .map(|toast| ToastFrame {
                id: toast.id(),
                content: toast.content().to_string(),
                level: toast.level(),
                status: toast.status(),
                progress: sampler::progress(toast, &self.config, t),
            })
            .collect()
    }

    /// Iterates over the active toasts, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.registry.iter()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns whether no toasts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns the animation durations this engine was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
