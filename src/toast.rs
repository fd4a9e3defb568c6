// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct along with the `Level` and
//! `Status` enums that describe a notification and its lifecycle phase.

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level of a toast. The engine does not interpret it beyond
/// passing it through to the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Informational message.
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

/// Direction of a pointer hover gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverDirection {
    /// Pointer entered the toast.
    In,
    /// Pointer left the toast.
    Out,
}

/// Lifecycle phase of a toast.
///
/// A toast starts in `Idle` and leaves the registry only when its
/// `Discarded` animation times out. `IdleHovered` is quiescent: it holds
/// indefinitely and does not animate until the next Hover or Discard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Appearing or settled, not hovered.
    Idle,
    /// Settled under the pointer; held until the next event.
    IdleHovered,
    /// Playing the removal animation; expiry removes the toast.
    Discarded,
    /// Animating a pointer enter or leave.
    Hovered(HoverDirection),
}

/// One active notification instance.
///
/// `anchor` is the clock time (milliseconds) at which the current phase
/// began and `current` the most recent tick observed for this toast.
/// `current >= anchor` always holds; both reset together on every status
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    content: String,
    level: Level,
    status: Status,
    anchor: u64,
    current: u64,
}

impl Toast {
    /// Creates a new toast in the `Idle` phase anchored at clock time `t`.
    pub fn new(id: ToastId, content: impl Into<String>, level: Level, t: u64) -> Self {
        Self {
            id,
            content: content.into(),
            level,
            status: Status::Idle,
            anchor: t,
            current: t,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the severity level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the clock time at which the current phase began.
    #[must_use]
    pub fn anchor(&self) -> u64 {
        self.anchor
    }

    /// Returns the most recent tick time observed for this toast.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Returns a copy of this toast moved to `status`, with both animation
    /// times reset to `t`.
    #[must_use]
    pub fn transitioned(&self, status: Status, t: u64) -> Self {
        Self {
            status,
            anchor: t,
            current: t,
            ..self.clone()
        }
    }

    /// Returns a copy of this toast with `current` advanced to `t`.
    ///
    /// A stale `t` never moves time backwards: the stored value is
    /// `max(current, t)`, which keeps `current >= anchor` intact.
    #[must_use]
    pub fn advanced(&self, t: u64) -> Self {
        Self {
            current: self.current.max(t),
            ..self.clone()
        }
    }

    /// Returns the time elapsed in the current phase as of clock time `t`.
    ///
    /// Saturates at zero for out-of-order ticks, so clock jitter clamps to
    /// "phase just started" rather than producing a bogus elapsed value.
    #[must_use]
    pub fn elapsed(&self, t: u64) -> u64 {
        t.saturating_sub(self.anchor)
    }
}
