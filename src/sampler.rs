// SPDX-License-Identifier: MPL-2.0
//! Per-toast animation progress for the render layer.
//!
//! The sampler emits linear progress only; easing curves are a renderer
//! concern.

use crate::config::Config;
use crate::toast::{Status, Toast};

/// Returns the normalized progress of `toast`'s current phase at clock time
/// `t`, as a ratio in `[0, 1]`.
///
/// Progress is `elapsed / duration` against the phase's configured duration,
/// clamped at both ends: a stale `t` reads as `0.0` and an expired phase as
/// `1.0`. `IdleHovered` has no duration and always reports `1.0`
/// (fully settled).
#[must_use]
pub fn progress(toast: &Toast, config: &Config, t: u64) -> f32 {
    let duration = match toast.status() {
        Status::IdleHovered => return 1.0,
        Status::Idle => config.create_ms,
        Status::Discarded => config.discard_ms,
        Status::Hovered(_) => config.hover_ms,
    };
    if duration == 0 {
        return 1.0;
    }
    (toast.elapsed(t) as f32 / duration as f32).clamp(0.0, 1.0)
}
