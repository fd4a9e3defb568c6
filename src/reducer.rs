// SPDX-License-Identifier: MPL-2.0
//! The toast lifecycle state machine.
//!
//! `reduce` maps one incoming event plus the current registry to a new
//! registry and a tick-request flag. It is a total function: unknown ids and
//! out-of-order clock values degrade to no-ops, never to errors.
//!
//! The tick-request flag is the self-scheduling contract with the clock
//! source: the caller's event loop re-requests a timer callback whenever
//! `needs_tick` is true, and the loop goes quiet on its own once every toast
//! is either quiescent (`IdleHovered`) or removed.

use crate::config::Config;
use crate::registry::Registry;
use crate::toast::{HoverDirection, Level, Status, Toast, ToastId};

/// An event entering the reducer, carrying the clock time `t` at which it
/// was observed (milliseconds, monotonic).
#[derive(Debug, Clone)]
pub enum Event {
    /// Show a new toast.
    Show {
        id: ToastId,
        content: String,
        level: Level,
        t: u64,
    },
    /// Start the removal animation for a toast.
    Discard { id: ToastId, t: u64 },
    /// Begin a hover enter/leave transition on a toast.
    Hover {
        id: ToastId,
        direction: HoverDirection,
        t: u64,
    },
    /// Advance every animating toast to clock time `t`.
    Tick { t: u64 },
}

/// Result of one reducer step.
#[derive(Debug, Clone)]
pub struct Step {
    /// The registry after applying the event.
    pub registry: Registry,
    /// Whether at least one toast still needs a follow-up tick.
    pub needs_tick: bool,
}

/// What happens to a toast when its current phase times out.
enum Expiry {
    /// Keep the toast exactly as it is; it simply stops animating.
    Hold,
    /// Drop the toast from the registry.
    Remove,
    /// Move to a new phase, re-anchored at the tick time.
    Become(Status),
}

/// Applies `event` to `registry`, producing the next registry and the
/// tick-request flag.
pub fn reduce(event: Event, registry: &Registry, config: &Config) -> Step {
    match event {
        Event::Show {
            id,
            content,
            level,
            t,
        } => Step {
            registry: registry.insert(Toast::new(id, content, level, t)),
            needs_tick: true,
        },
        Event::Discard { id, t } => {
            // Idempotent: re-discarding must not reset the animation anchor,
            // or the toast's removal could be postponed indefinitely.
            let registry = registry.map_matching(id, |toast| {
                if toast.status() == Status::Discarded {
                    toast.clone()
                } else {
                    toast.transitioned(Status::Discarded, t)
                }
            });
            Step {
                registry,
                needs_tick: true,
            }
        }
        Event::Hover { id, direction, t } => {
            // A toast mid-removal cannot be hovered.
            let registry = registry.map_matching(id, |toast| {
                if toast.status() == Status::Discarded {
                    toast.clone()
                } else {
                    toast.transitioned(Status::Hovered(direction), t)
                }
            });
            Step {
                registry,
                needs_tick: true,
            }
        }
        Event::Tick { t } => {
            let mut needs_tick = false;
            let registry = registry.filter_map_toasts(|toast| {
                let (next, animating) = advance_toast(toast, t, config);
                needs_tick |= animating;
                next
            });
            Step {
                registry,
                needs_tick,
            }
        }
    }
}

/// Advances one toast to clock time `t`, dispatching on its phase.
///
/// Returns the surviving toast (if any) and whether it still wants a
/// follow-up tick.
fn advance_toast(toast: &Toast, t: u64, config: &Config) -> (Option<Toast>, bool) {
    match toast.status() {
        // Quiescent: held indefinitely until the next Hover or Discard.
        Status::IdleHovered => (Some(toast.clone()), false),
        Status::Idle => advance_with_timeout(toast, t, config.create_ms, Expiry::Hold),
        Status::Discarded => advance_with_timeout(toast, t, config.discard_ms, Expiry::Remove),
        Status::Hovered(HoverDirection::In) => {
            advance_with_timeout(toast, t, config.hover_ms, Expiry::Become(Status::IdleHovered))
        }
        Status::Hovered(HoverDirection::Out) => {
            advance_with_timeout(toast, t, config.hover_ms, Expiry::Become(Status::Idle))
        }
    }
}

/// The shared phase-advance policy.
///
/// While `elapsed <= duration` the phase keeps animating: the observed tick
/// time is recorded and another tick requested. Past the duration the expiry
/// action applies and this toast requests nothing further. A stale `t`
/// saturates `elapsed` to zero, so clock jitter reads as "still animating"
/// rather than premature expiry.
fn advance_with_timeout(
    toast: &Toast,
    t: u64,
    duration: u64,
    expiry: Expiry,
) -> (Option<Toast>, bool) {
    if toast.elapsed(t) <= duration {
        (Some(toast.advanced(t)), true)
    } else {
        match expiry {
            Expiry::Hold => (Some(toast.clone()), false),
            Expiry::Remove => (None, false),
            Expiry::Become(status) => (Some(toast.transitioned(status, t)), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(registry: &Registry, content: &str, t: u64) -> (Registry, ToastId) {
        let id = ToastId::new();
        let step = reduce(
            Event::Show {
                id,
                content: content.to_string(),
                level: Level::Success,
                t,
            },
            registry,
            &Config::default(),
        );
        assert!(step.needs_tick);
        (step.registry, id)
    }

    fn tick(registry: &Registry, t: u64) -> Step {
        reduce(Event::Tick { t }, registry, &Config::default())
    }

    #[test]
    fn show_prepends_idle_toast_and_requests_tick() {
        let (registry, id) = show(&Registry::new(), "saved", 0);

        let toast = registry.get(id).expect("toast should be registered");
        assert_eq!(toast.status(), Status::Idle);
        assert_eq!(toast.anchor(), 0);
        assert_eq!(toast.current(), 0);
    }

    #[test]
    fn tick_advances_idle_toast_within_create_duration() {
        let (registry, id) = show(&Registry::new(), "saved", 0);

        let step = tick(&registry, 100);
        assert!(step.needs_tick);
        let toast = step.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Idle);
        assert_eq!(toast.current(), 100);
    }

    #[test]
    fn idle_expiry_holds_the_toast_and_stops_ticking() {
        let (registry, id) = show(&Registry::new(), "saved", 0);

        let step = tick(&registry, 600);
        assert!(!step.needs_tick);
        // Expiry leaves the toast untouched; progress stays clamped.
        assert_eq!(step.registry.get(id), registry.get(id));
    }

    #[test]
    fn discard_transitions_and_resets_times() {
        let (registry, id) = show(&Registry::new(), "saved", 0);

        let step = reduce(Event::Discard { id, t: 400 }, &registry, &Config::default());
        assert!(step.needs_tick);
        let toast = step.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Discarded);
        assert_eq!(toast.anchor(), 400);
        assert_eq!(toast.current(), 400);
    }

    #[test]
    fn discard_is_idempotent() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let first = reduce(Event::Discard { id, t: 100 }, &registry, &config);
        let second = reduce(Event::Discard { id, t: 900 }, &first.registry, &config);

        // The anchor must not move, or removal would be postponed.
        let toast = second.registry.get(id).unwrap();
        assert_eq!(toast.anchor(), 100);
        assert_eq!(toast.status(), Status::Discarded);
    }

    #[test]
    fn discard_unknown_id_is_silent_noop() {
        let (registry, _id) = show(&Registry::new(), "saved", 0);
        let stale = ToastId::new();

        let step = reduce(
            Event::Discard { id: stale, t: 50 },
            &registry,
            &Config::default(),
        );
        assert_eq!(step.registry, registry);
    }

    #[test]
    fn discarded_toast_is_removed_after_discard_duration() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let discarded = reduce(Event::Discard { id, t: 1000 }, &registry, &config);
        // elapsed = 1001 > 1000, the only removal path in the system.
        let step = tick(&discarded.registry, 2001);

        assert!(step.registry.get(id).is_none());
        assert!(step.registry.is_empty());
        assert!(!step.needs_tick);
    }

    #[test]
    fn discarded_toast_survives_until_duration_elapses() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let discarded = reduce(Event::Discard { id, t: 1000 }, &registry, &config);
        let step = tick(&discarded.registry, 2000);

        // elapsed = 1000 is still within the phase.
        assert!(step.registry.get(id).is_some());
        assert!(step.needs_tick);
    }

    #[test]
    fn hover_on_discarded_toast_is_ignored() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let discarded = reduce(Event::Discard { id, t: 100 }, &registry, &config);
        let hovered = reduce(
            Event::Hover {
                id,
                direction: HoverDirection::In,
                t: 150,
            },
            &discarded.registry,
            &config,
        );

        let toast = hovered.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Discarded);
        assert_eq!(toast.anchor(), 100);
    }

    #[test]
    fn hover_in_settles_to_idle_hovered() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let hovered = reduce(
            Event::Hover {
                id,
                direction: HoverDirection::In,
                t: 50,
            },
            &registry,
            &config,
        );
        let toast = hovered.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Hovered(HoverDirection::In));
        assert_eq!(toast.anchor(), 50);

        // One past the hover duration: the phase expires into the held state.
        let step = tick(&hovered.registry, 301);
        let toast = step.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::IdleHovered);
        assert_eq!(toast.anchor(), 301);
        assert_eq!(toast.current(), 301);
        assert!(!step.needs_tick);
    }

    #[test]
    fn hover_out_expires_back_to_idle() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let hovered = reduce(
            Event::Hover {
                id,
                direction: HoverDirection::Out,
                t: 50,
            },
            &registry,
            &config,
        );
        let step = tick(&hovered.registry, 301);

        let toast = step.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Idle);
        assert_eq!(toast.anchor(), 301);
    }

    #[test]
    fn idle_hovered_is_quiescent() {
        let (registry, id) = show(&Registry::new(), "saved", 0);
        let config = Config::default();

        let hovered = reduce(
            Event::Hover {
                id,
                direction: HoverDirection::In,
                t: 0,
            },
            &registry,
            &config,
        );
        let settled = tick(&hovered.registry, 251);
        assert_eq!(
            settled.registry.get(id).unwrap().status(),
            Status::IdleHovered
        );

        let step = tick(&settled.registry, 10_000);
        assert!(!step.needs_tick);
        assert_eq!(step.registry, settled.registry);
    }

    #[test]
    fn stale_tick_clamps_to_still_animating() {
        let (registry, id) = show(&Registry::new(), "saved", 5_000);

        // Out-of-order tick from before the anchor: no expiry, no time
        // moving backwards.
        let step = tick(&registry, 4_000);
        assert!(step.needs_tick);
        let toast = step.registry.get(id).unwrap();
        assert_eq!(toast.status(), Status::Idle);
        assert_eq!(toast.current(), 5_000);
    }

    #[test]
    fn needs_tick_is_or_reduced_across_toasts() {
        let (registry, first) = show(&Registry::new(), "first", 0);
        let config = Config::default();

        // Settle the first toast into the quiescent phase.
        let hovered = reduce(
            Event::Hover {
                id: first,
                direction: HoverDirection::In,
                t: 0,
            },
            &registry,
            &config,
        );
        let settled = tick(&hovered.registry, 251);
        assert!(!settled.needs_tick);

        // A second, animating toast keeps the loop alive for both.
        let (registry, _second) = show(&settled.registry, "second", 300);
        let step = tick(&registry, 350);
        assert!(step.needs_tick);
        assert_eq!(step.registry.len(), 2);
    }

    #[test]
    fn monotonic_current_across_consecutive_ticks() {
        let (mut registry, id) = show(&Registry::new(), "saved", 0);

        let mut last = 0;
        for t in [50, 120, 120, 300, 480] {
            let step = tick(&registry, t);
            registry = step.registry;
            let current = registry.get(id).unwrap().current();
            assert!(current >= last);
            last = current;
        }
    }
}
