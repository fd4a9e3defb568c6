// SPDX-License-Identifier: MPL-2.0
//! `toastline` is a renderer-agnostic lifecycle engine for transient toast
//! notifications.
//!
//! The crate tracks a collection of active toasts, advances each through its
//! timed animation phases (appear, idle, hover, discard) in response to
//! clock ticks, and exposes per-toast linear progress for whatever render
//! layer the application uses. Rendering, easing curves, and widget styling
//! are deliberately out of scope: the engine only guarantees correct status
//! and timing data on every frame.
//!
//! The synchronous core is [`engine::Engine`]; applications that run on
//! tokio can use [`clock::TickLoop`] to drive it with a self-scheduling
//! frame timer.

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod reducer;
pub mod registry;
pub mod sampler;
pub mod toast;
