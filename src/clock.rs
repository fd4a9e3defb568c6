// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed clock source driving the toast engine.
//!
//! The engine itself is synchronous and only ever asks for "one more tick".
//! `TickLoop` interprets that request: it runs the engine inside a single
//! spawned task, multiplexing producer commands with a frame timer that is
//! armed exactly while the last reducer step requested a tick. Once every
//! toast is quiescent or removed the timer disarms and the task sleeps on
//! the command channel alone; the next command re-arms it.
//!
//! Clock values are milliseconds elapsed since the loop started, taken from
//! a monotonic `Instant`.

use crate::config::Config;
use crate::engine::{Engine, ToastFrame};
use crate::toast::{HoverDirection, Level, ToastId};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};
use tokio::time;

/// Interval between self-scheduled ticks while an animation is running.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Producer-facing commands accepted by the tick loop.
#[derive(Debug)]
pub enum Command {
    /// Show a new toast; the allocated id is sent back on `reply`.
    Show {
        content: String,
        level: Level,
        reply: oneshot::Sender<ToastId>,
    },
    /// Start the removal animation for a toast.
    Discard(ToastId),
    /// Begin a hover transition on a toast.
    Hover(ToastId, HoverDirection),
    /// Stop the loop.
    Shutdown,
}

/// Handle to a spawned tick loop.
///
/// Dropping the handle closes the command channel, which terminates the
/// loop.
#[derive(Debug)]
pub struct TickLoop {
    command_tx: mpsc::UnboundedSender<Command>,
    frame_rx: mpsc::UnboundedReceiver<Vec<ToastFrame>>,
}

impl TickLoop {
    /// Spawns the tick loop on the current tokio runtime.
    #[must_use]
    pub fn spawn(config: Config) -> Self {
        // Commands: unbounded (producers must never block).
        // Frames: unbounded; the renderer is expected to drain every frame.
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_loop(Engine::new(config), command_rx, frame_tx));

        Self {
            command_tx,
            frame_rx,
        }
    }

    /// Shows a new toast and returns its id.
    ///
    /// Returns `None` if the loop has already shut down.
    pub async fn show(&self, content: impl Into<String>, level: Level) -> Option<ToastId> {
        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(Command::Show {
                content: content.into(),
                level,
                reply,
            })
            .ok()?;
        response.await.ok()
    }

    /// Starts the removal animation for a toast.
    pub fn discard(&self, id: ToastId) {
        let _ = self.command_tx.send(Command::Discard(id));
    }

    /// Begins a hover transition on a toast.
    pub fn hover(&self, id: ToastId, direction: HoverDirection) {
        let _ = self.command_tx.send(Command::Hover(id, direction));
    }

    /// Asks the loop to stop.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(Command::Shutdown);
    }

    /// Receives the next render feed update.
    ///
    /// Returns `None` once the loop has stopped and all pending frames have
    /// been drained.
    pub async fn next_frames(&mut self) -> Option<Vec<ToastFrame>> {
        self.frame_rx.recv().await
    }
}

async fn run_loop(
    mut engine: Engine,
    mut commands: mpsc::UnboundedReceiver<Command>,
    frames: mpsc::UnboundedSender<Vec<ToastFrame>>,
) {
    let start = Instant::now();

    loop {
        if engine.needs_tick() {
            tokio::select! {
                command = commands.recv() => {
                    let now = clock_ms(start);
                    match command {
                        Some(command) => {
                            if !handle_command(&mut engine, command, now, &frames) {
                                return;
                            }
                        }
                        None => return,
                    }
                }
                () = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    let now = clock_ms(start);
                    engine.tick(now);
                    publish(&engine, now, &frames);
                }
            }
        } else {
            // Quiescent: nothing animates, so wait for a command alone. The
            // command itself always requests one tick, re-arming the timer.
            match commands.recv().await {
                Some(command) => {
                    let now = clock_ms(start);
                    if !handle_command(&mut engine, command, now, &frames) {
                        return;
                    }
                }
                None => return,
            }
        }
    }
}

/// Applies one command to the engine. Returns `false` on shutdown.
fn handle_command(
    engine: &mut Engine,
    command: Command,
    now: u64,
    frames: &mpsc::UnboundedSender<Vec<ToastFrame>>,
) -> bool {
    match command {
        Command::Show {
            content,
            level,
            reply,
        } => {
            let id = engine.show(content, level, now);
            let _ = reply.send(id);
        }
        Command::Discard(id) => engine.discard(id, now),
        Command::Hover(id, direction) => engine.hover(id, direction, now),
        Command::Shutdown => return false,
    }
    publish(engine, now, frames);
    true
}

fn publish(engine: &Engine, now: u64, frames: &mpsc::UnboundedSender<Vec<ToastFrame>>) {
    // A dropped frame receiver is not an error; the loop keeps the lifecycle
    // running regardless.
    let _ = frames.send(engine.frames(now));
}

fn clock_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
