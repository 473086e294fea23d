//! Simulation worker that owns the authoritative [`Session`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), drives the
//! session's frame clock, and publishes battle events on the [`EventBus`].

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use lane_core::GameState;

use crate::events::EventBus;
use crate::session::{InputEvent, PlayerData, SceneView, Session};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Forward an input event; replies whether it was consumed.
    Input {
        event: InputEvent,
        reply: oneshot::Sender<bool>,
    },
    /// Run `frames` updates immediately.
    Advance {
        frames: u32,
        reply: oneshot::Sender<()>,
    },
    PlayerData {
        reply: oneshot::Sender<PlayerData>,
    },
    SceneView {
        reply: oneshot::Sender<SceneView>,
    },
    /// Query the current battle state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes session commands and frame ticks.
pub struct SimulationWorker {
    session: Session,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    frame_interval: Duration,
}

impl SimulationWorker {
    pub fn new(
        session: Session,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        frame_interval: Duration,
    ) -> Self {
        Self {
            session,
            command_rx,
            event_bus,
            frame_interval,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                _ = frames.tick() => self.frame(),
            }
        }

        info!(target: "runtime::worker", "simulation worker stopped");
    }

    fn frame(&mut self) {
        self.session.update();
        self.flush();
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Input { event, reply } => {
                let consumed = self.session.handle_event(event);
                debug!(target: "runtime::worker", event = ?event, consumed, "input");
                self.flush();
                let _ = reply.send(consumed);
            }
            Command::Advance { frames, reply } => {
                for _ in 0..frames {
                    self.frame();
                }
                let _ = reply.send(());
            }
            Command::PlayerData { reply } => {
                let _ = reply.send(self.session.get_player_data());
            }
            Command::SceneView { reply } => {
                let _ = reply.send(self.session.scene_view());
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.session.state().clone());
            }
        }
    }

    fn flush(&mut self) {
        for event in self.session.take_events() {
            self.event_bus.publish(event);
        }
    }
}
