//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! sending input, querying the scene, or streaming events from a topic.
use tokio::sync::{broadcast, mpsc, oneshot};

use lane_core::GameState;

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::session::{InputEvent, PlayerData, SceneView};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Forward one input event to the session.
    ///
    /// Returns whether the session consumed it.
    pub async fn send_input(&self, event: InputEvent) -> Result<bool> {
        self.request(|reply| Command::Input { event, reply }).await
    }

    /// Advance the session by `frames` update ticks without waiting for the
    /// frame clock.
    pub async fn advance_frames(&self, frames: u32) -> Result<()> {
        self.request(|reply| Command::Advance { frames, reply })
            .await
    }

    pub async fn player_data(&self) -> Result<PlayerData> {
        self.request(|reply| Command::PlayerData { reply }).await
    }

    pub async fn scene_view(&self) -> Result<SceneView> {
        self.request(|reply| Command::SceneView { reply }).await
    }

    /// Query the current battle state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Battle` - every engine event, in emission order
    /// - `Topic::Log` - player-facing message lines
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
