//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the battle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use lane_content::ContentLibrary;
use lane_core::GameState;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::session::{Session, SessionSettings};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Wall-clock length of one update frame.
    pub frame_interval: Duration,
    pub session: SessionSettings,
    /// Battle seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(50),
            session: SessionSettings::default(),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    pub const FRAME_MS_VAR: &'static str = "LANE_FRAME_MS";
    pub const ENEMY_DELAY_VAR: &'static str = "LANE_ENEMY_DELAY_FRAMES";
    pub const MESSAGE_FRAMES_VAR: &'static str = "LANE_MESSAGE_FRAMES";
    pub const SEED_VAR: &'static str = "LANE_SEED";

    /// Reads overrides from `LANE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(ms) = parse_var(&lookup, Self::FRAME_MS_VAR)? {
            config.frame_interval = Duration::from_millis(ms);
        }
        if let Some(frames) = parse_var(&lookup, Self::ENEMY_DELAY_VAR)? {
            config.session.enemy_delay_frames = frames;
        }
        if let Some(frames) = parse_var(&lookup, Self::MESSAGE_FRAMES_VAR)? {
            config.session.message_frames = frames;
        }
        config.seed = parse_var(&lookup, Self::SEED_VAR)?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidEnv { var, value })
}

/// Main runtime that hosts the battle session.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every other handle clone is dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<Arc<ContentLibrary>>,
    state: Option<GameState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            state: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this content instead of the embedded library
    pub fn content(mut self, content: Arc<ContentLibrary>) -> Self {
        self.content = Some(content);
        self
    }

    /// Resume from an existing battle state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime and start its worker.
    pub async fn build(self) -> Result<Runtime> {
        let content = match self.content {
            Some(content) => content,
            None => Arc::new(
                lane_content::embedded()
                    .map_err(|e| RuntimeError::Content(e.into()))?
                    .clone(),
            ),
        };

        let session = match self.state {
            Some(state) => Session::from_state(content, state, self.config.session),
            None => {
                let seed = self.config.seed.unwrap_or_else(rand::random);
                Session::new(content, seed, self.config.session)?
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SimulationWorker::new(
            session,
            command_rx,
            event_bus,
            self.config.frame_interval,
        );
        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime { handle, worker })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_vars_keep_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn vars_override_pacing_and_seed() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("LANE_FRAME_MS", "16"),
            ("LANE_ENEMY_DELAY_FRAMES", "3"),
            ("LANE_SEED", " 42 "),
        ]))
        .unwrap();
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.session.enemy_delay_frames, 3);
        assert_eq!(config.session.message_frames, 60);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn garbage_is_reported_with_its_var() {
        let err = RuntimeConfig::from_lookup(lookup(&[("LANE_SEED", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::InvalidEnv { var: "LANE_SEED", .. }
        ));
    }
}
