//! Runtime orchestration for the lane battle.
//!
//! This crate wraps the deterministic engine in a [`Session`] (the scene
//! surface a UI drives frame by frame) and hosts it on a tokio worker.
//! Consumers embed [`Runtime`] and talk to it through [`RuntimeHandle`], or
//! drive a [`Session`] directly when they own the frame loop.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`session`] is the battle scene surface
//! - [`snapshot`] captures actor state for suspend/restore
pub mod api;
pub mod events;
pub mod runtime;
pub mod session;
pub mod snapshot;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::{
    ActorView, InputEvent, MessageLog, PlayerData, Renderer, SceneView, Session, SessionSettings,
    WeaponSlot,
};
pub use snapshot::ActorSnapshot;
