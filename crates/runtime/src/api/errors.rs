//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, content loading, and battle
//! setup so clients can bubble them up with consistent context.

use lane_core::OracleError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("failed to load battle content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to set up the battle")]
    InitialState(#[from] OracleError),

    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}
