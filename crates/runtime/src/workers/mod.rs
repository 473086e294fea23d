//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the session; nothing else mutates it.

mod simulation;

pub use simulation::{Command, SimulationWorker};
