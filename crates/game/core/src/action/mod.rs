//! Actor-level actions: building and draining the action queue, and stepping
//! along the lane.
//!
//! # Module Structure
//!
//! - `sequence`: action queue validation and execution (`SequenceError`, `FiredWeapon`)
//! - `movement`: one-tile steps, facing flips and occupancy arbitration (`MovementArbiter`)

pub mod movement;
pub mod sequence;

pub use movement::{LaneArbiter, MoveError, MoveOutcome, MoveResolution, MovementArbiter, step_actor};
pub use sequence::{FiredWeapon, SequenceError, resolution_order};
