//! Combat resolution system.
//!
//! Maps a fired weapon onto lane positions and applies its damage and status
//! effects to whoever stands there.
//!
//! # Architecture
//!
//! - **One entry point**: [`resolve_strike`] matches exhaustively on
//!   [`WeaponEffect`](crate::state::WeaponEffect)
//! - **Reports, not logs**: every strike yields a [`StrikeReport`] that the
//!   runtime turns into messages
//! - **No death handling**: casualties are left at zero health for the turn
//!   controller to settle
//!
//! # Core Functions
//!
//! - `resolve_strike`: full resolution of one fired weapon
//! - `hit_positions`: pattern offsets mirrored by facing and clipped to the lane
//! - `line_is_clear`: no living actor between two tiles

pub mod resolve;
pub mod result;
pub mod targeting;

pub use resolve::resolve_strike;
pub use result::{Hit, ResolutionNotice, StrikeReport};
pub use targeting::{hit_positions, line_is_clear};
