//! Pattern-to-tile mapping.

use crate::config::GameConfig;
use crate::state::{EntitiesState, Facing, Position};

/// Tiles covered by `pattern` around `origin`, mirrored by `facing`.
///
/// Offsets landing off the lane are dropped; order follows the pattern.
pub fn hit_positions(
    origin: Position,
    facing: Facing,
    pattern: &[i32],
    config: &GameConfig,
) -> Vec<Position> {
    pattern
        .iter()
        .map(|&offset| origin.offset(offset, facing))
        .filter(|position| config.in_bounds(position.0))
        .collect()
}

/// Returns true if no living actor stands strictly between `from` and `to`.
pub fn line_is_clear(entities: &EntitiesState, from: Position, to: Position) -> bool {
    let (low, high) = if from.0 <= to.0 {
        (from.0, to.0)
    } else {
        (to.0, from.0)
    };
    (low + 1..high).all(|tile| !entities.is_occupied(Position::new(tile)))
}
