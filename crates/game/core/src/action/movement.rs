//! Lane movement: one-tile steps, facing flips and occupancy arbitration.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntitiesState, EntityId, Facing, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked by {by}")]
    Blocked { destination: Position, by: EntityId },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::ActorNotFound(_) => ErrorSeverity::Internal,
            MoveError::OutOfBounds { .. } => ErrorSeverity::Validation,
            MoveError::Blocked { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
        }
    }
}

/// Verdict of a [`MovementArbiter`] for a single in-bounds step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResolution {
    /// The destination is free.
    Move(Position),
    /// The mover trades places with the occupant.
    Swap { with: EntityId, to: Position },
    /// The occupant stays and the mover does not move.
    Blocked { by: EntityId },
}

/// Decides what happens when an actor steps onto a tile.
///
/// Owned by the turn controller so that occupancy rules live in one place.
pub trait MovementArbiter: Send + Sync {
    fn resolve(
        &self,
        entities: &EntitiesState,
        mover: EntityId,
        destination: Position,
    ) -> MoveResolution;
}

/// Default lane rules: occupied tiles block, except that the player may swap
/// with the occupant while the swap cooldown is idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaneArbiter;

impl MovementArbiter for LaneArbiter {
    fn resolve(
        &self,
        entities: &EntitiesState,
        mover: EntityId,
        destination: Position,
    ) -> MoveResolution {
        let occupant = entities
            .occupants_at(destination)
            .find(|actor| actor.id != mover)
            .map(|actor| actor.id);
        let Some(occupant) = occupant else {
            return MoveResolution::Move(destination);
        };

        let can_swap = entities
            .actor(mover)
            .and_then(|actor| actor.player_state())
            .is_some_and(|player| player.swap_cooldown == 0);
        if can_swap {
            MoveResolution::Swap {
                with: occupant,
                to: destination,
            }
        } else {
            MoveResolution::Blocked { by: occupant }
        }
    }
}

/// What a successful step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The actor faced the other way and turned around instead of moving.
    Turned { facing: Facing },
    Moved { from: Position, to: Position },
    Swapped {
        with: EntityId,
        from: Position,
        to: Position,
    },
}

/// Steps `mover` one tile in `direction`.
///
/// An actor facing away from `direction` only turns around. A swap puts the
/// player's swap cooldown to `config.swap_cooldown`. Errors leave the roster
/// untouched.
pub fn step_actor(
    entities: &mut EntitiesState,
    arbiter: &dyn MovementArbiter,
    config: &GameConfig,
    mover: EntityId,
    direction: Facing,
) -> Result<MoveOutcome, MoveError> {
    let actor = entities
        .actor(mover)
        .ok_or(MoveError::ActorNotFound(mover))?;

    if actor.facing != direction {
        let actor = entities
            .actor_mut(mover)
            .ok_or(MoveError::ActorNotFound(mover))?;
        actor.facing = direction;
        return Ok(MoveOutcome::Turned { facing: direction });
    }

    let from = actor.position;
    let destination = from.step(direction, 1);
    if !config.in_bounds(destination.0) {
        return Err(MoveError::OutOfBounds { destination });
    }

    match arbiter.resolve(entities, mover, destination) {
        MoveResolution::Move(to) => {
            set_position(entities, mover, to)?;
            Ok(MoveOutcome::Moved { from, to })
        }
        MoveResolution::Swap { with, to } => {
            set_position(entities, with, from)?;
            let actor = entities
                .actor_mut(mover)
                .ok_or(MoveError::ActorNotFound(mover))?;
            actor.position = to;
            if let Some(player) = actor.player_state_mut() {
                player.swap_cooldown = config.swap_cooldown;
            }
            Ok(MoveOutcome::Swapped { with, from, to })
        }
        MoveResolution::Blocked { by } => Err(MoveError::Blocked { destination, by }),
    }
}

fn set_position(
    entities: &mut EntitiesState,
    id: EntityId,
    position: Position,
) -> Result<(), MoveError> {
    let actor = entities.actor_mut(id).ok_or(MoveError::ActorNotFound(id))?;
    actor.position = position;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActorState;

    fn lane(player_at: i32, enemy_at: i32) -> EntitiesState {
        let player = ActorState::player("hero", Position::new(player_at), 100);
        let enemy = ActorState::enemy(EntityId(1), "Bug", Position::new(enemy_at), 30, vec![])
            .facing(Facing::Left);
        EntitiesState::new(player, vec![enemy])
    }

    #[test]
    fn step_moves_into_free_tile() {
        let mut entities = lane(2, 6);
        let outcome = step_actor(
            &mut entities,
            &LaneArbiter,
            &GameConfig::default(),
            EntityId::PLAYER,
            Facing::Right,
        )
        .unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(2),
                to: Position::new(3)
            }
        );
        assert_eq!(entities.player.position, Position::new(3));
    }

    #[test]
    fn moving_backwards_turns_instead() {
        let mut entities = lane(2, 6);
        let outcome = step_actor(
            &mut entities,
            &LaneArbiter,
            &GameConfig::default(),
            EntityId::PLAYER,
            Facing::Left,
        )
        .unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Turned {
                facing: Facing::Left
            }
        );
        assert_eq!(entities.player.position, Position::new(2));
        assert_eq!(entities.player.facing, Facing::Left);
    }

    #[test]
    fn leaving_the_board_is_rejected() {
        let mut entities = lane(GameConfig::BOARD_SIZE, 2);
        let err = step_actor(
            &mut entities,
            &LaneArbiter,
            &GameConfig::default(),
            EntityId::PLAYER,
            Facing::Right,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds {
                destination: Position::new(GameConfig::BOARD_SIZE + 1)
            }
        );
        assert_eq!(entities.player.position, Position::new(GameConfig::BOARD_SIZE));
    }

    #[test]
    fn player_swaps_then_waits_for_cooldown() {
        let config = GameConfig::default();
        let mut entities = lane(2, 3);
        let outcome = step_actor(
            &mut entities,
            &LaneArbiter,
            &config,
            EntityId::PLAYER,
            Facing::Right,
        )
        .unwrap();
        assert!(matches!(outcome, MoveOutcome::Swapped { .. }));
        assert_eq!(entities.player.position, Position::new(3));
        assert_eq!(entities.enemies[0].position, Position::new(2));
        assert_eq!(
            entities.player.player_state().unwrap().swap_cooldown,
            config.swap_cooldown
        );

        entities.player.position = Position::new(1);
        let err = step_actor(
            &mut entities,
            &LaneArbiter,
            &config,
            EntityId::PLAYER,
            Facing::Right,
        )
        .unwrap_err();
        assert!(matches!(err, MoveError::Blocked { .. }));
        assert_eq!(entities.player.position, Position::new(1));
    }

    #[test]
    fn enemies_never_swap() {
        let mut entities = lane(4, 5);
        let err = step_actor(
            &mut entities,
            &LaneArbiter,
            &GameConfig::default(),
            EntityId(1),
            Facing::Left,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MoveError::Blocked {
                destination: Position::new(4),
                by: EntityId::PLAYER
            }
        );
    }
}
