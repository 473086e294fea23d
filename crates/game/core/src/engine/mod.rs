//! Turn controller and command pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Player
//! commands are accepted only during the player phase; each one either fails
//! without touching the state or ends the phase. The enemy phase is a
//! separate entry point the runtime invokes once its scheduling tick fires.

mod errors;
mod events;
mod hook;
mod intent;
mod setup;
mod skills;
mod spawn;
mod turns;

pub use errors::{CommandError, SkillError};
pub use events::BattleEvent;
pub use intent::can_hit;
pub use setup::new_battle;
pub use skills::{CPP_WEAPON, QUEUE_SKILL_BONUS, SKILL_DAMAGE_MULTIPLIER};

use crate::action::{LaneArbiter, MovementArbiter, resolution_order, step_actor};
use crate::env::GameEnv;
use crate::state::{EntityId, Facing, GameState, Skill, TurnPhase};

/// A player input the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    /// Step one tile; facing the other way only turns around.
    Move(Facing),
    Flip,
    Pass,
    /// Queue the weapon in this slot (zero-based).
    QueueWeapon(usize),
    Execute,
    LearnSkill(Skill),
}

/// Game engine that validates commands and drives turn phases.
///
/// Occupancy questions go to the [`MovementArbiter`] the engine owns.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    arbiter: &'a dyn MovementArbiter,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine with the default lane rules.
    pub fn new(state: &'a mut GameState) -> Self {
        Self::with_arbiter(state, &LaneArbiter)
    }

    pub fn with_arbiter(state: &'a mut GameState, arbiter: &'a dyn MovementArbiter) -> Self {
        Self { state, arbiter }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Routes a player command to its handler.
    pub fn apply(
        &mut self,
        env: GameEnv<'_>,
        command: PlayerCommand,
    ) -> Result<Vec<BattleEvent>, CommandError> {
        match command {
            PlayerCommand::Move(direction) => self.move_player(env, direction),
            PlayerCommand::Flip => self.flip_player(env),
            PlayerCommand::Pass => self.pass(env),
            PlayerCommand::QueueWeapon(index) => self.queue_weapon(env, index),
            PlayerCommand::Execute => self.execute_queue(env),
            PlayerCommand::LearnSkill(skill) => self.learn_skill(env, skill),
        }
    }

    /// Queues the weapon in `index`, ending the player phase.
    pub fn queue_weapon(
        &mut self,
        env: GameEnv<'_>,
        index: usize,
    ) -> Result<Vec<BattleEvent>, CommandError> {
        self.ensure_player_turn()?;
        let (config, rng) = (env.config()?, env.rng()?);

        let player = &mut self.state.entities.player;
        player.try_add_weapon_to_sequence(index)?;
        let mut events = vec![BattleEvent::WeaponQueued {
            actor: EntityId::PLAYER,
            weapon: player.weapons[index].name.clone(),
        }];

        self.end_player_turn(env, config, rng, &mut events)?;
        Ok(events)
    }

    /// Steps the player one tile, or turns around when facing away.
    pub fn move_player(
        &mut self,
        env: GameEnv<'_>,
        direction: Facing,
    ) -> Result<Vec<BattleEvent>, CommandError> {
        self.ensure_player_turn()?;
        let (config, rng) = (env.config()?, env.rng()?);

        let outcome = step_actor(
            &mut self.state.entities,
            self.arbiter,
            config,
            EntityId::PLAYER,
            direction,
        )?;
        let mut events = vec![BattleEvent::Moved {
            actor: EntityId::PLAYER,
            outcome,
        }];

        self.end_player_turn(env, config, rng, &mut events)?;
        Ok(events)
    }

    /// Turns the player around in place.
    pub fn flip_player(&mut self, env: GameEnv<'_>) -> Result<Vec<BattleEvent>, CommandError> {
        let facing = self.state.entities.player.facing.flipped();
        self.move_player(env, facing)
    }

    pub fn pass(&mut self, env: GameEnv<'_>) -> Result<Vec<BattleEvent>, CommandError> {
        self.ensure_player_turn()?;
        let (config, rng) = (env.config()?, env.rng()?);

        let mut events = vec![BattleEvent::Passed {
            actor: EntityId::PLAYER,
        }];
        self.end_player_turn(env, config, rng, &mut events)?;
        Ok(events)
    }

    /// Fires the player's action queue, then ends the player phase.
    ///
    /// # Errors
    ///
    /// `CommandError::EmptySequence` if nothing is queued.
    pub fn execute_queue(&mut self, env: GameEnv<'_>) -> Result<Vec<BattleEvent>, CommandError> {
        self.ensure_player_turn()?;
        let (config, rng) = (env.config()?, env.rng()?);

        let player = &mut self.state.entities.player;
        if player.action_sequence.is_empty() {
            return Err(CommandError::EmptySequence);
        }
        let style = player.battle_style;
        let fired = resolution_order(player.execute_sequence(), style);

        let mut events = Vec::new();
        self.resolve_fired(EntityId::PLAYER, fired, config, &mut events);
        if self.state.turn.phase.is_over() {
            return Ok(events);
        }

        self.end_player_turn(env, config, rng, &mut events)?;
        Ok(events)
    }

    fn ensure_player_turn(&self) -> Result<(), CommandError> {
        match self.state.turn.phase {
            TurnPhase::PlayerTurn => Ok(()),
            TurnPhase::EnemyTurn => Err(CommandError::NotPlayerTurn),
            TurnPhase::GameOver(outcome) => Err(CommandError::GameOver(outcome)),
        }
    }
}
