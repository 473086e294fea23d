use crate::action::FiredWeapon;
use crate::combat::resolve_strike;
use crate::config::GameConfig;
use crate::env::{GameEnv, RngOracle, compute_seed, context};
use crate::state::{BattleOutcome, EntityId, TurnPhase};

use super::{BattleEvent, CommandError, GameEngine};

/// Turn phase methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Completed player turns.
    pub fn turn_count(&self) -> u32 {
        self.state.turn.turn_count
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.turn.phase
    }

    /// Runs every living enemy once, in roster order, then hands the turn
    /// back to the player.
    ///
    /// Stops early on defeat.
    pub fn run_enemy_phase(&mut self, env: GameEnv<'_>) -> Result<Vec<BattleEvent>, CommandError> {
        match self.state.turn.phase {
            TurnPhase::EnemyTurn => {}
            TurnPhase::PlayerTurn => return Err(CommandError::NotEnemyTurn),
            TurnPhase::GameOver(outcome) => return Err(CommandError::GameOver(outcome)),
        }
        let (config, rng) = (env.config()?, env.rng()?);

        let mut events = Vec::new();
        for id in self.state.entities.living_enemy_ids() {
            self.advance_intent(id, config, &mut events);
            self.state.turn.nonce += 1;
            if self.state.turn.phase.is_over() {
                return Ok(events);
            }
        }

        for id in self.state.entities.living_enemy_ids() {
            if let Some(enemy) = self.state.entities.actor_mut(id) {
                enemy.update_cooldowns();
            }
            self.tick_statuses(id, config, rng, &mut events);
        }
        self.settle_casualties(&mut events);
        if self.state.turn.phase.is_over() || self.check_victory(config, &mut events) {
            return Ok(events);
        }

        self.set_phase(TurnPhase::PlayerTurn, &mut events);
        Ok(events)
    }

    /// Player turn-end bookkeeping followed by the flip to the enemy phase.
    pub(super) fn end_player_turn(
        &mut self,
        env: GameEnv<'_>,
        config: &GameConfig,
        rng: &dyn RngOracle,
        events: &mut Vec<BattleEvent>,
    ) -> Result<(), CommandError> {
        let player = &mut self.state.entities.player;
        player.update_cooldowns();
        if let Some(progress) = player.player_state_mut() {
            progress.tick_swap_cooldown();
        }
        self.tick_statuses(EntityId::PLAYER, config, rng, events);

        self.state.turn.turn_count += 1;
        if self.check_victory(config, events) {
            return Ok(());
        }

        let turn = self.state.turn.turn_count;
        if config.spawn_interval > 0 && turn % config.spawn_interval == 0 {
            self.spawn_wave(env, events)?;
        }

        self.set_phase(TurnPhase::EnemyTurn, events);
        self.state.turn.nonce += 1;
        Ok(())
    }

    /// Resolves fired weapons one at a time, settling casualties after each.
    pub(super) fn resolve_fired(
        &mut self,
        wielder: EntityId,
        fired: Vec<FiredWeapon>,
        config: &GameConfig,
        events: &mut Vec<BattleEvent>,
    ) {
        for FiredWeapon { weapon, .. } in fired {
            let alive = self
                .state
                .entities
                .actor(wielder)
                .is_some_and(|actor| actor.is_alive());
            if !alive {
                break;
            }

            let report = resolve_strike(&mut self.state.entities, config, wielder, &weapon);
            events.push(BattleEvent::Strike(report));
            self.settle_casualties(events);
            if self.state.turn.phase.is_over() {
                break;
            }
        }
    }

    /// Ages the statuses of one actor, rolling stress conversion from the RNG.
    fn tick_statuses(
        &mut self,
        id: EntityId,
        config: &GameConfig,
        rng: &dyn RngOracle,
        events: &mut Vec<BattleEvent>,
    ) {
        let game_seed = self.state.game_seed;
        let nonce = self.state.turn.nonce;
        let Some(actor) = self.state.entities.actor_mut(id) else {
            return;
        };

        let mut roll_index = 0;
        let changes = actor.status.tick(&config.status, || {
            let seed = compute_seed(game_seed, nonce, id.0, context::STATUS_TICK + roll_index);
            roll_index += 1;
            rng.unit(seed)
        });
        events.extend(
            changes
                .into_iter()
                .map(|change| BattleEvent::Status { actor: id, change }),
        );
    }

    /// Victory: the board is clear and enough turns have passed.
    fn check_victory(&mut self, config: &GameConfig, events: &mut Vec<BattleEvent>) -> bool {
        let cleared = self.state.entities.living_enemy_count() == 0;
        if cleared && self.state.turn.turn_count >= config.victory_turn {
            self.set_phase(TurnPhase::GameOver(BattleOutcome::Victory), events);
            return true;
        }
        false
    }

    pub(super) fn set_phase(&mut self, phase: TurnPhase, events: &mut Vec<BattleEvent>) {
        self.state.turn.phase = phase;
        events.push(BattleEvent::PhaseChanged {
            phase,
            turn: self.state.turn.turn_count,
        });
    }
}
