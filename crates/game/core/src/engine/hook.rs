//! Death hooks dispatched on the actor kind.

use crate::state::{BattleOutcome, DeathHook, TurnPhase};

use super::{BattleEvent, GameEngine};

impl<'a> GameEngine<'a> {
    /// Marks every actor at zero health dead and runs its death hook.
    ///
    /// Enemies leave the roster; the player ends the battle at once.
    pub(super) fn settle_casualties(&mut self, events: &mut Vec<BattleEvent>) {
        let mut player_down = false;
        for actor in self.state.entities.all_actors_mut() {
            if !actor.alive || actor.health > 0 {
                continue;
            }
            events.push(BattleEvent::Defeated {
                actor: actor.id,
                name: actor.name.clone(),
            });
            match actor.die() {
                DeathHook::PlayerDefeated => player_down = true,
                DeathHook::EnemyRemoved => {}
            }
        }
        self.state.entities.remove_dead_enemies();

        if player_down && !self.state.turn.phase.is_over() {
            self.set_phase(TurnPhase::GameOver(BattleOutcome::Defeat), events);
        }
    }
}
