//! Enemy intent state machine.
//!
//! Each enemy advances exactly one step per enemy phase:
//!
//! ```text
//! adding --(step queued)--> waiting --(hit lined up)--> ready_to_attack
//!   ^                        |   ^                            |
//!   |                        v   | (flip, or telegraph move    |
//!   |                        +---+  then step toward player)  |
//!   +----------------------(queue fired)----------------------+
//! ```
//!
//! The flags double as the telegraph the player sees, so every attack and
//! every move is visible for at least one full turn before it happens.

use crate::action::{SequenceError, resolution_order, step_actor};
use crate::combat::{hit_positions, line_is_clear};
use crate::config::GameConfig;
use crate::state::{
    EnemyState, EntitiesState, EntityId, Facing, IntentFlags, IntentPhase, WeaponEffect,
};

use super::{BattleEvent, GameEngine};

/// Returns true if one of `id`'s queued weapons would reach the player from
/// where the enemy stands now.
///
/// Melee-like weapons need the player on a pattern tile or adjacent, with
/// `meleeMove` measured from the tile it would advance to first. Ranged, dash
/// and fireball weapons need a clear line within range. The enemy must be
/// facing the player either way.
pub fn can_hit(entities: &EntitiesState, id: EntityId, config: &GameConfig) -> bool {
    let Some(enemy) = entities.actor(id) else {
        return false;
    };
    let player = &entities.player;
    if !player.is_alive() || !enemy.position.is_ahead(player.position, enemy.facing) {
        return false;
    }

    let distance = enemy.position.distance(player.position);
    let clear = line_is_clear(entities, enemy.position, player.position);
    enemy
        .action_sequence
        .iter()
        .filter_map(|&index| enemy.weapons.get(index))
        .any(|weapon| match weapon.effect() {
            WeaponEffect::Melee | WeaponEffect::Roll => {
                distance == 1
                    || hit_positions(enemy.position, enemy.facing, &weapon.pattern, config)
                        .contains(&player.position)
            }
            WeaponEffect::MeleeMove => {
                let ahead = enemy.position.step(enemy.facing, 1);
                let from = if config.in_bounds(ahead.0) && !entities.is_occupied(ahead) {
                    ahead
                } else {
                    enemy.position
                };
                from.distance(player.position) == 1
                    || hit_positions(from, enemy.facing, &weapon.pattern, config)
                        .contains(&player.position)
            }
            WeaponEffect::Ranged { range } | WeaponEffect::Dash { range } => {
                clear && distance <= range
            }
            WeaponEffect::Fireball { .. } => clear && distance <= weapon.effective_range(),
        })
}

fn enemy_is_moving(entities: &EntitiesState, id: EntityId) -> bool {
    entities
        .actor(id)
        .and_then(|enemy| enemy.enemy_state())
        .is_some_and(EnemyState::is_moving)
}

impl<'a> GameEngine<'a> {
    /// Advances one enemy's intent machine by a single step.
    pub(super) fn advance_intent(
        &mut self,
        id: EntityId,
        config: &GameConfig,
        events: &mut Vec<BattleEvent>,
    ) {
        let phase = self
            .state
            .entities
            .actor(id)
            .filter(|enemy| enemy.is_alive())
            .and_then(|enemy| enemy.enemy_state())
            .map(|intent| intent.phase());

        match phase {
            Some(IntentPhase::Adding) => self.intent_add(id, events),
            Some(IntentPhase::Waiting) => self.intent_wait(id, config, events),
            Some(IntentPhase::ReadyToAttack) => self.intent_attack(id, config, events),
            None => {}
        }
    }

    /// Queues the next weapon of the current intent step.
    fn intent_add(&mut self, id: EntityId, events: &mut Vec<BattleEvent>) {
        let Some(enemy) = self.state.entities.actor_mut(id) else {
            return;
        };
        let Some(name) = enemy
            .enemy_state()
            .and_then(|intent| intent.next_weapon())
            .map(str::to_owned)
        else {
            events.push(BattleEvent::IntentStalled {
                actor: id,
                reason: "empty intent script".into(),
            });
            return;
        };

        let queued = match enemy.weapon_index(&name) {
            Some(index) => enemy.try_add_weapon_to_sequence(index),
            None => Err(SequenceError::InvalidIndex {
                index: enemy.weapons.len(),
            }),
        };
        match queued {
            Ok(()) => events.push(BattleEvent::WeaponQueued {
                actor: id,
                weapon: name,
            }),
            // Keep telegraphing the same step until the weapon is ready.
            Err(SequenceError::Cooling { .. }) => {
                if let Some(intent) = enemy.enemy_state() {
                    events.push(BattleEvent::Telegraph {
                        actor: id,
                        flags: intent.flags,
                    });
                }
                return;
            }
            Err(err) => events.push(BattleEvent::IntentStalled {
                actor: id,
                reason: format!("{name}: {err}"),
            }),
        }

        let Some(intent) = enemy.enemy_state_mut() else {
            return;
        };
        if intent.advance_progress() {
            intent.set_phase(IntentPhase::Waiting);
            events.push(BattleEvent::Telegraph {
                actor: id,
                flags: intent.flags,
            });
        }
    }

    /// Lines up a hit: flip toward the player, or telegraph and take a step.
    fn intent_wait(&mut self, id: EntityId, config: &GameConfig, events: &mut Vec<BattleEvent>) {
        let player_at = self.state.entities.player.position;
        let Some(enemy) = self.state.entities.actor(id) else {
            return;
        };
        if enemy.action_sequence.is_empty() {
            self.set_intent(id, IntentPhase::Adding, events);
            return;
        }

        if can_hit(&self.state.entities, id, config) {
            self.set_intent(id, IntentPhase::ReadyToAttack, events);
            return;
        }

        let toward = Facing::towards(enemy.position, player_at);
        if let Some(toward) = toward
            && toward != enemy.facing
        {
            if let Ok(outcome) =
                step_actor(&mut self.state.entities, self.arbiter, config, id, toward)
            {
                events.push(BattleEvent::Moved { actor: id, outcome });
            }
            if can_hit(&self.state.entities, id, config) {
                self.set_intent(id, IntentPhase::ReadyToAttack, events);
            } else if enemy_is_moving(&self.state.entities, id) {
                // A move telegraphed the other way no longer applies.
                self.update_intent(id, events, |intent| intent.flags.remove(IntentFlags::MOVING));
            }
            return;
        }

        if !enemy_is_moving(&self.state.entities, id) {
            self.update_intent(id, events, |intent| intent.flags.insert(IntentFlags::MOVING));
            return;
        }

        let Some(direction) = toward else {
            self.update_intent(id, events, |intent| intent.flags.remove(IntentFlags::MOVING));
            return;
        };
        match step_actor(&mut self.state.entities, self.arbiter, config, id, direction) {
            Ok(outcome) => events.push(BattleEvent::Moved { actor: id, outcome }),
            Err(err) => events.push(BattleEvent::IntentStalled {
                actor: id,
                reason: err.to_string(),
            }),
        }
        self.update_intent(id, events, |intent| intent.flags.remove(IntentFlags::MOVING));
    }

    /// Fires the queued sequence and restarts the cycle.
    fn intent_attack(&mut self, id: EntityId, config: &GameConfig, events: &mut Vec<BattleEvent>) {
        let Some(enemy) = self.state.entities.actor_mut(id) else {
            return;
        };
        let style = enemy.battle_style;
        let fired = resolution_order(enemy.execute_sequence(), style);
        if let Some(intent) = enemy.enemy_state_mut() {
            intent.set_phase(IntentPhase::Adding);
        }
        self.resolve_fired(id, fired, config, events);
    }

    fn set_intent(&mut self, id: EntityId, phase: IntentPhase, events: &mut Vec<BattleEvent>) {
        self.update_intent(id, events, |intent| intent.set_phase(phase));
    }

    /// Applies `update` to the enemy's intent and publishes the new flags.
    fn update_intent(
        &mut self,
        id: EntityId,
        events: &mut Vec<BattleEvent>,
        update: impl FnOnce(&mut EnemyState),
    ) {
        let Some(intent) = self
            .state
            .entities
            .actor_mut(id)
            .and_then(|enemy| enemy.enemy_state_mut())
        else {
            return;
        };
        update(intent);
        events.push(BattleEvent::Telegraph {
            actor: id,
            flags: intent.flags,
        });
    }
}
