//! Action queue building and execution.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorState, BattleStyle, Weapon};

/// Reasons a weapon cannot be added to an action queue.
///
/// Checks run in declaration order; the first failing one is reported.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceError {
    #[error("no weapon in slot {index}")]
    InvalidIndex { index: usize },

    #[error("{name} is already queued")]
    AlreadyQueued { name: String },

    #[error("action queue is full ({limit} slots)")]
    SequenceFull { limit: usize },

    #[error("{name} is cooling down ({remaining} turns left)")]
    Cooling { name: String, remaining: u32 },
}

impl GameError for SequenceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SequenceError::InvalidIndex { .. } => ErrorSeverity::Validation,
            SequenceError::AlreadyQueued { .. }
            | SequenceError::SequenceFull { .. }
            | SequenceError::Cooling { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SequenceError::InvalidIndex { .. } => "SEQUENCE_INVALID_INDEX",
            SequenceError::AlreadyQueued { .. } => "SEQUENCE_ALREADY_QUEUED",
            SequenceError::SequenceFull { .. } => "SEQUENCE_FULL",
            SequenceError::Cooling { .. } => "SEQUENCE_COOLING",
        }
    }
}

/// A weapon that fired during queue execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiredWeapon {
    /// Slot in the owner's weapon list.
    pub index: usize,
    /// Snapshot of the weapon right after it was used.
    pub weapon: Weapon,
}

impl ActorState {
    /// Appends the weapon in slot `index` to the action queue.
    ///
    /// On error the queue is left untouched.
    pub fn try_add_weapon_to_sequence(&mut self, index: usize) -> Result<(), SequenceError> {
        let weapon = self
            .weapons
            .get(index)
            .ok_or(SequenceError::InvalidIndex { index })?;

        if weapon.unique_in_sequence && self.action_sequence.contains(&index) {
            return Err(SequenceError::AlreadyQueued {
                name: weapon.name.clone(),
            });
        }

        let full = SequenceError::SequenceFull {
            limit: self.sequence_limit,
        };
        if self.action_sequence.len() >= self.sequence_limit {
            return Err(full);
        }

        if !weapon.is_ready() {
            return Err(SequenceError::Cooling {
                name: weapon.name.clone(),
                remaining: weapon.current_cooldown,
            });
        }

        self.action_sequence.try_push(index).map_err(|_| full)
    }

    /// Drains the action queue in insertion order, using each weapon.
    ///
    /// Weapons that refuse to fire (still cooling) are skipped. The queue is
    /// always empty afterwards.
    pub fn execute_sequence(&mut self) -> Vec<FiredWeapon> {
        let queued: Vec<usize> = self.action_sequence.drain(..).collect();
        let mut fired = Vec::with_capacity(queued.len());
        for index in queued {
            let Some(weapon) = self.weapons.get_mut(index) else {
                continue;
            };
            if weapon.use_weapon() {
                fired.push(FiredWeapon {
                    index,
                    weapon: weapon.clone(),
                });
            }
        }
        fired
    }
}

/// Orders executed weapons for resolution according to the battle style.
pub fn resolution_order(mut fired: Vec<FiredWeapon>, style: BattleStyle) -> Vec<FiredWeapon> {
    if style == BattleStyle::Stack {
        fired.reverse();
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, Position};

    fn armed_actor() -> ActorState {
        ActorState::player("hero", Position::new(2), 100)
            .with_weapons(vec![
                Weapon::new("Pointer Sword", 5, vec![1], 1).repeatable(),
                Weapon::new("Template Greatsword", 10, vec![-1, 1], 4),
                Weapon::new("Snake Staff", 15, vec![2, 4, 6, 8], 8),
            ])
            .with_sequence_limit(3)
    }

    #[test]
    fn unique_weapon_cannot_be_queued_twice() {
        let mut actor = armed_actor();
        actor.try_add_weapon_to_sequence(1).unwrap();
        assert_eq!(
            actor.try_add_weapon_to_sequence(1),
            Err(SequenceError::AlreadyQueued {
                name: "Template Greatsword".into()
            })
        );
        assert_eq!(actor.action_sequence.as_slice(), &[1]);
    }

    #[test]
    fn repeatable_weapon_fills_queue_up_to_limit() {
        let mut actor = armed_actor();
        for _ in 0..3 {
            actor.try_add_weapon_to_sequence(0).unwrap();
        }
        assert_eq!(
            actor.try_add_weapon_to_sequence(0),
            Err(SequenceError::SequenceFull { limit: 3 })
        );
        assert_eq!(actor.action_sequence.len(), 3);
    }

    #[test]
    fn queue_never_exceeds_limit() {
        let mut actor = armed_actor();
        for index in [0, 1, 1, 2, 0, 7, 2, 0] {
            let _ = actor.try_add_weapon_to_sequence(index);
            assert!(actor.action_sequence.len() <= actor.sequence_limit);
        }
    }

    #[test]
    fn invalid_index_and_cooling_are_rejected() {
        let mut actor = armed_actor();
        assert_eq!(
            actor.try_add_weapon_to_sequence(9),
            Err(SequenceError::InvalidIndex { index: 9 })
        );
        actor.weapons[2].use_weapon();
        assert_eq!(
            actor.try_add_weapon_to_sequence(2),
            Err(SequenceError::Cooling {
                name: "Snake Staff".into(),
                remaining: 8
            })
        );
        assert!(actor.action_sequence.is_empty());
    }

    #[test]
    fn execution_fires_in_order_and_clears_queue() {
        let mut actor = armed_actor();
        actor.try_add_weapon_to_sequence(1).unwrap();
        actor.try_add_weapon_to_sequence(0).unwrap();
        actor.try_add_weapon_to_sequence(0).unwrap();

        let fired = actor.execute_sequence();
        // The second Pointer Sword use finds the weapon cooling and is skipped.
        let names: Vec<_> = fired.iter().map(|f| f.weapon.name.as_str()).collect();
        assert_eq!(names, ["Template Greatsword", "Pointer Sword"]);
        assert!(actor.action_sequence.is_empty());
        assert_eq!(actor.weapons[1].current_cooldown, 4);
    }

    #[test]
    fn stack_style_reverses_resolution() {
        let mut actor = armed_actor();
        actor.try_add_weapon_to_sequence(0).unwrap();
        actor.try_add_weapon_to_sequence(2).unwrap();
        let fired = resolution_order(actor.execute_sequence(), BattleStyle::Stack);
        let indices: Vec<_> = fired.iter().map(|f| f.index).collect();
        assert_eq!(indices, [2, 0]);
    }

    #[test]
    fn enemy_queue_uses_same_rules() {
        let mut enemy = ActorState::enemy(EntityId(1), "Bug", Position::new(5), 30, vec![])
            .with_weapons(vec![Weapon::new("Claw", 10, vec![1], 0)])
            .with_sequence_limit(1);
        enemy.try_add_weapon_to_sequence(0).unwrap();
        assert!(matches!(
            enemy.try_add_weapon_to_sequence(0),
            Err(SequenceError::AlreadyQueued { .. })
        ));
    }
}
