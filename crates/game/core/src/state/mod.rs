//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe combatants and turn
//! bookkeeping. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
pub mod types;

pub use types::{
    ActionQueue, ActorKind, ActorState, BaseStats, BattleOutcome, BattleStyle, DeathHook,
    EnemyState, EntitiesState, EntityId, Facing, IntentFlags, IntentPhase, PlayerState, Position,
    SIMPLIFIED, STRESS, Skill, SkillCategory, StatusChange, StatusEffect, StatusEffects,
    TurnPhase, TurnState, Weapon, WeaponEffect, WeaponKind, illness_name,
};

/// Canonical snapshot of the deterministic battle state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at battle start and never modified.
    /// Combined with `turn.nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 is reserved for the player.
    next_entity_id: u32,

    pub turn: TurnState,
    pub entities: EntitiesState,
}

impl GameState {
    /// Creates a fresh state around an existing roster.
    ///
    /// Enemy ids already present in `entities` are never handed out again.
    pub fn with_seed(game_seed: u64, entities: EntitiesState) -> Self {
        let next_entity_id = entities
            .enemies
            .iter()
            .map(|enemy| enemy.id.0)
            .max()
            .unwrap_or(EntityId::PLAYER.0)
            .saturating_add(1);
        Self {
            game_seed,
            next_entity_id,
            turn: TurnState::new(),
            entities,
        }
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::PLAYER.0 {
            self.next_entity_id += 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    #[inline]
    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut ActorState {
        &mut self.entities.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_skip_existing_enemies() {
        let player = ActorState::player("hero", Position::new(2), 100);
        let enemy = ActorState::enemy(EntityId(4), "Bug", Position::new(6), 30, vec![]);
        let mut state = GameState::with_seed(7, EntitiesState::new(player, vec![enemy]));

        assert_eq!(state.allocate_entity_id(), EntityId(5));
        assert_eq!(state.allocate_entity_id(), EntityId(6));
    }

    #[test]
    fn first_enemy_id_is_never_the_player() {
        let player = ActorState::player("hero", Position::new(2), 100);
        let mut state = GameState::with_seed(0, EntitiesState::new(player, vec![]));
        assert_eq!(state.allocate_entity_id(), EntityId(1));
    }
}
