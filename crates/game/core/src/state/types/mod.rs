pub mod actor;
pub mod common;
pub mod entities;
pub mod status;
pub mod turn;
pub mod weapon;

// Re-export all actor-related types
pub use actor::{
    ActionQueue, ActorKind, ActorState, BaseStats, BattleStyle, DeathHook, EnemyState,
    IntentFlags, IntentPhase, PlayerState, Skill, SkillCategory,
};

// Re-export common types
pub use common::{EntityId, Facing, Position};

// Re-export the roster
pub use entities::EntitiesState;

// Re-export status effects
pub use status::{SIMPLIFIED, STRESS, StatusChange, StatusEffect, StatusEffects, illness_name};

// Re-export turn state
pub use turn::{BattleOutcome, TurnPhase, TurnState};

// Re-export weapons
pub use weapon::{Weapon, WeaponEffect, WeaponKind};
