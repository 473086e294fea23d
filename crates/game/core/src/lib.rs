//! Deterministic battle rules for a one-dimensional lane.
//!
//! `lane-core` defines the canonical rules (weapons, statuses, action queues,
//! combat resolution, enemy intents, turn phases) and exposes pure APIs that
//! the runtime and tools build on. All state mutation flows through
//! [`engine::GameEngine`]; nothing in this crate logs or touches I/O.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    FiredWeapon, LaneArbiter, MoveError, MoveOutcome, MoveResolution, MovementArbiter,
    SequenceError,
};
pub use combat::{Hit, ResolutionNotice, StrikeReport, resolve_strike};
pub use config::{GameConfig, OpeningSpawn, PlayerConfig, StatusRules};
pub use engine::{BattleEvent, CommandError, GameEngine, PlayerCommand, SkillError, new_battle};
pub use env::{
    Env, GameEnv, MonsterOracle, MonsterTemplate, OracleError, PcgRng, RngOracle, WeaponOracle,
    WeaponTemplate,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorKind, ActorState, BaseStats, BattleOutcome, BattleStyle, EnemyState, EntitiesState, EntityId,
    Facing, GameState, IntentFlags, IntentPhase, PlayerState, Position, Skill, SkillCategory,
    StatusChange, StatusEffect, StatusEffects, TurnPhase, TurnState, Weapon, WeaponEffect,
    WeaponKind,
};
