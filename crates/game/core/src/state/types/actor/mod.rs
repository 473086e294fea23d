//! Actor-related state types.
//!
//! Every combatant shares the fields of [`ActorState`]; what differs between
//! the player and enemies lives in the [`ActorKind`] tag:
//! - PlayerState: skill points, swap cooldown, learned skills
//! - EnemyState: intent script and telegraph flags

pub mod enemy;
pub mod player;

use arrayvec::ArrayVec;

pub use enemy::{EnemyState, IntentFlags, IntentPhase};
pub use player::{BaseStats, PlayerState, Skill, SkillCategory};

use super::status::{StatusEffect, StatusEffects};
use super::weapon::Weapon;
use super::{EntityId, Facing, Position};
use crate::config::{GameConfig, StatusRules};

/// Order in which an executed action queue resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStyle {
    /// First queued, first resolved.
    #[default]
    Queue,
    /// Last queued, first resolved.
    Stack,
}

/// Kind-specific actor data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player(PlayerState),
    Enemy(EnemyState),
}

/// What must happen after an actor's health reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathHook {
    /// The battle is lost.
    PlayerDefeated,
    /// The enemy leaves the roster.
    EnemyRemoved,
}

/// Action queue storage; `sequence_limit` bounds the usable length.
pub type ActionQueue = ArrayVec<usize, { GameConfig::MAX_SEQUENCE_SLOTS }>;

/// Complete combatant state.
///
/// # Invariants
///
/// - `action_sequence.len() <= sequence_limit`
/// - a `unique_in_sequence` weapon index appears at most once in `action_sequence`
/// - `position` stays within the lane bounds of the owning battle
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,

    // === Action queue ===
    /// Queued weapon indices, in insertion order.
    pub action_sequence: ActionQueue,
    pub sequence_limit: usize,
    pub battle_style: BattleStyle,

    pub damage_multiplier: f32,
    pub status: StatusEffects,
    /// Weapons in hotkey order; queue entries index into this list.
    pub weapons: Vec<Weapon>,

    pub alive: bool,
    pub kind: ActorKind,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        health: i32,
        kind: ActorKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            facing: Facing::Right,
            health,
            max_health: health,
            action_sequence: ArrayVec::new(),
            sequence_limit: 4,
            battle_style: BattleStyle::Queue,
            damage_multiplier: 1.0,
            status: StatusEffects::empty(),
            weapons: Vec::new(),
            alive: true,
            kind,
        }
    }

    /// Creates the player actor with default player data.
    pub fn player(name: impl Into<String>, position: Position, health: i32) -> Self {
        Self::new(
            EntityId::PLAYER,
            name,
            position,
            health,
            ActorKind::Player(PlayerState::default()),
        )
    }

    /// Creates an enemy actor spawned from the named template.
    pub fn enemy(
        id: EntityId,
        template: impl Into<String>,
        position: Position,
        health: i32,
        intents: Vec<Vec<String>>,
    ) -> Self {
        let template = template.into();
        Self::new(
            id,
            template.clone(),
            position,
            health,
            ActorKind::Enemy(EnemyState::new(template, intents)),
        )
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_weapons(mut self, weapons: Vec<Weapon>) -> Self {
        self.weapons = weapons;
        self
    }

    pub fn with_sequence_limit(mut self, limit: usize) -> Self {
        self.set_sequence_limit(limit);
        self
    }

    pub fn with_damage_multiplier(mut self, multiplier: f32) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    /// Sets the queue limit, clamped to the queue capacity.
    pub fn set_sequence_limit(&mut self, limit: usize) {
        self.sequence_limit = limit.min(GameConfig::MAX_SEQUENCE_SLOTS);
    }

    // ========================================================================
    // Kind helpers
    // ========================================================================

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, ActorKind::Enemy(_))
    }

    /// Player and enemies oppose each other; enemies do not oppose enemies.
    #[inline]
    pub fn opposes(&self, other: &ActorState) -> bool {
        self.is_player() != other.is_player()
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.kind {
            ActorKind::Player(state) => Some(state),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn player_state_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            ActorKind::Player(state) => Some(state),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn enemy_state(&self) -> Option<&EnemyState> {
        match &self.kind {
            ActorKind::Enemy(state) => Some(state),
            ActorKind::Player(_) => None,
        }
    }

    pub fn enemy_state_mut(&mut self) -> Option<&mut EnemyState> {
        match &mut self.kind {
            ActorKind::Enemy(state) => Some(state),
            ActorKind::Player(_) => None,
        }
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Quick check if actor is still in the fight.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive && self.health > 0
    }

    /// Damage this actor deals with `weapon`: `floor(damage * multiplier)`.
    pub fn damage_for(&self, weapon: &Weapon) -> i32 {
        (weapon.damage as f32 * self.damage_multiplier).floor() as i32
    }

    /// Reduces health (floored at zero) and applies the standard damage debuff.
    ///
    /// Returns the damage actually applied.
    pub fn take_damage(&mut self, amount: i32, rules: &StatusRules) -> i32 {
        let amount = amount.max(0);
        let before = self.health;
        self.health = (self.health - amount).max(0);
        if amount > 0 {
            self.status.add(StatusEffect::simplified(rules));
        }
        before - self.health
    }

    /// Marks the actor dead and reports which post-death hook applies.
    pub fn die(&mut self) -> DeathHook {
        self.alive = false;
        self.action_sequence.clear();
        match self.kind {
            ActorKind::Player(_) => DeathHook::PlayerDefeated,
            ActorKind::Enemy(_) => DeathHook::EnemyRemoved,
        }
    }

    // ========================================================================
    // Turn-end bookkeeping
    // ========================================================================

    /// Advances every weapon cooldown by one turn.
    pub fn update_cooldowns(&mut self) {
        for weapon in &mut self.weapons {
            weapon.update_cooldown();
        }
    }

    /// Index of the first weapon with the given name.
    pub fn weapon_index(&self, name: &str) -> Option<usize> {
        self.weapons.iter().position(|w| w.name == name)
    }

    /// Names of queued weapons in insertion order.
    pub fn queued_weapon_names(&self) -> impl Iterator<Item = &str> {
        self.action_sequence
            .iter()
            .filter_map(|&index| self.weapons.get(index))
            .map(|weapon| weapon.name.as_str())
    }
}
