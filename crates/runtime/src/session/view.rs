//! Read-only projections handed to the UI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lane_core::{
    ActorState, BaseStats, BattleStyle, EntityId, Facing, GameState, IntentFlags, Skill,
    SkillCategory, StatusEffect, TurnPhase, Weapon,
};

/// One weapon slot as the character sheet shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSlot {
    /// Hotkey, starting at 1.
    pub hotkey: usize,
    pub name: String,
    pub damage: i32,
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub queued: bool,
}

impl WeaponSlot {
    fn new(index: usize, weapon: &Weapon, actor: &ActorState) -> Self {
        Self {
            hotkey: index + 1,
            name: weapon.name.clone(),
            damage: weapon.damage,
            cooldown: weapon.cooldown,
            current_cooldown: weapon.current_cooldown,
            queued: actor.action_sequence.contains(&index),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }
}

/// Everything the status and skill pages read about the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub position: i32,
    pub facing: Facing,
    pub sequence_limit: usize,
    pub damage_multiplier: f32,
    pub battle_style: BattleStyle,
    pub statuses: Vec<StatusEffect>,
    pub skill_points: BTreeMap<SkillCategory, u32>,
    pub learned_skills: Vec<Skill>,
    pub available_skills: Vec<Skill>,
    pub base_stats: BaseStats,
    pub swap_cooldown: u32,
    pub weapons: Vec<WeaponSlot>,
    /// Queued weapon names in insertion order.
    pub queued: Vec<String>,
}

impl PlayerData {
    pub fn from_state(state: &GameState) -> Self {
        let player = state.player();
        let progress = player.player_state().cloned().unwrap_or_default();
        Self {
            name: player.name.clone(),
            health: player.health,
            max_health: player.max_health,
            position: player.position.0,
            facing: player.facing,
            sequence_limit: player.sequence_limit,
            damage_multiplier: player.damage_multiplier,
            battle_style: player.battle_style,
            statuses: player.status.iter().cloned().collect(),
            skill_points: progress.skill_points,
            learned_skills: progress.learned_skills.into_iter().collect(),
            available_skills: progress.available_skills.into_iter().collect(),
            base_stats: progress.base_stats,
            swap_cooldown: progress.swap_cooldown,
            weapons: player
                .weapons
                .iter()
                .enumerate()
                .map(|(index, weapon)| WeaponSlot::new(index, weapon, player))
                .collect(),
            queued: player.queued_weapon_names().map(str::to_string).collect(),
        }
    }
}

/// One combatant on the lane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub id: EntityId,
    pub name: String,
    pub position: i32,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,
    /// Telegraph flags; `None` for the player.
    pub intent: Option<IntentFlags>,
    pub queued: Vec<String>,
    pub statuses: Vec<String>,
}

impl ActorView {
    pub(super) fn new(actor: &ActorState) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            position: actor.position.0,
            facing: actor.facing,
            health: actor.health,
            max_health: actor.max_health,
            intent: actor.enemy_state().map(|enemy| enemy.flags),
            queued: actor.queued_weapon_names().map(str::to_string).collect(),
            statuses: actor.status.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Snapshot of the battle scene for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneView {
    /// Number of tiles on the lane.
    pub tiles: usize,
    pub phase: TurnPhase,
    pub turn: u32,
    pub victory_turn: u32,
    /// Living actors, ordered by position.
    pub actors: Vec<ActorView>,
    pub messages: Vec<String>,
}

impl SceneView {
    pub fn actor_at(&self, position: i32) -> Option<&ActorView> {
        self.actors.iter().find(|actor| actor.position == position)
    }

    pub fn player(&self) -> Option<&ActorView> {
        self.actors.iter().find(|actor| actor.id.is_player())
    }
}

/// Receives one scene per `draw` call.
pub trait Renderer {
    fn render(&mut self, scene: &SceneView);
}
