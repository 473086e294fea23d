//! Battle initialization from configuration and templates.

use crate::env::{GameEnv, OracleError};
use crate::state::{
    ActorState, EntitiesState, Facing, GameState, Position, Skill, SkillCategory,
};

/// Name given to the player actor.
const PLAYER_NAME: &str = "Player";

/// Builds the opening state of a battle.
///
/// # Errors
///
/// Returns an `OracleError` for unknown template names, unparsable skill
/// names, or spawn positions off the lane or on an occupied tile.
pub fn new_battle(env: GameEnv<'_>, game_seed: u64) -> Result<GameState, OracleError> {
    let config = env.config()?;
    let weapons = env.weapons()?;
    let monsters = env.monsters()?;
    let loadout = &config.player;

    if !config.in_bounds(loadout.position) {
        return Err(OracleError::InvalidConfig(format!(
            "player position {} is off the lane",
            loadout.position
        )));
    }
    let arsenal = loadout
        .weapons
        .iter()
        .map(|name| weapons.instantiate(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut player = ActorState::player(PLAYER_NAME, Position::new(loadout.position), loadout.health)
        .with_weapons(arsenal)
        .with_sequence_limit(loadout.sequence_limit);
    if let Some(progress) = player.player_state_mut() {
        for (category, points) in &loadout.skill_points {
            let category: SkillCategory = category.parse().map_err(|_| {
                OracleError::InvalidConfig(format!("unknown skill category '{category}'"))
            })?;
            progress.grant_points(category, *points);
        }
        for name in &loadout.available_skills {
            let skill: Skill = name
                .parse()
                .map_err(|_| OracleError::InvalidConfig(format!("unknown skill '{name}'")))?;
            progress.available_skills.insert(skill);
        }
    }

    let player_at = player.position;
    let mut state = GameState::with_seed(game_seed, EntitiesState::new(player, Vec::new()));
    for opening in &config.opening_enemies {
        let template = monsters
            .template(&opening.monster)
            .ok_or_else(|| OracleError::MonsterNotFound(opening.monster.clone()))?;
        let position = Position::new(opening.position);
        if !config.in_bounds(opening.position) || state.entities.is_occupied(position) {
            return Err(OracleError::InvalidConfig(format!(
                "cannot place {} at {position}",
                opening.monster
            )));
        }
        let facing = Facing::towards(position, player_at).unwrap_or_default();
        let id = state.allocate_entity_id();
        let enemy = template.spawn(id, position, facing, weapons)?;
        state.entities.enemies.push(enemy);
    }
    Ok(state)
}
