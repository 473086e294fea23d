//! Learnable player skills.

use crate::env::GameEnv;
use crate::state::{ActorState, BattleStyle, Skill, SkillCategory, TurnPhase};

use super::{BattleEvent, CommandError, GameEngine, SkillError};

/// Damage multiplier granted by `Hello world` and `stack`.
pub const SKILL_DAMAGE_MULTIPLIER: f32 = 1.2;
/// Extra queue slots granted by `queue`.
pub const QUEUE_SKILL_BONUS: usize = 2;
/// Weapon unlocked by `C++`.
pub const CPP_WEAPON: &str = "C++";

impl<'a> GameEngine<'a> {
    /// Spends one skill point to learn `skill`.
    ///
    /// Allowed in any phase before the battle ends; does not end the turn.
    pub fn learn_skill(
        &mut self,
        env: GameEnv<'_>,
        skill: Skill,
    ) -> Result<Vec<BattleEvent>, CommandError> {
        if let TurnPhase::GameOver(outcome) = self.state.turn.phase {
            return Err(CommandError::GameOver(outcome));
        }
        let unlocked = match skill {
            Skill::Cpp => Some(env.weapons()?.instantiate(CPP_WEAPON)?),
            _ => None,
        };

        let player = &mut self.state.entities.player;
        let progress = player
            .player_state_mut()
            .ok_or(SkillError::NotAvailable(skill))?;
        if progress.learned_skills.contains(&skill) {
            return Err(SkillError::AlreadyLearned(skill).into());
        }
        if !progress.available_skills.contains(&skill) {
            return Err(SkillError::NotAvailable(skill).into());
        }
        if !progress.spend_point(SkillCategory::Skill) {
            return Err(SkillError::NoPoints.into());
        }
        progress.available_skills.remove(&skill);
        progress.learned_skills.insert(skill);

        apply_skill(player, skill);
        if let Some(weapon) = unlocked
            && player.weapon_index(&weapon.name).is_none()
        {
            player.weapons.push(weapon);
        }
        Ok(vec![BattleEvent::SkillLearned { skill }])
    }
}

fn apply_skill(player: &mut ActorState, skill: Skill) {
    match skill {
        Skill::HelloWorld => player.damage_multiplier = SKILL_DAMAGE_MULTIPLIER,
        Skill::Stack => {
            player.battle_style = BattleStyle::Stack;
            player.damage_multiplier = SKILL_DAMAGE_MULTIPLIER;
        }
        Skill::Queue => player.set_sequence_limit(player.sequence_limit + QUEUE_SKILL_BONUS),
        Skill::Cpp => {}
    }
}
