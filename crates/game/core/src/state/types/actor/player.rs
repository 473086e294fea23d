//! Player-only actor data.

use std::collections::{BTreeMap, BTreeSet};

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Research track a skill point belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkillCategory {
    Tech,
    Lang,
    Algo,
    /// Points spent on combat skills.
    Skill,
}

/// Combat skills the player can learn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    /// Raises the damage multiplier to 1.2.
    #[strum(serialize = "Hello world")]
    HelloWorld,
    /// Unlocks the `C++` weapon.
    #[strum(serialize = "C++")]
    Cpp,
    /// Switches to LIFO resolution and raises the damage multiplier.
    #[strum(serialize = "stack")]
    Stack,
    /// Two more queue slots.
    #[strum(serialize = "queue")]
    Queue,
}

/// S.T.U.P.I.D. attributes shown on the character sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub speech: u32,
    pub thoughtfulness: u32,
    pub understanding: u32,
    pub perception: u32,
    pub intelligence: u32,
    pub diligence: u32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            speech: 20,
            thoughtfulness: 20,
            understanding: 20,
            perception: 20,
            intelligence: 20,
            diligence: 20,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub skill_points: BTreeMap<SkillCategory, u32>,
    /// Turns left before the player may swap places again.
    pub swap_cooldown: u32,
    pub base_stats: BaseStats,
    pub learned_skills: BTreeSet<Skill>,
    pub available_skills: BTreeSet<Skill>,
}

impl PlayerState {
    pub fn points(&self, category: SkillCategory) -> u32 {
        self.skill_points.get(&category).copied().unwrap_or(0)
    }

    pub fn grant_points(&mut self, category: SkillCategory, amount: u32) {
        *self.skill_points.entry(category).or_insert(0) += amount;
    }

    /// Deducts one point; returns false if none is left.
    pub fn spend_point(&mut self, category: SkillCategory) -> bool {
        match self.skill_points.get_mut(&category) {
            Some(points) if *points > 0 => {
                *points -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn tick_swap_cooldown(&mut self) {
        self.swap_cooldown = self.swap_cooldown.saturating_sub(1);
    }
}
