//! Immutable template registries.
//!
//! A [`ContentLibrary`] is built once, cross-checked, and never written
//! afterwards. Every name a monster, the player loadout or a skill refers to
//! must resolve here, so the engine never meets a dangling reference.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use lane_core::engine::CPP_WEAPON;
use lane_core::{
    GameConfig, GameEnv, MonsterTemplate, RngOracle, Skill, SkillCategory, WeaponTemplate,
};

use crate::loaders::{ConfigLoader, LoadResult, MonsterLoader, WeaponLoader};
use crate::{DEFAULT_CONFIG, MONSTER_LIBRARY, WEAPON_LIBRARY};

/// Weapon and monster templates plus the rules they were validated against.
#[derive(Clone, Debug)]
pub struct ContentLibrary {
    pub weapons: HashMap<String, WeaponTemplate>,
    pub monsters: HashMap<String, MonsterTemplate>,
    pub config: GameConfig,
}

static EMBEDDED: OnceLock<ContentLibrary> = OnceLock::new();

/// The library compiled into the crate, parsed on first use.
pub fn embedded() -> LoadResult<&'static ContentLibrary> {
    if let Some(library) = EMBEDDED.get() {
        return Ok(library);
    }
    let library = ContentLibrary::parse(WEAPON_LIBRARY, MONSTER_LIBRARY, DEFAULT_CONFIG)?;
    Ok(EMBEDDED.get_or_init(|| library))
}

impl ContentLibrary {
    /// Parses RON catalogs and a TOML config, then validates them together.
    pub fn parse(weapons: &str, monsters: &str, config: &str) -> LoadResult<Self> {
        Self::from_parts(
            WeaponLoader::parse(weapons)?,
            MonsterLoader::parse(monsters)?,
            ConfigLoader::parse(config)?,
        )
    }

    pub fn from_parts(
        weapons: Vec<WeaponTemplate>,
        monsters: Vec<MonsterTemplate>,
        config: GameConfig,
    ) -> LoadResult<Self> {
        let weapons = index_by_name(weapons, |w| &w.name, "weapon")?;
        let monsters = index_by_name(monsters, |m| &m.name, "monster")?;
        let library = Self {
            weapons,
            monsters,
            config,
        };
        library.validate()?;
        Ok(library)
    }

    /// Engine environment backed by this library.
    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> GameEnv<'a> {
        GameEnv::with_all(&self.weapons, &self.monsters, &self.config, rng)
    }

    fn validate(&self) -> LoadResult<()> {
        for monster in self.monsters.values() {
            for weapon in &monster.weapons {
                self.require_weapon(weapon, &monster.name)?;
            }
            let armed: HashSet<&str> = monster.weapons.iter().map(String::as_str).collect();
            for name in monster.intents.iter().flatten() {
                if !armed.contains(name.as_str()) {
                    anyhow::bail!(
                        "monster {} intends to use {} but does not carry it",
                        monster.name,
                        name
                    );
                }
            }
            self.validate_script(monster)?;
        }

        let player = &self.config.player;
        for weapon in &player.weapons {
            self.require_weapon(weapon, "player")?;
        }
        for (category, _) in &player.skill_points {
            category
                .parse::<SkillCategory>()
                .map_err(|_| anyhow::anyhow!("unknown skill category {}", category))?;
        }
        for name in &player.available_skills {
            let skill = name
                .parse::<Skill>()
                .map_err(|_| anyhow::anyhow!("unknown skill {}", name))?;
            if skill == Skill::Cpp {
                self.require_weapon(CPP_WEAPON, "skill C++")?;
            }
        }

        for opening in &self.config.opening_enemies {
            if !self.monsters.contains_key(&opening.monster) {
                anyhow::bail!("opening enemy {} is not a known monster", opening.monster);
            }
            if !self.config.in_bounds(opening.position) {
                anyhow::bail!(
                    "opening enemy {} placed off the lane at {}",
                    opening.monster,
                    opening.position
                );
            }
        }

        Ok(())
    }

    /// Every intent step must be something the enemy can queue in one go.
    fn validate_script(&self, monster: &MonsterTemplate) -> LoadResult<()> {
        if monster.intents.is_empty() {
            anyhow::bail!("monster {} has no intents", monster.name);
        }
        let limit = monster.sequence_limit.min(GameConfig::MAX_SEQUENCE_SLOTS);
        for (index, step) in monster.intents.iter().enumerate() {
            if step.is_empty() {
                anyhow::bail!("monster {} intent step {} is empty", monster.name, index);
            }
            if step.len() > limit {
                anyhow::bail!(
                    "monster {} intent step {} queues {} weapons but holds only {}",
                    monster.name,
                    index,
                    step.len(),
                    limit
                );
            }
            let mut seen = HashSet::new();
            for name in step {
                let unique = self
                    .weapons
                    .get(name)
                    .is_some_and(|weapon| weapon.unique_in_sequence);
                if unique && !seen.insert(name.as_str()) {
                    anyhow::bail!(
                        "monster {} intent step {} repeats {}, which may be queued once",
                        monster.name,
                        index,
                        name
                    );
                }
            }
        }
        Ok(())
    }

    fn require_weapon(&self, name: &str, owner: &str) -> LoadResult<()> {
        if self.weapons.contains_key(name) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("{} references unknown weapon {}", owner, name))
        }
    }
}

fn index_by_name<T>(
    items: Vec<T>,
    name: impl Fn(&T) -> &String,
    what: &str,
) -> LoadResult<HashMap<String, T>> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let key = name(&item).clone();
        if map.insert(key.clone(), item).is_some() {
            anyhow::bail!("duplicate {} template {}", what, key);
        }
    }
    Ok(map)
}
