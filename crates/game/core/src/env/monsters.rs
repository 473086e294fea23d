//! Monster templates, spawning, and the weighted spawn table.

use std::collections::HashMap;

use crate::state::{ActorState, EntityId, Facing, Position};

use super::{OracleError, WeaponOracle};

/// Static enemy definition, as authored in content files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub health: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_sequence_limit"))]
    pub sequence_limit: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
    pub damage_multiplier: f32,
    /// Weapon template names, in slot order.
    pub weapons: Vec<String>,
    /// Intent script: each step lists weapon names to queue.
    pub intents: Vec<Vec<String>>,
    /// Relative spawn weight; zero keeps the monster out of random waves.
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: u32,
}

#[cfg(feature = "serde")]
fn default_sequence_limit() -> usize {
    1
}

#[cfg(feature = "serde")]
fn default_multiplier() -> f32 {
    1.0
}

#[cfg(feature = "serde")]
fn default_weight() -> u32 {
    1
}

impl MonsterTemplate {
    /// Builds an enemy actor from this template.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WeaponNotFound` if a listed weapon is unknown.
    pub fn spawn<W>(
        &self,
        id: EntityId,
        position: Position,
        facing: Facing,
        weapons: &W,
    ) -> Result<ActorState, OracleError>
    where
        W: WeaponOracle + ?Sized,
    {
        let arsenal = self
            .weapons
            .iter()
            .map(|name| weapons.instantiate(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(
            ActorState::enemy(id, &self.name, position, self.health, self.intents.clone())
                .facing(facing)
                .with_weapons(arsenal)
                .with_sequence_limit(self.sequence_limit)
                .with_damage_multiplier(self.damage_multiplier),
        )
    }
}

/// Read-only access to monster templates.
pub trait MonsterOracle: Send + Sync {
    fn template(&self, name: &str) -> Option<&MonsterTemplate>;

    /// Templates eligible for random waves, in a stable order.
    fn spawn_table(&self) -> Vec<&MonsterTemplate>;
}

impl MonsterOracle for HashMap<String, MonsterTemplate> {
    fn template(&self, name: &str) -> Option<&MonsterTemplate> {
        self.get(name)
    }

    fn spawn_table(&self) -> Vec<&MonsterTemplate> {
        let mut table: Vec<_> = self.values().filter(|m| m.weight > 0).collect();
        table.sort_by(|a, b| a.name.cmp(&b.name));
        table
    }
}

/// Picks a template by weight. `roll` may be any value; it is reduced modulo
/// the total weight.
pub fn pick_weighted<'a>(table: &[&'a MonsterTemplate], roll: u32) -> Option<&'a MonsterTemplate> {
    let total: u32 = table.iter().map(|m| m.weight).sum();
    if total == 0 {
        return None;
    }
    let mut remaining = roll % total;
    for &template in table {
        if remaining < template.weight {
            return Some(template);
        }
        remaining -= template.weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::WeaponTemplate;
    use crate::state::Weapon;

    fn monster(name: &str, weight: u32) -> MonsterTemplate {
        MonsterTemplate {
            name: name.into(),
            health: 30,
            sequence_limit: 2,
            damage_multiplier: 1.0,
            weapons: vec!["Claw".into()],
            intents: vec![vec!["Claw".into()]],
            weight,
        }
    }

    #[test]
    fn weighted_pick_covers_each_bucket() {
        let bug = monster("Bug", 3);
        let deadline = monster("Deadline", 1);
        let table = [&bug, &deadline];
        assert_eq!(pick_weighted(&table, 0).unwrap().name, "Bug");
        assert_eq!(pick_weighted(&table, 2).unwrap().name, "Bug");
        assert_eq!(pick_weighted(&table, 3).unwrap().name, "Deadline");
        assert_eq!(pick_weighted(&table, 4).unwrap().name, "Bug");
        assert!(pick_weighted(&[], 5).is_none());
    }

    #[test]
    fn spawn_table_skips_weightless_and_is_sorted() {
        let library = HashMap::from([
            ("Scope Creep".to_string(), monster("Scope Creep", 1)),
            ("Boss".to_string(), monster("Boss", 0)),
            ("Bug".to_string(), monster("Bug", 2)),
        ]);
        let names: Vec<_> = library.spawn_table().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Bug", "Scope Creep"]);
    }

    #[test]
    fn spawned_enemy_carries_template_loadout() {
        let claw = WeaponTemplate::from(&Weapon::new("Claw", 10, vec![1], 0));
        let weapons = HashMap::from([("Claw".to_string(), claw)]);
        let enemy = monster("Bug", 1)
            .spawn(EntityId(3), Position::new(6), Facing::Left, &weapons)
            .unwrap();

        assert_eq!(enemy.id, EntityId(3));
        assert_eq!(enemy.facing, Facing::Left);
        assert_eq!(enemy.sequence_limit, 2);
        assert_eq!(enemy.weapons[0].name, "Claw");
        assert_eq!(enemy.enemy_state().unwrap().template, "Bug");
    }

    #[test]
    fn missing_weapon_fails_spawn() {
        let weapons: HashMap<String, WeaponTemplate> = HashMap::new();
        let err = monster("Bug", 1)
            .spawn(EntityId(3), Position::new(6), Facing::Left, &weapons)
            .unwrap_err();
        assert_eq!(err, OracleError::WeaponNotFound("Claw".into()));
    }
}
