//! Weapon templates and the oracle that serves them.

use std::collections::HashMap;

use crate::state::{StatusEffect, Weapon, WeaponKind};

use super::OracleError;

/// Static weapon definition, as authored in content files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTemplate {
    pub name: String,
    pub damage: i32,
    pub pattern: Vec<i32>,
    pub cooldown: u32,
    pub weapon_type: WeaponKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default = "default_unique"))]
    pub unique_in_sequence: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effects: Vec<StatusEffect>,
}

#[cfg(feature = "serde")]
fn default_unique() -> bool {
    true
}

impl WeaponTemplate {
    /// Creates a fresh, ready-to-use weapon instance.
    pub fn instantiate(&self) -> Weapon {
        Weapon {
            name: self.name.clone(),
            damage: self.damage,
            pattern: self.pattern.clone(),
            cooldown: self.cooldown,
            current_cooldown: 0,
            kind: self.weapon_type,
            range: self.range,
            unique_in_sequence: self.unique_in_sequence,
            status_effects: self.status_effects.clone(),
        }
    }
}

impl From<&Weapon> for WeaponTemplate {
    fn from(weapon: &Weapon) -> Self {
        Self {
            name: weapon.name.clone(),
            damage: weapon.damage,
            pattern: weapon.pattern.clone(),
            cooldown: weapon.cooldown,
            weapon_type: weapon.kind,
            range: weapon.range,
            unique_in_sequence: weapon.unique_in_sequence,
            status_effects: weapon.status_effects.clone(),
        }
    }
}

/// Read-only access to weapon templates by name.
pub trait WeaponOracle: Send + Sync {
    fn template(&self, name: &str) -> Option<&WeaponTemplate>;

    /// Instantiates the named weapon.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WeaponNotFound` for unknown names.
    fn instantiate(&self, name: &str) -> Result<Weapon, OracleError> {
        self.template(name)
            .map(WeaponTemplate::instantiate)
            .ok_or_else(|| OracleError::WeaponNotFound(name.to_string()))
    }
}

impl WeaponOracle for HashMap<String, WeaponTemplate> {
    fn template(&self, name: &str) -> Option<&WeaponTemplate> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> HashMap<String, WeaponTemplate> {
        let claw = WeaponTemplate::from(&Weapon::new("Claw", 10, vec![1], 0));
        HashMap::from([(claw.name.clone(), claw)])
    }

    #[test]
    fn instances_start_ready() {
        let library = library();
        let mut claw = library.instantiate("Claw").unwrap();
        claw.current_cooldown = 3;
        let fresh = library.instantiate("Claw").unwrap();
        assert!(fresh.is_ready());
    }

    #[test]
    fn unknown_weapon_is_an_error() {
        assert_eq!(
            library().instantiate("Spoon"),
            Err(OracleError::WeaponNotFound("Spoon".into()))
        );
    }
}
