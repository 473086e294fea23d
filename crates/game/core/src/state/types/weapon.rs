//! Weapons and their cooldown counters.

use strum::{Display, EnumString, IntoStaticStr};

use super::status::StatusEffect;

/// Attack behaviour of a weapon, as written in content files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    #[strum(serialize = "melee")]
    #[cfg_attr(feature = "serde", serde(rename = "melee"))]
    Melee,
    #[strum(serialize = "meleeMove")]
    #[cfg_attr(feature = "serde", serde(rename = "meleeMove"))]
    MeleeMove,
    #[strum(serialize = "dash_to_enemy")]
    #[cfg_attr(feature = "serde", serde(rename = "dash_to_enemy"))]
    DashToEnemy,
    #[strum(serialize = "ranged")]
    #[cfg_attr(feature = "serde", serde(rename = "ranged"))]
    Ranged,
    #[strum(serialize = "fireball")]
    #[cfg_attr(feature = "serde", serde(rename = "fireball"))]
    Fireball,
    #[strum(serialize = "roll")]
    #[cfg_attr(feature = "serde", serde(rename = "roll"))]
    Roll,
}

/// Resolved attack behaviour carrying the data each variant needs.
///
/// The combat resolver matches on this exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeaponEffect<'a> {
    Melee,
    MeleeMove,
    Dash { range: u32 },
    Ranged { range: u32 },
    Fireball { pattern: &'a [i32] },
    Roll,
}

/// A weapon instance owned by one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    /// Tile offsets relative to the wielder's facing.
    pub pattern: Vec<i32>,
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub kind: WeaponKind,
    pub range: Option<u32>,
    pub unique_in_sequence: bool,
    /// Templates copied onto every actor this weapon hits.
    pub status_effects: Vec<StatusEffect>,
}

impl Weapon {
    /// Range used when none is configured.
    pub const DEFAULT_RANGE: u32 = 1;

    pub fn new(name: impl Into<String>, damage: i32, pattern: Vec<i32>, cooldown: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            pattern,
            cooldown,
            current_cooldown: 0,
            kind: WeaponKind::Melee,
            range: None,
            unique_in_sequence: true,
            status_effects: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: WeaponKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_range(mut self, range: u32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.unique_in_sequence = false;
        self
    }

    pub fn with_status(mut self, effect: StatusEffect) -> Self {
        self.status_effects.push(effect);
        self
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Fires the weapon if it is ready, starting its cooldown.
    ///
    /// Returns false (and changes nothing) while cooling.
    pub fn use_weapon(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.current_cooldown = self.cooldown;
        true
    }

    /// Advances the cooldown by one turn.
    pub fn update_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    /// Effective range for hit checks.
    #[inline]
    pub fn effective_range(&self) -> u32 {
        self.range.unwrap_or(Self::DEFAULT_RANGE)
    }

    pub fn effect(&self) -> WeaponEffect<'_> {
        match self.kind {
            WeaponKind::Melee => WeaponEffect::Melee,
            WeaponKind::MeleeMove => WeaponEffect::MeleeMove,
            WeaponKind::DashToEnemy => WeaponEffect::Dash {
                range: self.effective_range(),
            },
            WeaponKind::Ranged => WeaponEffect::Ranged {
                range: self.effective_range(),
            },
            WeaponKind::Fireball => WeaponEffect::Fireball {
                pattern: &self.pattern,
            },
            WeaponKind::Roll => WeaponEffect::Roll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_starts_cooldown_and_blocks_reuse() {
        let mut weapon = Weapon::new("Template Greatsword", 10, vec![-1, 1], 4);
        assert!(weapon.is_ready());
        assert!(weapon.use_weapon());
        assert_eq!(weapon.current_cooldown, 4);
        assert!(!weapon.is_ready());
        assert!(!weapon.use_weapon());
        assert_eq!(weapon.current_cooldown, 4);
    }

    #[test]
    fn cooldown_decreases_monotonically_to_zero() {
        let mut weapon = Weapon::new("Snake Staff", 15, vec![2, 4], 3);
        weapon.use_weapon();
        let mut previous = weapon.current_cooldown;
        for _ in 0..6 {
            weapon.update_cooldown();
            assert!(weapon.current_cooldown <= previous);
            previous = weapon.current_cooldown;
        }
        assert_eq!(weapon.current_cooldown, 0);
        assert!(weapon.is_ready());
    }

    #[test]
    fn zero_cooldown_weapon_is_always_ready() {
        let mut claw = Weapon::new("Claw", 10, vec![1], 0);
        assert!(claw.use_weapon());
        assert!(claw.use_weapon());
    }

    #[test]
    fn kinds_parse_from_content_names() {
        assert_eq!("meleeMove".parse::<WeaponKind>(), Ok(WeaponKind::MeleeMove));
        assert_eq!(
            "dash_to_enemy".parse::<WeaponKind>(),
            Ok(WeaponKind::DashToEnemy)
        );
        assert_eq!(WeaponKind::Roll.to_string(), "roll");
        assert!("targeted".parse::<WeaponKind>().is_err());
    }

    #[test]
    fn missing_range_defaults_to_one() {
        let bow = Weapon::new("Bow", 5, vec![1], 2).with_kind(WeaponKind::Ranged);
        assert_eq!(bow.effect(), WeaponEffect::Ranged { range: 1 });
        let fireball = Weapon::new("fireball", 15, vec![-1, 0, 1], 8).with_kind(WeaponKind::Fireball);
        assert_eq!(
            fireball.effect(),
            WeaponEffect::Fireball {
                pattern: &[-1, 0, 1]
            }
        );
    }
}
