//! Traits describing read-only battle data.
//!
//! Oracles expose weapon and monster templates, rule tunables and the RNG.
//! The [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod error;
mod monsters;
mod rng;
mod weapons;

pub use error::OracleError;
pub use monsters::{MonsterOracle, MonsterTemplate, pick_weighted};
pub use rng::{PcgRng, RngOracle, compute_seed, context};
pub use weapons::{WeaponOracle, WeaponTemplate};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, W, M, R>
where
    W: WeaponOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    weapons: Option<&'a W>,
    monsters: Option<&'a M>,
    config: Option<&'a GameConfig>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<'a, dyn WeaponOracle + 'a, dyn MonsterOracle + 'a, dyn RngOracle + 'a>;

impl<W, M, R> Clone for Env<'_, W, M, R>
where
    W: WeaponOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, M, R> Copy for Env<'_, W, M, R>
where
    W: WeaponOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, W, M, R> Env<'a, W, M, R>
where
    W: WeaponOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        weapons: Option<&'a W>,
        monsters: Option<&'a M>,
        config: Option<&'a GameConfig>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            weapons,
            monsters,
            config,
            rng,
        }
    }

    pub fn with_all(weapons: &'a W, monsters: &'a M, config: &'a GameConfig, rng: &'a R) -> Self {
        Self::new(Some(weapons), Some(monsters), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None)
    }

    /// Returns the WeaponOracle, or an error if not available.
    pub fn weapons(&self) -> Result<&'a W, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }

    /// Returns the MonsterOracle, or an error if not available.
    pub fn monsters(&self) -> Result<&'a M, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the battle configuration, or an error if not available.
    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, W, M, R> Env<'a, W, M, R>
where
    W: WeaponOracle + 'a,
    M: MonsterOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let weapons: Option<&'a dyn WeaponOracle> = self.weapons.map(|weapons| weapons as _);
        let monsters: Option<&'a dyn MonsterOracle> = self.monsters.map(|monsters| monsters as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(weapons, monsters, self.config, rng)
    }
}
