//! Data-driven battle content and loaders.
//!
//! This crate houses the static battle content and the loaders for it:
//! - Weapon templates (RON)
//! - Monster templates and intent scripts (RON)
//! - Battle rules (TOML)
//!
//! Content is consumed through the core's oracles and never appears in game
//! state. The default data set is compiled in; [`ContentFactory`] reads the
//! same layout from a directory for modding and tests.

/// Default weapon catalog.
pub const WEAPON_LIBRARY: &str = include_str!("../data/weapons.ron");
/// Default monster catalog.
pub const MONSTER_LIBRARY: &str = include_str!("../data/monsters.ron");
/// Default battle rules.
pub const DEFAULT_CONFIG: &str = include_str!("../data/config.toml");

#[cfg(feature = "loaders")]
pub mod loaders;
#[cfg(feature = "loaders")]
pub mod registry;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MonsterCatalog, MonsterLoader, WeaponCatalog,
    WeaponLoader,
};
#[cfg(feature = "loaders")]
pub use registry::{ContentLibrary, embedded};
