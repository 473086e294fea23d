//! Content loaders for reading battle data from files.
//!
//! Weapon and monster catalogs are RON, the battle rules are TOML. Every
//! loader has a `load(path)` form for files on disk and a `parse(text)` form
//! used for the embedded defaults.

pub mod config;
pub mod factory;
pub mod monsters;
pub mod weapons;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use monsters::{MonsterCatalog, MonsterLoader};
pub use weapons::{WeaponCatalog, WeaponLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
