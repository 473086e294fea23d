//! Content factory for building template registries from data files.

use std::path::{Path, PathBuf};

use lane_core::{GameConfig, MonsterTemplate, WeaponTemplate};

use crate::loaders::{ConfigLoader, LoadResult, MonsterLoader, WeaponLoader};
use crate::registry::ContentLibrary;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// └── monsters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load weapon templates from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<WeaponTemplate>> {
        let path = self.data_dir.join("weapons.ron");
        WeaponLoader::load(&path)
    }

    /// Load monster templates from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterTemplate>> {
        let path = self.data_dir.join("monsters.ron");
        MonsterLoader::load(&path)
    }

    /// Load and cross-check all three files.
    pub fn load_library(&self) -> LoadResult<ContentLibrary> {
        ContentLibrary::from_parts(
            self.load_weapons()?,
            self.load_monsters()?,
            self.load_config()?,
        )
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
