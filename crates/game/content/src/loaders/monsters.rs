//! Monster catalog loader.

use std::path::Path;

use lane_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for monster catalogs from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load monster templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        for monster in &catalog.monsters {
            if monster.health <= 0 {
                anyhow::bail!("monster {} has non-positive health", monster.name);
            }
            if monster.sequence_limit == 0 {
                anyhow::bail!("monster {} cannot queue anything", monster.name);
            }
        }

        Ok(catalog.monsters)
    }
}
