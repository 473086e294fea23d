//! Battle configuration loader.

use std::path::Path;

use lane_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.board_size < 1 {
            anyhow::bail!("board_size must be at least 1, got {}", config.board_size);
        }
        if !config.in_bounds(config.player.position) {
            anyhow::bail!(
                "player position {} is off the lane (0..={})",
                config.player.position,
                config.board_size
            );
        }

        Ok(config)
    }
}
