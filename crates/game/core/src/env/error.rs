//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// A missing template reference is a content bug; loaders are expected to
/// catch it before a battle starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("WeaponOracle not available")]
    WeaponsNotAvailable,

    #[error("MonsterOracle not available")]
    MonstersNotAvailable,

    #[error("GameConfig not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("weapon template '{0}' not found")]
    WeaponNotFound(String),

    #[error("monster template '{0}' not found")]
    MonsterNotFound(String),

    #[error("invalid config value: {0}")]
    InvalidConfig(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            WeaponsNotAvailable | MonstersNotAvailable | ConfigNotAvailable | RngNotAvailable => {
                ErrorSeverity::Fatal
            }
            WeaponNotFound(_) | MonsterNotFound(_) | InvalidConfig(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WeaponsNotAvailable => "ORACLE_WEAPONS_NOT_AVAILABLE",
            MonstersNotAvailable => "ORACLE_MONSTERS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
            MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
            InvalidConfig(_) => "ORACLE_INVALID_CONFIG",
        }
    }
}
