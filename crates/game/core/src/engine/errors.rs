//! Error types surfaced by the turn controller.

use crate::action::{MoveError, SequenceError};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BattleOutcome, Skill};

/// Reasons a skill cannot be learned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    #[error("skill '{0}' is not available")]
    NotAvailable(Skill),

    #[error("skill '{0}' is already learned")]
    AlreadyLearned(Skill),

    #[error("no skill points left")]
    NoPoints,
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SkillError::NotAvailable(_) | SkillError::AlreadyLearned(_) => {
                ErrorSeverity::Validation
            }
            SkillError::NoPoints => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SkillError::NotAvailable(_) => "SKILL_NOT_AVAILABLE",
            SkillError::AlreadyLearned(_) => "SKILL_ALREADY_LEARNED",
            SkillError::NoPoints => "SKILL_NO_POINTS",
        }
    }
}

/// Errors surfaced while applying a command through the game engine.
///
/// A rejected command leaves the battle state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("enemies cannot act during the player's turn")]
    NotEnemyTurn,

    #[error("the battle is over ({0})")]
    GameOver(BattleOutcome),

    #[error("action queue is empty")]
    EmptySequence,

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CommandError::NotPlayerTurn | CommandError::NotEnemyTurn => ErrorSeverity::Recoverable,
            CommandError::GameOver(_) => ErrorSeverity::Fatal,
            CommandError::EmptySequence => ErrorSeverity::Validation,
            CommandError::Sequence(err) => err.severity(),
            CommandError::Move(err) => err.severity(),
            CommandError::Skill(err) => err.severity(),
            CommandError::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommandError::NotPlayerTurn => "COMMAND_NOT_PLAYER_TURN",
            CommandError::NotEnemyTurn => "COMMAND_NOT_ENEMY_TURN",
            CommandError::GameOver(_) => "COMMAND_GAME_OVER",
            CommandError::EmptySequence => "COMMAND_EMPTY_SEQUENCE",
            CommandError::Sequence(err) => err.error_code(),
            CommandError::Move(err) => err.error_code(),
            CommandError::Skill(err) => err.error_code(),
            CommandError::Oracle(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let err = CommandError::from(SequenceError::SequenceFull { limit: 4 });
        assert_eq!(err.error_code(), "SEQUENCE_FULL");
        assert!(err.severity().is_recoverable());
        assert_eq!(err.to_string(), "action queue is full (4 slots)");

        let over = CommandError::GameOver(BattleOutcome::Defeat);
        assert!(over.severity().is_internal());
        assert_eq!(over.to_string(), "the battle is over (Defeat)");
    }
}
