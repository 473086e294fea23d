//! Shared error classification.
//!
//! Each operation defines its own `thiserror` enum next to the code that
//! raises it (`SequenceError` in `action::sequence`, `MoveError` in
//! `action::movement`, `CommandError` in `engine`). They all implement
//! [`GameError`] so the runtime can log a stable code and decide whether a
//! rejection is worth retrying. A rejected command never changes state.

/// How a failed command should be treated by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same command may succeed on a later turn (weapon cooling, tile
    /// occupied, queue full).
    Recoverable,
    /// The command can never succeed as given (bad slot, skill not offered).
    Validation,
    /// Missing template or oracle; points at broken content.
    Internal,
    /// The battle is over.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase name used as a log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True when retrying cannot help: broken content or a finished battle.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum in this crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, e.g. `"SEQUENCE_FULL"`.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
