use strum::Display;

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Which side may act right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    PlayerTurn,
    EnemyTurn,
    /// Terminal; no further commands are accepted.
    GameOver(BattleOutcome),
}

impl TurnPhase {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }

    pub fn outcome(self) -> Option<BattleOutcome> {
        match self {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Turn bookkeeping for one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: TurnPhase,

    /// Completed player turns.
    pub turn_count: u32,

    /// Sequential identifier bumped by every state-changing command.
    ///
    /// Mixed into RNG seeds so that two rolls in different commands never
    /// share a seed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
