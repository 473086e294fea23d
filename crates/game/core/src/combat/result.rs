//! Strike reports produced by the resolver.

use crate::state::{EntityId, Position};

/// Damage applied to one actor by one strike.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub target: EntityId,
    /// Health actually removed (never more than the target had).
    pub damage: i32,
    /// The target was brought to zero health by this hit.
    pub lethal: bool,
}

/// Non-fatal outcome worth telling the player about.
///
/// The weapon still consumed its queue slot and cooldown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionNotice {
    /// Nothing to aim at in the facing direction.
    NoTarget,
    /// The target was farther than the weapon's range; the shot landed anyway.
    OutOfRange { distance: u32, range: u32 },
    /// No opponent within dash range; the wielder whiffed forward.
    DashFailed,
    /// No opponent run to roll through, or no free tile behind it.
    RollNoTarget,
}

/// Everything one fired weapon did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeReport {
    pub wielder: EntityId,
    pub weapon: String,
    pub hits: Vec<Hit>,
    /// Wielder relocation as `(from, to)`.
    pub moved: Option<(Position, Position)>,
    pub notice: Option<ResolutionNotice>,
}

impl StrikeReport {
    pub fn new(wielder: EntityId, weapon: impl Into<String>) -> Self {
        Self {
            wielder,
            weapon: weapon.into(),
            hits: Vec::new(),
            moved: None,
            notice: None,
        }
    }

    /// Total damage dealt to `target`.
    pub fn damage_to(&self, target: EntityId) -> i32 {
        self.hits
            .iter()
            .filter(|hit| hit.target == target)
            .map(|hit| hit.damage)
            .sum()
    }

    pub fn landed(&self) -> bool {
        !self.hits.is_empty()
    }
}
