//! Battle events emitted by the engine.
//!
//! The core does not log; every observable change is returned as a
//! [`BattleEvent`] so the runtime can render messages and fan events out.

use crate::action::MoveOutcome;
use crate::combat::StrikeReport;
use crate::state::{EntityId, IntentFlags, Position, Skill, StatusChange, TurnPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    WeaponQueued {
        actor: EntityId,
        weapon: String,
    },
    Moved {
        actor: EntityId,
        outcome: MoveOutcome,
    },
    Passed {
        actor: EntityId,
    },
    Strike(StrikeReport),
    Status {
        actor: EntityId,
        change: StatusChange,
    },
    Defeated {
        actor: EntityId,
        name: String,
    },
    Spawned {
        actor: EntityId,
        template: String,
        position: Position,
    },
    /// Telegraph flags of an enemy after its intent machine advanced.
    Telegraph {
        actor: EntityId,
        flags: IntentFlags,
    },
    /// An intent step could not be carried out as scripted.
    IntentStalled {
        actor: EntityId,
        reason: String,
    },
    SkillLearned {
        skill: Skill,
    },
    PhaseChanged {
        phase: TurnPhase,
        turn: u32,
    },
}

impl BattleEvent {
    /// Actor the event is about, if any.
    pub fn actor(&self) -> Option<EntityId> {
        match self {
            BattleEvent::WeaponQueued { actor, .. }
            | BattleEvent::Moved { actor, .. }
            | BattleEvent::Passed { actor }
            | BattleEvent::Status { actor, .. }
            | BattleEvent::Defeated { actor, .. }
            | BattleEvent::Spawned { actor, .. }
            | BattleEvent::Telegraph { actor, .. }
            | BattleEvent::IntentStalled { actor, .. } => Some(*actor),
            BattleEvent::Strike(report) => Some(report.wielder),
            BattleEvent::SkillLearned { .. } => Some(EntityId::PLAYER),
            BattleEvent::PhaseChanged { .. } => None,
        }
    }
}
