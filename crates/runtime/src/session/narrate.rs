//! Turns battle events into message-log lines.

use std::collections::HashMap;

use lane_core::{
    BattleEvent, BattleOutcome, EntityId, Facing, GameState, MoveOutcome, ResolutionNotice,
    StatusChange, StrikeReport, TurnPhase,
};

/// Actor names by id, kept across a command so that enemies removed by it
/// can still be named.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    names: HashMap<EntityId, String>,
}

impl Roster {
    pub fn of(state: &GameState) -> Self {
        let mut roster = Self::default();
        roster.extend(state);
        roster
    }

    /// Adds actors that joined since the roster was taken.
    pub fn extend(&mut self, state: &GameState) {
        for actor in state.entities.all_actors() {
            self.names
                .entry(actor.id)
                .or_insert_with(|| actor.name.clone());
        }
    }
}

fn name_of(roster: &Roster, id: EntityId) -> String {
    roster
        .names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| id.to_string())
}

fn facing_label(facing: Facing) -> &'static str {
    match facing {
        Facing::Left => "left",
        Facing::Right => "right",
    }
}

/// Message lines for one event. Most events produce at most one line; a
/// strike produces one per hit plus its notice.
pub fn describe(event: &BattleEvent, roster: &Roster) -> Vec<String> {
    match event {
        BattleEvent::WeaponQueued { actor, weapon } => {
            vec![format!("{} queues {}", name_of(roster, *actor), weapon)]
        }
        BattleEvent::Moved { actor, outcome } => {
            let who = name_of(roster, *actor);
            let line = match outcome {
                MoveOutcome::Turned { facing } => {
                    format!("{} turns {}", who, facing_label(*facing))
                }
                MoveOutcome::Moved { to, .. } => format!("{} moves to {}", who, to),
                MoveOutcome::Swapped { with, .. } => {
                    format!("{} swaps places with {}", who, name_of(roster, *with))
                }
            };
            vec![line]
        }
        BattleEvent::Passed { actor } => vec![format!("{} waits", name_of(roster, *actor))],
        BattleEvent::Strike(report) => describe_strike(report, roster),
        BattleEvent::Status { actor, change } => match change {
            StatusChange::Converted { from, into } => vec![format!(
                "{}'s {} turned into {}",
                name_of(roster, *actor),
                from,
                into
            )],
            StatusChange::Expired { name } => {
                vec![format!("{} wore off {}", name, name_of(roster, *actor))]
            }
            StatusChange::StackLost { .. } => Vec::new(),
        },
        BattleEvent::Defeated { name, .. } => vec![format!("{} is defeated", name)],
        BattleEvent::Spawned {
            template, position, ..
        } => vec![format!("{} appears at {}", template, position)],
        BattleEvent::Telegraph { .. } => Vec::new(),
        BattleEvent::IntentStalled { actor, reason } => {
            vec![format!("{} hesitates: {}", name_of(roster, *actor), reason)]
        }
        BattleEvent::SkillLearned { skill } => vec![format!("Learned {}", skill)],
        BattleEvent::PhaseChanged { phase, .. } => match phase {
            TurnPhase::GameOver(BattleOutcome::Victory) => vec!["Victory!".to_string()],
            TurnPhase::GameOver(BattleOutcome::Defeat) => vec!["Defeat...".to_string()],
            TurnPhase::PlayerTurn | TurnPhase::EnemyTurn => Vec::new(),
        },
    }
}

fn describe_strike(report: &StrikeReport, roster: &Roster) -> Vec<String> {
    let wielder = name_of(roster, report.wielder);
    let mut lines: Vec<String> = report
        .hits
        .iter()
        .map(|hit| {
            format!(
                "{} hits {} with {} for {}",
                wielder,
                name_of(roster, hit.target),
                report.weapon,
                hit.damage
            )
        })
        .collect();

    let notice = report.notice.map(|notice| match notice {
        ResolutionNotice::NoTarget => format!("{}: no target", report.weapon),
        ResolutionNotice::OutOfRange { distance, range } => format!(
            "{}: target out of range ({} > {})",
            report.weapon, distance, range
        ),
        ResolutionNotice::DashFailed => format!("{}: nobody within reach", report.weapon),
        ResolutionNotice::RollNoTarget => format!("{}: nothing to roll through", report.weapon),
    });
    lines.extend(notice);
    lines
}
