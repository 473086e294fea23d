//! Serializable slice of an actor's mid-turn state.
//!
//! Captures what changes while a turn is being built (where the actor
//! stands, how hurt it is, what afflicts it and what it has queued) so a
//! battle can be suspended and restored without replaying commands.

use serde::{Deserialize, Serialize};

use lane_core::{ActorState, Position, StatusEffects};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub position: Position,
    pub health: i32,
    pub status: StatusEffects,
    /// Queued weapon indices, in insertion order.
    pub action_sequence: Vec<usize>,
}

impl ActorSnapshot {
    pub fn capture(actor: &ActorState) -> Self {
        Self {
            position: actor.position,
            health: actor.health,
            status: actor.status.clone(),
            action_sequence: actor.action_sequence.to_vec(),
        }
    }

    /// Writes the snapshot back onto `actor`.
    ///
    /// Queue entries beyond the actor's capacity or pointing past its
    /// weapon list are dropped.
    pub fn restore(&self, actor: &mut ActorState) {
        actor.position = self.position;
        actor.health = self.health;
        actor.status = self.status.clone();
        actor.action_sequence.clear();
        let slots = actor.sequence_limit.min(actor.action_sequence.capacity());
        let weapon_count = actor.weapons.len();
        actor.action_sequence.extend(
            self.action_sequence
                .iter()
                .copied()
                .filter(|&index| index < weapon_count)
                .take(slots),
        );
    }
}
