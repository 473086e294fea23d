//! Enemy-only actor data: the intent script and its telegraph flags.

use bitflags::bitflags;

bitflags! {
    /// Telegraph flags rendered above an enemy.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct IntentFlags: u8 {
        /// Committing weapons from the current intent step.
        const ADDING = 1;
        /// Step queued; lining up a hit on the player.
        const WAITING = 1 << 1;
        /// The queued sequence fires on the next invocation.
        const READY_TO_ATTACK = 1 << 2;
        /// A move was announced and happens on the next invocation.
        const MOVING = 1 << 3;
    }
}

/// Coarse state of the intent machine, derived from the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentPhase {
    Adding,
    Waiting,
    ReadyToAttack,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    /// Monster template this enemy was spawned from.
    pub template: String,
    pub flags: IntentFlags,
    /// Scripted steps; each step is a list of weapon names to queue.
    pub intents: Vec<Vec<String>>,
    pub intent_index: usize,
    pub intent_progress: usize,
}

impl EnemyState {
    pub fn new(template: impl Into<String>, intents: Vec<Vec<String>>) -> Self {
        Self {
            template: template.into(),
            flags: IntentFlags::ADDING,
            intents,
            intent_index: 0,
            intent_progress: 0,
        }
    }

    pub fn phase(&self) -> IntentPhase {
        if self.flags.contains(IntentFlags::READY_TO_ATTACK) {
            IntentPhase::ReadyToAttack
        } else if self.flags.contains(IntentFlags::WAITING) {
            IntentPhase::Waiting
        } else {
            IntentPhase::Adding
        }
    }

    pub fn set_phase(&mut self, phase: IntentPhase) {
        self.flags = match phase {
            IntentPhase::Adding => IntentFlags::ADDING,
            IntentPhase::Waiting => IntentFlags::WAITING,
            IntentPhase::ReadyToAttack => IntentFlags::READY_TO_ATTACK,
        };
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.flags.contains(IntentFlags::MOVING)
    }

    /// Current intent step, if the script is not empty.
    pub fn current_step(&self) -> Option<&[String]> {
        self.intents.get(self.intent_index).map(Vec::as_slice)
    }

    /// Weapon name the next `adding` invocation commits.
    pub fn next_weapon(&self) -> Option<&str> {
        self.current_step()?
            .get(self.intent_progress)
            .map(String::as_str)
    }

    /// Records one committed weapon.
    ///
    /// Returns true once the whole step is queued, in which case the script
    /// has already moved on to the next step (wrapping around).
    pub fn advance_progress(&mut self) -> bool {
        self.intent_progress += 1;
        let step_len = self.current_step().map_or(0, <[String]>::len);
        if self.intent_progress < step_len {
            return false;
        }
        self.intent_progress = 0;
        if !self.intents.is_empty() {
            self.intent_index = (self.intent_index + 1) % self.intents.len();
        }
        true
    }
}
