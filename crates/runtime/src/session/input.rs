//! Input events accepted by the session.

use serde::{Deserialize, Serialize};

use lane_core::{Facing, GameConfig, PlayerCommand, Skill};

/// A keyboard-level input the battle scene understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Flip,
    Pass,
    /// Weapon hotkey, `1..=9`.
    Weapon(u8),
    Execute,
    LearnSkill(Skill),
}

impl InputEvent {
    /// Engine command for this input, or `None` for an unbound hotkey.
    pub fn command(self) -> Option<PlayerCommand> {
        let command = match self {
            InputEvent::MoveLeft => PlayerCommand::Move(Facing::Left),
            InputEvent::MoveRight => PlayerCommand::Move(Facing::Right),
            InputEvent::Flip => PlayerCommand::Flip,
            InputEvent::Pass => PlayerCommand::Pass,
            InputEvent::Weapon(key) => {
                let slot = usize::from(key).checked_sub(1)?;
                if slot >= GameConfig::MAX_WEAPON_HOTKEYS {
                    return None;
                }
                PlayerCommand::QueueWeapon(slot)
            }
            InputEvent::Execute => PlayerCommand::Execute,
            InputEvent::LearnSkill(skill) => PlayerCommand::LearnSkill(skill),
        };
        Some(command)
    }
}
