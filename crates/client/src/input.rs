//! Line-oriented command parsing.

use lane_core::Skill;
use lane_runtime::InputEvent;

pub const HELP: &str = "\
commands:
  a / left      step left (turns around first if facing right)
  d / right     step right
  f / flip      turn around
  p / pass      end the turn
  1-9           queue the weapon in that slot
  x / execute   fire the queue
  learn <skill> learn a skill (Hello world, C++, stack, queue)
  s / status    show the character sheet
  h / help      this text
  q / quit      leave";

/// One parsed line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Input(InputEvent),
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> Line {
    let line = line.trim();
    if let Some(skill) = line.strip_prefix("learn ") {
        return match skill.trim().parse::<Skill>() {
            Ok(skill) => Line::Input(InputEvent::LearnSkill(skill)),
            Err(_) => Line::Unknown(line.to_string()),
        };
    }

    match line.to_ascii_lowercase().as_str() {
        "" => Line::Empty,
        "a" | "left" => Line::Input(InputEvent::MoveLeft),
        "d" | "right" => Line::Input(InputEvent::MoveRight),
        "f" | "flip" => Line::Input(InputEvent::Flip),
        "p" | "pass" => Line::Input(InputEvent::Pass),
        "x" | "exec" | "execute" => Line::Input(InputEvent::Execute),
        "s" | "status" => Line::Status,
        "h" | "help" | "?" => Line::Help,
        "q" | "quit" | "exit" => Line::Quit,
        other => match other.parse::<u8>() {
            Ok(key @ 1..=9) => Line::Input(InputEvent::Weapon(key)),
            _ => Line::Unknown(line.to_string()),
        },
    }
}
