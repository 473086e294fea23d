//! Plain-text rendering of the battle scene.

use std::fmt::Write;

use lane_core::{BattleOutcome, Facing, TurnPhase};
use lane_runtime::{ActorView, PlayerData, Renderer, SceneView};

/// Renders each scene into a string buffer.
#[derive(Default)]
pub struct TextRenderer {
    output: String,
    over: bool,
}

impl TextRenderer {
    pub fn output(&self) -> &str {
        &self.output
    }

    /// True once a rendered scene showed the battle as finished.
    pub fn is_over(&self) -> bool {
        self.over
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, scene: &SceneView) {
        self.over = scene.phase.is_over();
        self.output = render_scene(scene);
    }
}

fn tile(actor: Option<&ActorView>) -> String {
    let Some(actor) = actor else {
        return " . ".to_string();
    };
    let glyph = if actor.id.is_player() {
        'P'
    } else {
        actor.name.chars().next().unwrap_or('?')
    };
    match actor.facing {
        Facing::Left => format!("<{glyph} "),
        Facing::Right => format!(" {glyph}>"),
    }
}

fn render_scene(scene: &SceneView) -> String {
    let mut out = String::new();
    let phase = match scene.phase {
        TurnPhase::PlayerTurn => "your turn".to_string(),
        TurnPhase::EnemyTurn => "enemy turn".to_string(),
        TurnPhase::GameOver(BattleOutcome::Victory) => "VICTORY".to_string(),
        TurnPhase::GameOver(BattleOutcome::Defeat) => "DEFEAT".to_string(),
    };
    let _ = writeln!(
        out,
        "turn {}/{} - {}",
        scene.turn, scene.victory_turn, phase
    );

    let lane: Vec<String> = (0..scene.tiles)
        .map(|index| tile(scene.actor_at(index as i32)))
        .collect();
    let _ = writeln!(out, "|{}|", lane.join("|"));
    let numbers: Vec<String> = (0..scene.tiles).map(|index| format!(" {index} ")).collect();
    let _ = writeln!(out, " {} ", numbers.join(" "));

    for actor in &scene.actors {
        let _ = write!(
            out,
            "{} {} @{} {}/{}",
            actor.id, actor.name, actor.position, actor.health, actor.max_health
        );
        if let Some(flags) = actor.intent {
            let names: Vec<&str> = flags.iter_names().map(|(name, _)| name).collect();
            let _ = write!(out, " [{}]", names.join("|"));
        }
        if !actor.queued.is_empty() {
            let _ = write!(out, " queued: {}", actor.queued.join(", "));
        }
        if !actor.statuses.is_empty() {
            let _ = write!(out, " ({})", actor.statuses.join(", "));
        }
        out.push('\n');
    }

    for message in &scene.messages {
        let _ = writeln!(out, "> {message}");
    }
    out
}

/// Character sheet printed by the `status` command.
pub fn player_sheet(data: &PlayerData) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}/{} @{} facing {:?}",
        data.name, data.health, data.max_health, data.position, data.facing
    );
    let _ = writeln!(
        out,
        "queue {}/{} ({:?}), damage x{:.1}, swap cooldown {}",
        data.queued.len(),
        data.sequence_limit,
        data.battle_style,
        data.damage_multiplier,
        data.swap_cooldown
    );
    for slot in &data.weapons {
        let state = if slot.queued {
            "queued".to_string()
        } else if slot.is_ready() {
            "ready".to_string()
        } else {
            format!("{} turns", slot.current_cooldown)
        };
        let _ = writeln!(
            out,
            "  [{}] {} dmg {} cd {} - {}",
            slot.hotkey, slot.name, slot.damage, slot.cooldown, state
        );
    }
    for status in &data.statuses {
        let _ = writeln!(
            out,
            "  {} on {} x{} ({} turns)",
            status.name, status.body_part, status.stack, status.duration
        );
    }
    let points: Vec<String> = data
        .skill_points
        .iter()
        .map(|(category, points)| format!("{category} {points}"))
        .collect();
    let _ = writeln!(out, "points: {}", points.join(", "));
    let available: Vec<String> = data.available_skills.iter().map(ToString::to_string).collect();
    let _ = write!(out, "learnable: {}", available.join(", "));
    out
}
