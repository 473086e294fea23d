//! Battle scene surface consumed by the UI.
//!
//! A [`Session`] owns one battle. The UI feeds it input through
//! [`Session::handle_event`], calls [`Session::update`] once per frame, and
//! reads it back through [`Session::get_player_data`] and [`Session::draw`].
//! Player commands are accepted only during the player phase; the enemy phase
//! runs when the frame-counted scheduling tick armed at the end of the player
//! turn fires.

mod input;
mod messages;
mod narrate;
mod schedule;
mod view;

pub use input::InputEvent;
pub use messages::{Message, MessageLog};
pub use narrate::{Roster, describe};
pub use schedule::PhaseTimer;
pub use view::{ActorView, PlayerData, Renderer, SceneView, WeaponSlot};

use std::sync::Arc;

use lane_content::ContentLibrary;
use lane_core::{BattleEvent, GameEngine, GameError, GameState, PcgRng, TurnPhase, new_battle};
use tracing::{debug, info, trace, warn};

use crate::api::Result;
use crate::events::Event;

/// Frame pacing of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Frames between the end of the player turn and the enemy phase.
    pub enemy_delay_frames: u32,
    /// Frames a message line stays visible.
    pub message_frames: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            enemy_delay_frames: 10,
            message_frames: 60,
        }
    }
}

pub struct Session {
    state: GameState,
    content: Arc<ContentLibrary>,
    rng: PcgRng,
    settings: SessionSettings,
    messages: MessageLog,
    enemy_timer: PhaseTimer,
    /// Events not yet handed to the event bus.
    outbox: Vec<Event>,
}

impl Session {
    /// Starts a new battle from the library's config.
    pub fn new(content: Arc<ContentLibrary>, seed: u64, settings: SessionSettings) -> Result<Self> {
        let rng = PcgRng;
        let state = new_battle(content.env(&rng), seed)?;
        info!(
            target: "runtime::session",
            seed,
            enemies = state.entities.living_enemy_count(),
            "battle started"
        );
        Ok(Self::from_state(content, state, settings))
    }

    /// Resumes a battle from an existing state.
    pub fn from_state(
        content: Arc<ContentLibrary>,
        state: GameState,
        settings: SessionSettings,
    ) -> Self {
        let mut enemy_timer = PhaseTimer::disarmed();
        if state.phase() == TurnPhase::EnemyTurn {
            enemy_timer.arm(settings.enemy_delay_frames);
        }
        Self {
            state,
            content,
            rng: PcgRng,
            settings,
            messages: MessageLog::new(settings.message_frames),
            enemy_timer,
            outbox: Vec::new(),
        }
    }

    /// Feeds one input event to the battle.
    ///
    /// Returns false when the event was ignored: outside the player phase, or
    /// for a hotkey with no weapon slot. A rejected command is still consumed
    /// and reported in the message log.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if self.state.phase() != TurnPhase::PlayerTurn {
            return false;
        }
        let Some(command) = event.command() else {
            return false;
        };

        let roster = Roster::of(&self.state);
        let env = self.content.env(&self.rng);
        let result = GameEngine::new(&mut self.state).apply(env, command);
        match result {
            Ok(events) => self.record(roster, events),
            Err(error) => {
                debug!(
                    target: "runtime::session",
                    command = ?command,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "command rejected"
                );
                self.log(error.to_string());
            }
        }
        true
    }

    /// Advances one frame: fades messages and counts the scheduling tick
    /// down, running the enemy phase when it fires.
    pub fn update(&mut self) {
        self.messages.tick();
        if self.enemy_timer.tick() {
            self.run_enemy_phase();
        }
    }

    pub fn get_player_data(&self) -> PlayerData {
        PlayerData::from_state(&self.state)
    }

    pub fn scene_view(&self) -> SceneView {
        let mut actors: Vec<ActorView> = self
            .state
            .entities
            .all_actors()
            .filter(|actor| actor.is_alive())
            .map(ActorView::new)
            .collect();
        actors.sort_by_key(|actor| (actor.position, actor.id));

        SceneView {
            tiles: self.content.config.tile_count(),
            phase: self.state.phase(),
            turn: self.state.turn.turn_count,
            victory_turn: self.content.config.victory_turn,
            actors,
            messages: self.messages.iter().map(str::to_string).collect(),
        }
    }

    /// Hands the current scene to `renderer`.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.render(&self.scene_view());
    }

    /// Drains events produced since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.phase().is_over()
    }

    /// True while the enemy phase is waiting for its tick.
    pub fn enemy_phase_pending(&self) -> bool {
        self.enemy_timer.is_armed()
    }

    fn run_enemy_phase(&mut self) {
        let roster = Roster::of(&self.state);
        let env = self.content.env(&self.rng);
        let result = GameEngine::new(&mut self.state).run_enemy_phase(env);
        match result {
            Ok(events) => self.record(roster, events),
            Err(error) => warn!(
                target: "runtime::session",
                error = %error,
                "enemy phase did not run"
            ),
        }
    }

    fn record(&mut self, mut roster: Roster, events: Vec<BattleEvent>) {
        roster.extend(&self.state);
        for event in events {
            trace_event(&event);
            for line in describe(&event, &roster) {
                self.log(line);
            }
            self.outbox.push(Event::Battle(event));
        }

        match self.state.phase() {
            TurnPhase::EnemyTurn if !self.enemy_timer.is_armed() => {
                self.enemy_timer.arm(self.settings.enemy_delay_frames);
            }
            TurnPhase::GameOver(outcome) => {
                self.enemy_timer.disarm();
                info!(
                    target: "runtime::session",
                    outcome = %outcome,
                    turn = self.state.turn.turn_count,
                    "battle over"
                );
            }
            _ => {}
        }
    }

    fn log(&mut self, line: String) {
        self.messages.push(line.clone());
        self.outbox.push(Event::Log(line));
    }
}

fn trace_event(event: &BattleEvent) {
    match event {
        BattleEvent::Strike(report) => debug!(
            target: "runtime::session",
            wielder = %report.wielder,
            weapon = %report.weapon,
            hits = report.hits.len(),
            notice = ?report.notice,
            "strike resolved"
        ),
        BattleEvent::Spawned {
            actor,
            template,
            position,
        } => info!(
            target: "runtime::session",
            actor = %actor,
            template = %template,
            position = %position,
            "enemy spawned"
        ),
        BattleEvent::PhaseChanged { phase, turn } => info!(
            target: "runtime::session",
            phase = ?phase,
            turn,
            "phase changed"
        ),
        BattleEvent::IntentStalled { actor, reason } => warn!(
            target: "runtime::session",
            actor = %actor,
            reason = %reason,
            "intent step skipped"
        ),
        other => trace!(target: "runtime::session", event = ?other, "battle event"),
    }
}
