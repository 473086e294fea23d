/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest valid lane index. Tiles run from `0` to `board_size` inclusive.
    pub board_size: i32,
    /// Completed player turns required before an empty board counts as victory.
    pub victory_turn: u32,
    /// Enemies spawn after every `spawn_interval`-th completed player turn.
    pub spawn_interval: u32,
    /// Number of enemies spawned per wave.
    pub spawn_count: u32,
    /// Turns the player must wait between two position swaps.
    pub swap_cooldown: u32,
    pub player: PlayerConfig,
    /// Enemies present when the battle starts.
    pub opening_enemies: Vec<OpeningSpawn>,
    pub status: StatusRules,
}

/// Starting loadout of the player actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub health: i32,
    pub position: i32,
    pub sequence_limit: usize,
    /// Weapon template names, in hotkey order.
    pub weapons: Vec<String>,
    pub skill_points: Vec<(String, u32)>,
    /// Skill names the player may learn from the start.
    pub available_skills: Vec<String>,
}

/// Placement of an enemy at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningSpawn {
    pub monster: String,
    pub position: i32,
}

/// Tunables of the status effect lifecycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusRules {
    /// Duration restored on an illness when one stack expires.
    pub illness_duration: i32,
    /// Duration restored on a regular effect when one stack expires.
    pub effect_duration: i32,
    /// Minimum stress stacks before conversion is attempted.
    pub conversion_threshold: u32,
    /// Conversion chance added per stack above `conversion_threshold - 1`.
    pub conversion_step: f32,
    pub conversion_cap: f32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Default highest lane index (nine tiles).
    pub const BOARD_SIZE: i32 = 8;
    /// Hard capacity of an action queue; `sequence_limit` is clamped to it.
    pub const MAX_SEQUENCE_SLOTS: usize = 16;
    /// Maximum number of hotkey-addressable weapon slots.
    pub const MAX_WEAPON_HOTKEYS: usize = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VICTORY_TURN: u32 = 50;
    pub const DEFAULT_SPAWN_INTERVAL: u32 = 10;
    pub const DEFAULT_SPAWN_COUNT: u32 = 2;
    pub const DEFAULT_SWAP_COOLDOWN: u32 = 3;

    pub fn new() -> Self {
        Self {
            board_size: Self::BOARD_SIZE,
            victory_turn: Self::DEFAULT_VICTORY_TURN,
            spawn_interval: Self::DEFAULT_SPAWN_INTERVAL,
            spawn_count: Self::DEFAULT_SPAWN_COUNT,
            swap_cooldown: Self::DEFAULT_SWAP_COOLDOWN,
            player: PlayerConfig::default(),
            opening_enemies: Vec::new(),
            status: StatusRules::default(),
        }
    }

    /// Returns true if `position` lies on the lane.
    #[inline]
    pub fn in_bounds(&self, position: i32) -> bool {
        (0..=self.board_size).contains(&position)
    }

    /// Number of tiles on the lane.
    pub fn tile_count(&self) -> usize {
        (self.board_size.max(0) + 1) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: 100,
            position: 2,
            sequence_limit: 4,
            weapons: Vec::new(),
            skill_points: vec![
                ("tech".to_string(), 5),
                ("lang".to_string(), 5),
                ("algo".to_string(), 0),
                ("skill".to_string(), 1),
            ],
            available_skills: Vec::new(),
        }
    }
}

impl StatusRules {
    /// Conversion probability for a stress effect carrying `stack` stacks.
    pub fn conversion_chance(&self, stack: u32) -> f32 {
        if stack < self.conversion_threshold {
            return 0.0;
        }
        let steps = stack + 1 - self.conversion_threshold;
        (self.conversion_step * steps as f32).min(self.conversion_cap)
    }
}

impl Default for StatusRules {
    fn default() -> Self {
        Self {
            illness_duration: 50,
            effect_duration: 5,
            conversion_threshold: 3,
            conversion_step: 0.2,
            conversion_cap: 0.9,
        }
    }
}
