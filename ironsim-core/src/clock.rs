use serde::{Deserialize, Serialize};

/// Wall-clock speed multiplier: how many ticks each firing advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSpeed {
    #[default]
    One,
    Two,
    Three,
}

impl GameSpeed {
    pub fn multiplier(self) -> u32 {
        match self {
            GameSpeed::One => 1,
            GameSpeed::Two => 2,
            GameSpeed::Three => 3,
        }
    }

    pub fn from_multiplier(n: u32) -> Option<Self> {
        match n {
            1 => Some(GameSpeed::One),
            2 => Some(GameSpeed::Two),
            3 => Some(GameSpeed::Three),
            _ => None,
        }
    }
}

/// Tick counter for the fixed-rate simulation loop.
///
/// The driver fires at a fixed wall-clock period; each firing advances
/// `speed.multiplier()` ticks, and every `ticks_per_day` ticks one in-game
/// day elapses. Tick counting has no bearing on randomness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub paused: bool,
    pub speed: GameSpeed,
    pub ticks_per_day: u32,
    pub current_tick: u64,
}

impl GameClock {
    /// `ticks_per_day` must be at least 1.
    pub fn new(ticks_per_day: u32) -> Self {
        Self {
            paused: false,
            speed: GameSpeed::One,
            ticks_per_day,
            current_tick: 0,
        }
    }

    /// Whole in-game days elapsed since the campaign start.
    pub fn current_day(&self) -> u64 {
        self.current_tick / u64::from(self.ticks_per_day)
    }
}
