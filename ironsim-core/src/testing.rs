//! Test helpers.

use crate::catalog::TechId;
use crate::clock::GameSpeed;
use crate::config::SimConfig;
use crate::state::{Date, GameState, NationId};

/// Fluent builder over the standard starting state.
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: GameState::new(seed, &SimConfig::default()),
        }
    }

    pub fn date(mut self, year: i32, month: u8, day: u8) -> Self {
        self.state.date = Date::new(year, month, day);
        self
    }

    pub fn political_power(mut self, value: f32) -> Self {
        self.state.player.political_power = value;
        self
    }

    pub fn manpower(mut self, value: i64) -> Self {
        self.state.player.manpower = value;
        self
    }

    pub fn speed(mut self, speed: GameSpeed) -> Self {
        self.state.clock.speed = speed;
        self
    }

    pub fn paused(mut self) -> Self {
        self.state.clock.paused = true;
        self
    }

    /// Add an active war, mirroring what DeclareWar would do.
    pub fn at_war_with(mut self, nation: NationId) -> Self {
        if !self.state.player.wars.contains(&nation) {
            self.state.player.wars.push(nation);
        }
        if let Some(entry) = self.state.nations.get_mut(&nation) {
            entry.is_at_war = true;
        }
        self
    }

    pub fn allied_with(mut self, nation: NationId) -> Self {
        if !self.state.player.allies.contains(&nation) {
            self.state.player.allies.push(nation);
        }
        self
    }

    pub fn researching(mut self, tech: TechId, progress: u32) -> Self {
        self.state.player.research.active = Some(tech);
        self.state.player.research.progress = progress;
        self
    }

    pub fn completed(mut self, tech: TechId) -> Self {
        self.state.player.research.completed.insert(tech);
        self
    }

    pub fn build(self) -> GameState {
        self.state
    }
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
