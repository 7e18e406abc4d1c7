use crate::catalog::TechId;
use crate::clock::GameClock;
use crate::config::SimConfig;
use crate::map::{self, Province};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A specific date in the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u8, // 1-12
    pub day: u8,   // 1-31
}

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Date {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Self::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        }
    }

    /// Adds days to the current date with real month lengths and leap years.
    pub fn add_days(&self, days: u32) -> Self {
        let mut d = self.day as u32 + days;
        let mut m = self.month;
        let mut y = self.year;

        while d > Self::days_in_month(y, m) as u32 {
            d -= Self::days_in_month(y, m) as u32;
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
        }

        Self {
            year: y,
            month: m,
            day: d as u8,
        }
    }

    /// Three-letter month abbreviation, for message-log timestamps.
    pub fn month_abbrev(&self) -> &'static str {
        MONTH_ABBREV
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?")
    }
}

impl Default for Date {
    fn default() -> Self {
        START_DATE
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.day)
    }
}

/// Campaign start: January 1, 1936.
pub const START_DATE: Date = Date::new(1936, 1, 1);

/// Identifier for a nation in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationId {
    France,
    Uk,
    Usa,
    Ussr,
    Italy,
    Japan,
}

impl NationId {
    pub const ALL: [NationId; 6] = [
        NationId::France,
        NationId::Uk,
        NationId::Usa,
        NationId::Ussr,
        NationId::Italy,
        NationId::Japan,
    ];

    /// Display name shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            NationId::France => "France",
            NationId::Uk => "United Kingdom",
            NationId::Usa => "United States",
            NationId::Ussr => "Soviet Union",
            NationId::Italy => "Italy",
            NationId::Japan => "Japan",
        }
    }

    /// Stable lowercase key, used for CLI arguments and serialization.
    pub fn key(self) -> &'static str {
        match self {
            NationId::France => "france",
            NationId::Uk => "uk",
            NationId::Usa => "usa",
            NationId::Ussr => "ussr",
            NationId::Italy => "italy",
            NationId::Japan => "japan",
        }
    }
}

impl std::fmt::Display for NationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown nation: {0}")]
pub struct ParseNationError(String);

impl std::str::FromStr for NationId {
    type Err = ParseNationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NationId::ALL
            .iter()
            .find(|id| id.key() == s.to_lowercase())
            .copied()
            .ok_or_else(|| ParseNationError(s.to_string()))
    }
}

/// Registry entry for a known nation.
///
/// `is_at_war` is set when the player declares war and never cleared;
/// there is no peace mechanic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nation {
    pub name: String,
    pub alive: bool,
    pub is_at_war: bool,
}

impl Nation {
    fn new(id: NationId) -> Self {
        Self {
            name: id.name().to_string(),
            alive: true,
            is_at_war: false,
        }
    }
}

/// Standing force counts by branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilitaryState {
    pub infantry: u32,
    pub panzer: u32,
    pub air_wings: u32,
    pub naval_fleets: u32,
}

/// Research slot: at most one active technology at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchState {
    pub active: Option<TechId>,
    /// Days accumulated toward the active technology.
    pub progress: u32,
    pub completed: HashSet<TechId>,
}

/// Everything the player owns and controls.
///
/// `wars` and `allies` are insertion-ordered and duplicate-free; the
/// declare/offer command logic keeps them disjoint (soft check, not a
/// structural invariant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub nation: String,
    pub political_power: f32,
    pub civilian_factories: u32,
    pub military_factories: u32,
    pub manpower: i64,
    pub army_xp: f32,
    pub military: MilitaryState,
    pub research: ResearchState,
    pub wars: Vec<NationId>,
    pub allies: Vec<NationId>,
}

impl PlayerState {
    /// Percent completion of the active research, if any.
    pub fn research_progress_percent(&self) -> Option<u32> {
        self.research
            .active
            .map(|tech| (self.research.progress * 100) / tech.info().research_days)
    }

    /// One "War with X" line per active war; empty means at peace.
    pub fn wars_summary(&self) -> Vec<String> {
        self.wars
            .iter()
            .map(|nation| format!("War with {}", nation))
            .collect()
    }
}

/// The 1936 opening position.
fn starting_player() -> PlayerState {
    PlayerState {
        nation: "Germany".to_string(),
        political_power: 100.0,
        civilian_factories: 35,
        military_factories: 28,
        manpower: 1_200_000,
        army_xp: 0.0,
        military: MilitaryState {
            infantry: 24,
            panzer: 6,
            air_wings: 12,
            naval_fleets: 3,
        },
        research: ResearchState::default(),
        wars: Vec::new(),
        allies: Vec::new(),
    }
}

fn starting_nations() -> HashMap<NationId, Nation> {
    NationId::ALL
        .iter()
        .map(|&id| (id, Nation::new(id)))
        .collect()
}

/// Complete session state, owned by a single controller and passed by
/// `&mut` into tick and command handlers. No globals, no locks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub date: Date,
    pub clock: GameClock,
    pub rng_seed: u64,
    /// Current RNG state (must be deterministic for replay)
    pub rng_state: u64,
    pub player: PlayerState,
    pub nations: HashMap<NationId, Nation>,
    pub provinces: Vec<Province>,
    /// Index into `provinces`; purely a UI concern.
    pub selected_province: Option<usize>,
}

impl GameState {
    /// Build the starting state for a seed. The same seed always produces
    /// the same provinces and the same battle/alliance outcomes.
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        let provinces = map::generate_provinces(seed);
        log::debug!("Generated {} provinces from seed {}", provinces.len(), seed);

        Self {
            date: START_DATE,
            clock: GameClock::new(config.ticks_per_day),
            rng_seed: seed,
            rng_state: seed_to_state(seed),
            player: starting_player(),
            nations: starting_nations(),
            provinces,
            selected_province: None,
        }
    }

    /// Next value from the state-embedded xorshift generator, in [0, 1).
    ///
    /// Living inside the state means a snapshot replays identically; no
    /// external RNG handle has to be threaded through the systems.
    pub fn random_f32(&mut self) -> f32 {
        let mut x = self.rng_state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.rng_state = x;
        let bits = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
        ((bits >> 40) as f32) / ((1u64 << 24) as f32)
    }

    /// Fair coin from the state-embedded generator.
    pub fn random_bool(&mut self) -> bool {
        self.random_f32() < 0.5
    }

    /// Select the province containing the point, if any. Iteration keeps
    /// the last match so overlap semantics stay stable; a miss leaves the
    /// previous selection in place.
    pub fn select_province(&mut self, x: f32, y: f32) -> Option<usize> {
        let hit = map::province_at(&self.provinces, x, y);
        if let Some(index) = hit {
            self.selected_province = Some(index);
        }
        hit
    }

    /// Compute a deterministic checksum of the game state.
    ///
    /// Identical states produce identical checksums, so two runs from the
    /// same seed can be compared cheaply for divergence. The UI-only
    /// selection index is excluded.
    pub fn checksum(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();

        self.date.hash(&mut hasher);
        self.rng_state.hash(&mut hasher);
        self.clock.current_tick.hash(&mut hasher);
        self.clock.paused.hash(&mut hasher);
        self.clock.speed.multiplier().hash(&mut hasher);

        let p = &self.player;
        p.nation.hash(&mut hasher);
        p.political_power.to_bits().hash(&mut hasher);
        p.civilian_factories.hash(&mut hasher);
        p.military_factories.hash(&mut hasher);
        p.manpower.hash(&mut hasher);
        p.army_xp.to_bits().hash(&mut hasher);
        p.military.infantry.hash(&mut hasher);
        p.military.panzer.hash(&mut hasher);
        p.military.air_wings.hash(&mut hasher);
        p.military.naval_fleets.hash(&mut hasher);
        p.research.active.hash(&mut hasher);
        p.research.progress.hash(&mut hasher);

        // Completed set (sorted for determinism)
        let mut completed: Vec<_> = p.research.completed.iter().collect();
        completed.sort();
        completed.hash(&mut hasher);

        p.wars.hash(&mut hasher);
        p.allies.hash(&mut hasher);

        // Nations (sorted by id)
        let mut ids: Vec<_> = self.nations.keys().collect();
        ids.sort();
        for id in ids {
            let n = &self.nations[id];
            id.hash(&mut hasher);
            n.name.hash(&mut hasher);
            n.alive.hash(&mut hasher);
            n.is_at_war.hash(&mut hasher);
        }

        // Provinces (generation order)
        for province in &self.provinces {
            province.id.hash(&mut hasher);
            province.x.to_bits().hash(&mut hasher);
            province.y.to_bits().hash(&mut hasher);
            province.owner.hash(&mut hasher);
            province.color.hash(&mut hasher);
            province.victory_points.hash(&mut hasher);
        }

        hasher.finish()
    }
}

/// Initialize the xorshift state from a seed. Zero is the one value the
/// generator cannot leave, so it is remapped.
fn seed_to_state(seed: u64) -> u64 {
    if seed == 0 {
        0x9E37_79B9_7F4A_7C15
    } else {
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_simple_add() {
        let d = Date::new(1936, 1, 1);
        assert_eq!(d.add_days(1), Date::new(1936, 1, 2));
    }

    #[test]
    fn test_date_month_rollover() {
        let d = Date::new(1936, 1, 31);
        assert_eq!(d.add_days(1), Date::new(1936, 2, 1));
    }

    #[test]
    fn test_date_leap_year_february() {
        // 1936 is a leap year
        let d = Date::new(1936, 2, 28);
        assert_eq!(d.add_days(1), Date::new(1936, 2, 29));
        assert_eq!(d.add_days(2), Date::new(1936, 3, 1));
    }

    #[test]
    fn test_date_non_leap_february() {
        let d = Date::new(1937, 2, 28);
        assert_eq!(d.add_days(1), Date::new(1937, 3, 1));
    }

    #[test]
    fn test_date_year_rollover() {
        let d = Date::new(1936, 12, 31);
        assert_eq!(d.add_days(1), Date::new(1937, 1, 1));
    }

    #[test]
    fn test_date_display() {
        assert_eq!(Date::new(1936, 1, 1).to_string(), "1936.1.1");
        assert_eq!(Date::new(1936, 1, 1).month_abbrev(), "Jan");
    }

    #[test]
    fn test_nation_id_round_trip() {
        for id in NationId::ALL {
            assert_eq!(id.key().parse::<NationId>().unwrap(), id);
        }
        assert!("atlantis".parse::<NationId>().is_err());
    }

    #[test]
    fn test_starting_state() {
        let state = GameState::new(42, &SimConfig::default());
        assert_eq!(state.date, Date::new(1936, 1, 1));
        assert_eq!(state.player.nation, "Germany");
        assert_eq!(state.player.political_power, 100.0);
        assert_eq!(state.player.manpower, 1_200_000);
        assert_eq!(state.player.military.infantry, 24);
        assert_eq!(state.nations.len(), 6);
        assert!(state.nations.values().all(|n| n.alive && !n.is_at_war));
        assert!(state.player.wars.is_empty());
        assert!(state.player.allies.is_empty());
    }

    #[test]
    fn test_embedded_rng_deterministic() {
        let config = SimConfig::default();
        let mut a = GameState::new(7, &config);
        let mut b = GameState::new(7, &config);

        let rolls_a: Vec<f32> = (0..16).map(|_| a.random_f32()).collect();
        let rolls_b: Vec<f32> = (0..16).map(|_| b.random_f32()).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|r| (0.0..1.0).contains(r)));
    }

    #[test]
    fn test_zero_seed_still_generates() {
        let mut state = GameState::new(0, &SimConfig::default());
        let first = state.random_f32();
        let second = state.random_f32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_checksum_determinism() {
        let config = SimConfig::default();
        let a = GameState::new(99, &config);
        let b = GameState::new(99, &config);
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_checksum_sensitivity() {
        let config = SimConfig::default();
        let a = GameState::new(99, &config);
        let mut b = GameState::new(99, &config);
        b.player.manpower += 1;
        assert_ne!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_selection_ignores_misses() {
        let mut state = GameState::new(5, &SimConfig::default());
        // First cell is centered at (40, 80) with half-extents 30x70.
        assert_eq!(state.select_province(40.0, 80.0), Some(0));
        assert_eq!(state.selected_province, Some(0));

        // A miss keeps the previous selection.
        assert_eq!(state.select_province(-500.0, -500.0), None);
        assert_eq!(state.selected_province, Some(0));
    }

    #[test]
    fn test_research_progress_percent() {
        let mut state = GameState::new(1, &SimConfig::default());
        assert_eq!(state.player.research_progress_percent(), None);

        state.player.research.active = Some(TechId::Infantry); // 100 days
        state.player.research.progress = 25;
        assert_eq!(state.player.research_progress_percent(), Some(25));
    }

    #[test]
    fn test_wars_summary() {
        let mut state = GameState::new(1, &SimConfig::default());
        assert!(state.player.wars_summary().is_empty());

        state.player.wars.push(NationId::France);
        state.player.wars.push(NationId::Italy);
        assert_eq!(
            state.player.wars_summary(),
            vec!["War with France", "War with Italy"]
        );
    }
}
