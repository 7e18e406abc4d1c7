//! # Iron Dominion Simulation Core
//!
//! Deterministic day-tick simulation engine for a nation-management game.
//!
//! This crate implements the core loop: state → commands → state
//! transitions, with structured events flowing to observer sinks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Driver    │────▶│   Command    │────▶│ execute_cmd  │
//! │  (UI/CLI)   │     │ (player act) │     │ run_tick     │
//! └─────────────┘     └──────────────┘     └──────┬───────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼───────┐
//!                     │  Observers   │◀────│  GameState   │
//!                     │ (msg log,    │     │  + events    │
//!                     │  JSONL)      │     └──────────────┘
//!                     └──────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`GameState`] | Complete session state (player, nations, provinces, clock) |
//! | [`Command`] | Player actions (recruit, research, declare war, offer alliance) |
//! | [`fire`] / [`run_tick`] | The fixed-rate tick loop; 24 ticks = 1 day |
//! | [`advance_day`] | The once-per-day state transition |
//! | [`execute_command`] | Synchronous command execution with typed errors |
//! | [`SimObserver`] | Trait for event sinks (message log, JSONL stream) |
//!
//! ## Determinism
//!
//! All randomness (battles, alliance acceptance, province generation)
//! derives from the seed carried in [`GameState`], so identical seeds
//! replay identically. [`GameState::checksum`] detects divergence.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod events;
pub mod input;
pub mod map;
pub mod observer;
pub mod state;
pub mod step;
pub mod systems;
pub mod testing;


pub use catalog::{TechId, Technology};
pub use clock::{GameClock, GameSpeed};
pub use config::SimConfig;
pub use events::GameEvent;
pub use input::{available_commands, Command};
pub use map::{generate_provinces, province_at, Province};
pub use observer::event_log::JsonlEventLog;
pub use observer::message_log::{render_event, Message, MessageLog, Severity};
pub use observer::{ObserverError, ObserverRegistry, SimObserver};
pub use state::{Date, GameState, Nation, NationId, PlayerState, START_DATE};
pub use step::{
    advance_day, execute_command, fire, run_tick, set_speed, toggle_pause, ActionError,
    RECRUIT_MANPOWER_COST,
};
