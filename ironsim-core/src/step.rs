//! Simulation stepping and command execution.
//!
//! Two entry points mutate the state: the tick loop (`fire`/`run_tick`),
//! driven at a fixed wall-clock rate, and `execute_command`, invoked
//! synchronously for player actions. Both take `&mut GameState`, so a
//! single-writer embedder needs no locking.

use crate::clock::GameSpeed;
use crate::events::GameEvent;
use crate::input::Command;
use crate::observer::message_log::Severity;
use crate::state::{GameState, NationId};
use crate::systems;
use thiserror::Error;
use tracing::instrument;

/// Manpower required to recruit one infantry division.
pub const RECRUIT_MANPOWER_COST: i64 = 1000;

/// Player-action failures. All are non-fatal and user-facing; the state
/// is left unchanged on every failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Not enough manpower to recruit!")]
    InsufficientManpower,

    #[error("Please select a {0}")]
    NoSelection(&'static str),

    #[error("Technology already researched!")]
    AlreadyResearched,

    #[error("Not enough Political Power!")]
    InsufficientPoliticalPower,

    #[error("Already at war with {0}!")]
    AlreadyAtWar(NationId),

    #[error("Already allied with {0}!")]
    AlreadyAllied(NationId),

    #[error("Cannot ally with {0}, you are at war!")]
    CannotAllyAtWar(NationId),
}

impl ActionError {
    /// How the failure should be presented to the player.
    pub fn severity(&self) -> Severity {
        match self {
            ActionError::NoSelection(_)
            | ActionError::AlreadyResearched
            | ActionError::AlreadyAtWar(_)
            | ActionError::AlreadyAllied(_) => Severity::Warning,
            ActionError::InsufficientManpower
            | ActionError::InsufficientPoliticalPower
            | ActionError::CannotAllyAtWar(_) => Severity::Danger,
        }
    }
}

/// One wall-clock firing: advance as many ticks as the speed multiplier
/// dictates.
pub fn fire(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for _ in 0..state.clock.speed.multiplier() {
        run_tick(state, events);
    }
}

/// Advance one tick. No-op while paused; every `ticks_per_day` ticks the
/// daily update runs exactly once.
pub fn run_tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.clock.paused {
        return;
    }

    state.clock.current_tick += 1;
    if state.clock.current_tick % u64::from(state.clock.ticks_per_day) == 0 {
        advance_day(state, events);
    }
}

/// The once-per-day state transition, applied in fixed order:
/// calendar, resource accrual, research progress, war resolution.
///
/// All mutations apply unconditionally once triggered; there is no
/// failure mode and no rollback.
#[instrument(skip_all, name = "daily_update")]
pub fn advance_day(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.date = state.date.add_days(1);

    systems::run_accrual_tick(state);
    systems::run_research_tick(state, events);
    systems::run_war_tick(state, events);

    log::trace!("Daily update complete: {}", state.date);
}

/// Flip the pause flag.
pub fn toggle_pause(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.clock.paused = !state.clock.paused;
    events.push(if state.clock.paused {
        GameEvent::Paused
    } else {
        GameEvent::Resumed
    });
}

/// Change how many ticks each wall-clock firing advances.
pub fn set_speed(state: &mut GameState, speed: GameSpeed, events: &mut Vec<GameEvent>) {
    state.clock.speed = speed;
    events.push(GameEvent::SpeedChanged {
        speed: speed.multiplier(),
    });
}

/// Execute a player action synchronously.
///
/// On error the state is untouched: every check happens before the first
/// mutation of its command.
pub fn execute_command(
    state: &mut GameState,
    cmd: &Command,
    events: &mut Vec<GameEvent>,
) -> Result<(), ActionError> {
    match cmd {
        Command::RecruitDivision => {
            if state.player.manpower < RECRUIT_MANPOWER_COST {
                return Err(ActionError::InsufficientManpower);
            }
            state.player.manpower -= RECRUIT_MANPOWER_COST;
            state.player.military.infantry += 1;
            events.push(GameEvent::DivisionRecruited);
            Ok(())
        }

        Command::StartResearch { tech } => {
            if state.player.research.completed.contains(tech) {
                return Err(ActionError::AlreadyResearched);
            }
            let cost = tech.info().cost;
            if state.player.political_power < cost {
                return Err(ActionError::InsufficientPoliticalPower);
            }
            // Any in-progress research is silently abandoned, no refund.
            state.player.political_power -= cost;
            state.player.research.active = Some(*tech);
            state.player.research.progress = 0;
            events.push(GameEvent::ResearchStarted { tech: *tech });
            Ok(())
        }

        Command::DeclareWar { target } => {
            if state.player.wars.contains(target) {
                return Err(ActionError::AlreadyAtWar(*target));
            }
            state.player.wars.push(*target);
            if let Some(nation) = state.nations.get_mut(target) {
                nation.is_at_war = true;
            }
            events.push(GameEvent::WarDeclared { nation: *target });
            Ok(())
        }

        Command::OfferAlliance { target } => {
            if state.player.allies.contains(target) {
                return Err(ActionError::AlreadyAllied(*target));
            }
            if state.player.wars.contains(target) {
                return Err(ActionError::CannotAllyAtWar(*target));
            }
            // Fair coin: the offer is accepted or rejected.
            if state.random_bool() {
                state.player.allies.push(*target);
                events.push(GameEvent::AllianceAccepted { nation: *target });
            } else {
                events.push(GameEvent::AllianceRejected { nation: *target });
            }
            Ok(())
        }
    }
}
