use crate::state::GameState;
use tracing::instrument;

/// Political power gained per day.
pub const DAILY_POLITICAL_POWER: f32 = 0.2;
/// Manpower gained per day.
pub const DAILY_MANPOWER: i64 = 100;
/// Army experience gained per day, per active war.
pub const WAR_ARMY_XP: f32 = 0.5;

/// Runs daily resource accrual.
///
/// Political power and manpower grow unconditionally; army experience
/// scales with the number of active wars.
#[instrument(skip_all, name = "accrual")]
pub fn run_accrual_tick(state: &mut GameState) {
    let player = &mut state.player;
    player.political_power += DAILY_POLITICAL_POWER;
    player.manpower += DAILY_MANPOWER;
    player.army_xp += WAR_ARMY_XP * player.wars.len() as f32;
}
