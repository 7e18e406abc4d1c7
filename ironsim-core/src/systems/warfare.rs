use crate::events::GameEvent;
use crate::state::GameState;
use tracing::instrument;

/// Chance per war, per day, of a battle being fought.
pub const DAILY_BATTLE_CHANCE: f32 = 0.01;
/// Army experience gained from a victorious battle.
pub const VICTORY_ARMY_XP: f32 = 10.0;

/// Runs daily war resolution.
///
/// For each active war, in declaration order, roll for a battle; a fair
/// coin then decides the outcome. Defeats carry no losses, and no
/// territory changes hands.
#[instrument(skip_all, name = "warfare")]
pub fn run_war_tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let wars = state.player.wars.clone();
    for nation in wars {
        if state.random_f32() >= DAILY_BATTLE_CHANCE {
            continue;
        }

        if state.random_bool() {
            state.player.army_xp += VICTORY_ARMY_XP;
            events.push(GameEvent::BattleVictory { nation });
        } else {
            events.push(GameEvent::BattleDefeat { nation });
        }
    }
}
