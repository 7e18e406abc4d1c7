use crate::catalog::TechId;
use crate::events::GameEvent;
use crate::state::GameState;
use tracing::instrument;

/// Civilian factories granted by completing industrial technology.
pub const INDUSTRY_FACTORY_BONUS: u32 = 2;

/// Runs daily research progress.
///
/// The active technology gains one day of progress; on reaching its
/// required duration it is marked completed exactly once, the slot is
/// cleared, and the technology's side effect is applied.
#[instrument(skip_all, name = "research")]
pub fn run_research_tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(active) = state.player.research.active else {
        return;
    };

    state.player.research.progress += 1;

    if state.player.research.progress >= active.info().research_days {
        state.player.research.completed.insert(active);
        state.player.research.active = None;
        state.player.research.progress = 0;
        log::debug!("Research completed: {}", active);
        events.push(GameEvent::ResearchCompleted { tech: active });
        apply_tech_effect(state, active, events);
    }
}

fn apply_tech_effect(state: &mut GameState, tech: TechId, events: &mut Vec<GameEvent>) {
    match tech {
        TechId::Industry => {
            state.player.civilian_factories += INDUSTRY_FACTORY_BONUS;
            events.push(GameEvent::FactoriesGained {
                count: INDUSTRY_FACTORY_BONUS,
            });
        }
        // Equipment technologies have no immediate state effect.
        TechId::Infantry | TechId::Tanks | TechId::Fighter => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GameStateBuilder;

    #[test]
    fn test_progress_accumulates() {
        let mut state = GameStateBuilder::new()
            .researching(TechId::Tanks, 0)
            .build();
        let mut events = Vec::new();

        run_research_tick(&mut state, &mut events);

        assert_eq!(state.player.research.progress, 1);
        assert_eq!(state.player.research.active, Some(TechId::Tanks));
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_active_research_is_noop() {
        let mut state = GameStateBuilder::new().build();
        let mut events = Vec::new();

        run_research_tick(&mut state, &mut events);

        assert_eq!(state.player.research.progress, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_completion_clears_slot() {
        let mut state = GameStateBuilder::new()
            .researching(TechId::Tanks, TechId::Tanks.info().research_days - 1)
            .build();
        let mut events = Vec::new();

        run_research_tick(&mut state, &mut events);

        assert!(state.player.research.completed.contains(&TechId::Tanks));
        assert_eq!(state.player.research.active, None);
        assert_eq!(state.player.research.progress, 0);
        assert_eq!(
            events,
            vec![GameEvent::ResearchCompleted {
                tech: TechId::Tanks
            }]
        );
    }

    #[test]
    fn test_industry_grants_factories() {
        let mut state = GameStateBuilder::new()
            .researching(TechId::Industry, TechId::Industry.info().research_days - 1)
            .build();
        let before = state.player.civilian_factories;
        let mut events = Vec::new();

        run_research_tick(&mut state, &mut events);

        assert_eq!(state.player.civilian_factories, before + 2);
        assert!(events.contains(&GameEvent::FactoriesGained { count: 2 }));
    }
}
