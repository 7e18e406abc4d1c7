use crate::catalog::TechId;
use crate::state::{GameState, NationId};
use crate::step::ActionError;
use serde::{Deserialize, Serialize};

/// Player actions, applied synchronously outside the tick loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    RecruitDivision,
    StartResearch { tech: TechId },
    DeclareWar { target: NationId },
    OfferAlliance { target: NationId },
}

impl Command {
    /// Build a research command from an optional UI selection.
    pub fn start_research(selection: Option<TechId>) -> Result<Self, ActionError> {
        selection
            .map(|tech| Command::StartResearch { tech })
            .ok_or(ActionError::NoSelection("technology to research"))
    }

    /// Build a war declaration from an optional UI selection.
    pub fn declare_war(selection: Option<NationId>) -> Result<Self, ActionError> {
        selection
            .map(|target| Command::DeclareWar { target })
            .ok_or(ActionError::NoSelection("nation"))
    }

    /// Build an alliance offer from an optional UI selection.
    pub fn offer_alliance(selection: Option<NationId>) -> Result<Self, ActionError> {
        selection
            .map(|target| Command::OfferAlliance { target })
            .ok_or(ActionError::NoSelection("nation"))
    }
}

/// Enumerate the commands that are currently legal.
///
/// A command in this list may still fail (alliance offers can be
/// rejected), but it will never fail a precondition check.
pub fn available_commands(state: &GameState) -> Vec<Command> {
    let mut commands = Vec::new();
    let player = &state.player;

    if player.manpower >= crate::step::RECRUIT_MANPOWER_COST {
        commands.push(Command::RecruitDivision);
    }

    for tech in TechId::ALL {
        if !player.research.completed.contains(&tech) && player.political_power >= tech.info().cost
        {
            commands.push(Command::StartResearch { tech });
        }
    }

    for nation in NationId::ALL {
        if !player.wars.contains(&nation) {
            commands.push(Command::DeclareWar { target: nation });
        }
        if !player.allies.contains(&nation) && !player.wars.contains(&nation) {
            commands.push(Command::OfferAlliance { target: nation });
        }
    }

    commands
}
