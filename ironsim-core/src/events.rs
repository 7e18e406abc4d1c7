//! Structured simulation events.
//!
//! Tick and command handlers append events to a caller-provided buffer;
//! observers turn them into user-facing messages or JSONL records.
//!
//! Uses serde's tag format for clean JSONL output:
//! ```json
//! {"type":"war_declared","nation":"france"}
//! ```

use crate::catalog::TechId;
use crate::state::NationId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Campaign initialized.
    GameStarted { nation: String },
    Paused,
    Resumed,
    SpeedChanged { speed: u32 },
    /// A new infantry division entered the army.
    DivisionRecruited,
    ResearchStarted { tech: TechId },
    ResearchCompleted { tech: TechId },
    /// Side effect of completing a technology.
    FactoriesGained { count: u32 },
    WarDeclared { nation: NationId },
    AllianceAccepted { nation: NationId },
    AllianceRejected { nation: NationId },
    BattleVictory { nation: NationId },
    BattleDefeat { nation: NationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonl_shape() {
        let event = GameEvent::WarDeclared {
            nation: NationId::France,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"war_declared","nation":"france"}"#);

        let unit = GameEvent::Paused;
        assert_eq!(serde_json::to_string(&unit).unwrap(), r#"{"type":"paused"}"#);
    }

    #[test]
    fn test_round_trip() {
        let event = GameEvent::ResearchCompleted {
            tech: TechId::Industry,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
