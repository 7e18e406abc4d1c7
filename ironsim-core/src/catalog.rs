//! Static technology catalog.
//!
//! Entries are immutable constants; `TechId` is the handle that flows
//! through commands, research state and events.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a research item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechId {
    Infantry,
    Tanks,
    Fighter,
    Industry,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Technology {
    pub name: &'static str,
    /// In-game days of research required.
    pub research_days: u32,
    /// Political-power cost to start.
    pub cost: f32,
}

impl TechId {
    pub const ALL: [TechId; 4] = [
        TechId::Infantry,
        TechId::Tanks,
        TechId::Fighter,
        TechId::Industry,
    ];

    pub fn info(self) -> Technology {
        match self {
            TechId::Infantry => Technology {
                name: "Infantry Equipment I",
                research_days: 100,
                cost: 50.0,
            },
            TechId::Tanks => Technology {
                name: "Basic Tank",
                research_days: 150,
                cost: 75.0,
            },
            TechId::Fighter => Technology {
                name: "Fighter I",
                research_days: 120,
                cost: 60.0,
            },
            TechId::Industry => Technology {
                name: "Industrial Technology",
                research_days: 200,
                cost: 100.0,
            },
        }
    }

    /// Stable lowercase key, used for CLI arguments and serialization.
    pub fn key(self) -> &'static str {
        match self {
            TechId::Infantry => "infantry",
            TechId::Tanks => "tanks",
            TechId::Fighter => "fighter",
            TechId::Industry => "industry",
        }
    }
}

impl std::fmt::Display for TechId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown technology: {0}")]
pub struct ParseTechError(String);

impl std::str::FromStr for TechId {
    type Err = ParseTechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechId::ALL
            .iter()
            .find(|id| id.key() == s.to_lowercase())
            .copied()
            .ok_or_else(|| ParseTechError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_constants() {
        assert_eq!(TechId::Infantry.info().research_days, 100);
        assert_eq!(TechId::Infantry.info().cost, 50.0);
        assert_eq!(TechId::Tanks.info().cost, 75.0);
        assert_eq!(TechId::Fighter.info().cost, 60.0);
        assert_eq!(TechId::Industry.info().research_days, 200);
        assert_eq!(TechId::Industry.info().cost, 100.0);
    }

    #[test]
    fn test_tech_id_round_trip() {
        for id in TechId::ALL {
            assert_eq!(id.key().parse::<TechId>().unwrap(), id);
        }
        assert!("alchemy".parse::<TechId>().is_err());
    }

    #[test]
    fn test_display_uses_catalog_name() {
        assert_eq!(TechId::Tanks.to_string(), "Basic Tank");
    }
}
