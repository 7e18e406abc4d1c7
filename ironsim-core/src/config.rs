use serde::{Deserialize, Serialize};

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ticks per in-game day.
    pub ticks_per_day: u32,
    /// Log a state checksum every N in-game days (0 = disabled).
    pub checksum_frequency: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_day: 24,
            checksum_frequency: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.ticks_per_day, 24);
        assert_eq!(config.checksum_frequency, 30);
    }
}
