//! Time tracker periods.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_display_tick_secs() -> u64 {
    1
}

const fn default_autosave_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Seconds between display ticks. Each tick adds this many seconds.
    #[serde(default = "default_display_tick_secs")]
    pub display_tick_secs: u64,

    /// Seconds between writes of the live count into the task.
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            display_tick_secs: default_display_tick_secs(),
            autosave_secs: default_autosave_secs(),
        }
    }
}

impl TrackerConfig {
    /// Display tick period, never shorter than one second.
    #[must_use]
    pub fn display_period(&self) -> Duration {
        Duration::from_secs(self.display_tick_secs.max(1))
    }

    /// Auto-save period, never shorter than one second.
    #[must_use]
    pub fn autosave_period(&self) -> Duration {
        Duration::from_secs(self.autosave_secs.max(1))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if auto-save would run more often
    /// than the display tick, which would write the same count repeatedly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autosave_period() < self.display_period() {
            return Err(ConfigError::invalid(
                "tracker.autosave_secs",
                format!(
                    "{} is shorter than display_tick_secs ({})",
                    self.autosave_secs, self.display_tick_secs
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_and_five_seconds() {
        let config = TrackerConfig::default();
        assert_eq!(config.display_period(), Duration::from_secs(1));
        assert_eq!(config.autosave_period(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_periods_clamp_to_one_second() {
        let config = TrackerConfig {
            display_tick_secs: 0,
            autosave_secs: 0,
        };
        assert_eq!(config.display_period(), Duration::from_secs(1));
        assert_eq!(config.autosave_period(), Duration::from_secs(1));
    }

    #[test]
    fn autosave_faster_than_display_is_rejected() {
        let config = TrackerConfig {
            display_tick_secs: 10,
            autosave_secs: 5,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("tracker.autosave_secs"));
    }
}
