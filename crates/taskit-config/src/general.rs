//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

/// Build mode. Only affects how much gets logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Tracing filter used when neither `TASKIT_LOG` nor a CLI flag says otherwise.
    #[must_use]
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "warn",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub mode: Mode,

    /// Default result limit for list commands; 0 lists everything.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.default_limit, 50);
    }

    #[test]
    fn mode_sets_log_level() {
        assert_eq!(Mode::Development.default_log_level(), "debug");
        assert_eq!(Mode::Production.default_log_level(), "warn");
    }
}
