//! Presentation timings and AI settings, loadable from TOML.
//!
//! Board size and win length are fixed and deliberately absent here.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Upper bound for any presentation delay
const MAX_DELAY_MS: u64 = 10_000;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timings: Timings,
    pub ai: AiConfig,
}

/// Delay between the begin and commit phase of each deferred operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub remove_ms: u64,
    pub undo_ms: u64,
    pub clear_ms: u64,
    pub instant_win_ms: u64,
    pub ai_move_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            remove_ms: 400,
            undo_ms: 600,
            clear_ms: 800,
            instant_win_ms: 600,
            ai_move_ms: 800,
        }
    }
}

impl Timings {
    /// No delays at all; every commit may follow its begin immediately.
    pub fn instant() -> Self {
        Timings {
            remove_ms: 0,
            undo_ms: 0,
            clear_ms: 0,
            instant_win_ms: 0,
            ai_move_ms: 0,
        }
    }

    pub fn remove(&self) -> Duration {
        Duration::from_millis(self.remove_ms)
    }

    pub fn undo(&self) -> Duration {
        Duration::from_millis(self.undo_ms)
    }

    pub fn clear(&self) -> Duration {
        Duration::from_millis(self.clear_ms)
    }

    pub fn instant_win(&self) -> Duration {
        Duration::from_millis(self.instant_win_ms)
    }

    pub fn ai_move(&self) -> Duration {
        Duration::from_millis(self.ai_move_ms)
    }
}

/// AI settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Fixed tie-break seed; entropy when absent
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timings;
        for (name, ms) in [
            ("remove_ms", t.remove_ms),
            ("undo_ms", t.undo_ms),
            ("clear_ms", t.clear_ms),
            ("instant_win_ms", t.instant_win_ms),
            ("ai_move_ms", t.ai_move_ms),
        ] {
            if ms > MAX_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "timings.{name} must be <= {MAX_DELAY_MS}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.remove(), Duration::from_millis(400));
        assert_eq!(t.undo(), Duration::from_millis(600));
        assert_eq!(t.clear(), Duration::from_millis(800));
        assert_eq!(t.instant_win(), Duration::from_millis(600));
        assert_eq!(t.ai_move(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[timings]\nai_move_ms = 200\n\n[ai]\nseed = 42\n").unwrap();
        assert_eq!(config.timings.ai_move_ms, 200);
        assert_eq!(config.timings.clear_ms, 800);
        assert_eq!(config.ai.seed, Some(42));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let err = AppConfig::from_toml("[timings]\nundo_ms = 60000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = AppConfig::from_toml("[timings\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/skill-gomoku.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
