//! Configuration management for docwords
//!
//! This module handles loading, parsing, and managing the user
//! preferences that decide *when* completion fires and how the proposal
//! list is shaped. Sources:
//! - Configuration file (TOML format)
//! - Default values
//!
//! The preferences configure the surrounding machinery (enable flag,
//! idle delay, keybindings, limits), not the word-extraction algorithm
//! itself.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::completion::SortPolicy;
use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion behavior configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeybindingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Offer completions automatically while typing
    #[serde(default = "default_autocompletion_enabled")]
    pub autocompletion_enabled: bool,

    /// Typing-inactivity delay before automatic completion, in milliseconds
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: u64,

    /// Minimum codepoint length a word needs to be offered
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Hard upper bound on the number of proposals per request
    #[serde(default = "default_proposal_cap")]
    pub proposal_cap: usize,

    /// Ordering applied to the proposal list
    #[serde(default)]
    pub sort: SortPolicy,
}

/// Key chords that ask for completion explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingConfig {
    /// Request the completion popup
    #[serde(default = "default_user_request_keys")]
    pub user_request: String,

    /// Show extra information for the selected proposal
    #[serde(default = "default_show_info_keys")]
    pub show_info: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_autocompletion_enabled() -> bool {
    true
}

fn default_idle_delay_ms() -> u64 {
    300
}

fn default_min_word_length() -> usize {
    3
}

fn default_proposal_cap() -> usize {
    500
}

fn default_user_request_keys() -> String {
    "<Control>Return".to_string()
}

fn default_show_info_keys() -> String {
    "<Control>i".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completion: CompletionConfig::default(),
            keybindings: KeybindingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            autocompletion_enabled: default_autocompletion_enabled(),
            idle_delay_ms: default_idle_delay_ms(),
            min_word_length: default_min_word_length(),
            proposal_cap: default_proposal_cap(),
            sort: SortPolicy::default(),
        }
    }
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            user_request: default_user_request_keys(),
            show_info: default_show_info_keys(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, falling back to
    /// defaults when no file exists
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded or default configuration
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".docwords")
            .join("config.toml")
    }

    /// Save configuration to a file
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.completion.proposal_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion.proposal_cap".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.completion.min_word_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion.min_word_length".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.completion.autocompletion_enabled && self.completion.idle_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion.idle_delay_ms".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Get the automatic completion delay as Duration
    pub fn idle_delay(&self) -> Duration {
        Duration::from_millis(self.completion.idle_delay_ms)
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocwordsError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.completion.autocompletion_enabled);
        assert_eq!(config.completion.idle_delay_ms, 300);
        assert_eq!(config.completion.min_word_length, 3);
        assert_eq!(config.completion.proposal_cap, 500);
        assert_eq!(config.completion.sort, SortPolicy::ByLabelLength);
        assert_eq!(config.keybindings.user_request, "<Control>Return");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [completion]
            idle_delay_ms = 150
            sort = "unsorted"
            "#,
        )
        .unwrap();

        assert_eq!(config.completion.idle_delay_ms, 150);
        assert_eq!(config.completion.sort, SortPolicy::Unsorted);
        assert_eq!(config.completion.proposal_cap, 500);
        assert_eq!(config.keybindings.show_info, "<Control>i");
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.completion.proposal_cap = 0;
        assert!(matches!(
            config.validate(),
            Err(DocwordsError::Config(ConfigError::InvalidValue { .. }))
        ));

        let mut config = Config::default();
        config.completion.min_word_length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.completion.idle_delay_ms = 0;
        assert!(config.validate().is_err());

        // A zero delay is fine when autocompletion is off
        config.completion.autocompletion_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.completion.idle_delay_ms = 450;
        config.completion.sort = SortPolicy::Unsorted;
        config.keybindings.user_request = "<Control>space".to_string();
        config.save(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.completion.idle_delay_ms, 450);
        assert_eq!(reloaded.completion.sort, SortPolicy::Unsorted);
        assert_eq!(reloaded.keybindings.user_request, "<Control>space");
    }

    #[test]
    fn test_missing_file_reported() {
        let err = Config::from_file("/nonexistent/docwords.toml").unwrap_err();
        assert!(matches!(
            err,
            DocwordsError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_format_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            DocwordsError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_idle_delay_duration() {
        let config = Config::default();
        assert_eq!(config.idle_delay(), Duration::from_millis(300));
    }
}
