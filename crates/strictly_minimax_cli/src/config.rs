//! Runtime configuration for the command-line harness.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Board;
use tracing::{debug, info, instrument};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable boards and sentences.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration loaded from an optional TOML file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Default output format.
    #[serde(default)]
    format: OutputFormat,

    /// Whether `best-move` prints search counters.
    #[serde(default = "default_report_stats")]
    report_stats: bool,

    /// Default starting board for `self-play`, in board notation.
    #[serde(default)]
    opening: Option<String>,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_report_stats() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            format: OutputFormat::default(),
            report_stats: default_report_stats(),
            opening: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        // Validate the opening up front.
        config.opening_board()?;

        info!(format = ?config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Parses the configured opening, if any.
    pub fn opening_board(&self) -> Result<Option<Board>, ConfigError> {
        self.opening
            .as_deref()
            .map(|s| {
                s.parse::<Board>()
                    .map_err(|e| ConfigError::new(format!("Invalid opening: {}", e.message)))
            })
            .transpose()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
