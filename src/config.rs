//! UI configuration loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Text shown in the title bar.
    #[serde(default = "default_title")]
    title: String,

    /// Where the interactive UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Capture mouse clicks so cells can be clicked.
    #[serde(default = "default_mouse_capture")]
    mouse_capture: bool,
}

#[instrument]
fn default_title() -> String {
    "Tic-Tac-Toe".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_mouse_capture() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, `fallback` is read if it
    /// exists; otherwise defaults apply.
    #[instrument(skip(explicit, fallback))]
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::new(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::from_file(path),
            None if fallback.exists() => Self::from_file(fallback),
            None => {
                info!(
                    "Config file not found at {}, using defaults",
                    fallback.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Resolves against [`DEFAULT_CONFIG_FILE`] in the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, Path::new(DEFAULT_CONFIG_FILE))
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
