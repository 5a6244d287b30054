//! Configuration module for fuzzpick
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. the TOML config file (`~/.config/fuzzpick/config.toml` on Linux, or
//!    the path given with `--config`)
//! 3. `FUZZPICK_*` environment variables (e.g. `FUZZPICK_GRACE_DELAY_MS=800`)
//!
//! Command-line flags are applied on top by the binary.

use crate::matcher::{CaseSensitivity, HighlightMarkers, NucleoEngine};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "FUZZPICK";

/// When the input handler acts on key release
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyRelease {
    /// Use key releases if the terminal reports them
    #[default]
    Auto,
    /// Always wait for key releases
    Always,
    /// Act on key presses
    Never,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FuzzpickConfig {
    /// Grace period (ms) before closing after focus is lost over the list
    pub grace_delay_ms: u64,

    /// Maximum number of results shown; 0 shows all matches
    pub max_results: usize,

    /// Case sensitivity of the fuzzy matcher
    pub case_matching: CaseSensitivity,

    /// Key release handling
    pub key_release: KeyRelease,

    /// Title of the search input
    pub prompt: String,

    /// Marker inserted before each matched span in markup output
    pub highlight_open: String,

    /// Marker inserted after each matched span in markup output
    pub highlight_close: String,
}

impl Default for FuzzpickConfig {
    fn default() -> Self {
        Self {
            grace_delay_ms: 500,
            max_results: 50,
            case_matching: CaseSensitivity::Smart,
            key_release: KeyRelease::Auto,
            prompt: "Search".to_string(),
            highlight_open: "<b>".to_string(),
            highlight_close: "</b>".to_string(),
        }
    }
}

impl FuzzpickConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("fuzzpick").join("config.toml"))
    }

    /// Load configuration from `path` (or the default location) and the environment
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment override cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        Self::load_with_env(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env.try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty highlight marker pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.highlight_open.is_empty() && self.highlight_close.is_empty() {
            return Err(ConfigError::Message(
                "highlight_open and highlight_close cannot both be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Write a default config file unless one already exists
    ///
    /// Returns the path and whether a file was written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the default location is unknown or saving fails.
    pub fn init(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        if path.exists() {
            return Ok((path, false));
        }
        Self::default().save(&path)?;
        Ok((path, true))
    }

    #[must_use]
    pub const fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }

    #[must_use]
    pub fn markers(&self) -> HighlightMarkers {
        HighlightMarkers::new(&self.highlight_open, &self.highlight_close)
    }

    /// Build the match engine these settings describe
    #[must_use]
    pub fn engine(&self) -> NucleoEngine {
        NucleoEngine::new()
            .with_case(self.case_matching)
            .with_limit(self.max_results)
    }
}
