//! Configuration
//!
//! Layered configuration for the drill, loaded with the following priority
//! (highest first):
//!
//! 1. Environment variables (`ANZAN_INTERVAL_SECS`, `ANZAN_START_MODE`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! The configuration file follows the XDG Base Directory specification:
//! `$XDG_CONFIG_HOME/anzan/anzan.toml` (typically `~/.config/anzan/anzan.toml`).
//! A missing file is not an error; a malformed one is.
//!
//! Interval values are clamped to the drill's [0, 10] second range here,
//! at the input boundary, so the drill itself never second-guesses what it
//! is handed.
//!
//! # Example Configuration
//!
//! ```toml
//! interval_secs = 1.5
//! start_mode = "auto"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drill::Mode;

/// Lower bound of the auto-advance interval, in seconds.
pub const INTERVAL_MIN_SECS: f32 = 0.0;

/// Upper bound of the auto-advance interval, in seconds.
pub const INTERVAL_MAX_SECS: f32 = 10.0;

/// Environment variable overriding the auto-advance interval.
pub const ENV_INTERVAL: &str = "ANZAN_INTERVAL_SECS";

/// Environment variable overriding the starting mode.
pub const ENV_START_MODE: &str = "ANZAN_START_MODE";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the config file as TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value was present but unusable.
    #[error("invalid {key}: {value:?}")]
    InvalidValue {
        /// The offending key or environment variable.
        key: &'static str,
        /// The value as written.
        value: String,
    },
}

// =============================================================================
// TOML Configuration
// =============================================================================

/// On-disk shape of the configuration file. All fields optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillToml {
    /// Auto-advance delay in seconds, clamped to [0, 10].
    pub interval_secs: Option<f32>,

    /// Mode to open in: "home", "auto", or "manual".
    pub start_mode: Option<Mode>,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved drill configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DrillConfig {
    /// Delay between automatic advances.
    pub interval: Duration,

    /// Mode the session opens in.
    pub start_mode: Mode,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            start_mode: Mode::Home,
        }
    }
}

impl DrillConfig {
    /// Load configuration from the default file location and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = default_config_path() {
            if path.exists() {
                config.apply_file(&path)?;
            }
        }
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a specific file, ignoring the environment.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_file(path)?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DrillToml = toml::from_str(&raw)?;

        if let Some(secs) = file.interval_secs {
            self.interval = interval_from_secs("interval_secs", secs)?;
        }
        if let Some(mode) = file.start_mode {
            self.start_mode = mode;
        }
        tracing::debug!(path = %path.display(), "applied config file");
        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(ENV_INTERVAL) {
            let secs: f32 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_INTERVAL,
                value: raw.clone(),
            })?;
            self.interval = interval_from_secs(ENV_INTERVAL, secs)?;
        }
        if let Ok(raw) = std::env::var(ENV_START_MODE) {
            self.start_mode = raw.parse().map_err(|()| ConfigError::InvalidValue {
                key: ENV_START_MODE,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }
}

/// Default configuration file path under the XDG config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("anzan").join("anzan.toml"))
}

/// Clamp an interval in seconds to the legal [0, 10] range.
///
/// For finite inputs only; the config loaders reject non-finite values
/// before calling this.
#[must_use]
pub fn clamped_interval(secs: f32) -> Duration {
    Duration::from_secs_f32(secs.clamp(INTERVAL_MIN_SECS, INTERVAL_MAX_SECS))
}

fn interval_from_secs(key: &'static str, secs: f32) -> Result<Duration, ConfigError> {
    if !secs.is_finite() {
        return Err(ConfigError::InvalidValue {
            key,
            value: secs.to_string(),
        });
    }
    Ok(clamped_interval(secs))
}
