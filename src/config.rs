//! TOML configuration for a cube and its playback defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! side_length = 8
//! default_color = [0, 0, 255]
//!
//! [playback]
//! delay_ms = 250
//! direction = "forward"
//! step_size = 1
//! wrap = true
//! ```
//!
//! Every field is optional and falls back to the values shown.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cube::{Rgb, MAX_SIDE};
use crate::error::ConfigError;
use crate::playback::{Direction, PlaybackConfig};

/// Playback section of the TOML configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackToml {
    pub delay_ms: u64,
    /// Kept as text so validation can name the bad value.
    pub direction: String,
    pub step_size: i32,
    pub wrap: bool,
}

impl Default for PlaybackToml {
    fn default() -> Self {
        let defaults = PlaybackConfig::default();
        PlaybackToml {
            delay_ms: defaults.delay_ms,
            direction: defaults.direction.to_string(),
            step_size: defaults.step_size,
            wrap: defaults.wrap,
        }
    }
}

/// Root configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub side_length: usize,
    pub default_color: Rgb,
    pub playback: PlaybackToml,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            side_length: 8,
            default_color: Rgb::BLUE,
            playback: PlaybackToml::default(),
        }
    }
}

impl CubeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: CubeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, validating the result.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), side = config.side_length, "Loaded cube config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIDE).contains(&self.side_length) {
            return Err(ConfigError::ValidationError(format!(
                "side_length must be between 1 and {MAX_SIDE}, got {}",
                self.side_length
            )));
        }
        self.playback_config().map(|_| ())
    }

    /// The playback section as a [`PlaybackConfig`].
    pub fn playback_config(&self) -> Result<PlaybackConfig, ConfigError> {
        let direction: Direction = self.playback.direction.parse().map_err(|_| {
            ConfigError::ValidationError(format!(
                "unknown playback direction {:?}",
                self.playback.direction
            ))
        })?;
        Ok(PlaybackConfig {
            delay_ms: self.playback.delay_ms,
            direction,
            step_size: self.playback.step_size,
            wrap: self.playback.wrap,
            ..PlaybackConfig::default()
        })
    }
}
