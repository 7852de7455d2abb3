//! Playback configuration and the partial updates hosts send to change it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cube::Axis;
use crate::error::{ConfigError, CubeError};

/// Which way `slide` moves the cube's contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Forward,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Back,
    ];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
        }
    }

    /// The axis and sign of one step in this direction.
    ///
    /// Up/down move along rows, left/right along columns, forward/back along
    /// depth. Forward moves toward depth 0.
    #[must_use]
    pub const fn axis_shift(self) -> (Axis, i32) {
        match self {
            Direction::Up => (Axis::X, -1),
            Direction::Down => (Axis::X, 1),
            Direction::Left => (Axis::Y, -1),
            Direction::Right => (Axis::Y, 1),
            Direction::Forward => (Axis::Z, -1),
            Direction::Back => (Axis::Z, 1),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Forward => "forward",
            Direction::Back => "back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CubeError::InvalidDirection(s.to_string()))
    }
}

/// What a tick does. Only sliding is implemented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Slide,
}

impl FromStr for Action {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("slide") {
            Ok(Action::Slide)
        } else {
            Err(CubeError::InvalidAction(s.to_string()))
        }
    }
}

/// The full playback configuration. Copied out by value, never shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub delay_ms: u64,
    pub action: Action,
    pub direction: Direction,
    pub step_size: i32,
    pub wrap: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            delay_ms: 250,
            action: Action::Slide,
            direction: Direction::Forward,
            step_size: 1,
            wrap: true,
        }
    }
}

/// A partial configuration. Names are kept as text so that unknown values
/// can be dropped instead of failing the whole update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackUpdate {
    #[serde(alias = "delay", alias = "delay_ms")]
    pub delay_ms: Option<u64>,
    pub action: Option<String>,
    pub direction: Option<String>,
    #[serde(alias = "step_size")]
    pub step_size: Option<i32>,
    pub wrap: Option<bool>,
}

impl PlaybackUpdate {
    #[must_use]
    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn step_size(mut self, step_size: i32) -> Self {
        self.step_size = Some(step_size);
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Parse a JSON object such as `{"delay":100,"direction":"up"}`.
    pub fn from_json(text: &str) -> Result<Self, CubeError> {
        serde_json::from_str(text)
            .map_err(|e| CubeError::Config(ConfigError::ValidationError(e.to_string())))
    }
}

/// Fields an update tried to set but which were rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub rejected_direction: Option<String>,
    pub rejected_action: Option<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.rejected_direction.is_none() && self.rejected_action.is_none()
    }
}

impl PlaybackConfig {
    /// Merge an update. Unknown direction or action names are dropped and
    /// the previous value stays in effect.
    pub fn merge(&mut self, update: &PlaybackUpdate) -> ConfigReport {
        let mut report = ConfigReport::default();

        if let Some(delay_ms) = update.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(step_size) = update.step_size {
            self.step_size = step_size;
        }
        if let Some(wrap) = update.wrap {
            self.wrap = wrap;
        }
        if let Some(name) = update.direction.as_deref() {
            match name.parse() {
                Ok(direction) => self.direction = direction,
                Err(_) => {
                    tracing::warn!(direction = name, kept = %self.direction, "Ignoring unknown direction");
                    report.rejected_direction = Some(name.to_string());
                }
            }
        }
        if let Some(name) = update.action.as_deref() {
            match name.parse() {
                Ok(action) => self.action = action,
                Err(_) => {
                    tracing::warn!(action = name, "Ignoring unknown action");
                    report.rejected_action = Some(name.to_string());
                }
            }
        }

        report
    }
}
