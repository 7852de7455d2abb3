//! Error taxonomy shared by the cube, slice, playback and shape layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by cube operations.
///
/// Reads never produce these: out-of-range lookups yield [`Cell::OFF`](crate::Cell::OFF).
/// Writes validate first and leave the cube untouched when they fail.
#[derive(Debug, Error)]
pub enum CubeError {
    /// A write addressed a coordinate outside `[0, side - 1]`.
    #[error("coordinate ({row}, {column}, {depth}) is outside a cube of side {side}")]
    OutOfBounds {
        row: i32,
        column: i32,
        depth: i32,
        side: usize,
    },

    /// Slice or bitmap data had the wrong record count or shape.
    #[error("malformed slice: {0}")]
    MalformedSlice(String),

    /// A shape, font or glyph lookup found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A face name was not one of front/back/top/bottom/left/right.
    #[error("invalid face: {0:?}")]
    InvalidFace(String),

    /// A direction name was not one of up/down/left/right/forward/back.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// An animation action other than `slide`.
    #[error("invalid action: {0:?}")]
    InvalidAction(String),

    /// A font or shape file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CubeError {
    /// Shorthand for a record-count mismatch.
    pub(crate) fn wrong_count(expected: usize, found: usize) -> Self {
        CubeError::MalformedSlice(format!("expected {expected} records, found {found}"))
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, CubeError>;
