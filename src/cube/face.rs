//! Named faces, shift axes, and the lenient parsing used by host-facing calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

/// One of the three cube axes.
///
/// `X` runs along rows (up/down), `Y` along columns (left/right) and `Z`
/// along depth (front/back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A named cross-section orientation.
///
/// `Front`, `Top` and `Left` count their offset from the origin. `Back`,
/// `Bottom` and `Right` count from the far end of the same axis, so `Right` at
/// offset 0 is the last column, viewed with the same row/depth orientation as
/// `Left`. It is not a mirror image of `Left`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    /// The axis this face is perpendicular to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::Z,
            Face::Top | Face::Bottom => Axis::X,
            Face::Left | Face::Right => Axis::Y,
        }
    }

    /// Whether the offset is measured from the far end of the axis.
    #[must_use]
    pub const fn is_far(self) -> bool {
        matches!(self, Face::Back | Face::Bottom | Face::Right)
    }

    /// Position along [`Face::axis`] for an offset already clamped to `[0, side - 1]`.
    #[must_use]
    pub const fn layer(self, offset: usize, side: usize) -> usize {
        if self.is_far() {
            side - 1 - offset
        } else {
            offset
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Left => "left",
            Face::Right => "right",
        }
    }

    /// Parse a face name, falling back to `Front` for anything unrecognised.
    pub fn parse_lenient(name: &str) -> Fallback<Face> {
        match name.parse() {
            Ok(face) => Fallback::accepted(face),
            Err(_) => {
                tracing::warn!(face = name, "Unknown face, using front");
                Fallback::replaced(Face::Front)
            }
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CubeError::InvalidFace(s.to_string()))
    }
}

/// A value that may have replaced rejected caller input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fallback<T> {
    pub value: T,
    /// True when the caller's input was rejected and `value` is a fallback.
    pub fell_back: bool,
}

impl<T> Fallback<T> {
    pub const fn accepted(value: T) -> Self {
        Fallback {
            value,
            fell_back: false,
        }
    }

    pub const fn replaced(value: T) -> Self {
        Fallback {
            value,
            fell_back: true,
        }
    }
}
