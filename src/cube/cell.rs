//! A single voxel: an on/off flag plus an RGB colour.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple, serialised as `[r, g, b]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// One addressable voxel.
///
/// Cells are plain values; the cube stores them by content and hands out
/// copies. The stored colour survives an off/on cycle, but an off cell always
/// displays as black (see [`Cell::displayed_color`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub color: Rgb,
    pub on: bool,
}

impl Cell {
    /// Off and black. Returned for every out-of-range lookup.
    pub const OFF: Cell = Cell {
        color: Rgb::BLACK,
        on: false,
    };

    #[must_use]
    pub const fn lit(color: Rgb) -> Self {
        Cell { color, on: true }
    }

    /// The colour a renderer should show: black unless the cell is on.
    #[must_use]
    pub const fn displayed_color(&self) -> Rgb {
        if self.on {
            self.color
        } else {
            Rgb::BLACK
        }
    }

    /// Compare by what is displayed, ignoring the stored colour of off cells.
    #[must_use]
    pub fn looks_like(&self, other: &Cell) -> bool {
        self.on == other.on && self.displayed_color() == other.displayed_color()
    }
}
