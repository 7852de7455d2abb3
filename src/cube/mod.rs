//! The cube data model: cells, the grid, faces and slices.
//!
//! Everything here is synchronous. A mutation runs to completion, bumps the
//! revision counter, and only then notifies the attached renderer.

pub mod cell;
pub mod face;
pub mod grid;
pub mod slice;

pub use cell::{Cell, Rgb};
pub use face::{Axis, Face, Fallback};
pub use grid::{Coord, Cube, MAX_SIDE};
pub use slice::{clamp_offset, resolve_face, slice_indices, SliceInput};
