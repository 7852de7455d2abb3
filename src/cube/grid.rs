//! The cube itself: cell storage, coordinate-safe access, and bulk operations.

use rayon::prelude::*;

use super::cell::{Cell, Rgb};
use super::face::Axis;
use crate::config::CubeConfig;
use crate::error::{CubeError, Result};
use crate::render::{Change, Renderer};

/// A zero-based `(row, column, depth)` position inside the cube.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
    pub depth: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, column: usize, depth: usize) -> Self {
        Coord { row, column, depth }
    }

    /// Position along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.row,
            Axis::Y => self.column,
            Axis::Z => self.depth,
        }
    }

    /// Copy with the position along `axis` replaced.
    #[must_use]
    pub const fn with(self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => Coord { row: value, ..self },
            Axis::Y => Coord {
                column: value,
                ..self
            },
            Axis::Z => Coord {
                depth: value,
                ..self
            },
        }
    }
}

/// Calculate the linear index for a coordinate in a cube of the given side.
#[inline]
pub fn index_of(side: usize, coord: Coord) -> usize {
    coord.depth * side * side + coord.row * side + coord.column
}

/// Inverse of [`index_of`].
#[inline]
pub fn coord_of(side: usize, index: usize) -> Coord {
    Coord {
        row: (index / side) % side,
        column: index % side,
        depth: index / (side * side),
    }
}

/// Largest supported side length (`64³` cells).
pub const MAX_SIDE: usize = 64;

/// A cubic grid of `side³` cells.
///
/// Storage order is `depth * side² + row * side + column`. The side length is
/// fixed at construction. Every mutation bumps [`Cube::revision`] and is
/// reported to the attached [`Renderer`], if any, after it has been applied.
pub struct Cube {
    pub(super) side: usize,
    pub(super) cells: Vec<Cell>,
    pub(super) default_color: Rgb,
    pub(super) revision: u64,
    renderer: Option<Box<dyn Renderer>>,
}

impl std::fmt::Debug for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cube")
            .field("side", &self.side)
            .field("revision", &self.revision)
            .field("lit", &self.lit_count())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl Cube {
    /// Create a cube with every cell off. The side is clamped into
    /// `1..=MAX_SIDE`.
    pub fn new(side: usize) -> Self {
        let side = side.clamp(1, MAX_SIDE);
        Cube {
            side,
            cells: vec![Cell::OFF; side * side * side],
            default_color: Rgb::BLUE,
            revision: 0,
            renderer: None,
        }
    }

    /// Create a cube from a validated configuration.
    pub fn from_config(config: &CubeConfig) -> Result<Self> {
        config.validate()?;
        let mut cube = Cube::new(config.side_length);
        cube.default_color = config.default_color;
        Ok(cube)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`side³`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mutation counter, starting at 0.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Colour used when an unlit black cell is switched on.
    pub fn default_color(&self) -> Rgb {
        self.default_color
    }

    pub fn set_default_color(&mut self, color: Rgb) {
        self.default_color = color;
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn attach_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    pub fn detach_renderer(&mut self) -> Option<Box<dyn Renderer>> {
        self.renderer.take()
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: i32, column: i32, depth: i32) -> bool {
        let side = self.side as i64;
        [row, column, depth]
            .into_iter()
            .all(|v| (0..side).contains(&(v as i64)))
    }

    fn checked_coord(&self, row: i32, column: i32, depth: i32) -> Result<Coord> {
        if !self.in_bounds(row, column, depth) {
            return Err(CubeError::OutOfBounds {
                row,
                column,
                depth,
                side: self.side,
            });
        }
        Ok(Coord::new(row as usize, column as usize, depth as usize))
    }

    /// Coordinate of the cell stored at `index`.
    pub fn coord_of(&self, index: usize) -> Coord {
        coord_of(self.side, index)
    }

    /// Linear index of a coordinate, or `None` when it is outside the cube.
    pub fn index_of(&self, row: i32, column: i32, depth: i32) -> Option<usize> {
        self.checked_coord(row, column, depth)
            .ok()
            .map(|coord| index_of(self.side, coord))
    }

    /// Cells with their coordinates, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (coord_of(self.side, index), *cell))
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.on).count()
    }

    /// Read a cell. Any out-of-range coordinate yields [`Cell::OFF`].
    pub fn get(&self, row: i32, column: i32, depth: i32) -> Cell {
        match self.index_of(row, column, depth) {
            Some(index) => self.cells[index],
            None => Cell::OFF,
        }
    }

    /// Copy `state` into the addressed cell.
    pub fn set(&mut self, row: i32, column: i32, depth: i32, state: Cell) -> Result<()> {
        self.update(row, column, depth, |cell| *cell = state)
    }

    /// Switch a cell on or off.
    ///
    /// Switching on keeps the stored colour unless it is black, in which case
    /// the cube's default colour is used. Switching off keeps the stored colour.
    pub fn set_on(&mut self, row: i32, column: i32, depth: i32, on: bool) -> Result<()> {
        let default_color = self.default_color;
        self.update(row, column, depth, |cell| {
            if on && cell.color.is_black() {
                cell.color = default_color;
            }
            cell.on = on;
        })
    }

    /// Recolour a cell without touching its on flag.
    pub fn set_color(&mut self, row: i32, column: i32, depth: i32, color: Rgb) -> Result<()> {
        self.update(row, column, depth, |cell| cell.color = color)
    }

    /// Flip a cell's on flag, returning the new state.
    pub fn toggle_cell(&mut self, row: i32, column: i32, depth: i32) -> Result<bool> {
        let on = !self.get(row, column, depth).on;
        self.set_on(row, column, depth, on)?;
        Ok(on)
    }

    fn update(
        &mut self,
        row: i32,
        column: i32,
        depth: i32,
        apply: impl FnOnce(&mut Cell),
    ) -> Result<()> {
        let coord = self.checked_coord(row, column, depth)?;
        let index = index_of(self.side, coord);
        apply(&mut self.cells[index]);
        self.notify(Change::Cell { coord, index });
        Ok(())
    }

    /// Turn every cell off. Stored colours are kept.
    pub fn clear(&mut self) {
        self.cells.par_iter_mut().for_each(|cell| cell.on = false);
        tracing::debug!(side = self.side, "Cleared cube");
        self.notify(Change::Bulk);
    }

    /// Translate every cell `step` positions along `axis`.
    ///
    /// Each destination takes the state that was `step` positions behind it.
    /// Sources past the edge wrap modulo the side when `wrap` is set;
    /// otherwise the destination is switched off and set to black. The next
    /// state is built from an untouched snapshot and swapped in whole.
    pub fn shift(&mut self, axis: Axis, step: i32, wrap: bool) {
        if step == 0 {
            return;
        }

        let side = self.side;
        let source = &self.cells;
        let next: Vec<Cell> = (0..source.len())
            .into_par_iter()
            .map(|index| {
                let coord = coord_of(side, index);
                let from = coord.along(axis) as i64 - step as i64;
                let from = if wrap {
                    Some(from.rem_euclid(side as i64))
                } else {
                    (0..side as i64).contains(&from).then_some(from)
                };

                let mut cell = Cell::OFF;
                if let Some(from) = from {
                    cell = source[index_of(side, coord.with(axis, from as usize))];
                }
                cell
            })
            .collect();

        self.cells = next;
        tracing::debug!(?axis, step, wrap, "Shifted cube");
        self.notify(Change::Bulk);
    }

    pub(super) fn notify(&mut self, change: Change) {
        self.revision += 1;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.changed(&change, self.revision);
        }
    }
}
