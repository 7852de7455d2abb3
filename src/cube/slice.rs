//! Face extraction and injection.
//!
//! A slice is the `side²` cells of one face at an offset. It is never stored:
//! reads copy cells out, writes copy records in. Both walk the face in the
//! same fixed order so that writing back what was read changes nothing.
//!
//! # Layout
//! - front/back: row outer, column inner.
//! - top/bottom: depth outer, column inner.
//! - left/right: row outer, depth inner.

use serde_json::Value;

use super::cell::Cell;
use super::face::{Axis, Face, Fallback};
use super::grid::{index_of, Coord, Cube};
use crate::error::{CubeError, Result};
use crate::render::Change;
use crate::shapes::BitmapSource;

/// Clamp a caller-supplied offset into `[0, side - 1]`.
#[inline]
pub fn clamp_offset(side: usize, offset: i32) -> usize {
    offset.clamp(0, side as i32 - 1) as usize
}

/// Resolve a face name from a host. An unknown name selects front at
/// offset 0 and is flagged as a fallback.
pub fn resolve_face(name: &str, offset: i32) -> Fallback<(Face, i32)> {
    let parsed = Face::parse_lenient(name);
    let offset = if parsed.fell_back { 0 } else { offset };
    Fallback {
        value: (parsed.value, offset),
        fell_back: parsed.fell_back,
    }
}

/// Storage indices of a face in slice enumeration order.
pub fn slice_indices(side: usize, face: Face, offset: usize) -> impl Iterator<Item = usize> {
    let layer = face.layer(offset.min(side - 1), side);
    let axis = face.axis();
    (0..side).flat_map(move |outer| {
        (0..side).map(move |inner| {
            let coord = match axis {
                Axis::Z => Coord::new(outer, inner, layer),
                Axis::X => Coord::new(layer, inner, outer),
                Axis::Y => Coord::new(outer, layer, inner),
            };
            index_of(side, coord)
        })
    })
}

/// Slice data as a host may hand it over.
#[derive(Clone, Debug)]
pub enum SliceInput<'a> {
    /// Serialised JSON text.
    Text(&'a str),
    /// Already-parsed JSON. A string value is parsed once more.
    Value(Value),
    /// Records ready to apply.
    Cells(Vec<Cell>),
}

impl SliceInput<'_> {
    /// Turn the input into records. Does not check the count.
    pub fn into_cells(self) -> Result<Vec<Cell>> {
        match self {
            SliceInput::Cells(cells) => Ok(cells),
            SliceInput::Text(text) => {
                let value: Value = serde_json::from_str(text)
                    .map_err(|e| CubeError::MalformedSlice(e.to_string()))?;
                records_from_value(value)
            }
            SliceInput::Value(Value::String(text)) => {
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| CubeError::MalformedSlice(e.to_string()))?;
                records_from_value(value)
            }
            SliceInput::Value(value) => records_from_value(value),
        }
    }
}

fn records_from_value(value: Value) -> Result<Vec<Cell>> {
    if !value.is_array() {
        return Err(CubeError::MalformedSlice(
            "expected an array of cell records".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| CubeError::MalformedSlice(e.to_string()))
}

impl<'a> From<&'a str> for SliceInput<'a> {
    fn from(text: &'a str) -> Self {
        SliceInput::Text(text)
    }
}

impl From<Vec<Cell>> for SliceInput<'_> {
    fn from(cells: Vec<Cell>) -> Self {
        SliceInput::Cells(cells)
    }
}

impl From<Value> for SliceInput<'_> {
    fn from(value: Value) -> Self {
        SliceInput::Value(value)
    }
}

impl Cube {
    /// Number of records in one slice (`side²`).
    pub fn slice_len(&self) -> usize {
        self.side * self.side
    }

    /// Copy a face out. The offset is clamped into range.
    pub fn read_slice(&self, face: Face, offset: i32) -> Vec<Cell> {
        let offset = clamp_offset(self.side, offset);
        slice_indices(self.side, face, offset)
            .map(|index| self.cells[index])
            .collect()
    }

    /// Copy a face out by name. An unknown name reads front at offset 0.
    pub fn read_slice_named(&self, face: &str, offset: i32) -> Fallback<Vec<Cell>> {
        let target = resolve_face(face, offset);
        let (face, offset) = target.value;
        Fallback {
            value: self.read_slice(face, offset),
            fell_back: target.fell_back,
        }
    }

    /// Serialise a face as `[{"color":[r,g,b],"on":bool}, ...]`.
    pub fn slice_json(&self, face: Face, offset: i32) -> Result<String> {
        serde_json::to_string(&self.read_slice(face, offset))
            .map_err(|e| CubeError::MalformedSlice(e.to_string()))
    }

    /// Copy records into a face. Nothing is written unless exactly `side²`
    /// records are supplied.
    pub fn write_slice(&mut self, face: Face, offset: i32, cells: &[Cell]) -> Result<()> {
        let expected = self.slice_len();
        if cells.len() != expected {
            return Err(CubeError::wrong_count(expected, cells.len()));
        }

        let offset = clamp_offset(self.side, offset);
        for (index, cell) in slice_indices(self.side, face, offset).zip(cells) {
            self.cells[index] = *cell;
        }

        tracing::debug!(%face, offset, "Wrote slice");
        self.notify(Change::Slice { face, offset });
        Ok(())
    }

    /// Parse slice data in any accepted form and write it.
    pub fn write_slice_input<'a>(
        &mut self,
        input: impl Into<SliceInput<'a>>,
        face: Face,
        offset: i32,
    ) -> Result<()> {
        let cells = input.into().into_cells()?;
        self.write_slice(face, offset, &cells)
    }

    /// Write slice data onto a face given by name. An unknown name writes
    /// front at offset 0; the returned value is the face actually written.
    pub fn write_slice_named<'a>(
        &mut self,
        input: impl Into<SliceInput<'a>>,
        face: &str,
        offset: i32,
    ) -> Result<Fallback<Face>> {
        let target = resolve_face(face, offset);
        let (face, offset) = target.value;
        self.write_slice_input(input, face, offset)?;
        Ok(Fallback {
            value: face,
            fell_back: target.fell_back,
        })
    }

    /// Paint a bitmap from `source` onto a face.
    pub fn paint(
        &mut self,
        source: &dyn BitmapSource,
        key: &str,
        face: Face,
        offset: i32,
    ) -> Result<()> {
        let cells = source
            .resolve(key)
            .ok_or_else(|| CubeError::NotFound(key.to_string()))?;
        self.write_slice(face, offset, &cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Rgb;
    use pretty_assertions::assert_eq;

    fn numbered_cube(side: usize) -> Cube {
        let mut cube = Cube::new(side);
        for (index, cell) in cube.cells.iter_mut().enumerate() {
            *cell = Cell {
                color: Rgb::new(index as u8, (index / 256) as u8, 0),
                on: index % 3 == 0,
            };
        }
        cube
    }

    #[test]
    fn test_front_face_order() {
        let cube = numbered_cube(3);
        let slice = cube.read_slice(Face::Front, 0);
        let reds: Vec<u8> = slice.iter().map(|c| c.color.r).collect();
        assert_eq!(reds, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_back_face_is_far_layer() {
        let cube = numbered_cube(3);
        let reds: Vec<u8> = cube
            .read_slice(Face::Back, 0)
            .iter()
            .map(|c| c.color.r)
            .collect();
        assert_eq!(reds, vec![18, 19, 20, 21, 22, 23, 24, 25, 26]);
    }

    #[test]
    fn test_top_face_order() {
        let cube = numbered_cube(3);
        let reds: Vec<u8> = cube
            .read_slice(Face::Top, 1)
            .iter()
            .map(|c| c.color.r)
            .collect();
        // row 1, depth outer, column inner
        assert_eq!(reds, vec![3, 4, 5, 12, 13, 14, 21, 22, 23]);
    }

    #[test]
    fn test_right_is_not_mirror_of_left() {
        let cube = numbered_cube(3);
        let left: Vec<u8> = cube
            .read_slice(Face::Left, 0)
            .iter()
            .map(|c| c.color.r)
            .collect();
        let right: Vec<u8> = cube
            .read_slice(Face::Right, 0)
            .iter()
            .map(|c| c.color.r)
            .collect();
        // row outer, depth inner
        assert_eq!(left, vec![0, 9, 18, 3, 12, 21, 6, 15, 24]);
        assert_eq!(right, vec![2, 11, 20, 5, 14, 23, 8, 17, 26]);
    }

    #[test]
    fn test_offset_is_clamped() {
        let cube = numbered_cube(3);
        assert_eq!(cube.read_slice(Face::Front, -5), cube.read_slice(Face::Front, 0));
        assert_eq!(cube.read_slice(Face::Front, 99), cube.read_slice(Face::Front, 2));
    }

    #[test]
    fn test_named_read_falls_back_to_front_zero() {
        let cube = numbered_cube(3);
        let read = cube.read_slice_named("nowhere", 2);
        assert!(read.fell_back);
        assert_eq!(read.value, cube.read_slice(Face::Front, 0));

        let read = cube.read_slice_named("bottom", 1);
        assert!(!read.fell_back);
        assert_eq!(read.value, cube.read_slice(Face::Bottom, 1));
    }

    #[test]
    fn test_named_write_falls_back_to_front_zero() {
        let mut cube = Cube::new(2);
        let lit = vec![Cell::lit(Rgb::BLUE); 4];

        let written = cube.write_slice_named(lit.clone(), "sideways", 1).unwrap();
        assert_eq!(written, Fallback::replaced(Face::Front));
        assert_eq!(cube.read_slice(Face::Front, 0), lit);
        assert_eq!(cube.lit_count(), 4);

        let written = cube.write_slice_named(lit.clone(), "Right", 0).unwrap();
        assert_eq!(written, Fallback::accepted(Face::Right));
        assert!(cube.get(1, 1, 1).on);

        // a bad payload still fails even when the face falls back
        assert!(matches!(
            cube.write_slice_named("[]", "sideways", 0),
            Err(CubeError::MalformedSlice(_))
        ));
    }

    #[test]
    fn test_read_returns_copies() {
        let cube = numbered_cube(2);
        let mut slice = cube.read_slice(Face::Front, 0);
        slice[0] = Cell::lit(Rgb::BLUE);
        assert_ne!(cube.get(0, 0, 0), Cell::lit(Rgb::BLUE));
    }

    #[test]
    fn test_round_trip_every_face() {
        let mut cube = numbered_cube(4);
        let before = cube.cells().to_vec();
        for face in Face::ALL {
            for offset in 0..4 {
                let slice = cube.read_slice(face, offset);
                cube.write_slice(face, offset, &slice).unwrap();
            }
        }
        assert_eq!(cube.cells(), &before[..]);
    }

    #[test]
    fn test_write_targets_one_face() {
        let mut cube = Cube::new(3);
        let lit = vec![Cell::lit(Rgb::new(0, 200, 0)); 9];
        cube.write_slice(Face::Right, 1, &lit).unwrap();

        assert_eq!(cube.lit_count(), 9);
        for row in 0..3 {
            for depth in 0..3 {
                assert!(cube.get(row, 1, depth).on);
            }
        }
    }

    #[test]
    fn test_wrong_count_leaves_cube_untouched() {
        let mut cube = numbered_cube(3);
        let before = cube.cells().to_vec();

        let err = cube
            .write_slice(Face::Front, 0, &[Cell::lit(Rgb::BLUE); 8])
            .unwrap_err();
        assert!(matches!(err, CubeError::MalformedSlice(_)));
        assert_eq!(cube.cells(), &before[..]);
        assert_eq!(cube.revision(), 0);
    }

    #[test]
    fn test_text_and_value_inputs() {
        let mut source = numbered_cube(2);
        let text = source.slice_json(Face::Top, 1).unwrap();

        let mut target = Cube::new(2);
        target.write_slice_input(text.as_str(), Face::Top, 1).unwrap();
        assert_eq!(target.read_slice(Face::Top, 1), source.read_slice(Face::Top, 1));

        // A JSON string holding the serialised slice is unwrapped once.
        let mut nested = Cube::new(2);
        nested
            .write_slice_input(Value::String(text.clone()), Face::Top, 1)
            .unwrap();
        assert_eq!(nested.read_slice(Face::Top, 1), source.read_slice(Face::Top, 1));

        let value: Value = serde_json::from_str(&text).unwrap();
        source.clear();
        source.write_slice_input(value, Face::Top, 1).unwrap();
        assert_eq!(source.read_slice(Face::Top, 1), target.read_slice(Face::Top, 1));
    }

    #[test]
    fn test_malformed_inputs() {
        let mut cube = Cube::new(2);
        let cases = [
            "not json",
            r#"{"color":[0,0,0],"on":true}"#,
            r#"[{"color":[0,0,0],"on":true}]"#,
            r#"[{"color":[0,0,0]},{"color":[0,0,0]},{"color":[0,0,0]},{"color":[0,0,0]}]"#,
            r#"[1,2,3,4]"#,
        ];
        for case in cases {
            let err = cube.write_slice_input(case, Face::Front, 0).unwrap_err();
            assert!(matches!(err, CubeError::MalformedSlice(_)), "{case}");
        }
        assert_eq!(cube.revision(), 0);
    }

    #[test]
    fn test_slice_notification_carries_face() {
        use crate::render::ChangeLog;
        use std::cell::RefCell;
        use std::rc::Rc;

        let log = Rc::new(RefCell::new(ChangeLog::default()));
        let mut cube = Cube::new(2);
        cube.attach_renderer(Box::new(log.clone()));
        cube.write_slice(Face::Bottom, 7, &[Cell::OFF; 4]).unwrap();

        assert_eq!(
            log.borrow_mut().take(),
            vec![(
                Change::Slice {
                    face: Face::Bottom,
                    offset: 1
                },
                1
            )]
        );
    }
}
