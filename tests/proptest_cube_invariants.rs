//! Property-based invariant tests for the cube model.
//!
//! 1. Writing back a slice that was just read changes nothing.
//! 2. Out-of-range reads yield the off sentinel.
//! 3. Out-of-range writes are rejected and change nothing.
//! 4. A wrapping shift by S followed by -S restores the cube.
//! 5. A non-wrapping shift never lights more cells than it started with.
//! 6. Slice text parses back to the same records.

use led_cube::{Axis, Cell, Cube, CubeError, Face, Rgb};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (any::<[u8; 3]>(), any::<bool>()).prop_map(|(color, on)| Cell {
        color: Rgb::from(color),
        on,
    })
}

fn cube_strategy() -> impl Strategy<Value = Cube> {
    (1usize..=6).prop_flat_map(|side| {
        prop::collection::vec(cell_strategy(), side * side * side).prop_map(move |cells| {
            let mut cube = Cube::new(side);
            for (index, cell) in cells.into_iter().enumerate() {
                let coord = cube.coord_of(index);
                cube.set(
                    coord.row as i32,
                    coord.column as i32,
                    coord.depth as i32,
                    cell,
                )
                .unwrap();
            }
            cube
        })
    })
}

fn face_strategy() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

/// A coordinate with at least one component outside `0..side`.
fn outside(side: i32) -> impl Strategy<Value = (i32, i32, i32)> {
    let any_coord = -20i32..20;
    (any_coord.clone(), any_coord.clone(), any_coord)
        .prop_filter("at least one component out of range", move |(r, c, d)| {
            [r, c, d].iter().any(|v| **v < 0 || **v >= side)
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Slice round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slice_round_trip(mut cube in cube_strategy(), face in face_strategy(), offset in -3i32..10) {
        let before = cube.cells().to_vec();
        let slice = cube.read_slice(face, offset);
        prop_assert_eq!(slice.len(), cube.slice_len());

        cube.write_slice(face, offset, &slice).unwrap();
        prop_assert_eq!(cube.cells(), before.as_slice(), "{} at {}", face, offset);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Bounds sentinel and write rejection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_read_is_off(cube in cube_strategy(), (r, c, d) in outside(6)) {
        prop_assume!(!cube.in_bounds(r, c, d));
        let cell = cube.get(r, c, d);
        prop_assert_eq!(cell, Cell::OFF);
        prop_assert_eq!(cell.displayed_color(), Rgb::BLACK);
    }

    #[test]
    fn out_of_range_write_is_rejected(
        mut cube in cube_strategy(),
        (r, c, d) in outside(6),
        cell in cell_strategy(),
    ) {
        prop_assume!(!cube.in_bounds(r, c, d));
        let before = cube.cells().to_vec();
        let revision = cube.revision();

        let result = cube.set(r, c, d, cell);
        prop_assert!(
            matches!(result, Err(CubeError::OutOfBounds { .. })),
            "expected OutOfBounds, got {:?}",
            result
        );
        prop_assert_eq!(cube.cells(), before.as_slice());
        prop_assert_eq!(cube.revision(), revision);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Shifts
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wrapping_shift_is_reversible(mut cube in cube_strategy(), axis in axis_strategy(), step in -15i32..15) {
        let before = cube.cells().to_vec();
        cube.shift(axis, step, true);
        cube.shift(axis, -step, true);
        prop_assert_eq!(cube.cells(), before.as_slice());
    }

    #[test]
    fn truncating_shift_never_adds_light(mut cube in cube_strategy(), axis in axis_strategy(), step in -8i32..8) {
        let lit = cube.lit_count();
        cube.shift(axis, step, false);
        prop_assert!(cube.lit_count() <= lit);
        if step.unsigned_abs() as usize >= cube.side() {
            prop_assert_eq!(cube.lit_count(), 0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Slice text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slice_text_parses_back(cube in cube_strategy(), face in face_strategy(), offset in 0i32..6) {
        let text = cube.slice_json(face, offset).unwrap();
        let parsed: Vec<Cell> = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(parsed, cube.read_slice(face, offset));
    }
}
