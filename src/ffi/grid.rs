//! Cell access, clearing, and shifting.

use super::{status, LC_INVALID_ARGUMENT, LC_NULL_POINTER, LC_OK};
use crate::cube::{Axis, Cell, Rgb};
use crate::session::CubeSession;

/// Writes a cell's on flag and colour.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// `LC_OK`, `LC_NULL_POINTER`, or `LC_OUT_OF_BOUNDS` (nothing is written).
#[no_mangle]
pub unsafe extern "C" fn lc_set_cell(
    ptr: *mut CubeSession,
    row: i32,
    column: i32,
    depth: i32,
    on: u8,
    r: u8,
    g: u8,
    b: u8,
) -> i32 {
    if ptr.is_null() {
        return LC_NULL_POINTER;
    }

    let session = &mut *ptr;
    let cell = Cell {
        color: Rgb::new(r, g, b),
        on: on != 0,
    };
    status(session.cube.set(row, column, depth, cell))
}

/// Gets whether a cell is on (1) or off (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or off; 1 if on.
#[no_mangle]
pub unsafe extern "C" fn lc_get_cell_on(
    ptr: *const CubeSession,
    row: i32,
    column: i32,
    depth: i32,
) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    u8::from((*ptr).cube.get(row, column, depth).on)
}

/// Gets a cell's displayed colour as `0xRRGGBB`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// The colour, or 0 (black) for off cells, out of bounds, or a null pointer.
#[no_mangle]
pub unsafe extern "C" fn lc_get_cell_rgb(
    ptr: *const CubeSession,
    row: i32,
    column: i32,
    depth: i32,
) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr)
        .cube
        .get(row, column, depth)
        .displayed_color()
        .to_u32()
}

/// Turns every cell off.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
#[no_mangle]
pub unsafe extern "C" fn lc_clear(ptr: *mut CubeSession) {
    if ptr.is_null() {
        return;
    }
    (*ptr).cube.clear();
}

/// Shifts the cube along an axis (0 = rows, 1 = columns, 2 = depth).
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// `LC_OK`, `LC_NULL_POINTER`, or `LC_INVALID_ARGUMENT` for an unknown axis.
#[no_mangle]
pub unsafe extern "C" fn lc_shift(ptr: *mut CubeSession, axis: u8, step: i32, wrap: u8) -> i32 {
    if ptr.is_null() {
        return LC_NULL_POINTER;
    }
    let Some(&axis) = Axis::ALL.get(axis as usize) else {
        return LC_INVALID_ARGUMENT;
    };

    (*ptr).cube.shift(axis, step, wrap != 0);
    LC_OK
}
