//! C FFI layer for host UIs.
//!
//! This module exports C ABI functions for hosts that drive the cube through
//! a foreign-function interface (LuaJIT FFI, a browser bridge, a native GUI).
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic lives in `cube`, `playback` and `shapes`. These functions
//! are thin wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.
//!
//! # Status codes
//! Functions that can fail return an `i32`: see the `LC_*` constants.

pub mod grid;
pub mod lifecycle;
pub mod playback;
pub mod shapes;
pub mod slice;

use std::ffi::{c_char, CStr};

use crate::error::CubeError;

pub const LC_OK: i32 = 0;
pub const LC_NULL_POINTER: i32 = 1;
pub const LC_OUT_OF_BOUNDS: i32 = 2;
pub const LC_MALFORMED: i32 = 3;
pub const LC_NOT_FOUND: i32 = 4;
pub const LC_INVALID_ARGUMENT: i32 = 5;

pub use grid::{lc_clear, lc_get_cell_on, lc_get_cell_rgb, lc_set_cell, lc_shift};
pub use lifecycle::{lc_create, lc_destroy, lc_revision};
pub use playback::{lc_is_playing, lc_pause, lc_play_json, lc_poll, lc_step, lc_toggle};
pub use shapes::{lc_load_font_json, lc_render_char, lc_render_shape, lc_use_font};
pub use slice::{lc_free_string, lc_read_slice_json, lc_write_slice_json};

/// Map a library error to its status code.
pub(crate) fn status_of(err: &CubeError) -> i32 {
    match err {
        CubeError::OutOfBounds { .. } => LC_OUT_OF_BOUNDS,
        CubeError::MalformedSlice(_) => LC_MALFORMED,
        CubeError::NotFound(_) => LC_NOT_FOUND,
        CubeError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
            LC_NOT_FOUND
        }
        CubeError::InvalidFace(_)
        | CubeError::InvalidDirection(_)
        | CubeError::InvalidAction(_)
        | CubeError::Io { .. }
        | CubeError::Config(_) => LC_INVALID_ARGUMENT,
    }
}

pub(crate) fn status(result: crate::Result<()>) -> i32 {
    match result {
        Ok(()) => LC_OK,
        Err(err) => {
            tracing::debug!(error = %err, "FFI call failed");
            status_of(&err)
        }
    }
}

/// Borrow a NUL-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the
/// returned reference.
pub(crate) unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}
