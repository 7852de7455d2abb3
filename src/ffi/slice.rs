//! Slice reading and writing as JSON text.

use std::ffi::{c_char, CString};

use super::{status, str_arg, LC_INVALID_ARGUMENT, LC_NULL_POINTER};
use crate::cube::SliceInput;
use crate::session::CubeSession;

/// Reads a face as JSON: `[{"color":[r,g,b],"on":bool}, ...]`.
///
/// An unknown face name reads `front` at offset 0; the offset is clamped.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `face` must be null or a NUL-terminated string
///
/// # Returns
/// A string to be released with `lc_free_string()`, or null on error.
#[no_mangle]
pub unsafe extern "C" fn lc_read_slice_json(
    ptr: *const CubeSession,
    face: *const c_char,
    offset: i32,
) -> *mut c_char {
    if ptr.is_null() {
        return std::ptr::null_mut();
    }

    let session = &*ptr;
    let read = session
        .cube
        .read_slice_named(str_arg(face).unwrap_or_default(), offset);
    match serde_json::to_string(&read.value)
        .ok()
        .and_then(|text| CString::new(text).ok())
    {
        Some(text) => text.into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Writes JSON slice data onto a face.
///
/// An unknown or null face name writes `front` at offset 0, as reads do.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `face` and `json` must be null or NUL-terminated strings
///
/// # Returns
/// `LC_OK`, `LC_NULL_POINTER`, `LC_INVALID_ARGUMENT` (`json` is not UTF-8),
/// or `LC_MALFORMED` (the cube is left unchanged).
#[no_mangle]
pub unsafe extern "C" fn lc_write_slice_json(
    ptr: *mut CubeSession,
    face: *const c_char,
    offset: i32,
    json: *const c_char,
) -> i32 {
    if ptr.is_null() || json.is_null() {
        return LC_NULL_POINTER;
    }
    let Some(json) = str_arg(json) else {
        return LC_INVALID_ARGUMENT;
    };

    let session = &mut *ptr;
    status(
        session
            .cube
            .write_slice_named(SliceInput::Text(json), str_arg(face).unwrap_or_default(), offset)
            .map(|_| ()),
    )
}

/// Frees a string returned by this library.
///
/// # Safety
/// - `text` must be null or a pointer returned by `lc_read_slice_json()`
/// - `text` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lc_free_string(text: *mut c_char) {
    if !text.is_null() {
        drop(CString::from_raw(text));
    }
}
