//! Shape and font rendering.

use std::ffi::c_char;

use super::{status, str_arg, LC_INVALID_ARGUMENT, LC_NULL_POINTER};
use crate::cube::{resolve_face, Face};
use crate::session::CubeSession;

/// Face and offset for a host-supplied name; unknown or null names give
/// front at offset 0.
unsafe fn face_arg(face: *const c_char, offset: i32) -> (Face, i32) {
    resolve_face(str_arg(face).unwrap_or_default(), offset).value
}

/// Paints a named shape from the catalog onto a face. An unknown face name
/// paints `front` at offset 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `name` and `face` must be null or NUL-terminated strings
///
/// # Returns
/// `LC_OK`, `LC_NULL_POINTER`, `LC_INVALID_ARGUMENT` (`name` is not UTF-8),
/// `LC_NOT_FOUND` (unknown shape), or `LC_MALFORMED`.
#[no_mangle]
pub unsafe extern "C" fn lc_render_shape(
    ptr: *mut CubeSession,
    name: *const c_char,
    face: *const c_char,
    offset: i32,
) -> i32 {
    if ptr.is_null() || name.is_null() {
        return LC_NULL_POINTER;
    }
    let Some(name) = str_arg(name) else {
        return LC_INVALID_ARGUMENT;
    };
    let (face, offset) = face_arg(face, offset);
    status((*ptr).render_shape(name, face, offset))
}

/// Loads a font collection from JSON (`{"A": [records...], ...}`).
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `name` and `json` must be null or NUL-terminated strings
#[no_mangle]
pub unsafe extern "C" fn lc_load_font_json(
    ptr: *mut CubeSession,
    name: *const c_char,
    json: *const c_char,
) -> i32 {
    if ptr.is_null() || name.is_null() || json.is_null() {
        return LC_NULL_POINTER;
    }
    let (Some(name), Some(json)) = (str_arg(name), str_arg(json)) else {
        return LC_INVALID_ARGUMENT;
    };
    status((*ptr).fonts.load_json(name, json).map(|_| ()))
}

/// Makes a loaded font collection the active one.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `name` must be null or a NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn lc_use_font(ptr: *mut CubeSession, name: *const c_char) -> i32 {
    if ptr.is_null() || name.is_null() {
        return LC_NULL_POINTER;
    }
    let Some(name) = str_arg(name) else {
        return LC_INVALID_ARGUMENT;
    };
    status((*ptr).fonts.activate(name))
}

/// Paints a glyph (given as a Unicode scalar value) onto a face. An unknown
/// face name paints `front` at offset 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `face` must be null or a NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn lc_render_char(
    ptr: *mut CubeSession,
    ch: u32,
    face: *const c_char,
    offset: i32,
) -> i32 {
    if ptr.is_null() {
        return LC_NULL_POINTER;
    }
    let Some(ch) = char::from_u32(ch) else {
        return LC_INVALID_ARGUMENT;
    };
    let (face, offset) = face_arg(face, offset);
    status((*ptr).render_char(ch, face, offset))
}
