//! Session creation, destruction, and revision queries.

use crate::cube::MAX_SIDE;
use crate::session::CubeSession;

/// Creates a new cube session and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new session with a `side³` cube, or null if `side` is 0 or
/// larger than `MAX_SIDE`.
///
/// # Safety
/// The returned pointer must eventually be freed with `lc_destroy()`.
#[no_mangle]
pub extern "C" fn lc_create(side: u16) -> *mut CubeSession {
    if side == 0 || side as usize > MAX_SIDE {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(CubeSession::new(side as usize)))
}

/// Destroys a session and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lc_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lc_destroy(ptr: *mut CubeSession) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the cube's revision counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// The revision counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lc_revision(ptr: *const CubeSession) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).cube.revision()
}
