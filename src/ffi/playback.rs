//! Playback control: play, pause, toggle, step, and the host-driven poll.

use std::ffi::c_char;

use super::{status, str_arg, LC_INVALID_ARGUMENT, LC_NULL_POINTER, LC_OK};
use crate::playback::PlaybackUpdate;
use crate::session::CubeSession;

/// Starts (or restarts) playback after merging a JSON update such as
/// `{"delay":100,"direction":"up","stepSize":2,"wrap":false}`.
///
/// Unknown direction or action names are ignored and logged; the rest of
/// the update still applies. A null `json` plays with the current settings.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
/// - `json` must be null or a NUL-terminated string
///
/// # Returns
/// `LC_OK`, `LC_NULL_POINTER`, or `LC_INVALID_ARGUMENT` if the JSON does not
/// parse (playback state is unchanged).
#[no_mangle]
pub unsafe extern "C" fn lc_play_json(ptr: *mut CubeSession, json: *const c_char) -> i32 {
    if ptr.is_null() {
        return LC_NULL_POINTER;
    }

    let update = if json.is_null() {
        PlaybackUpdate::default()
    } else {
        let Some(text) = str_arg(json) else {
            return LC_INVALID_ARGUMENT;
        };
        match PlaybackUpdate::from_json(text) {
            Ok(update) => update,
            Err(err) => return status(Err(err)),
        }
    };

    (*ptr).controller.play(&update);
    LC_OK
}

/// Cancels the pending tick.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
#[no_mangle]
pub unsafe extern "C" fn lc_pause(ptr: *mut CubeSession) {
    if ptr.is_null() {
        return;
    }
    (*ptr).controller.pause();
}

/// Flips playback, or forces it: `force` < 0 toggles, 0 pauses, > 0 plays.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// 1 if playing afterwards, 0 otherwise (including a null pointer).
#[no_mangle]
pub unsafe extern "C" fn lc_toggle(ptr: *mut CubeSession, force: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    let force = match force {
        f if f < 0 => None,
        0 => Some(false),
        _ => Some(true),
    };
    u8::from((*ptr).controller.toggle(force))
}

/// Performs `|n|` ticks immediately; negative `n` steps backwards.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
#[no_mangle]
pub unsafe extern "C" fn lc_step(ptr: *mut CubeSession, n: i32) -> i32 {
    if ptr.is_null() {
        return LC_NULL_POINTER;
    }
    (*ptr).step(n);
    LC_OK
}

/// Fires the pending tick if its deadline has passed. Hosts call this from
/// their frame or event loop.
///
/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
///
/// # Returns
/// 1 if a tick fired, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn lc_poll(ptr: *mut CubeSession) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    u8::from((*ptr).poll())
}

/// # Safety
/// - `ptr` must be a valid pointer to a session, or null
#[no_mangle]
pub unsafe extern "C" fn lc_is_playing(ptr: *const CubeSession) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    u8::from((*ptr).controller.is_playing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{grid, lifecycle};
    use std::ptr;

    #[test]
    fn test_play_pause_toggle() {
        unsafe {
            let session = lifecycle::lc_create(4);
            assert_eq!(lc_is_playing(session), 0);

            assert_eq!(lc_play_json(session, c"{\"delay\":1000}".as_ptr()), LC_OK);
            assert_eq!(lc_is_playing(session), 1);
            assert_eq!((*session).controller.config().delay_ms, 1000);

            lc_pause(session);
            assert_eq!(lc_is_playing(session), 0);

            assert_eq!(lc_toggle(session, -1), 1);
            assert_eq!(lc_toggle(session, 1), 1);
            assert_eq!(lc_toggle(session, 0), 0);
            assert_eq!(lc_toggle(session, -1), 1);

            lifecycle::lc_destroy(session);
        }
    }

    #[test]
    fn test_bad_json_leaves_playback_idle() {
        unsafe {
            let session = lifecycle::lc_create(4);
            assert_eq!(
                lc_play_json(session, c"{\"delay\":".as_ptr()),
                LC_INVALID_ARGUMENT
            );
            assert_eq!(lc_is_playing(session), 0);
            lifecycle::lc_destroy(session);
        }
    }

    #[test]
    fn test_unknown_direction_keeps_previous() {
        unsafe {
            let session = lifecycle::lc_create(4);
            assert_eq!(
                lc_play_json(session, c"{\"direction\":\"sideways\"}".as_ptr()),
                LC_OK
            );
            assert_eq!((*session).controller.config().direction.name(), "forward");
            lifecycle::lc_destroy(session);
        }
    }

    #[test]
    fn test_zero_delay_poll_fires() {
        unsafe {
            let session = lifecycle::lc_create(4);
            grid::lc_set_cell(session, 0, 0, 0, 1, 0, 0, 255);

            lc_play_json(session, c"{\"delay\":0,\"direction\":\"back\"}".as_ptr());
            assert_eq!(lc_poll(session), 1);
            assert_eq!(grid::lc_get_cell_on(session, 0, 0, 1), 1);

            lc_pause(session);
            assert_eq!(lc_poll(session), 0);

            assert_eq!(lc_step(session, -1), LC_OK);
            assert_eq!(grid::lc_get_cell_on(session, 0, 0, 0), 1);

            lifecycle::lc_destroy(session);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(lc_play_json(ptr::null_mut(), ptr::null()), LC_NULL_POINTER);
            lc_pause(ptr::null_mut()); // Should not crash
            assert_eq!(lc_toggle(ptr::null_mut(), -1), 0);
            assert_eq!(lc_step(ptr::null_mut(), 1), LC_NULL_POINTER);
            assert_eq!(lc_poll(ptr::null_mut()), 0);
            assert_eq!(lc_is_playing(ptr::null()), 0);
        }
    }
}
