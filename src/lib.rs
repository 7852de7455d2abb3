//! LED Cube - 3D LED Cube Model and Animation Library
//!
//! An N×N×N cube of coloured cells with face-slice import/export, a timed
//! "slide" animation, and shape/font painting. Rust callers use the types
//! directly; host UIs load the `cdylib` and go through the C ABI in [`ffi`].
//!
//! # Modules
//! - [`cube`]: cells, the grid, faces and slices
//! - [`playback`]: the animation controller and its clock
//! - [`shapes`]: shape catalog and font collections
//! - [`render`]: change notifications for a display
//! - [`config`]: TOML configuration
//! - [`ffi`]: C ABI host bridge

pub mod config;
pub mod cube;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod playback;
pub mod render;
pub mod session;
pub mod shapes;


pub use config::CubeConfig;
pub use cube::{Axis, Cell, Coord, Cube, Face, Fallback, Rgb, SliceInput};
pub use error::{ConfigError, CubeError, Result};
pub use playback::{
    AnimationController, Clock, ConfigReport, Direction, ManualClock, PlaybackConfig,
    PlaybackState, PlaybackUpdate, SystemClock,
};
pub use render::{Change, ChangeLog, Renderer};
pub use session::CubeSession;
pub use shapes::{BitmapSource, FontLibrary, ShapeCatalog};
