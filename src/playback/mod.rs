//! Timed animation of the cube.

pub mod clock;
pub mod config;
pub mod controller;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Action, ConfigReport, Direction, PlaybackConfig, PlaybackUpdate};
pub use controller::{AnimationController, PlaybackState};
