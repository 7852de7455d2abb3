//! A cube together with its playback controller, shapes and fonts.
//!
//! This is what a host holds on to; the C ABI in `ffi` wraps one of these
//! behind an opaque pointer.

use crate::config::CubeConfig;
use crate::cube::{Cube, Face};
use crate::error::Result;
use crate::playback::{AnimationController, Clock, SystemClock};
use crate::shapes::{FontLibrary, ShapeCatalog};

pub struct CubeSession<C: Clock = SystemClock> {
    pub cube: Cube,
    pub controller: AnimationController<C>,
    pub shapes: ShapeCatalog,
    pub fonts: FontLibrary,
}

impl CubeSession<SystemClock> {
    /// A session on the system clock with the built-in shapes.
    pub fn new(side: usize) -> Self {
        Self::with_clock(side, SystemClock::new())
    }

    pub fn from_config(config: &CubeConfig) -> Result<Self> {
        let cube = Cube::from_config(config)?;
        let controller =
            AnimationController::with_config(SystemClock::new(), config.playback_config()?);
        Ok(Self::assemble(cube, controller))
    }
}

impl<C: Clock> CubeSession<C> {
    pub fn with_clock(side: usize, clock: C) -> Self {
        Self::assemble(Cube::new(side), AnimationController::new(clock))
    }

    fn assemble(cube: Cube, controller: AnimationController<C>) -> Self {
        let side = cube.side();
        CubeSession {
            shapes: ShapeCatalog::builtin(side, cube.default_color()),
            fonts: FontLibrary::new(side),
            cube,
            controller,
        }
    }

    /// Paint a catalog shape onto a face.
    pub fn render_shape(&mut self, name: &str, face: Face, offset: i32) -> Result<()> {
        self.cube.paint(&self.shapes, name, face, offset)
    }

    /// Paint a glyph from the active font onto a face.
    pub fn render_char(&mut self, ch: char, face: Face, offset: i32) -> Result<()> {
        let mut key = [0u8; 4];
        self.cube
            .paint(&self.fonts, ch.encode_utf8(&mut key), face, offset)
    }

    /// Fire the playback timer if due.
    pub fn poll(&mut self) -> bool {
        self.controller.poll(&mut self.cube)
    }

    pub fn step(&mut self, n: i32) {
        self.controller.step(&mut self.cube, n);
    }
}
