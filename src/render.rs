//! Change notifications for whatever displays the cube.
//!
//! The cube is usable without a renderer. A renderer is attached afterwards
//! and hears about every mutation once it has been fully applied.

use crate::cube::{Coord, Face};

/// What changed in the cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    /// A single cell was written.
    Cell { coord: Coord, index: usize },
    /// A face at an offset was rewritten from slice data.
    Slice { face: Face, offset: usize },
    /// Potentially every cell changed (clear, shift).
    Bulk,
}

/// Receives grid-state notifications.
pub trait Renderer {
    /// Called after a mutation has been applied in full. `revision` is the
    /// cube's revision counter after the change.
    fn changed(&mut self, change: &Change, revision: u64);
}

/// A renderer that keeps every notification, for hosts that poll.
#[derive(Debug, Default)]
pub struct ChangeLog {
    pub entries: Vec<(Change, u64)>,
}

impl ChangeLog {
    /// Drain the accumulated notifications.
    pub fn take(&mut self) -> Vec<(Change, u64)> {
        std::mem::take(&mut self.entries)
    }
}

impl Renderer for ChangeLog {
    fn changed(&mut self, change: &Change, revision: u64) {
        self.entries.push((change.clone(), revision));
    }
}

impl<R: Renderer + ?Sized> Renderer for std::rc::Rc<std::cell::RefCell<R>> {
    fn changed(&mut self, change: &Change, revision: u64) {
        self.borrow_mut().changed(change, revision);
    }
}
