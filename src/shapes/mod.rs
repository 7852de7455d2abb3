//! Bitmaps that can be painted onto a face: named shapes and font glyphs.

pub mod catalog;
pub mod font;

pub use catalog::ShapeCatalog;
pub use font::{FontCollection, FontLibrary};

use crate::cube::Cell;
use crate::error::{CubeError, Result};

/// Resolves a key to `side²` cell records in slice order.
pub trait BitmapSource {
    fn resolve(&self, key: &str) -> Option<Vec<Cell>>;
}

/// Check that a bitmap has exactly one record per cell of a face.
pub fn validate_bitmap(cells: &[Cell], side: usize) -> Result<()> {
    let expected = side * side;
    if cells.len() != expected {
        return Err(CubeError::wrong_count(expected, cells.len()));
    }
    Ok(())
}

/// Parse a JSON object of key → records, checking every record count.
pub(crate) fn parse_bitmap_map(
    text: &str,
    side: usize,
) -> Result<std::collections::BTreeMap<String, Vec<Cell>>> {
    let map: std::collections::BTreeMap<String, Vec<Cell>> =
        serde_json::from_str(text).map_err(|e| CubeError::MalformedSlice(e.to_string()))?;
    for (key, cells) in &map {
        validate_bitmap(cells, side)
            .map_err(|e| CubeError::MalformedSlice(format!("{key:?}: {e}")))?;
    }
    Ok(map)
}
