//! Named shape bitmaps.

use std::collections::BTreeMap;

use super::{parse_bitmap_map, validate_bitmap, BitmapSource};
use crate::cube::{Cell, Rgb};
use crate::error::Result;

// Packed 8x8 bitmaps, one byte per row, most significant bit = column 0.
const HEART_8: [u8; 8] = [0x00, 0x66, 0xff, 0xff, 0xff, 0x7e, 0x3c, 0x18];
const SMILEY_8: [u8; 8] = [0x3c, 0x42, 0xa5, 0x81, 0xa5, 0x99, 0x42, 0x3c];

/// Shape bitmaps keyed by name, all sized for one cube side.
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    side: usize,
    shapes: BTreeMap<String, Vec<Cell>>,
}

/// Whether `index` is one of the middle rows/columns (two of them on even sides).
fn is_centre(index: usize, side: usize) -> bool {
    (2 * index + 1).abs_diff(side) <= 1
}

impl ShapeCatalog {
    /// An empty catalog for faces of `side × side`.
    pub fn new(side: usize) -> Self {
        ShapeCatalog {
            side,
            shapes: BTreeMap::new(),
        }
    }

    /// A catalog preloaded with generated shapes drawn in `color`.
    ///
    /// `square`, `filled`, `x`, `plus`, `diamond` and `frame` exist for every
    /// side; `heart` and `smiley` only for side 8.
    pub fn builtin(side: usize, color: Rgb) -> Self {
        let mut catalog = ShapeCatalog::new(side);
        let n = side;
        let last = n.saturating_sub(1);

        let edge = move |r: usize, c: usize| r == 0 || c == 0 || r == last || c == last;
        let generated: [(&str, Box<dyn Fn(usize, usize) -> bool>); 6] = [
            ("square", Box::new(edge)),
            ("filled", Box::new(|_: usize, _: usize| true)),
            ("x", Box::new(move |r: usize, c: usize| r == c || r + c == last)),
            (
                "plus",
                Box::new(move |r: usize, c: usize| is_centre(r, n) || is_centre(c, n)),
            ),
            (
                "diamond",
                Box::new(move |r: usize, c: usize| (2 * r + 1).abs_diff(n) + (2 * c + 1).abs_diff(n) <= n),
            ),
            (
                "frame",
                Box::new(move |r: usize, c: usize| edge(r, c) || (is_centre(r, n) && is_centre(c, n))),
            ),
        ];
        for (name, lit) in generated {
            catalog
                .shapes
                .insert(name.to_string(), draw(side, color, |r, c| lit(r, c)));
        }

        if side == 8 {
            for (name, rows) in [("heart", HEART_8), ("smiley", SMILEY_8)] {
                let cells = draw(side, color, |r, c| rows[r] & (0x80 >> c) != 0);
                catalog.shapes.insert(name.to_string(), cells);
            }
        }

        catalog
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, name: &str) -> Option<&[Cell]> {
        self.shapes.get(name).map(Vec::as_slice)
    }

    /// Shape names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.shapes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Add or replace a shape after checking its record count.
    pub fn insert(&mut self, name: impl Into<String>, cells: Vec<Cell>) -> Result<()> {
        validate_bitmap(&cells, self.side)?;
        self.shapes.insert(name.into(), cells);
        Ok(())
    }

    /// Merge shapes from a JSON object of name → records. Nothing is added
    /// unless every entry is valid. Returns the number of shapes loaded.
    pub fn load_json(&mut self, text: &str) -> Result<usize> {
        let map = parse_bitmap_map(text, self.side)?;
        let count = map.len();
        self.shapes.extend(map);
        tracing::debug!(count, "Loaded shapes");
        Ok(count)
    }
}

impl BitmapSource for ShapeCatalog {
    fn resolve(&self, key: &str) -> Option<Vec<Cell>> {
        self.get(key).map(<[Cell]>::to_vec)
    }
}

fn draw(side: usize, color: Rgb, lit: impl Fn(usize, usize) -> bool) -> Vec<Cell> {
    (0..side)
        .flat_map(|r| (0..side).map(move |c| (r, c)))
        .map(|(r, c)| if lit(r, c) { Cell::lit(color) } else { Cell::OFF })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CubeError;

    fn pattern(catalog: &ShapeCatalog, name: &str) -> Vec<String> {
        let side = catalog.side();
        catalog
            .get(name)
            .unwrap()
            .chunks(side)
            .map(|row| row.iter().map(|c| if c.on { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn test_builtin_names() {
        let catalog = ShapeCatalog::builtin(8, Rgb::BLUE);
        assert_eq!(
            catalog.names(),
            vec!["diamond", "filled", "frame", "heart", "plus", "smiley", "square", "x"]
        );
        assert!(!ShapeCatalog::builtin(5, Rgb::BLUE).names().contains(&"heart"));
    }

    #[test]
    fn test_square_is_outline() {
        let catalog = ShapeCatalog::builtin(4, Rgb::BLUE);
        assert_eq!(pattern(&catalog, "square"), vec!["####", "#..#", "#..#", "####"]);
        assert!(catalog
            .get("square")
            .unwrap()
            .iter()
            .filter(|c| c.on)
            .all(|c| c.color == Rgb::BLUE));
    }

    #[test]
    fn test_plus_and_diamond_on_odd_side() {
        let catalog = ShapeCatalog::builtin(5, Rgb::BLUE);
        assert_eq!(
            pattern(&catalog, "plus"),
            vec!["..#..", "..#..", "#####", "..#..", "..#.."]
        );
        assert_eq!(
            pattern(&catalog, "diamond"),
            vec!["..#..", ".###.", "#####", ".###.", "..#.."]
        );
        assert_eq!(
            pattern(&catalog, "x"),
            vec!["#...#", ".#.#.", "..#..", ".#.#.", "#...#"]
        );
    }

    #[test]
    fn test_heart_rows() {
        let catalog = ShapeCatalog::builtin(8, Rgb::new(255, 0, 0));
        assert_eq!(
            pattern(&catalog, "heart"),
            vec![
                "........", ".##..##.", "########", "########", "########", ".######.",
                "..####..", "...##...",
            ]
        );
    }

    #[test]
    fn test_insert_validates_count() {
        let mut catalog = ShapeCatalog::new(2);
        assert!(catalog.insert("dot", vec![Cell::OFF; 4]).is_ok());
        assert!(matches!(
            catalog.insert("bad", vec![Cell::OFF; 3]),
            Err(CubeError::MalformedSlice(_))
        ));
        assert_eq!(catalog.names(), vec!["dot"]);
    }

    #[test]
    fn test_load_json_is_all_or_nothing() {
        let mut catalog = ShapeCatalog::new(1);
        let good = r#"{"on":[{"color":[1,2,3],"on":true}],"off":[{"color":[0,0,0],"on":false}]}"#;
        assert_eq!(catalog.load_json(good).unwrap(), 2);
        assert_eq!(catalog.resolve("on"), Some(vec![Cell::lit(Rgb::new(1, 2, 3))]));

        let bad = r#"{"new":[{"color":[1,2,3],"on":true}],"broken":[]}"#;
        assert!(catalog.load_json(bad).is_err());
        assert!(catalog.get("new").is_none());
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = ShapeCatalog::builtin(3, Rgb::BLUE);
        assert_eq!(catalog.resolve("dodecahedron"), None);
    }
}
