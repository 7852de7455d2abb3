//! Font collections: character → face bitmap, several loaded, one active.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::{parse_bitmap_map, BitmapSource};
use crate::cube::Cell;
use crate::error::{CubeError, Result};

/// One font: a bitmap per character.
#[derive(Clone, Debug, Default)]
pub struct FontCollection {
    glyphs: HashMap<char, Vec<Cell>>,
}

impl FontCollection {
    /// Parse a JSON object whose keys are single characters.
    pub fn from_json(text: &str, side: usize) -> Result<Self> {
        let map = parse_bitmap_map(text, side)?;
        let mut glyphs = HashMap::with_capacity(map.len());
        for (key, cells) in map {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    glyphs.insert(ch, cells);
                }
                _ => {
                    return Err(CubeError::MalformedSlice(format!(
                        "font key {key:?} is not a single character"
                    )))
                }
            }
        }
        Ok(FontCollection { glyphs })
    }

    pub fn glyph(&self, ch: char) -> Option<&[Cell]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Loaded fonts by name. The first font loaded becomes active.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    side: usize,
    fonts: BTreeMap<String, FontCollection>,
    active: Option<String>,
}

impl FontLibrary {
    pub fn new(side: usize) -> Self {
        FontLibrary {
            side,
            fonts: BTreeMap::new(),
            active: None,
        }
    }

    /// Load (or replace) a font from JSON text. Returns the glyph count.
    pub fn load_json(&mut self, name: &str, text: &str) -> Result<usize> {
        let font = FontCollection::from_json(text, self.side)?;
        let count = font.len();
        self.fonts.insert(name.to_string(), font);
        if self.active.is_none() {
            self.active = Some(name.to_string());
        }
        tracing::info!(font = name, glyphs = count, "Loaded font");
        Ok(count)
    }

    /// Load a font from a JSON file.
    pub fn load_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CubeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_json(name, &text)
    }

    /// Make a loaded font the active one.
    pub fn activate(&mut self, name: &str) -> Result<()> {
        if !self.fonts.contains_key(name) {
            return Err(CubeError::NotFound(format!("font {name:?}")));
        }
        self.active = Some(name.to_string());
        tracing::debug!(font = name, "Activated font");
        Ok(())
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn font_names(&self) -> Vec<&str> {
        self.fonts.keys().map(String::as_str).collect()
    }

    pub fn font(&self, name: &str) -> Option<&FontCollection> {
        self.fonts.get(name)
    }

    /// Look a character up in the active font.
    pub fn glyph(&self, ch: char) -> Option<&[Cell]> {
        let active = self.active.as_deref()?;
        self.fonts.get(active)?.glyph(ch)
    }
}

impl BitmapSource for FontLibrary {
    fn resolve(&self, key: &str) -> Option<Vec<Cell>> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.glyph(ch).map(<[Cell]>::to_vec),
            _ => None,
        }
    }
}
