/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Named color palettes
//!
//! A palette is a flat JSON object mapping lower-case color names to
//! six digit hex colors, with or without a leading `#`
//!
//! ```json
//! { "red": "#ff0000", "rebeccapurple": "663399" }
//! ```
//!
//! Entries keep the order they appear in the file, nearest color
//! lookups break ties by that order.
use core::fmt;
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tinct_core::log::debug;

use crate::errors::PaletteErrors;
use crate::kinds::PaletteKind;
use crate::parsers::parse_hex6;

const CSS_JSON: &str = include_str!("../data/css.json");
const CRAYOLA_JSON: &str = include_str!("../data/crayola.json");
const XKCD_JSON: &str = include_str!("../data/xkcd.json");
const MEODAI_BEST_JSON: &str = include_str!("../data/meodai-best.json");
const MEODAI_JSON: &str = include_str!("../data/meodai.json");

static BUNDLED: LazyLock<Palettes> = LazyLock::new(|| {
    let palettes = Palettes::from_json_strs([
        CSS_JSON,
        CRAYOLA_JSON,
        XKCD_JSON,
        MEODAI_BEST_JSON,
        MEODAI_JSON
    ]);
    // the datasets are compiled in and checked by the test suite
    palettes.expect("bundled palettes are valid")
});

/// JSON object entries in file order
struct OrderedEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of color names to hex strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// An ordered, immutable name to color table
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<(String, [u8; 3])>,
    index:   HashMap<String, usize>
}

impl Palette {
    /// Decode a palette from its JSON representation
    ///
    /// Names are lower-cased. If a name repeats, the later value
    /// replaces the earlier one but keeps its position.
    ///
    /// # Errors
    /// - [`PaletteErrors::Json`] if the input is not a flat object of strings
    /// - [`PaletteErrors::InvalidHex`] if a value is not a six digit hex color
    pub fn from_json(json: &str) -> Result<Palette, PaletteErrors> {
        let OrderedEntries(raw) = serde_json::from_str(json)?;

        let mut palette = Palette::default();
        palette.entries.reserve(raw.len());

        for (name, value) in raw {
            let Ok(rgb) = parse_hex6(&value) else {
                return Err(PaletteErrors::InvalidHex { name, value });
            };
            palette.insert(name.to_lowercase(), rgb);
        }
        Ok(palette)
    }

    /// Build a palette from already decoded entries
    ///
    /// Follows the same naming rules as [`from_json`](Self::from_json).
    pub fn from_entries<I, S>(entries: I) -> Palette
    where
        I: IntoIterator<Item = (S, [u8; 3])>,
        S: AsRef<str>
    {
        let mut palette = Palette::default();
        for (name, rgb) in entries {
            palette.insert(name.as_ref().to_lowercase(), rgb);
        }
        palette
    }

    fn insert(&mut self, name: String, rgb: [u8; 3]) {
        if let Some(&pos) = self.index.get(&name) {
            self.entries[pos].1 = rgb;
            return;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, rgb));
    }

    /// Look up a lower-case name
    pub fn get(&self, name: &str) -> Option<[u8; 3]> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, [u8; 3])> {
        self.entries.iter().map(|(name, rgb)| (name.as_str(), *rgb))
    }
}

/// The five palettes the resolver searches
///
/// Palettes are read only once built. The bundled set is decoded on
/// first use and shared by the whole process, other sets can be built
/// for tests or to use complete upstream datasets.
///
/// ```
/// use tinct_colors::kinds::PaletteKind;
/// use tinct_colors::palette::{Palette, Palettes};
///
/// let palettes = Palettes::default()
///     .set_palette(PaletteKind::Css, Palette::from_entries([("red", [255, 0, 0])]));
///
/// assert_eq!(palettes.get(PaletteKind::Css).get("red"), Some([255, 0, 0]));
/// assert!(palettes.get(PaletteKind::Xkcd).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Palettes {
    palettes: [Palette; 5]
}

impl Palettes {
    /// The datasets compiled into this crate
    ///
    /// The CSS palette is complete. The crayola, xkcd, meodai-best and
    /// meodai palettes are abbreviated, many names from the upstream
    /// lists are missing and resolve to [`ColorErrors::UnknownName`].
    /// Use [`from_dir`](Self::from_dir) with the complete upstream files
    /// when those names are needed.
    ///
    /// [`ColorErrors::UnknownName`]: crate::errors::ColorErrors::UnknownName
    pub fn bundled() -> &'static Palettes {
        &BUNDLED
    }

    /// Decode palettes from JSON strings given in [`PaletteKind::ALL`] order
    ///
    /// # Errors
    /// The first error from [`Palette::from_json`]
    pub fn from_json_strs(json: [&str; 5]) -> Result<Palettes, PaletteErrors> {
        let mut palettes = Palettes::default();

        for (kind, json) in PaletteKind::ALL.into_iter().zip(json) {
            let palette = Palette::from_json(json)?;
            debug!("Loaded {} colors from the {kind} palette", palette.len());
            palettes.palettes[kind.index()] = palette;
        }
        Ok(palettes)
    }

    /// Load palettes from a directory
    ///
    /// Looks for [`PaletteKind::file_name`] for every palette, missing
    /// files leave that palette empty.
    ///
    /// # Errors
    /// - [`PaletteErrors::Io`] if a file exists but can't be read
    /// - Any error from [`Palette::from_json`]
    #[cfg(feature = "fs")]
    pub fn from_dir<P: AsRef<std::path::Path>>(dir: P) -> Result<Palettes, PaletteErrors> {
        use std::io::ErrorKind;

        use tinct_core::log::warn;

        let mut palettes = Palettes::default();

        for kind in PaletteKind::ALL {
            let path = dir.as_ref().join(kind.file_name());
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    warn!("No {kind} palette at {}, leaving it empty", path.display());
                    continue;
                }
                Err(err) => return Err(PaletteErrors::Io(path, err))
            };
            let palette = Palette::from_json(&json)?;
            debug!("Loaded {} colors from {}", palette.len(), path.display());
            palettes.palettes[kind.index()] = palette;
        }
        Ok(palettes)
    }

    /// Replace one palette
    #[must_use]
    pub fn set_palette(mut self, kind: PaletteKind, palette: Palette) -> Palettes {
        self.palettes[kind.index()] = palette;
        self
    }

    pub fn get(&self, kind: PaletteKind) -> &Palette {
        &self.palettes[kind.index()]
    }
}
