/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::Deserialize;
use tinct_colors::{ColorResolver, PaletteKind, PaletteSet};

use crate::load_fixtures;

#[derive(Clone, Deserialize, Debug)]
pub struct NearestEntry {
    pub color:    [u8; 3],
    /// Palette names to search, all of them if missing
    pub palettes: Option<Vec<String>>,
    pub name:     String,
    pub expected: [u8; 3],
    pub comment:  Option<String>
}

impl NearestEntry {
    fn palette_set(&self) -> PaletteSet {
        match &self.palettes {
            None => PaletteSet::all(),
            Some(names) => names
                .iter()
                .map(|name| {
                    PaletteKind::ALL
                        .into_iter()
                        .find(|kind| kind.name() == name)
                        .unwrap_or_else(|| panic!("Unknown palette {name:?} in fixture"))
                })
                .collect()
        }
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_nearest_named_color() {
    let entries: Vec<NearestEntry> = load_fixtures("nearest.json");
    let resolver = ColorResolver::bundled();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let result = resolver.nearest_named_color(entry.color, entry.palette_set());

        let ok = matches!(
            &result,
            Ok((name, rgb)) if *name == entry.name && *rgb == entry.expected
        );
        if !ok {
            error = true;
            failed.push(entry.to_owned());
            let err = format!(
                "Nearest color mismatch for {:?}\nExpected {:?} but found {:?}\nConfig:{:#?}",
                entry.color,
                (&entry.name, entry.expected),
                result,
                entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found while searching fixtures\n {:#?}", failed);
    }
}

#[test]
fn test_nearest_of_every_named_color_is_itself() {
    let resolver = ColorResolver::bundled();
    let css = PaletteSet::empty().with(PaletteKind::Css);

    for (name, rgb) in resolver.palettes().get(PaletteKind::Css).iter() {
        let (_, found) = resolver.nearest_named_color(rgb, css).unwrap();
        // aliases such as gray and grey share a color
        assert_eq!(found, rgb, "{name}");
    }
}
