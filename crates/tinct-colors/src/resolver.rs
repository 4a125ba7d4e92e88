/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resolve color strings to RGB, and RGB to color names
use std::collections::HashMap;

use tinct_core::log::{debug, trace};

use crate::errors::ColorErrors;
use crate::kinds::{PaletteKind, PaletteSet, ParserKind, ParserSet};
use crate::palette::Palettes;
use crate::parsers::{
    parse_hex3, parse_hex6, parse_rgbfunc_float, parse_rgbfunc_int, parse_rgbfunc_percent
};

/// Parses color strings and finds named colors
///
/// The resolver borrows the palettes it searches, use
/// [`ColorResolver::bundled`] for the datasets shipped with this crate.
///
/// # Example
/// ```
/// use tinct_colors::kinds::ParserSet;
/// use tinct_colors::resolver::ColorResolver;
///
/// let resolver = ColorResolver::bundled();
///
/// assert_eq!(resolver.parse("#ab34df", ParserSet::all()).unwrap(), [171, 52, 223]);
/// assert_eq!(resolver.parse("rgb(0, 128, 0)", ParserSet::all()).unwrap(), [0, 128, 0]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorResolver<'p> {
    palettes: &'p Palettes
}

impl ColorResolver<'static> {
    /// A resolver over the bundled palettes
    pub fn bundled() -> ColorResolver<'static> {
        ColorResolver::new(Palettes::bundled())
    }
}

impl<'p> ColorResolver<'p> {
    pub fn new(palettes: &'p Palettes) -> ColorResolver<'p> {
        ColorResolver { palettes }
    }

    pub fn palettes(&self) -> &'p Palettes {
        self.palettes
    }

    /// Run a single parser
    ///
    /// Use this over [`parse`](Self::parse) when the reason a
    /// string was rejected matters.
    ///
    /// # Errors
    /// - [`ColorErrors::FormatMismatch`] from pattern parsers
    /// - [`ColorErrors::UnknownName`] from name parsers
    pub fn parse_with(&self, parser: ParserKind, input: &str) -> Result<[u8; 3], ColorErrors> {
        match parser {
            ParserKind::Hex6 => parse_hex6(input),
            ParserKind::Hex3 => parse_hex3(input),
            ParserKind::RgbFuncInt => parse_rgbfunc_int(input),
            ParserKind::RgbFuncFloat => parse_rgbfunc_float(input),
            ParserKind::RgbFuncPercent => parse_rgbfunc_percent(input),
            ParserKind::NameCss => self.parse_name(PaletteKind::Css, input),
            ParserKind::NameCrayola => self.parse_name(PaletteKind::Crayola, input),
            ParserKind::NameXkcd => self.parse_name(PaletteKind::Xkcd, input),
            ParserKind::NameMeodaiBest => self.parse_name(PaletteKind::MeodaiBest, input),
            ParserKind::NameMeodai => self.parse_name(PaletteKind::Meodai, input)
        }
    }

    /// Look a name up in one palette, ignoring case
    ///
    /// The name is not trimmed.
    ///
    /// # Errors
    /// [`ColorErrors::UnknownName`] if the palette doesn't have the name
    pub fn parse_name(&self, palette: PaletteKind, name: &str) -> Result<[u8; 3], ColorErrors> {
        let name = name.to_lowercase();

        match self.palettes.get(palette).get(&name) {
            Some(rgb) => Ok(rgb),
            None => Err(ColorErrors::UnknownName { palette, name })
        }
    }

    /// Parse a color string with every enabled parser
    ///
    /// Parsers run in [`ParserKind::ALL`] order and the result of the
    /// **last** parser that succeeds is returned, not the first.
    /// E.g. `"bad"` is both a hex3 color and a palette name, with all
    /// parsers on the palette name wins. Disable parsers to get a
    /// different precedence.
    ///
    /// Individual parser errors are dropped.
    ///
    /// # Errors
    /// [`ColorErrors::NoMatch`] if no enabled parser accepts the string
    pub fn parse(&self, input: &str, parsers: ParserSet) -> Result<[u8; 3], ColorErrors> {
        // later successes overwrite earlier ones, callers rely on this
        let mut result = None;

        for parser in parsers.iter() {
            match self.parse_with(parser, input) {
                Ok(rgb) => {
                    trace!("Parser {parser} resolved {input:?} to {rgb:?}");
                    result = Some(rgb);
                }
                Err(err) => trace!("Parser {parser} rejected {input:?}: {err}")
            }
        }
        result.ok_or_else(|| ColorErrors::NoMatch(input.to_string()))
    }

    /// Find the named color closest to `color`
    ///
    /// Enabled palettes are merged in [`PaletteKind::MERGE_ORDER`], a name
    /// present in several palettes takes the color of the last one but
    /// keeps the position of the first. Every entry is then compared by
    /// euclidean distance in RGB space, ties go to the earliest entry.
    ///
    /// This is a linear scan over all enabled palettes.
    ///
    /// # Errors
    /// [`ColorErrors::EmptyPalette`] if the enabled palettes have no colors
    pub fn nearest_named_color(
        &self, color: [u8; 3], palettes: PaletteSet
    ) -> Result<(&'p str, [u8; 3]), ColorErrors> {
        let pool = self.merged_pool(palettes);
        debug!("Searching {} named colors for {color:?}", pool.len());

        let mut best: Option<(&'p str, [u8; 3], u32)> = None;

        for (name, rgb) in pool {
            let distance = squared_distance(color, rgb);
            match best {
                Some((_, _, best_distance)) if best_distance <= distance => {}
                _ => best = Some((name, rgb, distance))
            }
        }
        best.map(|(name, rgb, _)| (name, rgb))
            .ok_or(ColorErrors::EmptyPalette)
    }

    fn merged_pool(&self, palettes: PaletteSet) -> Vec<(&'p str, [u8; 3])> {
        let mut pool: Vec<(&'p str, [u8; 3])> = Vec::new();
        let mut positions: HashMap<&'p str, usize> = HashMap::new();

        for kind in palettes.iter() {
            for (name, rgb) in self.palettes.get(kind).iter() {
                match positions.get(name) {
                    Some(&pos) => pool[pos].1 = rgb,
                    None => {
                        positions.insert(name, pool.len());
                        pool.push((name, rgb));
                    }
                }
            }
        }
        pool
    }
}

/// Squared euclidean distance, orders the same as the distance itself
fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = u32::from(x.abs_diff(*y));
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::errors::ColorErrors;
    use crate::kinds::{PaletteKind, PaletteSet, ParserKind, ParserSet};
    use crate::palette::{Palette, Palettes};
    use crate::resolver::{squared_distance, ColorResolver};

    fn synthetic() -> Palettes {
        Palettes::default()
            .set_palette(
                PaletteKind::Css,
                Palette::from_entries([("red", [255, 0, 0]), ("navy", [0, 0, 128])])
            )
            .set_palette(
                PaletteKind::Xkcd,
                Palette::from_entries([("red", [229, 0, 0]), ("bad", [1, 2, 3])])
            )
            .set_palette(
                PaletteKind::Meodai,
                Palette::from_entries([
                    ("dark red", [139, 0, 0]),
                    ("red", [250, 10, 10]),
                    ("blue", [0, 0, 250])
                ])
            )
    }

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance([255, 0, 0], [255, 3, 4]), 25);
        assert_eq!(squared_distance([0, 0, 0], [255, 255, 255]), 3 * 255 * 255);
    }

    #[test]
    fn test_parse_name_ignores_case() {
        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);

        assert_eq!(resolver.parse_name(PaletteKind::Css, "NaVy").unwrap(), [0, 0, 128]);
        assert!(matches!(
            resolver.parse_name(PaletteKind::Css, "teal"),
            Err(ColorErrors::UnknownName { palette: PaletteKind::Css, .. })
        ));
        // names are not trimmed
        assert!(resolver.parse_name(PaletteKind::Css, " red").is_err());
    }

    #[test]
    fn test_last_successful_parser_wins() {
        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);

        // hex3 and name_xkcd both accept "bad", the later parser wins
        assert_eq!(resolver.parse("bad", ParserSet::all()).unwrap(), [1, 2, 3]);
        assert_eq!(resolver.parse("bad", ParserSet::patterns()).unwrap(), [187, 170, 221]);

        // red is in three palettes, meodai runs last
        assert_eq!(resolver.parse("red", ParserSet::all()).unwrap(), [250, 10, 10]);
        let css_first = ParserSet::all().without(ParserKind::NameMeodai).without(ParserKind::NameXkcd);
        assert_eq!(resolver.parse("red", css_first).unwrap(), [255, 0, 0]);
    }

    #[test]
    fn test_no_match() {
        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);

        assert!(matches!(
            resolver.parse("not a color", ParserSet::all()),
            Err(ColorErrors::NoMatch(ref s)) if s == "not a color"
        ));
        assert!(matches!(
            resolver.parse("#fff", ParserSet::empty()),
            Err(ColorErrors::NoMatch(_))
        ));
        assert!(matches!(
            resolver.parse("#fff", ParserSet::all().without(ParserKind::Hex3)),
            Err(ColorErrors::NoMatch(_))
        ));
    }

    #[test]
    fn test_nearest_named_color() {
        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);

        let (name, rgb) = resolver.nearest_named_color([140, 5, 5], PaletteSet::all()).unwrap();
        assert_eq!((name, rgb), ("dark red", [139, 0, 0]));

        let (name, rgb) = resolver.nearest_named_color([0, 0, 255], PaletteSet::all()).unwrap();
        assert_eq!((name, rgb), ("blue", [0, 0, 250]));

        let (name, _) = resolver
            .nearest_named_color([0, 0, 255], PaletteSet::empty().with(PaletteKind::Css))
            .unwrap();
        assert_eq!(name, "navy");
    }

    #[test]
    fn test_nearest_merges_later_palettes_over_earlier() {
        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);

        // css overrides red to an exact match
        let (name, rgb) = resolver.nearest_named_color([255, 0, 0], PaletteSet::all()).unwrap();
        assert_eq!((name, rgb), ("red", [255, 0, 0]));

        // without css, xkcd's red overrides meodai's
        let no_css = PaletteSet::all().without(PaletteKind::Css);
        let (name, rgb) = resolver.nearest_named_color([229, 0, 0], no_css).unwrap();
        assert_eq!((name, rgb), ("red", [229, 0, 0]));
    }

    #[test]
    fn test_nearest_ties_go_to_first_entry() {
        let palettes = Palettes::default().set_palette(
            PaletteKind::Css,
            Palette::from_entries([
                ("above", [10, 10, 12]),
                ("below", [10, 10, 8]),
                ("far", [200, 200, 200])
            ])
        );
        let resolver = ColorResolver::new(&palettes);
        let (name, _) = resolver.nearest_named_color([10, 10, 10], PaletteSet::all()).unwrap();
        assert_eq!(name, "above");

        // merge order decides, meodai entries come before css entries
        let palettes = palettes.set_palette(
            PaletteKind::Meodai,
            Palette::from_entries([("also below", [10, 10, 8])])
        );
        let resolver = ColorResolver::new(&palettes);
        let (name, _) = resolver.nearest_named_color([10, 10, 10], PaletteSet::all()).unwrap();
        assert_eq!(name, "also below");
    }

    #[test]
    fn test_nearest_empty_pool() {
        let palettes = Palettes::default();
        let resolver = ColorResolver::new(&palettes);
        assert!(matches!(
            resolver.nearest_named_color([0, 0, 0], PaletteSet::all()),
            Err(ColorErrors::EmptyPalette)
        ));

        let palettes = synthetic();
        let resolver = ColorResolver::new(&palettes);
        assert!(matches!(
            resolver.nearest_named_color([0, 0, 0], PaletteSet::empty()),
            Err(ColorErrors::EmptyPalette)
        ));
    }
}
