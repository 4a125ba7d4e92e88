/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parser and palette identifiers, and sets of them used to
//! enable or disable parsers and palettes.
use core::fmt::{Display, Formatter};

/// Named color datasets
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PaletteKind {
    /// The 148 CSS named colors
    Css,
    /// Crayola crayon colors
    Crayola,
    /// Results of the xkcd color survey
    Xkcd,
    /// The curated subset of meodai's color names
    MeodaiBest,
    /// meodai's full color name list
    Meodai
}

impl PaletteKind {
    /// All palettes, in the order their name parsers run
    pub const ALL: [PaletteKind; 5] = [
        PaletteKind::Css,
        PaletteKind::Crayola,
        PaletteKind::Xkcd,
        PaletteKind::MeodaiBest,
        PaletteKind::Meodai
    ];

    /// Order palettes are merged in for nearest color lookups,
    /// later palettes override names of earlier ones
    pub const MERGE_ORDER: [PaletteKind; 5] = [
        PaletteKind::Meodai,
        PaletteKind::MeodaiBest,
        PaletteKind::Xkcd,
        PaletteKind::Crayola,
        PaletteKind::Css
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PaletteKind::Css => "css",
            PaletteKind::Crayola => "crayola",
            PaletteKind::Xkcd => "xkcd",
            PaletteKind::MeodaiBest => "meodai-best",
            PaletteKind::Meodai => "meodai"
        }
    }

    /// File name of the dataset, as bundled and as looked up by
    /// [`Palettes::from_dir`](crate::palette::Palettes::from_dir)
    pub const fn file_name(self) -> &'static str {
        match self {
            PaletteKind::Css => "css.json",
            PaletteKind::Crayola => "crayola.json",
            PaletteKind::Xkcd => "xkcd.json",
            PaletteKind::MeodaiBest => "meodai-best.json",
            PaletteKind::Meodai => "meodai.json"
        }
    }

    /// The parser that looks names up in this palette
    pub const fn parser(self) -> ParserKind {
        match self {
            PaletteKind::Css => ParserKind::NameCss,
            PaletteKind::Crayola => ParserKind::NameCrayola,
            PaletteKind::Xkcd => ParserKind::NameXkcd,
            PaletteKind::MeodaiBest => ParserKind::NameMeodaiBest,
            PaletteKind::Meodai => ParserKind::NameMeodai
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for PaletteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Color string formats understood by the resolver
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParserKind {
    /// `#ab34df` or `ab34df`
    Hex6,
    /// `#a3d` or `a3d`, each digit is doubled
    Hex3,
    /// `rgb(171, 52, 223)`
    RgbFuncInt,
    /// `rgb(0.67, 0.2, 0.87)`
    RgbFuncFloat,
    /// `rgb(67%, 20%, 87.5%)`
    RgbFuncPercent,
    NameCss,
    NameCrayola,
    NameXkcd,
    NameMeodaiBest,
    NameMeodai
}

impl ParserKind {
    /// All parsers in the order [`ColorResolver::parse`](crate::resolver::ColorResolver::parse) runs them
    pub const ALL: [ParserKind; 10] = [
        ParserKind::Hex6,
        ParserKind::Hex3,
        ParserKind::RgbFuncInt,
        ParserKind::RgbFuncFloat,
        ParserKind::RgbFuncPercent,
        ParserKind::NameCss,
        ParserKind::NameCrayola,
        ParserKind::NameXkcd,
        ParserKind::NameMeodaiBest,
        ParserKind::NameMeodai
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ParserKind::Hex6 => "hex6",
            ParserKind::Hex3 => "hex3",
            ParserKind::RgbFuncInt => "rgbfunc_int",
            ParserKind::RgbFuncFloat => "rgbfunc_float",
            ParserKind::RgbFuncPercent => "rgbfunc_percent",
            ParserKind::NameCss => "name_css",
            ParserKind::NameCrayola => "name_crayola",
            ParserKind::NameXkcd => "name_xkcd",
            ParserKind::NameMeodaiBest => "name_meodai_best",
            ParserKind::NameMeodai => "name_meodai"
        }
    }

    /// The palette a name parser looks in, `None` for pattern parsers
    pub const fn palette(self) -> Option<PaletteKind> {
        match self {
            ParserKind::NameCss => Some(PaletteKind::Css),
            ParserKind::NameCrayola => Some(PaletteKind::Crayola),
            ParserKind::NameXkcd => Some(PaletteKind::Xkcd),
            ParserKind::NameMeodaiBest => Some(PaletteKind::MeodaiBest),
            ParserKind::NameMeodai => Some(PaletteKind::Meodai),
            _ => None
        }
    }

    /// Parse a parser name such as `hex6` or `name_css`
    pub fn from_name(name: &str) -> Option<ParserKind> {
        ParserKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl Display for ParserKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of enabled parsers
///
/// Iteration always follows [`ParserKind::ALL`], regardless of
/// the order parsers were added in.
///
/// ```
/// use tinct_colors::kinds::{ParserKind, ParserSet};
///
/// let set = ParserSet::all().without(ParserKind::Hex3);
/// assert!(!set.contains(ParserKind::Hex3));
/// assert_eq!(set.iter().count(), 9);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParserSet {
    bits: u16
}

impl ParserSet {
    pub const fn empty() -> ParserSet {
        ParserSet { bits: 0 }
    }

    pub const fn all() -> ParserSet {
        ParserSet {
            bits: (1 << ParserKind::ALL.len()) - 1
        }
    }

    /// Only the hex and `rgb()` parsers, no palette lookups
    pub const fn patterns() -> ParserSet {
        ParserSet::empty()
            .with(ParserKind::Hex6)
            .with(ParserKind::Hex3)
            .with(ParserKind::RgbFuncInt)
            .with(ParserKind::RgbFuncFloat)
            .with(ParserKind::RgbFuncPercent)
    }

    /// Only the palette lookups
    pub const fn names() -> ParserSet {
        ParserSet {
            bits: ParserSet::all().bits & !ParserSet::patterns().bits
        }
    }

    #[must_use]
    pub const fn with(self, kind: ParserKind) -> ParserSet {
        ParserSet {
            bits: self.bits | (1 << kind as u16)
        }
    }

    #[must_use]
    pub const fn without(self, kind: ParserKind) -> ParserSet {
        ParserSet {
            bits: self.bits & !(1 << kind as u16)
        }
    }

    pub const fn contains(self, kind: ParserKind) -> bool {
        self.bits & (1 << kind as u16) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Enabled parsers in priority order
    pub fn iter(self) -> impl Iterator<Item = ParserKind> {
        ParserKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl Default for ParserSet {
    fn default() -> Self {
        ParserSet::all()
    }
}

impl FromIterator<ParserKind> for ParserSet {
    fn from_iter<T: IntoIterator<Item = ParserKind>>(iter: T) -> Self {
        iter.into_iter().fold(ParserSet::empty(), ParserSet::with)
    }
}

/// A set of enabled palettes
///
/// Iteration follows [`PaletteKind::MERGE_ORDER`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PaletteSet {
    bits: u8
}

impl PaletteSet {
    pub const fn empty() -> PaletteSet {
        PaletteSet { bits: 0 }
    }

    pub const fn all() -> PaletteSet {
        PaletteSet {
            bits: (1 << PaletteKind::ALL.len()) - 1
        }
    }

    #[must_use]
    pub const fn with(self, kind: PaletteKind) -> PaletteSet {
        PaletteSet {
            bits: self.bits | (1 << kind as u8)
        }
    }

    #[must_use]
    pub const fn without(self, kind: PaletteKind) -> PaletteSet {
        PaletteSet {
            bits: self.bits & !(1 << kind as u8)
        }
    }

    pub const fn contains(self, kind: PaletteKind) -> bool {
        self.bits & (1 << kind as u8) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Enabled palettes in merge order
    pub fn iter(self) -> impl Iterator<Item = PaletteKind> {
        PaletteKind::MERGE_ORDER
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        PaletteSet::all()
    }
}

impl FromIterator<PaletteKind> for PaletteSet {
    fn from_iter<T: IntoIterator<Item = PaletteKind>>(iter: T) -> Self {
        iter.into_iter().fold(PaletteSet::empty(), PaletteSet::with)
    }
}
