/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when parsing colors or loading palettes
use core::fmt::{Debug, Display, Formatter};

use crate::kinds::{PaletteKind, ParserKind};

/// Possible errors when resolving a color
pub enum ColorErrors {
    /// A pattern parser didn't match the input, or one of the
    /// matched numbers was out of range
    FormatMismatch { parser: ParserKind, input: String },
    /// The name is not in the palette
    ///
    /// `name` is stored lower-cased, as it was looked up
    UnknownName { palette: PaletteKind, name: String },
    /// None of the enabled parsers could parse the input
    NoMatch(String),
    /// A nearest color lookup had no colors to pick from
    EmptyPalette
}

impl Debug for ColorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorErrors::FormatMismatch { parser, input } => {
                writeln!(f, "String {input:?} does not match {parser} format")
            }
            ColorErrors::UnknownName { palette, name } => {
                writeln!(f, "Color {name:?} is not named in the {palette} dataset")
            }
            ColorErrors::NoMatch(input) => {
                writeln!(f, "Could not find a working parser for {input:?}")
            }
            ColorErrors::EmptyPalette => {
                writeln!(f, "No named colors to search, enable at least one non-empty palette")
            }
        }
    }
}

impl Display for ColorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ColorErrors {}

/// Possible errors when loading a palette
pub enum PaletteErrors {
    /// The dataset is not a flat JSON object of strings
    Json(serde_json::Error),
    /// An entry's value is not a 6 digit hex color
    InvalidHex { name: String, value: String },
    /// The dataset could not be read
    #[cfg(feature = "fs")]
    Io(std::path::PathBuf, std::io::Error)
}

impl Debug for PaletteErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteErrors::Json(err) => {
                writeln!(f, "Malformed palette: {err}")
            }
            PaletteErrors::InvalidHex { name, value } => {
                writeln!(f, "Palette color {name:?} has invalid value {value:?}, expected a hex6 color")
            }
            #[cfg(feature = "fs")]
            PaletteErrors::Io(path, err) => {
                writeln!(f, "Could not read palette {}: {err}", path.display())
            }
        }
    }
}

impl Display for PaletteErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PaletteErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteErrors::Json(err) => Some(err),
            #[cfg(feature = "fs")]
            PaletteErrors::Io(_, err) => Some(err),
            PaletteErrors::InvalidHex { .. } => None
        }
    }
}

impl From<serde_json::Error> for PaletteErrors {
    fn from(value: serde_json::Error) -> Self {
        PaletteErrors::Json(value)
    }
}
