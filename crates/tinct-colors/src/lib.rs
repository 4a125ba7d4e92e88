/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color string parsing and named color lookup
//!
//! This crate turns strings such as `#ab34df`, `rgb(67%, 20%, 87.5%)`
//! or `rebeccapurple` into RGB arrays, and finds the closest named color
//! for an RGB array.
//!
//! # Supported notations
//! - `#ab34df`, six hex digits, `#` optional
//! - `#a3d`, three hex digits, each doubled
//! - `rgb(171, 52, 223)`, integers up to 255
//! - `rgb(0.67, 0.2, 0.87)`, floats up to 1.0
//! - `rgb(67%, 20%, 87.5%)`, percentages up to 100
//! - color names from the CSS, Crayola, xkcd and meodai datasets
//!
//! # Usage
//! ```
//! use tinct_colors::kinds::{PaletteKind, PaletteSet, ParserSet};
//! use tinct_colors::resolver::ColorResolver;
//!
//! let resolver = ColorResolver::bundled();
//!
//! let rgb = resolver.parse("rebeccapurple", ParserSet::all()).unwrap();
//! assert_eq!(rgb, [102, 51, 153]);
//!
//! let css = PaletteSet::empty().with(PaletteKind::Css);
//! let (name, _) = resolver.nearest_named_color([254, 1, 1], css).unwrap();
//! assert_eq!(name, "red");
//! ```
//!
//! # Features
//! - `fs`: Enables [`Palettes::from_dir`](palette::Palettes::from_dir) to load
//!    complete datasets from disk. Enabled by default.
//! - `log`: Forward log messages to the `log` crate.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub use crate::kinds::{PaletteKind, PaletteSet, ParserKind, ParserSet};
pub use crate::resolver::ColorResolver;

pub mod errors;
pub mod kinds;
pub mod palette;
pub mod parsers;
pub mod resolver;
