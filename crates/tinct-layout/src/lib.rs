/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bounding box alignment
//!
//! Places a smaller box inside a larger frame using the number pad
//! layout to pick one of nine positions
//!
//! ```text
//!   7 8 9
//!   4 5 6
//!   1 2 3
//! ```
//!
//! # Example
//! - Put a 20x20 watermark in the bottom left corner of a 100x100 image,
//!   5 pixels from the edges
//! ```
//! use tinct_core::geometry::{Rectangle, Size};
//! use tinct_layout::{align_bbox, AlignOptions};
//!
//! let frame = Rectangle::new(0, 0, 100, 100);
//! let options = AlignOptions::default().set_margin(5);
//!
//! let placed = align_bbox(frame, Size::new(20, 20), 1, options).unwrap();
//!
//! assert_eq!(placed.rectangle(), Some(Rectangle::new(5, 75, 25, 95)));
//! ```
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
    clippy::cast_possible_truncation
)]

pub use crate::align::{align_bbox, Alignment, BoxAligner, Placement};
pub use crate::options::AlignOptions;

pub mod align;
pub mod errors;
pub mod options;
