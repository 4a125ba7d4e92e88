/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all tinct libraries
//!
//! This crate provides the small set of types and conversions
//! the `tinct` crates build on
//!
//! It currently contains
//!
//! - Integer geometry types, rectangles, sizes and points
//! - Hexadecimal number to RGB(A) conversions and back
//! - 8-bit RGB to HSV conversions matching Python's `colorsys`
//! - A [`Color`](color::Color) type that can hold single band or multi band
//!   colors, with distance and mix operations
//! - A logging facade used by the other crates
//!
//! # Features
//!  - `log`: Routes [`log`] macros to the `log` crate, without it they compile
//!     to nothing.
//!
//!  - `serde`: Enables serializing of the geometry types
//!
#![macro_use]

pub mod color;
pub mod conversions;
pub mod errors;
pub mod geometry;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
