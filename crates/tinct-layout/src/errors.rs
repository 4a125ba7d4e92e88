/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when aligning boxes
use core::fmt::{Debug, Display, Formatter};

use tinct_core::geometry::Size;

/// Possible errors that may occur during alignment
pub enum LayoutErrors {
    /// The box does not fit into the frame once the margin was applied
    ///
    /// Can be silenced with [`AlignOptions::set_suppress_wrong_size`](crate::AlignOptions::set_suppress_wrong_size)
    SizeMismatch {
        /// Width and height of the frame after the margin was applied
        frame: (i64, i64),
        /// The box that should have been placed
        size:  Size
    },
    /// The alignment code is not one of `1..=9`
    InvalidAlignment(i32)
}

impl Debug for LayoutErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutErrors::SizeMismatch { frame, size } => {
                writeln!(
                    f,
                    "Bounding box of {}x{} does not fit into frame of {}x{}",
                    size.width, size.height, frame.0, frame.1
                )
            }
            LayoutErrors::InvalidAlignment(code) => {
                writeln!(
                    f,
                    "Invalid alignment value {code}, expected a number pad position from 1 to 9"
                )
            }
        }
    }
}

impl Display for LayoutErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for LayoutErrors {}
