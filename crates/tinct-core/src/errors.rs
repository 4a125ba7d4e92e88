/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during color conversions
use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur when converting or combining colors
pub enum CoreErrors {
    /// The number does not fit in 24 bits and hence cannot be
    /// split into red, green and blue bytes
    NotAnRgbNumber(u32),
    /// Two multi band colors have a different number of bands
    ///
    /// # Arguments
    /// - 1st argument is the number of bands in the first color
    /// - 2nd argument is the number of bands in the second color
    ChannelMismatch(usize, usize),
    /// A single band color was combined with a multi band color
    VariantMismatch
}

impl Debug for CoreErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CoreErrors::NotAnRgbNumber(value) => {
                writeln!(f, "{value:#x} is not an RGB number, expected at most 0xFFFFFF")
            }
            CoreErrors::ChannelMismatch(expected, found) => {
                writeln!(
                    f,
                    "Colors have differing band counts, first has {expected} but second has {found}"
                )
            }
            CoreErrors::VariantMismatch => {
                writeln!(f, "Cannot combine a single band color with a multi band color")
            }
        }
    }
}

impl Display for CoreErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CoreErrors {}
