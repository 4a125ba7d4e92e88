/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A pixel color of any band count
//!
//! Single band images (grayscale, palette indices, 32-bit integer or
//! float images) store a pixel as one number, while RGB, RGBA, CMYK and
//! friends store an ordered list of bands. [`Color`] holds either, and the
//! distance and mix operations are written once per shape.
use crate::errors::CoreErrors;

/// A color value
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A single band color
    Scalar(f64),
    /// A multi band color, bands in image order
    Vector(Vec<f64>)
}

impl Color {
    /// Number of bands in this color
    pub fn num_components(&self) -> usize {
        match self {
            Color::Scalar(_) => 1,
            Color::Vector(bands) => bands.len()
        }
    }

    /// Distance between two colors of the same shape
    ///
    /// Single band colors return the absolute difference, multi band
    /// colors return the euclidean distance over their bands.
    ///
    /// # Errors
    /// - [`CoreErrors::VariantMismatch`] if one color is single band and the other isn't
    /// - [`CoreErrors::ChannelMismatch`] if band counts differ
    ///
    /// # Example
    /// ```
    /// use tinct_core::color::Color;
    /// let a = Color::from([0_u8, 0, 0]);
    /// let b = Color::from([3_u8, 4, 0]);
    /// assert_eq!(a.distance(&b).unwrap(), 5.0);
    /// ```
    pub fn distance(&self, other: &Color) -> Result<f64, CoreErrors> {
        match (self, other) {
            (Color::Scalar(a), Color::Scalar(b)) => Ok((a - b).abs()),
            (Color::Vector(a), Color::Vector(b)) => {
                check_band_count(a, b)?;
                let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
                Ok(sum.sqrt())
            }
            _ => Err(CoreErrors::VariantMismatch)
        }
    }

    /// Mix two colors, `p` being the share of `other`
    ///
    /// - `p = 0.0` returns `self`
    /// - `p = 1.0` returns `other`
    /// - `p = 0.25` returns 75% of `self` and 25% of `other`
    ///
    /// `p` is clamped to `0.0..=1.0`. Bands of multi band colors are
    /// truncated towards zero as pixel bands are integers, single band
    /// colors keep their precision, use [`f64::trunc`] on the result if
    /// the image stores integers.
    ///
    /// # Errors
    /// Same as [`distance`](Self::distance)
    pub fn mix(&self, other: &Color, p: f64) -> Result<Color, CoreErrors> {
        let p = p.clamp(0.0, 1.0);
        match (self, other) {
            (Color::Scalar(a), Color::Scalar(b)) => Ok(Color::Scalar(a * (1.0 - p) + b * p)),
            (Color::Vector(a), Color::Vector(b)) => {
                check_band_count(a, b)?;
                let bands = a
                    .iter()
                    .zip(b)
                    .map(|(x, y)| (x * (1.0 - p) + y * p).trunc())
                    .collect();
                Ok(Color::Vector(bands))
            }
            _ => Err(CoreErrors::VariantMismatch)
        }
    }

    /// Return the bands of an 8-bit RGB color, if this is one.
    ///
    /// Bands are saturated to `0..=255`.
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        match self {
            Color::Vector(bands) if bands.len() == 3 => {
                Some([bands[0], bands[1], bands[2]].map(|b| b.clamp(0.0, 255.0) as u8))
            }
            _ => None
        }
    }
}

fn check_band_count(a: &[f64], b: &[f64]) -> Result<(), CoreErrors> {
    if a.len() != b.len() {
        return Err(CoreErrors::ChannelMismatch(a.len(), b.len()));
    }
    Ok(())
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::Scalar(f64::from(value))
    }
}

impl From<i32> for Color {
    fn from(value: i32) -> Self {
        Color::Scalar(f64::from(value))
    }
}

impl From<f32> for Color {
    fn from(value: f32) -> Self {
        Color::Scalar(f64::from(value))
    }
}

impl From<f64> for Color {
    fn from(value: f64) -> Self {
        Color::Scalar(value)
    }
}

impl<const N: usize> From<[u8; N]> for Color {
    fn from(value: [u8; N]) -> Self {
        Color::Vector(value.iter().map(|v| f64::from(*v)).collect())
    }
}

impl<const N: usize> From<[i32; N]> for Color {
    fn from(value: [i32; N]) -> Self {
        Color::Vector(value.iter().map(|v| f64::from(*v)).collect())
    }
}

impl From<Vec<f64>> for Color {
    fn from(value: Vec<f64>) -> Self {
        Color::Vector(value)
    }
}
