/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions between packed hex numbers, RGB(A) arrays and 8-bit HSV
//!
//! HSV values follow the same 8-bit layout as RGB, each of hue,
//! saturation and value is scaled to `0..=255`, so a hue of `255`
//! is a full turn.
//!
//! The HSV math matches Python's [colorsys](https://docs.python.org/3/library/colorsys.html)
//! module, including rounding halves to the nearest even integer.

use crate::errors::CoreErrors;

/// Largest number that can be split into three 8-bit channels
pub const MAX_RGB_NUMBER: u32 = 0x00FF_FFFF;

/// Convert a 24-bit `0xRRGGBB` number to an RGB array.
///
/// # Errors
/// [`CoreErrors::NotAnRgbNumber`] if `rgb` is larger than [`MAX_RGB_NUMBER`]
///
/// # Example
/// ```
/// use tinct_core::conversions::hex_to_rgb;
/// assert_eq!(hex_to_rgb(0xAB34DF).unwrap(), [171, 52, 223]);
/// ```
pub fn hex_to_rgb(rgb: u32) -> Result<[u8; 3], CoreErrors> {
    if rgb > MAX_RGB_NUMBER {
        return Err(CoreErrors::NotAnRgbNumber(rgb));
    }
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok([r, g, b])
}

/// Convert a 32-bit `0xRRGGBBAA` number to an RGBA array.
///
/// Every `u32` is a valid RGBA number.
pub const fn hex_to_rgba(rgba: u32) -> [u8; 4] {
    rgba.to_be_bytes()
}

/// Pack an RGB array into a `0xRRGGBB` number
pub const fn rgb_to_hex(rgb: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, rgb[0], rgb[1], rgb[2]])
}

/// Pack an RGBA array into a `0xRRGGBBAA` number
pub const fn rgba_to_hex(rgba: [u8; 4]) -> u32 {
    u32::from_be_bytes(rgba)
}

// floored modulo, result takes the sign of base
fn python_mod(n: f64, base: f64) -> f64 {
    n - (n / base).floor() * base
}

/// Scale a `0.0..=1.0` value to `0..=255`, rounding halves to even.
#[inline]
pub(crate) fn unit_to_u8(value: f64) -> u8 {
    (value * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

#[inline(always)]
pub fn rgb_to_hsv_inner(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let v = max_c;
    if min_c == max_c {
        return [0.0, 0.0, v];
    }
    let s = (max_c - min_c) / max_c;

    let rc = (max_c - r) / (max_c - min_c);
    let gc = (max_c - g) / (max_c - min_c);
    let bc = (max_c - b) / (max_c - min_c);

    let h = if r == max_c {
        bc - gc
    } else if g == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [python_mod(h / 6.0, 1.0), s, v]
}

#[inline(always)]
pub fn hsv_to_rgb_inner(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    let i = (h * 6.0) as i32;
    let f = (h * 6.0) - f64::from(i);
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q]
    }
}

/// Convert an 8-bit RGB color to 8-bit HSV
///
/// # Example
/// ```
/// use tinct_core::conversions::rgb_to_hsv;
/// // pure red, hue 0, full saturation and value
/// assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
/// ```
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    rgb_to_hsv_inner(r, g, b).map(unit_to_u8)
}

/// Convert an 8-bit HSV color back to 8-bit RGB
pub fn hsv_to_rgb(hsv: [u8; 3]) -> [u8; 3] {
    let [h, s, v] = hsv.map(|c| f64::from(c) / 255.0);
    hsv_to_rgb_inner(h, s, v).map(unit_to_u8)
}
