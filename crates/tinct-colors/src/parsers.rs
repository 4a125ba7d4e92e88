/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pattern based color parsers
//!
//! Each parser accepts exactly one notation and trims surrounding
//! whitespace before matching. Failures are always
//! [`ColorErrors::FormatMismatch`], whether the pattern didn't match
//! or a number was out of range.
//!
//! | Parser | Example |
//! |---|---|
//! | [`parse_hex6`] | `#ab34df` |
//! | [`parse_hex3`] | `#a3d` |
//! | [`parse_rgbfunc_int`] | `rgb(171, 52, 223)` |
//! | [`parse_rgbfunc_float`] | `rgb(0.67, 0.2, 0.87)` |
//! | [`parse_rgbfunc_percent`] | `rgb(67%, 20%, 87.5%)` |
use std::sync::LazyLock;

use regex::Regex;
use tinct_core::conversions::hex_to_rgb;

use crate::errors::ColorErrors;
use crate::kinds::ParserKind;

static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6})$").expect("hex6 pattern is valid"));

static HEX3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{3})$").expect("hex3 pattern is valid"));

static RGBFUNC_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("rgbfunc_int pattern is valid")
});

static RGBFUNC_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([01]\.[0-9]+)\s*,\s*([01]\.[0-9]+)\s*,\s*([01]\.[0-9]+)\s*\)$")
        .expect("rgbfunc_float pattern is valid")
});

static RGBFUNC_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^rgb\(\s*([0-9]{1,3}(?:\.[0-9]+)?)%\s*,",
        r"\s*([0-9]{1,3}(?:\.[0-9]+)?)%\s*,",
        r"\s*([0-9]{1,3}(?:\.[0-9]+)?)%\s*\)$"
    ))
    .expect("rgbfunc_percent pattern is valid")
});

fn mismatch(parser: ParserKind, input: &str) -> ColorErrors {
    ColorErrors::FormatMismatch {
        parser,
        input: input.to_string()
    }
}

/// Return the three channel captures of an `rgb()` pattern
fn channels<'a>(re: &Regex, input: &'a str) -> Option<[&'a str; 3]> {
    let caps = re.captures(input.trim())?;
    Some([
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str()
    ])
}

/// Convert three floats to 8-bit channels after scaling each by `scale`
///
/// Returns `None` if any channel exceeds `max`. Halves round to even.
fn scaled_channels(values: [&str; 3], max: f64, scale: impl Fn(f64) -> f64) -> Option<[u8; 3]> {
    let mut out = [0_u8; 3];
    for (dst, value) in out.iter_mut().zip(values) {
        let value: f64 = value.parse().ok()?;
        if value > max {
            return None;
        }
        *dst = scale(value).round_ties_even().clamp(0.0, 255.0) as u8;
    }
    Some(out)
}

/// Parse a six digit hex color such as `#ab34df`, the `#` is optional
///
/// # Example
/// ```
/// use tinct_colors::parsers::parse_hex6;
/// assert_eq!(parse_hex6("#AB34DF").unwrap(), [171, 52, 223]);
/// ```
pub fn parse_hex6(hex6: &str) -> Result<[u8; 3], ColorErrors> {
    let err = || mismatch(ParserKind::Hex6, hex6);

    let caps = HEX6.captures(hex6.trim()).ok_or_else(err)?;
    let digits = caps.get(1).ok_or_else(err)?.as_str();
    let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;

    hex_to_rgb(value).map_err(|_| err())
}

/// Parse a three digit hex color such as `#a3d`, the `#` is optional
///
/// Each digit is doubled, so `#a3d` is the same as `#aa33dd`
pub fn parse_hex3(hex3: &str) -> Result<[u8; 3], ColorErrors> {
    let err = || mismatch(ParserKind::Hex3, hex3);

    let caps = HEX3.captures(hex3.trim()).ok_or_else(err)?;
    let digits = caps.get(1).ok_or_else(err)?.as_str();

    let mut out = [0_u8; 3];
    for (dst, c) in out.iter_mut().zip(digits.chars()) {
        // 0xA * 17 == 0xAA
        *dst = c.to_digit(16).ok_or_else(err)? as u8 * 17;
    }
    Ok(out)
}

/// Parse integer functional notation, `rgb(171, 52, 223)`
///
/// Channels above 255 are rejected.
pub fn parse_rgbfunc_int(rgbfunc: &str) -> Result<[u8; 3], ColorErrors> {
    let err = || mismatch(ParserKind::RgbFuncInt, rgbfunc);

    let values = channels(&RGBFUNC_INT, rgbfunc).ok_or_else(err)?;

    let mut out = [0_u8; 3];
    for (dst, value) in out.iter_mut().zip(values) {
        // at most three digits, so this only fails above 255
        *dst = value.parse::<u8>().map_err(|_| err())?;
    }
    Ok(out)
}

/// Parse float functional notation, `rgb(0.67, 0.2, 0.87)`
///
/// Each channel must be written as `0.x` or `1.x` and be at most `1.0`,
/// it is multiplied by 255 and rounded.
pub fn parse_rgbfunc_float(rgbfunc: &str) -> Result<[u8; 3], ColorErrors> {
    let err = || mismatch(ParserKind::RgbFuncFloat, rgbfunc);

    let values = channels(&RGBFUNC_FLOAT, rgbfunc).ok_or_else(err)?;

    scaled_channels(values, 1.0, |v| v * 255.0).ok_or_else(err)
}

/// Parse percentage functional notation, `rgb(67%, 20%, 87.5%)`
///
/// Each channel must be at most `100%`, it is scaled to `0..=255` and rounded.
pub fn parse_rgbfunc_percent(rgbfunc: &str) -> Result<[u8; 3], ColorErrors> {
    let err = || mismatch(ParserKind::RgbFuncPercent, rgbfunc);

    let values = channels(&RGBFUNC_PERCENT, rgbfunc).ok_or_else(err)?;

    scaled_channels(values, 100.0, |v| v * 255.0 / 100.0).ok_or_else(err)
}
