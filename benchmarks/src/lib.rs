/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use tinct_core::conversions::rgb_to_hex;

/// Inputs covering every notation the resolver understands
pub const PARSE_INPUTS: [&str; 8] = [
    "#ab34df",
    "#a3d",
    "rgb(171, 52, 223)",
    "rgb(0.67, 0.2, 0.87)",
    "rgb(67%, 20%, 87.5%)",
    "rebeccapurple",
    "macaroni and cheese",
    "not a color"
];

/// Deterministic random colors, shared so runs stay comparable
pub fn random_colors(count: usize) -> Vec<[u8; 3]> {
    let mut rand = nanorand::WyRand::new_seed(0x7149_c7);
    (0..count)
        .map(|_| [rand.generate(), rand.generate(), rand.generate()])
        .collect()
}

/// Same colors as [`random_colors`], as `#rrggbb` strings
pub fn random_hex_strings(count: usize) -> Vec<String> {
    random_colors(count)
        .into_iter()
        .map(|rgb| format!("#{:06x}", rgb_to_hex(rgb)))
        .collect()
}
