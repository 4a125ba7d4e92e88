/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod align;
mod nearest;
mod parse;

/// Directory holding the json fixtures
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// Read and decode one fixture file
pub fn load_fixtures<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let file = fixture_path().join(name);
    let contents = read(&file).unwrap();

    serde_json::from_slice(&contents).unwrap()
}
