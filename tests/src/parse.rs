/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::Deserialize;
use tinct_colors::errors::ColorErrors;
use tinct_colors::{ColorResolver, ParserKind, ParserSet};

use crate::load_fixtures;

#[derive(Clone, Deserialize, Debug)]
pub struct ParseEntry {
    pub input:    String,
    /// Parser names to enable, all of them if missing
    pub parsers:  Option<Vec<String>>,
    /// `None` when no parser should accept the input
    pub expected: Option<[u8; 3]>,
    pub comment:  Option<String>
}

impl ParseEntry {
    fn parser_set(&self) -> ParserSet {
        match &self.parsers {
            None => ParserSet::all(),
            Some(names) => names
                .iter()
                .map(|name| {
                    ParserKind::from_name(name)
                        .unwrap_or_else(|| panic!("Unknown parser {name:?} in fixture"))
                })
                .collect()
        }
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_parse() {
    let entries: Vec<ParseEntry> = load_fixtures("parse.json");
    let resolver = ColorResolver::bundled();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let result = resolver.parse(&entry.input, entry.parser_set());

        let ok = match (&result, entry.expected) {
            (Ok(rgb), Some(expected)) => *rgb == expected,
            (Err(ColorErrors::NoMatch(input)), None) => *input == entry.input,
            _ => false
        };
        if !ok {
            error = true;
            failed.push(entry.to_owned());
            let err = format!(
                "Parse mismatch for {:?}\nExpected {:?} but found {:?}\nConfig:{:#?}",
                entry.input, entry.expected, result, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found while parsing fixtures\n {:#?}", failed);
    }
}
