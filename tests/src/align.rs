/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::Deserialize;
use tinct_core::geometry::{Rectangle, Size};
use tinct_layout::errors::LayoutErrors;
use tinct_layout::{align_bbox, AlignOptions, Placement};

use crate::load_fixtures;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JsonLayoutError {
    SizeMismatch,
    InvalidAlignment
}

impl JsonLayoutError {
    fn matches(self, err: &LayoutErrors) -> bool {
        match self {
            Self::SizeMismatch => matches!(err, LayoutErrors::SizeMismatch { .. }),
            Self::InvalidAlignment => matches!(err, LayoutErrors::InvalidAlignment(_))
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct AlignEntry {
    pub frame:               (i64, i64, i64, i64),
    pub size:                (u32, u32),
    pub align:               i32,
    #[serde(default)]
    pub margin:              i64,
    #[serde(default)]
    pub top_left_only:       bool,
    #[serde(default)]
    pub suppress_wrong_size: bool,
    /// Four numbers for a box, two for a top left corner
    pub expected:            Option<Vec<i64>>,
    pub error:               Option<JsonLayoutError>,
    pub comment:             Option<String>
}

impl AlignEntry {
    fn options(&self) -> AlignOptions {
        AlignOptions::default()
            .set_margin(self.margin)
            .set_top_left_only(self.top_left_only)
            .set_suppress_wrong_size(self.suppress_wrong_size)
    }

    fn check(&self, result: &Result<Placement, LayoutErrors>) -> bool {
        match (result, self.expected.as_deref(), self.error) {
            (Ok(Placement::Box(rect)), Some(&[x0, y0, x1, y1]), None) => {
                rect.as_tuple() == (x0, y0, x1, y1)
            }
            (Ok(Placement::TopLeft(point)), Some(&[x, y]), None) => (point.x, point.y) == (x, y),
            (Err(err), None, Some(expected)) => expected.matches(err),
            _ => false
        }
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_align() {
    let entries: Vec<AlignEntry> = load_fixtures("align.json");

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let result = align_bbox(
            Rectangle::from(entry.frame),
            Size::new(entry.size.0, entry.size.1),
            entry.align,
            entry.options()
        );

        if !entry.check(&result) {
            error = true;
            failed.push(entry.to_owned());
            let err = format!(
                "Alignment mismatch for frame {:?}\nExpected {:?} {:?} but found {:?}\nConfig:{:#?}",
                entry.frame, entry.expected, entry.error, result, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found while aligning fixtures\n {:#?}", failed);
    }
}
