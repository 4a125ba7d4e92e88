/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Alignment options

/// Options influencing how a box is placed
///
/// Options are set with the builder style `set_` methods
/// ```
/// use tinct_layout::AlignOptions;
///
/// let options = AlignOptions::default()
///     .set_margin(4)
///     .set_top_left_only(true);
/// assert_eq!(options.margin(), 4);
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AlignOptions {
    /// Pixels removed from every side of the frame before placing.
    ///
    /// A negative margin grows the frame.
    ///
    /// - Default value: 0
    margin:              i64,
    /// Return only the top left corner of the placed box
    ///
    /// - Default value: false
    top_left_only:       bool,
    /// Place boxes that don't fit into the frame instead of
    /// returning an error.
    ///
    /// The placed box then sticks out of the frame and may
    /// have negative coordinates.
    ///
    /// - Default value: false
    suppress_wrong_size: bool
}

impl AlignOptions {
    pub const fn margin(&self) -> i64 {
        self.margin
    }

    pub const fn top_left_only(&self) -> bool {
        self.top_left_only
    }

    pub const fn suppress_wrong_size(&self) -> bool {
        self.suppress_wrong_size
    }

    #[must_use]
    pub const fn set_margin(mut self, margin: i64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn set_top_left_only(mut self, yes: bool) -> Self {
        self.top_left_only = yes;
        self
    }

    #[must_use]
    pub const fn set_suppress_wrong_size(mut self, yes: bool) -> Self {
        self.suppress_wrong_size = yes;
        self
    }
}
