/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Place a box inside a frame
//!
//! # Algorithm
//!
//! Each number pad position picks an anchor per axis
//!
//! ```text
//!             left     center    right
//!           ┌────────┬────────┬────────┐
//!   top     │   7    │   8    │   9    │
//!           ├────────┼────────┼────────┤
//!   center  │   4    │   5    │   6    │
//!           ├────────┼────────┼────────┤
//!   bottom  │   1    │   2    │   3    │
//!           └────────┴────────┴────────┘
//! ```
//! Start anchors put the box flush against `x0`/`y0`, end anchors flush
//! against `x1`/`y1`, and center anchors offset the box by
//! `floor((frame - box) / 2)`, so odd slack leaves the extra pixel
//! after the box.
//!
//! The floor matters when the box is larger than the frame, the offset
//! is then negative and rounds away from zero.

use tinct_core::geometry::{Point, Rectangle, Size};
use tinct_core::log::{trace, warn};

use crate::errors::LayoutErrors;
use crate::options::AlignOptions;

/// Where a box sits along one axis
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Anchor {
    Start,
    Center,
    End
}

impl Anchor {
    /// Return the start and end of a span of `length` anchored within `start..end`
    ///
    /// Saturates at the `i64` bounds.
    fn place(self, start: i64, end: i64, length: i64) -> (i64, i64) {
        match self {
            Anchor::Start => (start, start.saturating_add(length)),
            Anchor::Center => {
                let offset = end.saturating_sub(start).saturating_sub(length).div_euclid(2);
                let x0 = start.saturating_add(offset);
                (x0, x0.saturating_add(length))
            }
            Anchor::End => (end.saturating_sub(length), end)
        }
    }
}

/// The nine number pad positions
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    BottomLeft = 1,
    Bottom,
    BottomRight,
    Left,
    Center,
    Right,
    TopLeft,
    Top,
    TopRight
}

impl Alignment {
    /// All positions, in number pad order
    pub const ALL: [Alignment; 9] = [
        Alignment::BottomLeft,
        Alignment::Bottom,
        Alignment::BottomRight,
        Alignment::Left,
        Alignment::Center,
        Alignment::Right,
        Alignment::TopLeft,
        Alignment::Top,
        Alignment::TopRight
    ];

    /// Convert a number pad code into an alignment
    ///
    /// # Errors
    /// [`LayoutErrors::InvalidAlignment`] if `code` is not in `1..=9`
    pub fn from_code(code: i32) -> Result<Alignment, LayoutErrors> {
        match code {
            1..=9 => Ok(Alignment::ALL[(code - 1) as usize]),
            _ => Err(LayoutErrors::InvalidAlignment(code))
        }
    }

    /// The number pad code for this alignment
    pub const fn code(self) -> i32 {
        self as i32
    }

    fn horizontal(self) -> Anchor {
        match self {
            Alignment::BottomLeft | Alignment::Left | Alignment::TopLeft => Anchor::Start,
            Alignment::Bottom | Alignment::Center | Alignment::Top => Anchor::Center,
            Alignment::BottomRight | Alignment::Right | Alignment::TopRight => Anchor::End
        }
    }

    fn vertical(self) -> Anchor {
        match self {
            Alignment::TopLeft | Alignment::Top | Alignment::TopRight => Anchor::Start,
            Alignment::Left | Alignment::Center | Alignment::Right => Anchor::Center,
            Alignment::BottomLeft | Alignment::Bottom | Alignment::BottomRight => Anchor::End
        }
    }

    /// Place a box of `size` in `frame` without any size checks.
    ///
    /// The result may extend past `frame` if the box is larger.
    pub fn place(self, frame: Rectangle, size: Size) -> Rectangle {
        let (x0, x1) = self
            .horizontal()
            .place(frame.x0, frame.x1, i64::from(size.width));
        let (y0, y1) = self
            .vertical()
            .place(frame.y0, frame.y1, i64::from(size.height));

        Rectangle::new(x0, y0, x1, y1)
    }
}

impl TryFrom<i32> for Alignment {
    type Error = LayoutErrors;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Alignment::from_code(code)
    }
}

/// Result of an alignment
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    /// The full placed box
    Box(Rectangle),
    /// Only the top left corner, returned when
    /// [`AlignOptions::top_left_only`] is set
    TopLeft(Point)
}

impl Placement {
    fn new(rect: Rectangle, top_left_only: bool) -> Placement {
        if top_left_only {
            Placement::TopLeft(rect.top_left())
        } else {
            Placement::Box(rect)
        }
    }

    /// Top left corner of the placed box, available for both variants
    pub const fn top_left(&self) -> Point {
        match self {
            Placement::Box(rect) => rect.top_left(),
            Placement::TopLeft(point) => *point
        }
    }

    /// The placed box, `None` if only the corner was requested
    pub const fn rectangle(&self) -> Option<Rectangle> {
        match self {
            Placement::Box(rect) => Some(*rect),
            Placement::TopLeft(_) => None
        }
    }
}

/// Aligns boxes inside frames at a fixed position
///
/// # Example
/// Center a 10x10 box in a 100x50 frame
/// ```
/// use tinct_core::geometry::{Rectangle, Size};
/// use tinct_layout::{Alignment, BoxAligner, Placement};
///
/// let aligner = BoxAligner::new(Alignment::Center);
/// let placed = aligner.align(Rectangle::new(0, 0, 100, 50), Size::new(10, 10)).unwrap();
///
/// assert_eq!(placed, Placement::Box(Rectangle::new(45, 20, 55, 30)));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BoxAligner {
    alignment: Alignment,
    options:   AlignOptions
}

impl BoxAligner {
    #[must_use]
    pub fn new(alignment: Alignment) -> BoxAligner {
        BoxAligner::new_with_options(alignment, AlignOptions::default())
    }

    #[must_use]
    pub fn new_with_options(alignment: Alignment, options: AlignOptions) -> BoxAligner {
        BoxAligner { alignment, options }
    }

    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub const fn options(&self) -> AlignOptions {
        self.options
    }

    /// Place a box of `size` inside `frame`
    ///
    /// # Errors
    /// [`LayoutErrors::SizeMismatch`] if the box does not fit the frame after
    /// the margin was removed and `suppress_wrong_size` is not set
    pub fn align(&self, frame: Rectangle, size: Size) -> Result<Placement, LayoutErrors> {
        let inner = frame.shrink(self.options.margin());
        check_fit(inner, size, self.options)?;

        Ok(self.place(inner, size))
    }

    fn place(&self, inner: Rectangle, size: Size) -> Placement {
        let rect = self.alignment.place(inner, size);
        trace!("Aligned {size:?} at {:?} to {rect:?}", self.alignment);

        Placement::new(rect, self.options.top_left_only())
    }
}

fn check_fit(inner: Rectangle, size: Size, options: AlignOptions) -> Result<(), LayoutErrors> {
    if inner.fits(size) {
        return Ok(());
    }
    if !options.suppress_wrong_size() {
        return Err(LayoutErrors::SizeMismatch {
            frame: (inner.width(), inner.height()),
            size
        });
    }
    warn!(
        "Box of {}x{} does not fit frame {inner:?}, placing it outside",
        size.width, size.height
    );
    Ok(())
}

/// Align a box of `size` inside `frame` using a number pad code
///
/// `align` is one of
/// ```text
///   7 8 9
///   4 5 6
///   1 2 3
/// ```
/// The box size is checked before the code, a box that doesn't fit
/// reports [`LayoutErrors::SizeMismatch`] even if the code is invalid.
///
/// # Errors
/// - [`LayoutErrors::SizeMismatch`] if the box doesn't fit and `suppress_wrong_size` is off
/// - [`LayoutErrors::InvalidAlignment`] if `align` is not in `1..=9`
pub fn align_bbox(
    frame: Rectangle, size: Size, align: i32, options: AlignOptions
) -> Result<Placement, LayoutErrors> {
    let inner = frame.shrink(options.margin());
    check_fit(inner, size, options)?;

    let alignment = Alignment::from_code(align)?;

    Ok(BoxAligner::new_with_options(alignment, options).place(inner, size))
}
