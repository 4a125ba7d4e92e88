/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integer geometry used for placing boxes inside frames
//!
//! Coordinates follow the usual image convention, the origin is the
//! top left corner, `x` grows to the right and `y` grows downwards.
//!
//! ```text
//!  (x0,y0)
//!     ┌───────────────┐
//!     │               │
//!     │               │ height = y1 - y0
//!     │               │
//!     └───────────────┘
//!                   (x1,y1)
//!       width = x1 - x0
//! ```
//! `x1` and `y1` lie just outside the box, so a full `w` by `h` image
//! is the rectangle `(0, 0, w, h)`.

/// A point in image space
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// Width and height of a box
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width:  u32,
    pub height: u32
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Size {
        Size { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Size::new(width, height)
    }
}

/// A rectangle given by its top left corner and the point one past
/// its bottom right corner.
///
/// Nothing stops `x1 < x0`, a rectangle shrunk by a margin larger than
/// half its width ends up inverted and reports a negative width.
///
/// Arithmetic on coordinates saturates at the `i64` bounds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rectangle {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64
}

impl Rectangle {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Rectangle {
        Rectangle { x0, y0, x1, y1 }
    }

    /// Create a rectangle with its top left corner at `origin`
    pub const fn from_origin(origin: Point, size: Size) -> Rectangle {
        Rectangle {
            x0: origin.x,
            y0: origin.y,
            x1: origin.x.saturating_add(size.width as i64),
            y1: origin.y.saturating_add(size.height as i64)
        }
    }

    pub const fn width(&self) -> i64 {
        self.x1.saturating_sub(self.x0)
    }

    pub const fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y0)
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Move all four edges `margin` pixels inwards.
    ///
    /// A negative margin grows the rectangle.
    #[must_use]
    pub const fn shrink(&self, margin: i64) -> Rectangle {
        Rectangle {
            x0: self.x0.saturating_add(margin),
            y0: self.y0.saturating_add(margin),
            x1: self.x1.saturating_sub(margin),
            y1: self.y1.saturating_sub(margin)
        }
    }

    /// Whether `other` lies completely inside this rectangle
    pub const fn contains(&self, other: &Rectangle) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Whether a box of `size` could be placed inside this rectangle
    pub const fn fits(&self, size: Size) -> bool {
        self.width() >= size.width as i64 && self.height() >= size.height as i64
    }

    pub const fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

impl From<(i64, i64, i64, i64)> for Rectangle {
    fn from((x0, y0, x1, y1): (i64, i64, i64, i64)) -> Self {
        Rectangle::new(x0, y0, x1, y1)
    }
}
