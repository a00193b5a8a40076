// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and rectangle value types.

use core::cmp::Ordering;

/// Integer grid point: `x` is the column, `y` the row.
///
/// Rows grow downward; row `0` is the top edge of the container.
/// Points order row-major (`y`, then `x`), which is the order the sweep expects its input in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Point {
    /// Create a point from a column and a row.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Copy the coordinates out of any [`GridPoint`].
    #[inline]
    pub fn from_grid<P: GridPoint + ?Sized>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Read access to the coordinates of a caller-owned point type.
///
/// The sweep only ever reads points through this trait and treats two points
/// as equal when both coordinates match.
pub trait GridPoint {
    /// Column.
    fn x(&self) -> i64;
    /// Row.
    fn y(&self) -> i64;
}

impl GridPoint for Point {
    #[inline]
    fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    fn y(&self) -> i64 {
        self.y
    }
}

impl GridPoint for (i64, i64) {
    #[inline]
    fn x(&self) -> i64 {
        self.0
    }

    #[inline]
    fn y(&self) -> i64 {
        self.1
    }
}

impl GridPoint for [i64; 2] {
    #[inline]
    fn x(&self) -> i64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> i64 {
        self[1]
    }
}

impl<P: GridPoint + ?Sized> GridPoint for &P {
    #[inline]
    fn x(&self) -> i64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> i64 {
        (**self).y()
    }
}

/// An empty axis-aligned rectangle reported by the sweep.
///
/// Covers the half-open cells `[origin.x, origin.x + width) × [origin.y, origin.y + height)`.
/// Obstacle points may sit on its closed boundary, including the right and bottom edges,
/// but never strictly inside it.
///
/// Rectangles order by origin (row-major), then width, then height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmptyRect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent along x; always positive for swept rectangles.
    pub width: i64,
    /// Extent along y; always positive for swept rectangles.
    pub height: i64,
}

impl EmptyRect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(origin: Point, width: i64, height: i64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Create a rectangle from its left column, top row, and size.
    pub const fn from_xywh(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self::new(Point::new(x, y), width, height)
    }

    /// Left edge.
    pub const fn min_x(&self) -> i64 {
        self.origin.x
    }

    /// Top edge.
    pub const fn min_y(&self) -> i64 {
        self.origin.y
    }

    /// Right edge.
    pub const fn max_x(&self) -> i64 {
        self.origin.x + self.width
    }

    /// Bottom edge.
    pub const fn max_y(&self) -> i64 {
        self.origin.y + self.height
    }

    /// Area, widened so that large containers cannot overflow.
    pub fn area(&self) -> i128 {
        i128::from(self.width) * i128::from(self.height)
    }

    /// Whether the point lies strictly inside the rectangle (boundary excluded).
    pub fn interior_contains<P: GridPoint + ?Sized>(&self, p: &P) -> bool {
        let (x, y) = (p.x(), p.y());
        self.min_x() < x && x < self.max_x() && self.min_y() < y && y < self.max_y()
    }

    /// Whether `other` lies entirely within this rectangle (shared edges allowed).
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Convert into a Kurbo rectangle with the same corners.
    #[cfg(feature = "kurbo")]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        (*self).into()
    }
}

#[cfg(feature = "kurbo")]
impl From<EmptyRect> for kurbo::Rect {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Grid coordinates beyond 2^53 are not meaningful for rendering."
    )]
    fn from(r: EmptyRect) -> Self {
        Self::new(
            r.min_x() as f64,
            r.min_y() as f64,
            r.max_x() as f64,
            r.max_y() as f64,
        )
    }
}
