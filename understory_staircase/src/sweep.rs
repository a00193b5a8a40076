// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row sweep driving the staircase over a sorted point set.

use alloc::vec::Vec;

use crate::error::{InputError, validate};
use crate::staircase::Staircase;
use crate::table::RowTable;
use crate::types::{EmptyRect, GridPoint, Point};

/// Container dimensions: the sweep covers `[0, width] × [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    /// Number of columns.
    pub width: i64,
    /// Number of rows.
    pub height: i64,
}

impl Container {
    /// Create a container of the given size.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// True if both dimensions are positive.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether `p` lies inside the container, edges included.
    pub fn contains<P: GridPoint + ?Sized>(&self, p: &P) -> bool {
        (0..=self.width).contains(&p.x()) && (0..=self.height).contains(&p.y())
    }

    /// The whole container as a rectangle.
    pub const fn bounds(&self) -> EmptyRect {
        EmptyRect::from_xywh(0, 0, self.width, self.height)
    }
}

/// Reusable staircase sweep over one container.
///
/// Buffers are kept between runs to save allocations, but every run starts from a cleared
/// table and staircase, so runs never observe each other.
#[derive(Clone, Debug)]
pub struct Sweep {
    container: Container,
    sorted: bool,
    table: RowTable,
    staircase: Staircase,
}

impl Sweep {
    /// Create a sweep for `container`. Output is left in emission order.
    pub fn new(container: Container) -> Self {
        Self {
            container,
            sorted: false,
            table: RowTable::default(),
            staircase: Staircase::new(),
        }
    }

    /// Sort each run's output by the [`EmptyRect`] order.
    pub fn with_sorted_output(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// The container this sweep covers.
    pub fn container(&self) -> Container {
        self.container
    }

    /// Find the maximal empty rectangles among `points`.
    ///
    /// `points` must be ordered by row, then column, and lie inside the container. This is
    /// not checked; out-of-order input gives meaningless rectangles and columns outside the
    /// container panic. Use [`Self::try_run`] to validate first.
    pub fn run<P: GridPoint>(&mut self, points: &[P]) -> Vec<EmptyRect> {
        let mut out = Vec::new();
        self.run_into(points, &mut out);
        out
    }

    /// Validate `points` against the container, then [`run`](Self::run).
    pub fn try_run<P: GridPoint>(&mut self, points: &[P]) -> Result<Vec<EmptyRect>, InputError> {
        validate(points, self.container)?;
        Ok(self.run(points))
    }

    /// Like [`run`](Self::run), appending to `out`. With sorted output enabled only the
    /// appended rectangles are sorted.
    pub fn run_into<P: GridPoint>(&mut self, points: &[P], out: &mut Vec<EmptyRect>) {
        let Container { width, height } = self.container;
        debug_assert!(
            self.container.is_valid(),
            "container {width}x{height} must have a positive size"
        );
        log::debug!(
            "sweeping {} points over a {width}x{height} container",
            points.len()
        );

        let start = out.len();
        self.table.reset(width);
        self.staircase.clear();

        // Synthetic point on the bottom edge, swept after the input. Bottom-row sweeps drag
        // it right to sit just left of each blocked column they pass.
        let mut boundary = Point::new(0, height);
        let mut previous = Point::new(-1, -1);

        for idx in 0..=points.len() {
            let mut point = match points.get(idx) {
                Some(p) => Point::from_grid(p),
                None => boundary,
            };
            if idx < points.len() && point == previous {
                log::trace!("skipping duplicate {point:?}");
                continue;
            }
            log::trace!("row {}: sweeping from {point:?}", point.y);

            self.table.set_right_edge(point.y - 1);
            self.staircase.clear();
            let mut cursor = 0;

            for (col, row) in self.table.blocked() {
                if row == point.y {
                    // Earlier point on this row: keep the step, but it bounds nothing yet.
                    self.staircase.push(Point::new(cursor, row));
                    cursor = col;
                    continue;
                }
                if point.y == height {
                    boundary = Point::new(col - 1, height);
                    point = boundary;
                }
                self.staircase.push(Point::new(cursor, 0));
                if col >= point.x {
                    cursor = self.staircase.extract(
                        out,
                        point.x,
                        row,
                        Point::new(col, point.y),
                        height,
                    );
                }
                cursor = self.staircase.collapse(row, cursor);
                self.staircase.push(Point::new(cursor, row));
                cursor = col;
            }

            self.table.record(point);
            previous = point;
        }

        if self.sorted {
            out[start..].sort_unstable();
        }
        log::debug!("found {} maximal rectangles", out.len() - start);
    }
}

/// Find the maximal empty rectangles among `points` in a `width × height` container.
///
/// `points` must be ordered by row, then column; see [`Sweep::run`]. The result is in
/// emission order.
pub fn find_maximal_rectangles<P: GridPoint>(
    points: &[P],
    width: i64,
    height: i64,
) -> Vec<EmptyRect> {
    Sweep::new(Container::new(width, height)).run(points)
}

/// Like [`find_maximal_rectangles`], sorted by the [`EmptyRect`] order.
pub fn find_maximal_rectangles_sorted<P: GridPoint>(
    points: &[P],
    width: i64,
    height: i64,
) -> Vec<EmptyRect> {
    Sweep::new(Container::new(width, height))
        .with_sorted_output(true)
        .run(points)
}

/// Like [`find_maximal_rectangles`], validating the input first.
pub fn try_find_maximal_rectangles<P: GridPoint>(
    points: &[P],
    width: i64,
    height: i64,
) -> Result<Vec<EmptyRect>, InputError> {
    Sweep::new(Container::new(width, height)).try_run(points)
}

/// The maximal empty rectangle with the largest area.
///
/// Ties go to the rectangle that sorts first. The input is validated as in
/// [`try_find_maximal_rectangles`].
pub fn largest_empty_rectangle<P: GridPoint>(
    points: &[P],
    width: i64,
    height: i64,
) -> Result<Option<EmptyRect>, InputError> {
    let rects = try_find_maximal_rectangles(points, width, height)?;
    Ok(rects
        .into_iter()
        .max_by(|a, b| a.area().cmp(&b.area()).then(b.cmp(a))))
}
