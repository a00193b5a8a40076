// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The staircase stack and maximal-rectangle extraction.
//!
//! While the sweep scans one row left to right, the staircase holds steps `(x, y)`: a
//! rectangle whose left edge is at column `x` may reach up to row `y` before a blocking
//! point gets in the way. Each time the scan meets a column blocked from above, the steps
//! lower than that blocker are closed off; every such step is a candidate maximal
//! rectangle whose bottom-right corner is the blocked column on the current row.

use alloc::vec::Vec;

use crate::types::{EmptyRect, Point};

/// Stack of staircase steps, top of the stack last.
#[derive(Clone, Debug, Default)]
pub(crate) struct Staircase {
    steps: Vec<Point>,
}

impl Staircase {
    /// Create an empty staircase.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Drop all steps, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// Topmost step.
    pub(crate) fn top(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// Steps from bottom to top.
    #[cfg(test)]
    fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Push a step.
    pub(crate) fn push(&mut self, step: Point) {
        self.steps.push(step);
    }

    /// Pop the top step if it lies strictly above row `y`.
    #[inline]
    fn pop_above(&mut self, y: i64) -> Option<Point> {
        if self.top()?.y < y {
            self.steps.pop()
        } else {
            None
        }
    }

    /// Pop every step that a blocker at row `y` dominates (step row `<= y`).
    ///
    /// Returns the column of the last step popped, or `cursor` if nothing was popped; the
    /// caller pushes the merged step from there.
    pub(crate) fn collapse(&mut self, y: i64, cursor: i64) -> i64 {
        let mut x = cursor;
        while let Some(step) = self.top() {
            if step.y > y {
                break;
            }
            self.steps.pop();
            x = step.x;
        }
        x
    }

    /// Close off the steps lying above `ystar` and emit the admissible ones into `out`.
    ///
    /// `corner` is the bottom-right corner shared by every candidate (the blocked column on
    /// the current row), `xstar` the column of the point bounding them from below, `ystar`
    /// the row of the point bounding them on the right, and `bottom` the container's
    /// bottom row. A popped step `(xi, yi)` yields a rectangle from `(xi, yi)` to `corner`
    /// when `xi < xstar`, `yi < ystar` and `xstar != corner.x`.
    ///
    /// On the bottom row a step starting exactly at `xstar` bumps `xstar` by two, so that
    /// thin rectangles against the bottom edge still pass the test above.
    ///
    /// Returns the column of the last step popped, or `0` if none was.
    pub(crate) fn extract(
        &mut self,
        out: &mut Vec<EmptyRect>,
        mut xstar: i64,
        ystar: i64,
        corner: Point,
        bottom: i64,
    ) -> i64 {
        let mut last_x = 0;
        while let Some(step) = self.pop_above(ystar) {
            last_x = step.x;
            if step.x == xstar && corner.y == bottom {
                xstar += 2;
            }
            if step.x < xstar && step.y < ystar && xstar != corner.x {
                let rect = EmptyRect::new(step, corner.x - step.x, corner.y - step.y);
                log::trace!("maximal rectangle {rect:?}");
                out.push(rect);
            }
        }
        last_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn stairs(steps: &[(i64, i64)]) -> Staircase {
        let mut s = Staircase::new();
        for &(x, y) in steps {
            s.push(Point::new(x, y));
        }
        s
    }

    #[test]
    fn extract_emits_steps_left_of_xstar() {
        // Blocker at (5, 2) closes two steps under it; the bounding point sits at column 3.
        let mut s = stairs(&[(0, 3), (0, 1), (2, 0)]);
        let mut out = Vec::new();
        let last = s.extract(&mut out, 3, 2, Point::new(5, 4), 10);
        assert_eq!(last, 0);
        assert_eq!(
            out,
            vec![
                EmptyRect::from_xywh(2, 0, 3, 4),
                EmptyRect::from_xywh(0, 1, 5, 3),
            ]
        );
        assert_eq!(s.steps(), &[Point::new(0, 3)]);
    }

    #[test]
    fn extract_skips_steps_not_left_of_xstar() {
        let mut s = stairs(&[(1, 0)]);
        let mut out = Vec::new();
        let last = s.extract(&mut out, 1, 2, Point::new(4, 3), 10);
        assert_eq!(last, 1);
        assert!(out.is_empty());
        assert!(s.steps().is_empty());
    }

    #[test]
    fn extract_skips_when_xstar_is_the_corner_column() {
        let mut s = stairs(&[(0, 0)]);
        let mut out = Vec::new();
        s.extract(&mut out, 4, 2, Point::new(4, 3), 10);
        assert!(out.is_empty());
    }

    #[test]
    fn extract_without_pops_returns_zero() {
        let mut s = stairs(&[(3, 5)]);
        let mut out = Vec::new();
        assert_eq!(s.extract(&mut out, 1, 5, Point::new(6, 7), 10), 0);
        assert!(out.is_empty());
        assert_eq!(s.steps().len(), 1);
    }

    #[test]
    fn bottom_row_admits_thin_rectangle() {
        // Away from the bottom the step at xstar is rejected.
        let mut s = stairs(&[(5, 0)]);
        let mut out = Vec::new();
        s.extract(&mut out, 5, 3, Point::new(6, 3), 4);
        assert!(out.is_empty());

        // On the bottom row the same step yields a one-column rectangle.
        let mut s = stairs(&[(5, 0)]);
        s.extract(&mut out, 5, 3, Point::new(6, 4), 4);
        assert_eq!(out, vec![EmptyRect::from_xywh(5, 0, 1, 4)]);
    }

    #[test]
    fn collapse_pops_dominated_steps() {
        let mut s = stairs(&[(0, 4), (1, 2), (3, 2), (4, 0)]);
        let x = s.collapse(2, 6);
        assert_eq!(x, 1);
        assert_eq!(s.steps(), &[Point::new(0, 4)]);

        let x = s.collapse(1, 6);
        assert_eq!(x, 6);
        assert_eq!(s.steps().len(), 1);
    }
}
