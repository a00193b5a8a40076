// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-column record of the most recent blocking row.

use alloc::vec::Vec;

use crate::types::Point;

/// Auxiliary row table: for every column `0..=width`, the row of the latest point seen there.
///
/// Row `0` doubles as "nothing seen yet", so points on the top edge never block anything.
/// The last slot (`width`) is the right container edge; the sweep overwrites it before
/// every point with a synthetic blocker just above the current row.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowTable {
    rows: Vec<i64>,
}

impl RowTable {
    /// Marker for a column that has not been blocked yet.
    pub(crate) const EMPTY: i64 = 0;

    #[cfg(test)]
    fn new(width: i64) -> Self {
        let mut table = Self::default();
        table.reset(width);
        table
    }

    /// Forget every recorded row and resize for a container `width` columns wide.
    pub(crate) fn reset(&mut self, width: i64) {
        debug_assert!(width >= 0, "container width must not be negative");
        self.rows.clear();
        self.rows.resize(slot(width) + 1, Self::EMPTY);
    }

    /// Place the synthetic right-edge blocker at `row`.
    #[inline]
    pub(crate) fn set_right_edge(&mut self, row: i64) {
        if let Some(last) = self.rows.last_mut() {
            *last = row;
        }
    }

    /// Record `p` as the latest blocker in its column.
    #[inline]
    pub(crate) fn record(&mut self, p: Point) {
        self.rows[slot(p.x)] = p.y;
    }

    /// Columns with a blocker, left to right, paired with their rows.
    pub(crate) fn blocked(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|&(_, &row)| row != Self::EMPTY)
            .map(|(col, &row)| (col as i64, row))
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Columns are bounded by the table length, which already fits in usize."
)]
fn slot(col: i64) -> usize {
    debug_assert!(col >= 0, "column {col} is left of the container");
    col as usize
}
