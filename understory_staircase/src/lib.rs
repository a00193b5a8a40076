// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_staircase --heading-base-level=0

//! Understory Staircase: maximal empty rectangles among points on an integer grid.
//!
//! Given obstacle points inside a `width × height` container, this crate reports the
//! axis-aligned rectangles that hold no point strictly inside them and cannot grow in any
//! direction without swallowing one or leaving the container.
//! It implements the staircase algorithm of Edmonds et al., a single pass over the points
//! in `O(n·m)` time for `n` points and a container `m` columns wide.
//!
//! - [`find_maximal_rectangles`] and [`Sweep`] run the sweep over points sorted by row, then column.
//! - [`try_find_maximal_rectangles`] and [`Sweep::try_run`] validate the input first and return an [`InputError`].
//! - [`largest_empty_rectangle`] picks the biggest result.
//!
//! Points are read through the [`GridPoint`] trait, so callers can keep their own point type.
//! The crate is `no_std` and only needs `alloc`.
//!
//! # Example
//!
//! ```rust
//! use understory_staircase::{EmptyRect, Point, find_maximal_rectangles_sorted};
//!
//! // One obstacle in the middle of a 5×5 container.
//! let rects = find_maximal_rectangles_sorted(&[Point::new(2, 2)], 5, 5);
//! assert_eq!(
//!     rects,
//!     [
//!         EmptyRect::from_xywh(0, 0, 2, 5),
//!         EmptyRect::from_xywh(0, 0, 5, 2),
//!         EmptyRect::from_xywh(2, 0, 3, 5),
//!         EmptyRect::from_xywh(0, 2, 5, 3),
//!     ]
//! );
//! ```
//!
//! A [`Sweep`] keeps its buffers between runs and can validate its input:
//!
//! ```rust
//! use understory_staircase::{Container, InputError, Sweep};
//!
//! let mut sweep = Sweep::new(Container::new(8, 6)).with_sorted_output(true);
//! let rects = sweep.try_run(&[(1_i64, 2_i64), (5, 4)]).unwrap();
//! assert!(!rects.is_empty());
//!
//! // Points must come ordered by row, then column.
//! let err = sweep.try_run(&[(5_i64, 4_i64), (1, 2)]).unwrap_err();
//! assert!(matches!(err, InputError::Unsorted { index: 1, .. }));
//! ```
//!
//! ## Coordinates
//!
//! `x` is the column and `y` the row; row `0` is the top edge. Points may sit anywhere in
//! `[0, width] × [0, height]`, edges included. A point on row `0` never blocks anything.
//!
//! ## Known gaps
//!
//! The sweep keeps the boundary corrections of the published algorithm as they are:
//!
//! - Strips one row high that span the whole container width are not reported.
//! - With several points on one row, or points on the bottom edge, some reported
//!   rectangles are empty but not maximal, and a rectangle may be reported twice.
//!
//! Every reported rectangle is empty. When all points lie strictly inside the container
//! on distinct rows, every reported rectangle is also maximal.
//!
//! ## Features
//!
//! - `kurbo`: `From<EmptyRect> for kurbo::Rect`. Pair with `std` (default) or `libm`.

#![no_std]

extern crate alloc;

pub mod error;
mod staircase;
pub mod sweep;
mod table;
pub mod types;

pub use error::{InputError, validate};
pub use sweep::{
    Container, Sweep, find_maximal_rectangles, find_maximal_rectangles_sorted,
    largest_empty_rectangle, try_find_maximal_rectangles,
};
pub use types::{EmptyRect, GridPoint, Point};
