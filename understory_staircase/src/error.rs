// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation for the checked sweep entry points.

use core::fmt;

use crate::sweep::Container;
use crate::types::{GridPoint, Point};

/// Why an input was rejected by [`validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputError {
    /// The container has a non-positive width or height.
    InvalidContainer {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
    /// A point lies outside `[0, width] × [0, height]`.
    OutOfBounds {
        /// Position of the point in the input.
        index: usize,
        /// The offending point.
        point: Point,
        /// The container it was checked against.
        container: Container,
    },
    /// A point sorts before its predecessor (input must be row-major ascending).
    Unsorted {
        /// Position of the point in the input.
        index: usize,
        /// The point before it.
        previous: Point,
        /// The offending point.
        point: Point,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainer { width, height } => {
                write!(f, "container {width}x{height} must have a positive size")
            }
            Self::OutOfBounds {
                index,
                point,
                container,
            } => write!(
                f,
                "point {index} at ({}, {}) lies outside the {}x{} container",
                point.x, point.y, container.width, container.height
            ),
            Self::Unsorted {
                index,
                previous,
                point,
            } => write!(
                f,
                "point {index} at ({}, {}) sorts before ({}, {}); points must be ordered by row, then column",
                point.x, point.y, previous.x, previous.y
            ),
        }
    }
}

impl core::error::Error for InputError {}

/// Check the preconditions of the sweep: a positive container, every point inside it, and
/// points ordered by row, then column. Duplicates are allowed.
///
/// Reports the first violation found.
pub fn validate<P: GridPoint>(points: &[P], container: Container) -> Result<(), InputError> {
    if !container.is_valid() {
        return Err(InputError::InvalidContainer {
            width: container.width,
            height: container.height,
        });
    }
    let mut previous: Option<Point> = None;
    for (index, p) in points.iter().enumerate() {
        let point = Point::from_grid(p);
        if !container.contains(&point) {
            return Err(InputError::OutOfBounds {
                index,
                point,
                container,
            });
        }
        if let Some(previous) = previous
            && point < previous
        {
            return Err(InputError::Unsorted {
                index,
                previous,
                point,
            });
        }
        previous = Some(point);
    }
    Ok(())
}
