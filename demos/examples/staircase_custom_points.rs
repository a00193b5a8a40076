// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bring your own point type.
//!
//! Implement `GridPoint` for an application type, validate, and sweep.
//!
//! Run:
//! - `cargo run -p understory_demos --example staircase_custom_points`

use understory_staircase::{GridPoint, InputError, try_find_maximal_rectangles};

/// A placed item on a shelf grid.
#[derive(Debug)]
struct Peg {
    label: &'static str,
    column: u16,
    row: u16,
}

impl GridPoint for Peg {
    fn x(&self) -> i64 {
        i64::from(self.column)
    }

    fn y(&self) -> i64 {
        i64::from(self.row)
    }
}

fn main() {
    let mut pegs = vec![
        Peg {
            label: "hook",
            column: 6,
            row: 3,
        },
        Peg {
            label: "bracket",
            column: 2,
            row: 1,
        },
        Peg {
            label: "clamp",
            column: 4,
            row: 6,
        },
    ];

    // Unsorted input is reported, not swept.
    match try_find_maximal_rectangles(&pegs, 8, 8) {
        Err(e @ InputError::Unsorted { index, .. }) => {
            println!("rejected {}: {e}", pegs[index].label);
        }
        other => panic!("expected an ordering error, got {other:?}"),
    }

    pegs.sort_by_key(|p| (p.row, p.column));
    let rects = try_find_maximal_rectangles(&pegs, 8, 8).expect("pegs are sorted now");
    println!("{} free areas between {} pegs", rects.len(), pegs.len());
    for r in &rects {
        let touching: Vec<&str> = pegs
            .iter()
            .filter(|p| {
                let (x, y) = (p.x(), p.y());
                (r.min_x()..=r.max_x()).contains(&x) && (r.min_y()..=r.max_y()).contains(&y)
            })
            .map(|p| p.label)
            .collect();
        println!("  {r:?} bounded by {touching:?}");
    }

    // A peg outside the shelf is caught as well.
    let stray = [Peg {
        label: "stray",
        column: 9,
        row: 0,
    }];
    let err = try_find_maximal_rectangles(&stray, 8, 8).unwrap_err();
    println!("{}: {err}", stray[0].label);
}
