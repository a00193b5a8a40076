// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staircase basics.
//!
//! Sweep a handful of obstacles and draw the largest empty rectangle as ASCII art.
//!
//! Run:
//! - `cargo run -p understory_demos --example staircase_ascii`

use understory_staircase::{Point, find_maximal_rectangles_sorted, largest_empty_rectangle};

const WIDTH: i64 = 24;
const HEIGHT: i64 = 10;

fn main() {
    let mut points = vec![
        Point::new(5, 2),
        Point::new(17, 3),
        Point::new(9, 5),
        Point::new(3, 7),
        Point::new(20, 8),
    ];
    points.sort();

    let rects = find_maximal_rectangles_sorted(&points, WIDTH, HEIGHT);
    println!("{} maximal empty rectangles", rects.len());

    let best = largest_empty_rectangle(&points, WIDTH, HEIGHT)
        .expect("points are sorted and inside the container")
        .expect("a non-empty container always has one");
    println!(
        "largest: origin ({}, {}), {}x{}, area {}",
        best.min_x(),
        best.min_y(),
        best.width,
        best.height,
        best.area()
    );

    // Grid vertices: `o` obstacle, `#` inside the largest rectangle, `+` on its edge.
    for y in 0..=HEIGHT {
        let line: String = (0..=WIDTH)
            .map(|x| {
                let p = Point::new(x, y);
                if points.contains(&p) {
                    'o'
                } else if best.interior_contains(&p) {
                    '#'
                } else if (best.min_x()..=best.max_x()).contains(&x)
                    && (best.min_y()..=best.max_y()).contains(&y)
                {
                    '+'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{line}");
    }

    assert!(
        rects.contains(&best),
        "the largest rectangle comes from the maximal set"
    );
}
