// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Staircase: sweep a few points and print the maximal rectangles.

use understory_staircase::{Container, Point, Sweep};

fn main() {
    let points = [
        Point::new(2, 1),
        Point::new(6, 2),
        Point::new(1, 4),
        Point::new(4, 5),
    ];
    let mut sweep = Sweep::new(Container::new(8, 7)).with_sorted_output(true);
    let rects = sweep.try_run(&points).expect("points are sorted and inside the container");

    for r in &rects {
        println!(
            "({}, {}) {}x{} area={}",
            r.min_x(),
            r.min_y(),
            r.width,
            r.height,
            r.area()
        );
    }
    println!("{} maximal rectangles", rects.len());
}
