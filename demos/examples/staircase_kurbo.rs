// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staircase results as Kurbo rectangles.
//!
//! Scale grid rectangles into scene space and find the free regions around a probe point.
//!
//! Run:
//! - `cargo run -p understory_demos --example staircase_kurbo`

use kurbo::{Point, Rect, Vec2};
use understory_staircase::{Container, Sweep};

/// Scene units per grid cell.
const CELL: f64 = 16.0;

fn main() {
    let obstacles: [(i64, i64); 4] = [(3, 1), (8, 2), (5, 4), (1, 5)];
    let mut sweep = Sweep::new(Container::new(10, 6)).with_sorted_output(true);
    let rects = sweep
        .try_run(&obstacles)
        .expect("obstacles are sorted and inside the container");

    let scene: Vec<Rect> = rects
        .iter()
        .map(|r| {
            let k = r.to_kurbo();
            Rect::from_points(
                (k.origin().to_vec2() * CELL).to_point(),
                (Vec2::new(k.x1, k.y1) * CELL).to_point(),
            )
        })
        .collect();

    let probe = Point::new(70.0, 40.0);
    let free: Vec<&Rect> = scene.iter().filter(|r| r.contains(probe)).collect();
    println!("{} free regions around {probe:?}:", free.len());
    for r in &free {
        println!("  {r:?} area={}", r.area());
    }

    let bounds = scene.iter().fold(Rect::ZERO, |acc, r| acc.union(*r));
    println!("union of all regions: {bounds:?}");
    assert_eq!(
        bounds,
        Rect::new(0.0, 0.0, 10.0 * CELL, 6.0 * CELL),
        "maximal rectangles cover the whole container"
    );
}
