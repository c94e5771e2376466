// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadrant Tree: insert, split, and query.

use kurbo::{Point, Rect};
use quadrant_tree::{QuadTree, Segment};

fn main() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for i in 0..8 {
        let o = f64::from(i) * 12.0;
        tree.insert(Segment::from_coords(o, 5.0, o + 6.0, 90.0));
    }
    println!("stats: {:?}", tree.stats());

    // Leaf lookup
    let leaf = tree.leaf_for_point(Point::new(30.0, 30.0));
    println!("leaf at (30,30): {:?}", leaf);

    // Candidate leaves for a probe, then the exact answer
    let probe = Segment::from_coords(0.0, 50.0, 100.0, 50.0);
    let candidates = tree.ray_colliding_leaves(probe.start(), probe.end());
    println!(
        "probe touches {} leaves, intersects: {}",
        candidates.len(),
        tree.intersects_segment(&probe)
    );

    // Circle
    let hit = tree.collides_with_circle(Point::new(50.0, 40.0), 4.0);
    println!("circle at (50,40) r=4 collides: {}", hit);
}
