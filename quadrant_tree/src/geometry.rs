// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf-level geometric predicates shared by the tree and its callers.
//!
//! All predicates are closed: touching counts as intersecting.

use kurbo::{Point, Rect, Vec2};

/// Relative tolerance below which two directions are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Whether the closed intervals `[a_min, a_max]` and `[b_min, b_max]` overlap.
#[inline]
pub fn intervals_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> bool {
    a_min <= b_max && b_min <= a_max
}

/// Separating-axis test of the segment `origin .. origin + movement` against `rect`.
///
/// The segment's extent must overlap the rectangle on both axes, and the rectangle must
/// straddle (or touch) the infinite line through the segment. The line check projects the
/// four corners onto the perpendicular of `movement`: a zero projection means a corner lies
/// on the line, otherwise both signs must be present.
///
/// A zero `movement` degenerates to a closed point-in-rectangle test.
pub fn ray_intersects_rect(rect: &Rect, origin: Point, movement: Vec2) -> bool {
    let end = origin + movement;
    if !intervals_overlap(origin.x.min(end.x), origin.x.max(end.x), rect.x0, rect.x1) {
        return false;
    }
    if !intervals_overlap(origin.y.min(end.y), origin.y.max(end.y), rect.y0, rect.y1) {
        return false;
    }

    // Movement rotated by 90 degrees.
    let axis = Vec2::new(movement.y, -movement.x);
    let projections = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
    .map(|corner| (corner - origin).dot(axis));

    if projections.iter().any(|&p| p == 0.0) {
        return true;
    }
    projections.iter().any(|&p| p > 0.0) && projections.iter().any(|&p| p < 0.0)
}

/// Whether two rectangles overlap, edges included.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    intervals_overlap(a.x0, a.x1, b.x0, b.x1) && intervals_overlap(a.y0, a.y1, b.y0, b.y1)
}

/// Squared distance from `point` to the closest point of the segment `a .. b`.
///
/// The projection of `point` is clamped to the segment, so the endpoints are the closest
/// points past either end. A degenerate segment (`a == b`) measures to `a`.
pub fn squared_distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = point - a;

    let along = ap.dot(ab);
    if along <= 0.0 {
        return ap.hypot2();
    }
    let length2 = ab.hypot2();
    if along >= length2 {
        return (point - b).hypot2();
    }
    // Rounding can push this slightly below zero for points on the segment.
    (ap.hypot2() - along * along / length2).max(0.0)
}

/// Whether the segments `p0 .. p1` and `q0 .. q1` cross or touch.
///
/// Parallel and collinear pairs (including zero-length segments) report `false`
/// rather than dividing by a vanishing cross product.
pub fn segments_intersect(p0: Point, p1: Point, q0: Point, q1: Point) -> bool {
    let r = p1 - p0;
    let s = q1 - q0;
    let denom = r.cross(s);

    // Compare squares so the tolerance scales with both lengths without a square root.
    if denom * denom <= PARALLEL_EPSILON * PARALLEL_EPSILON * r.hypot2() * s.hypot2() {
        return false;
    }

    let offset = q0 - p0;
    let t = offset.cross(s) / denom;
    let u = offset.cross(r) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}
