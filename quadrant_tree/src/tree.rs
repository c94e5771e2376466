// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API over the recursive [`Node`] structure.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tracing::{debug, error};

use crate::error::InvariantViolation;
use crate::node::Node;
use crate::types::{Limits, Segment};

/// A quadrant tree over line segments covering a fixed rectangular domain.
///
/// The tree starts as a single leaf. Leaves split into four quadrants when they exceed
/// [`Limits::max_segments_per_leaf`], down to [`Limits::max_depth`]. A segment is stored in
/// every leaf whose area it intersects.
///
/// Writes need exclusive access (`&mut self`); any number of queries can share the tree.
#[derive(Clone)]
pub struct QuadTree {
    root: Node,
    limits: Limits,
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let stats = self.stats();
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds())
            .field("limits", &self.limits)
            .field("nodes", &stats.nodes)
            .field("leaves", &stats.leaves)
            .field("stored_segments", &stats.stored_segments)
            .finish_non_exhaustive()
    }
}

/// Shape summary returned by [`QuadTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, internal and leaf.
    pub nodes: usize,
    /// Number of leaves.
    pub leaves: usize,
    /// Number of stored segment entries, counting a segment once per leaf holding it.
    pub stored_segments: usize,
    /// Depth of the deepest node.
    pub max_depth: usize,
}

impl QuadTree {
    /// Create an empty tree covering `bounds` with the default [`Limits`].
    ///
    /// `bounds` must have positive width and height.
    pub fn new(bounds: Rect) -> Self {
        Self::with_limits(bounds, Limits::default())
    }

    /// Create an empty tree covering `bounds` with explicit subdivision limits.
    pub fn with_limits(bounds: Rect, limits: Limits) -> Self {
        debug_assert!(
            bounds.width() > 0.0 && bounds.height() > 0.0,
            "tree bounds must have positive width and height"
        );
        Self {
            root: Node::root(bounds),
            limits,
        }
    }

    /// The domain covered by the tree.
    pub fn bounds(&self) -> Rect {
        self.root.bounds()
    }

    /// The subdivision limits in effect.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The root node, for walking the structure directly.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Insert a segment, returning whether it intersects the domain and was stored.
    ///
    /// # Panics
    ///
    /// Panics if a structural invariant breaks while the segment is distributed. See
    /// [`QuadTree::try_insert`] for the non-panicking variant.
    pub fn insert(&mut self, segment: Segment) -> bool {
        self.try_insert(segment).unwrap_or_else(|err| fatal(err))
    }

    /// Insert a segment, reporting a broken structural invariant instead of panicking.
    ///
    /// A segment entirely outside the domain yields `Ok(false)` and leaves the tree untouched.
    pub fn try_insert(&mut self, segment: Segment) -> Result<bool, InvariantViolation> {
        let stored = self.root.insert(segment, &self.limits)?;
        if !stored {
            debug!(?segment, "segment misses the tree domain");
        }
        Ok(stored)
    }

    /// Remove every stored segment. The current subdivision is kept.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Whether `point` lies in the domain, boundary included.
    pub fn contains_point(&self, point: Point) -> bool {
        self.root.contains_point(point)
    }

    /// Bounds of the leaf containing `point`, or `None` outside the domain.
    ///
    /// # Panics
    ///
    /// Panics if an internal node contains the point but none of its children do. See
    /// [`QuadTree::try_leaf_for_point`] for the non-panicking variant.
    pub fn leaf_for_point(&self, point: Point) -> Option<Rect> {
        self.try_leaf_for_point(point).unwrap_or_else(|err| fatal(err))
    }

    /// Bounds of the leaf containing `point`, reporting a broken partition instead of
    /// panicking.
    pub fn try_leaf_for_point(&self, point: Point) -> Result<Option<Rect>, InvariantViolation> {
        self.root.leaf_for_point(point)
    }

    /// Leaves whose area the segment `start .. end` intersects, in quadrant order.
    pub fn ray_colliding_leaves(&self, start: Point, end: Point) -> Vec<&Node> {
        let mut out = Vec::new();
        self.root.ray_colliding_leaves(start, end, &mut out);
        out
    }

    /// Leaves whose area overlaps `rect`, edges included, in quadrant order.
    pub fn rect_colliding_leaves(&self, rect: Rect) -> Vec<&Node> {
        let mut out = Vec::new();
        self.root.rect_colliding_leaves(&rect, &mut out);
        out
    }

    /// Whether any stored segment passes strictly closer than `radius` to `center`.
    ///
    /// Candidate leaves are gathered with a loose square query box rather than the exact
    /// circle, which keeps the traversal cheap. The box has side `2 * radius`, contains
    /// `center`, and extends `radius / 2` to the west and south and `3 * radius / 2` to the
    /// east and north. A segment that only reaches the circle through a leaf the box misses
    /// is not reported.
    pub fn collides_with_circle(&self, center: Point, radius: f64) -> bool {
        self.root.collides_with_circle(center, radius)
    }

    /// Whether `segment` crosses or touches any stored segment inside the domain.
    ///
    /// Candidates come from [`QuadTree::ray_colliding_leaves`]; each is then checked with
    /// [`Segment::intersects`]. Crossings outside the domain are not found.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        self.ray_colliding_leaves(segment.start(), segment.end())
            .iter()
            .flat_map(|leaf| leaf.segments())
            .any(|stored| segment.intersects(stored))
    }

    /// Call `f` on every node, parents before children, children in quadrant order.
    pub fn visit<F: FnMut(&Node)>(&self, mut f: F) {
        self.root.visit(&mut f);
    }

    /// Count nodes, leaves, and stored segment entries.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.visit(|node| {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(node.depth());
            if node.is_leaf() {
                stats.leaves += 1;
                stats.stored_segments += node.segments().len();
            }
        });
        stats
    }
}

#[cold]
fn fatal(err: InvariantViolation) -> ! {
    error!(%err, "quadrant tree invariant violated");
    panic!("quadrant tree invariant violated: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tree_is_one_leaf() {
        let tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            tree.stats(),
            TreeStats {
                nodes: 1,
                leaves: 1,
                stored_segments: 0,
                max_depth: 0,
            }
        );
        assert!(tree.root().is_root());
        assert_eq!(tree.limits(), Limits::default());
    }

    #[test]
    fn outside_segment_is_rejected_at_root() {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!tree.insert(Segment::from_coords(200.0, 200.0, 300.0, 300.0)));
        assert_eq!(tree.try_insert(Segment::from_coords(-5.0, 0.0, -1.0, 50.0)), Ok(false));
        assert_eq!(tree.stats().stored_segments, 0);
    }

    #[test]
    fn leaf_for_point_outside_domain_is_none() {
        let tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(tree.leaf_for_point(Point::new(-1.0, 5.0)), None);
        assert_eq!(
            tree.leaf_for_point(Point::new(100.0, 100.0)),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        );
    }

    #[test]
    fn intersects_segment_only_checks_candidates() {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        tree.insert(Segment::from_coords(10.0, 10.0, 20.0, 20.0));
        tree.insert(Segment::from_coords(80.0, 10.0, 90.0, 10.0));
        assert!(tree.intersects_segment(&Segment::from_coords(10.0, 20.0, 20.0, 10.0)));
        assert!(tree.intersects_segment(&Segment::from_coords(85.0, 5.0, 85.0, 15.0)));
        assert!(!tree.intersects_segment(&Segment::from_coords(50.0, 50.0, 60.0, 40.0)));
    }
}
