// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive quadrant node: insertion, splitting, and query traversals.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Vec2};
use tracing::trace;

use crate::error::InvariantViolation;
use crate::geometry::{ray_intersects_rect, rects_overlap, squared_distance_to_segment};
use crate::types::{ClosedEdges, Limits, Quadrant, Segment};

/// A rectangular region of the domain.
///
/// A node is either a leaf holding segments or an internal node owning exactly four
/// children that tile its area. Children are indexed in [`Quadrant::ALL`] order.
#[derive(Clone)]
pub struct Node {
    bounds: Rect,
    depth: usize,
    closed: ClosedEdges,
    kind: NodeKind,
}

#[derive(Clone)]
enum NodeKind {
    Leaf { segments: Vec<Segment> },
    Internal { children: Box<[Node; 4]> },
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("bounds", &self.bounds)
            .field("depth", &self.depth)
            .field("closed", &self.closed);
        match &self.kind {
            NodeKind::Leaf { segments } => s.field("segments", &segments.len()),
            NodeKind::Internal { children } => s.field("children", children),
        };
        s.finish()
    }
}

impl Node {
    /// A root leaf covering `bounds` at depth 0. All of its edges are inclusive.
    pub(crate) fn root(bounds: Rect) -> Self {
        Self::leaf(bounds, 0, ClosedEdges::all())
    }

    fn leaf(bounds: Rect, depth: usize, closed: ClosedEdges) -> Self {
        Self {
            bounds,
            depth,
            closed,
            kind: NodeKind::Leaf {
                segments: Vec::new(),
            },
        }
    }

    /// The region this node covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// High edges this node owns for [`Node::contains_point`].
    pub fn closed_edges(&self) -> ClosedEdges {
        self.closed
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Segments stored at this node. Always empty for internal nodes.
    pub fn segments(&self) -> &[Segment] {
        match &self.kind {
            NodeKind::Leaf { segments } => segments,
            NodeKind::Internal { .. } => &[],
        }
    }

    /// The four children in [`Quadrant::ALL`] order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { children } => Some(children),
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|children| &children[quadrant.idx()])
    }

    /// Whether `point` lies inside this node.
    ///
    /// West and north edges are always inclusive. East and south edges are inclusive only
    /// when they lie on the domain boundary (see [`ClosedEdges`]), so the root contains its
    /// whole outline and a point on an internal split line belongs to a single quadrant.
    pub fn contains_point(&self, point: Point) -> bool {
        let b = &self.bounds;
        let east = if self.closed.contains(ClosedEdges::EAST) {
            point.x <= b.x1
        } else {
            point.x < b.x1
        };
        let south = if self.closed.contains(ClosedEdges::SOUTH) {
            point.y <= b.y1
        } else {
            point.y < b.y1
        };
        b.x0 <= point.x && b.y0 <= point.y && east && south
    }

    /// Whether the segment from `origin` along `movement` intersects this node's area.
    pub fn ray_intersects_area(&self, origin: Point, movement: Vec2) -> bool {
        ray_intersects_rect(&self.bounds, origin, movement)
    }

    /// Whether `rect` overlaps this node's area, edges included.
    pub fn rect_intersects_area(&self, rect: &Rect) -> bool {
        rects_overlap(&self.bounds, rect)
    }

    /// Insert `segment` into this subtree.
    ///
    /// Returns `Ok(false)` without mutating anything when the segment misses this node.
    pub(crate) fn insert(
        &mut self,
        segment: Segment,
        limits: &Limits,
    ) -> Result<bool, InvariantViolation> {
        if !self.ray_intersects_area(segment.start(), segment.movement()) {
            return Ok(false);
        }

        match &mut self.kind {
            NodeKind::Leaf { segments } => {
                segments.push(segment);
                if segments.len() <= limits.max_segments_per_leaf
                    || self.depth >= limits.max_depth
                {
                    return Ok(true);
                }
                let held = mem::take(segments);
                self.split()?;
                if let NodeKind::Internal { children } = &mut self.kind {
                    for held_segment in held {
                        insert_into_children(children, held_segment, limits, self.depth)?;
                    }
                }
            }
            NodeKind::Internal { children } => {
                insert_into_children(children, segment, limits, self.depth)?;
            }
        }
        Ok(true)
    }

    /// Turn this leaf into an internal node with four empty children one level deeper.
    ///
    /// The children split the area at its midpoint, so they tile it exactly. Segments
    /// held by the leaf are dropped; redistributing them is the caller's job.
    fn split(&mut self) -> Result<(), InvariantViolation> {
        if !self.is_leaf() {
            return Err(InvariantViolation::AlreadySplit { depth: self.depth });
        }

        let Rect { x0, y0, x1, y1 } = self.bounds;
        let mid_x = x0 + self.bounds.width() * 0.5;
        let mid_y = y0 + self.bounds.height() * 0.5;
        let depth = self.depth + 1;
        let child = |quadrant: Quadrant, bounds: Rect| {
            Self::leaf(bounds, depth, self.closed.for_child(quadrant))
        };

        let children = Box::new([
            child(Quadrant::NorthWest, Rect::new(x0, y0, mid_x, mid_y)),
            child(Quadrant::NorthEast, Rect::new(mid_x, y0, x1, mid_y)),
            child(Quadrant::SouthWest, Rect::new(x0, mid_y, mid_x, y1)),
            child(Quadrant::SouthEast, Rect::new(mid_x, mid_y, x1, y1)),
        ]);
        trace!(depth = self.depth, x0, y0, x1, y1, "split quadrant");
        self.kind = NodeKind::Internal { children };
        Ok(())
    }

    /// Drop every stored segment in this subtree. The subdivision is kept.
    pub(crate) fn clear(&mut self) {
        match &mut self.kind {
            NodeKind::Leaf { segments } => segments.clear(),
            NodeKind::Internal { children } => {
                for child in children.iter_mut() {
                    child.clear();
                }
            }
        }
    }

    /// Bounds of the leaf containing `point`, or `None` if this node does not contain it.
    pub(crate) fn leaf_for_point(&self, point: Point) -> Result<Option<Rect>, InvariantViolation> {
        if !self.contains_point(point) {
            return Ok(None);
        }
        let NodeKind::Internal { children } = &self.kind else {
            return Ok(Some(self.bounds));
        };
        for child in children.iter() {
            if let Some(bounds) = child.leaf_for_point(point)? {
                return Ok(Some(bounds));
            }
        }
        Err(InvariantViolation::PointOutsideChildren { depth: self.depth })
    }

    /// Append every leaf whose area the segment `start .. end` intersects.
    pub(crate) fn ray_colliding_leaves<'a>(
        &'a self,
        start: Point,
        end: Point,
        out: &mut Vec<&'a Self>,
    ) {
        if !self.ray_intersects_area(start, end - start) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf { .. } => out.push(self),
            NodeKind::Internal { children } => {
                for child in children.iter() {
                    child.ray_colliding_leaves(start, end, out);
                }
            }
        }
    }

    /// Append every leaf whose area overlaps `rect`.
    pub(crate) fn rect_colliding_leaves<'a>(&'a self, rect: &Rect, out: &mut Vec<&'a Self>) {
        if !self.rect_intersects_area(rect) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf { .. } => out.push(self),
            NodeKind::Internal { children } => {
                for child in children.iter() {
                    child.rect_colliding_leaves(rect, out);
                }
            }
        }
    }

    /// Whether any stored segment passes strictly closer than `radius` to `center`.
    ///
    /// Candidate leaves come from a square query box of side `2 * radius` spanning
    /// `center.x - radius / 2 ..= center.x + 3 * radius / 2` and
    /// `center.y - 3 * radius / 2 ..= center.y + radius / 2`. The box always contains the
    /// center but is a loose stand-in for the circle: it is offset toward north-east and may
    /// skip a leaf the circle reaches on the south or west side. Distances stay squared
    /// throughout.
    pub(crate) fn collides_with_circle(&self, center: Point, radius: f64) -> bool {
        let query = Rect::new(
            center.x - radius * 0.5,
            center.y - radius * 1.5,
            center.x + radius * 1.5,
            center.y + radius * 0.5,
        );
        let mut leaves = Vec::new();
        self.rect_colliding_leaves(&query, &mut leaves);

        let radius2 = radius * radius;
        leaves
            .iter()
            .flat_map(|leaf| leaf.segments())
            .any(|s| squared_distance_to_segment(center, s.start(), s.end()) < radius2)
    }

    /// Call `f` on this node and then on each descendant, depth first in quadrant order.
    pub fn visit<F: FnMut(&Self)>(&self, f: &mut F) {
        f(self);
        if let NodeKind::Internal { children } = &self.kind {
            for child in children.iter() {
                child.visit(f);
            }
        }
    }
}

/// Offer `segment` to all four children. At least one must take it, since the children
/// tile the area the parent already accepted it for.
fn insert_into_children(
    children: &mut [Node; 4],
    segment: Segment,
    limits: &Limits,
    depth: usize,
) -> Result<(), InvariantViolation> {
    let mut accepted = false;
    for child in children.iter_mut() {
        accepted |= child.insert(segment, limits)?;
    }
    if accepted {
        Ok(())
    } else {
        Err(InvariantViolation::SegmentRejectedByChildren { depth })
    }
}
