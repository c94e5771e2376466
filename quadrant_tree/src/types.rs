// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the quadrant tree: segments, limits, quadrants, and edge ownership.

use kurbo::{Line, Point, Vec2};

use crate::geometry::segments_intersect;

/// Default maximum depth of the tree. The root sits at depth `0`.
pub const MAX_DEPTH: usize = 5;

/// Default number of segments a leaf holds before it attempts to split.
pub const MAX_SEGMENTS_PER_LEAF: usize = 5;

/// A directed line segment from `start` to `end`.
///
/// Segments are immutable once constructed. When inserted into a tree the segment is
/// treated as a ray from [`Segment::start`] along [`Segment::movement`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Create a segment between two endpoints.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from raw endpoint coordinates.
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The first endpoint.
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The second endpoint.
    pub const fn end(&self) -> Point {
        self.end
    }

    /// The displacement `end - start`.
    pub fn movement(&self) -> Vec2 {
        self.end - self.start
    }

    /// Whether this segment crosses or touches `other`.
    ///
    /// Parallel and collinear pairs report no intersection.
    pub fn intersects(&self, other: &Self) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::new(line.p0, line.p1)
    }
}

impl From<Segment> for Line {
    fn from(segment: Segment) -> Self {
        Self::new(segment.start, segment.end)
    }
}

/// Subdivision limits for a [`QuadTree`](crate::QuadTree).
///
/// A leaf splits once it holds more than `max_segments_per_leaf` segments, unless it
/// already sits at `max_depth`. The depth cutoff always wins over capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Deepest level a node may be created at. Leaves at this depth never split.
    pub max_depth: usize,
    /// Capacity of a leaf before it attempts to split.
    pub max_segments_per_leaf: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_segments_per_leaf: MAX_SEGMENTS_PER_LEAF,
        }
    }
}

/// One of the four sub-quadrants of an internal node.
///
/// North is toward smaller `y`; the tree uses a y-down (screen) convention throughout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Shares the parent's origin.
    NorthWest,
    /// Offset by half the parent's width.
    NorthEast,
    /// Offset by half the parent's height.
    SouthWest,
    /// Offset by half the parent's width and height.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    pub(crate) const fn idx(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }
}

bitflags::bitflags! {
    /// High edges that a node owns for point containment.
    ///
    /// Low edges (west and north) are always owned. A high edge is owned only when it lies
    /// on the domain boundary, so a point on an internal split line belongs to exactly one
    /// quadrant while points on the outer boundary still reach a leaf.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClosedEdges: u8 {
        /// The east edge (`x == x1`) is inclusive.
        const EAST  = 0b0000_0001;
        /// The south edge (`y == y1`) is inclusive.
        const SOUTH = 0b0000_0010;
    }
}

impl ClosedEdges {
    /// Edge ownership of a child in `quadrant`, given its parent's ownership.
    pub(crate) fn for_child(self, quadrant: Quadrant) -> Self {
        match quadrant {
            Quadrant::NorthWest => Self::empty(),
            Quadrant::NorthEast => self & Self::EAST,
            Quadrant::SouthWest => self & Self::SOUTH,
            Quadrant::SouthEast => self,
        }
    }
}
