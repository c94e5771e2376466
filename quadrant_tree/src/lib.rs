// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant Tree: a Kurbo-native quadtree over line segments.
//!
//! Quadrant Tree partitions a bounded rectangular domain into a hierarchy of quadrants to
//! accelerate geometric queries over a growing set of segments. It targets real-time use,
//! such as simulation or game geometry tests, where scanning every segment is too slow.
//!
//! - Insert segments one at a time; a leaf that outgrows its capacity splits into four.
//! - Look up the leaf containing a point.
//! - Collect the leaves a ray or rectangle touches, then test only their segments.
//! - Test a circle against the stored segments using squared distances.
//!
//! Segments are never removed individually. [`QuadTree::clear`] empties every leaf while
//! keeping the subdivision built so far.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quadrant_tree::{QuadTree, Segment};
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert!(tree.insert(Segment::from_coords(10.0, 10.0, 40.0, 20.0)));
//! assert!(!tree.insert(Segment::from_coords(200.0, 200.0, 300.0, 300.0)));
//!
//! // Candidate leaves for a probe segment, then an exact check on their contents.
//! let probe = Segment::from_coords(20.0, 0.0, 20.0, 30.0);
//! assert!(!tree.ray_colliding_leaves(probe.start(), probe.end()).is_empty());
//! assert!(tree.intersects_segment(&probe));
//!
//! // Circle test against stored segments.
//! assert!(tree.collides_with_circle(Point::new(25.0, 15.0), 3.0));
//! ```
//!
//! ## Coordinates
//!
//! The tree uses a y-down convention. A node's origin is its minimum corner and its area
//! extends toward `+x` and `+y`; north is toward smaller `y`. Children split their parent at
//! the midpoint in [`Quadrant::ALL`] order: north-west, north-east, south-west, south-east.
//!
//! Point containment is half-open so that a point on an internal split line belongs to
//! exactly one quadrant. Edges on the domain boundary stay closed, see [`ClosedEdges`].
//!
//! ## Limits
//!
//! [`Limits`] bounds the subdivision: a leaf holding more than
//! [`Limits::max_segments_per_leaf`] segments splits unless it sits at [`Limits::max_depth`].
//! The defaults are [`MAX_SEGMENTS_PER_LEAF`] and [`MAX_DEPTH`].
//!
//! ## Invariant violations
//!
//! The children of a node tile it exactly, so a segment or point accepted by a node is
//! always accepted by one of its children. If that ever fails the splitting geometry has a
//! defect. [`QuadTree::insert`] and [`QuadTree::leaf_for_point`] panic in that case;
//! [`QuadTree::try_insert`] and [`QuadTree::try_leaf_for_point`] return the
//! [`InvariantViolation`] instead.
//!
//! ### Float semantics
//!
//! This crate assumes finite coordinates and bounds with positive width and height.
//! Debug builds may assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod node;
pub mod tree;
pub mod types;

pub use error::InvariantViolation;
pub use node::Node;
pub use tree::{QuadTree, TreeStats};
pub use types::{ClosedEdges, Limits, MAX_DEPTH, MAX_SEGMENTS_PER_LEAF, Quadrant, Segment};
