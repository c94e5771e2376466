// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural invariant violations.

use thiserror::Error;

/// A broken structural invariant of the tree.
///
/// These never arise from valid input. Each one points at a defect in the splitting
/// geometry, so the plain [`QuadTree`](crate::QuadTree) entry points treat them as fatal.
/// The `try_` variants hand them back instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A node accepted a segment that none of its four children accepted.
    #[error("segment accepted at depth {depth} was rejected by every child quadrant")]
    SegmentRejectedByChildren {
        /// Depth of the node whose children rejected the segment.
        depth: usize,
    },
    /// An internal node contains a point that none of its children contain.
    #[error("point contained at depth {depth} is outside every child quadrant")]
    PointOutsideChildren {
        /// Depth of the node whose children missed the point.
        depth: usize,
    },
    /// A split was requested on a node that already has children.
    #[error("node at depth {depth} is already split")]
    AlreadySplit {
        /// Depth of the node that was asked to split again.
        depth: usize,
    },
}
