// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

use crate::compare::Orientation;
use crate::compare::furthest_points::{FurthestPoints, PointIndex};
use crate::compare::merge::SegmentMerger;
use crate::macros::{invariant, optionally_unsafe};
use crate::segment::{EditKind, EditSegment};


#[cfg(test)]
mod tests;


/// Traces the path from the furthest point `last` back to the origin and
/// pushes primitive segments to `merger` (from the end to the start).
///
/// Each step between a furthest point and its predecessor consists of
/// a single insertion or deletion followed by a (possibly empty) snake.
/// Primitive segments are:
///
/// *   [`Identical`](EditKind::Identical) for a non-empty snake,
/// *   [`Inserted`](EditKind::Inserted) or [`Deleted`](EditKind::Deleted)
///     (one element) for an edit step.
///
/// A leading snake (before any edit steps) becomes the last primitive.
pub(crate) fn reconstruct(
    fp: &FurthestPoints,
    last: PointIndex,
    orientation: &Orientation,
    merger: &mut SegmentMerger,
) {
    let point = fp.point(last);
    let (mut to_left, mut to_right) = orientation.to_sides(point.row, point.column);
    let mut prev = point.prev;
    while let Some(index) = prev {
        let point = fp.point(index);
        prev = point.prev;
        let (from_left, from_right) = orientation.to_sides(point.row, point.column);
        // Equivalent to (from_right - from_left) < (to_right - to_left).
        if from_right + to_left < to_right + from_left {
            // One element of the right sequence is consumed.
            if from_right + 1 < to_right {
                let len = to_right - (from_right + 1);
                merger.push(EditSegment::new(EditKind::Identical, from_left, len, from_right + 1, len));
            }
            merger.push(EditSegment::new(EditKind::Inserted, from_left, 0, from_right, 1));
        } else {
            // One element of the left sequence is consumed.
            if from_left + 1 < to_left {
                let len = to_left - (from_left + 1);
                merger.push(EditSegment::new(EditKind::Identical, from_left + 1, len, from_right, len));
            }
            merger.push(EditSegment::new(EditKind::Deleted, from_left, 1, from_right, 0));
        }
        to_left = from_left;
        to_right = from_right;
    }
    // The origin is on the diagonal 0.
    optionally_unsafe! {
        invariant!(to_left == to_right);
    }
    if to_left != 0 {
        merger.push(EditSegment::new(EditKind::Identical, 0, to_left, 0, to_right));
    }
}
