// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.
// grcov-excl-br-start

#![cfg(test)]

use std::vec::Vec;

use super::reconstruct;
use crate::compare::Orientation;
use crate::compare::furthest_points::{FurthestPoint, FurthestPoints, PointIndex};
use crate::compare::merge::SegmentMerger;
use crate::segment::{EditKind, EditSegment};


fn reconstruct_to_vec(fp: &FurthestPoints, last: PointIndex, orientation: &Orientation) -> Vec<EditSegment> {
    let mut merger = SegmentMerger::new();
    reconstruct(fp, last, orientation, &mut merger);
    merger.into_segments()
}

#[test]
fn leading_snake_only() {
    let orientation = Orientation::new(2, 2);
    let mut fp = FurthestPoints::new(2, 2);
    let last = fp.set(0, FurthestPoint { row: 2, column: 2, prev: None });
    assert_eq!(
        reconstruct_to_vec(&fp, last, &orientation),
        [EditSegment::new(EditKind::Identical, 0, 2, 0, 2)]
    );
}

#[test]
fn single_replacement() {
    // "a" and "b": the path (0,0) -> (0,1) -> (1,1) in (row, column)
    let orientation = Orientation::new(1, 1);
    let mut fp = FurthestPoints::new(1, 1);
    let origin = fp.set(0, FurthestPoint { row: 0, column: 0, prev: None });
    let right = fp.set(-1, FurthestPoint { row: 0, column: 1, prev: Some(origin) });
    fp.set(1, FurthestPoint { row: 1, column: 0, prev: Some(origin) });
    let last = fp.set(0, FurthestPoint { row: 1, column: 1, prev: Some(right) });
    assert_eq!(
        reconstruct_to_vec(&fp, last, &orientation),
        [EditSegment::new(EditKind::Replaced, 0, 1, 0, 1)]
    );
}

#[test]
fn insertion_followed_by_snake() {
    // "ab" and "xab" (the right sequence is longer)
    let orientation = Orientation::new(2, 3);
    let mut fp = FurthestPoints::new(2, 3);
    let origin = fp.set(0, FurthestPoint { row: 0, column: 0, prev: None });
    let last = fp.set(1, FurthestPoint { row: 3, column: 2, prev: Some(origin) });
    assert_eq!(
        reconstruct_to_vec(&fp, last, &orientation),
        [
            EditSegment::new(EditKind::Inserted,  0, 0, 0, 1),
            EditSegment::new(EditKind::Identical, 0, 2, 1, 2),
        ]
    );
}

#[test]
fn deletion_followed_by_snake_on_swapped_sequences() {
    // "xab" and "ab" (the left sequence is longer; rows index the left one)
    let orientation = Orientation::new(3, 2);
    let mut fp = FurthestPoints::new(2, 3);
    let origin = fp.set(0, FurthestPoint { row: 0, column: 0, prev: None });
    let last = fp.set(1, FurthestPoint { row: 3, column: 2, prev: Some(origin) });
    assert_eq!(
        reconstruct_to_vec(&fp, last, &orientation),
        [
            EditSegment::new(EditKind::Deleted,   0, 1, 0, 0),
            EditSegment::new(EditKind::Identical, 1, 2, 0, 2),
        ]
    );
}

#[test]
fn leading_snake_and_trailing_insertion() {
    // "ab" and "abc": (0,0) -> snake -> (2,2) -> down -> (3,2)
    let orientation = Orientation::new(2, 3);
    let mut fp = FurthestPoints::new(2, 3);
    let origin = fp.set(0, FurthestPoint { row: 2, column: 2, prev: None });
    let last = fp.set(1, FurthestPoint { row: 3, column: 2, prev: Some(origin) });
    assert_eq!(
        reconstruct_to_vec(&fp, last, &orientation),
        [
            EditSegment::new(EditKind::Identical, 0, 2, 0, 2),
            EditSegment::new(EditKind::Inserted,  2, 0, 2, 1),
        ]
    );
}
