// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by onpdiff developers in 2024
// grcov-excl-br-start

#![cfg(any(test, doc))]

use crate::segment::{EditKind, EditSegment};




/// Testing function for [`Clone`] (for coverage).
///
/// This function is suitable if we have no comparison function for these.
///
/// In other words, this function is for coverage tests.
pub(crate) fn cover_auto_clone<T: Clone>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    cloned.clone_from(orig_value);
}


/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Checks whether a script is a valid edit script of two sequences.
///
/// It checks that:
///
/// 1.  segments form a gapless partition of both sequences,
/// 2.  each segment has the shape its kind requires,
/// 3.  identical segments only cover equal elements and
/// 4.  no two neighboring segments could be merged into one.
pub(crate) fn assert_valid_script<F>(
    left_len: usize,
    right_len: usize,
    segments: &[EditSegment],
    mut is_equal: F,
) where
    F: FnMut(usize, usize) -> bool,
{
    let mut left = 0;
    let mut right = 0;
    let mut prev_kind: Option<EditKind> = None;
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.left_start(), left, "gap on the left before segment {}: {:?}", i, segments);
        assert_eq!(segment.right_start(), right, "gap on the right before segment {}: {:?}", i, segments);
        match segment.kind() {
            EditKind::Identical => {
                assert!(segment.left_count() >= 1, "empty segment {}: {:?}", i, segments);
                assert_eq!(segment.left_count(), segment.right_count(), "segment {}: {:?}", i, segments);
                for (l, r) in segment.left_range().zip(segment.right_range()) {
                    assert!(is_equal(l, r), "segment {} covers different elements ({}, {}): {:?}", i, l, r, segments);
                }
            }
            EditKind::Inserted => {
                assert_eq!(segment.left_count(), 0, "segment {}: {:?}", i, segments);
                assert!(segment.right_count() >= 1, "segment {}: {:?}", i, segments);
            }
            EditKind::Deleted => {
                assert!(segment.left_count() >= 1, "segment {}: {:?}", i, segments);
                assert_eq!(segment.right_count(), 0, "segment {}: {:?}", i, segments);
            }
            EditKind::Replaced => {
                assert!(segment.left_count() >= 1, "segment {}: {:?}", i, segments);
                assert!(segment.right_count() >= 1, "segment {}: {:?}", i, segments);
            }
        }
        if let Some(prev_kind) = prev_kind {
            let is_identical = segment.is_identical();
            let prev_identical = prev_kind == EditKind::Identical;
            assert!(is_identical != prev_identical, "segment {} is mergeable with the previous one: {:?}", i, segments);
        }
        prev_kind = Some(segment.kind());
        left = segment.left_end();
        right = segment.right_end();
    }
    assert_eq!(left, left_len, "left sequence is not covered: {:?}", segments);
    assert_eq!(right, right_len, "right sequence is not covered: {:?}", segments);
}


/// Test automatically generated [`Debug`](core::fmt::Debug) implementation
/// of field-less enums.
#[doc(alias = "test_auto_debug_for_enum")]
macro_rules! test_auto_debug_for_enum_impl {
    ($ty: ty, [$($variant: ident),* $(,)?]) => {
        $(
            assert_eq!(format!("{:?}", <$ty>::$variant), stringify!($variant));
        )*
    };
}

pub(crate) use test_auto_debug_for_enum_impl as test_auto_debug_for_enum;
