// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

#![cfg(feature = "easy-functions")]

use alloc::vec::Vec;

use crate::compare::compare;
use crate::segment::EditSegment;




/// Compares two slices element by element.
///
/// This is a shorthand of [`compare()`] using [`PartialEq`] of elements.
///
/// # Example
///
/// ```
/// use onp::{EditKind, EditSegment};
///
/// let left = ["dog", "cat", "cow", "sparrow", "swift"];
/// let right = ["horse", "dog", "cat", "cow", "koala", "swift"];
/// assert_eq!(onp::compare_slices(&left, &right), [
///     EditSegment::new(EditKind::Inserted,  0, 0, 0, 1),
///     EditSegment::new(EditKind::Identical, 0, 3, 1, 3),
///     EditSegment::new(EditKind::Replaced,  3, 1, 4, 1),
///     EditSegment::new(EditKind::Identical, 4, 1, 5, 1),
/// ]);
/// ```
pub fn compare_slices<T, U>(left: &[T], right: &[U]) -> Vec<EditSegment>
where
    T: PartialEq<U>,
{
    compare(left.len(), right.len(), |l, r| left[l] == right[r])
}

/// Compares two strings character by character.
///
/// Indices in the resulting segments are *character* indices
/// (of Unicode scalar values), not byte offsets.
///
/// # Example
///
/// ```
/// use onp::{EditKind, EditSegment};
///
/// assert_eq!(onp::compare_chars("naïve", "native"), [
///     EditSegment::new(EditKind::Identical, 0, 2, 0, 2),
///     EditSegment::new(EditKind::Replaced,  2, 1, 2, 2),
///     EditSegment::new(EditKind::Identical, 3, 2, 4, 2),
/// ]);
/// ```
pub fn compare_chars(left: &str, right: &str) -> Vec<EditSegment> {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    compare_slices(&left, &right)
}
