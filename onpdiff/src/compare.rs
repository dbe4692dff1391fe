// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

//! Sequence comparison based on the algorithm described in:
//!
//! S. Wu, U. Manber, G. Myers and W. Miller,
//! "An O(NP) Sequence Comparison Algorithm",
//! Information Processing Letters 35 (1990).

use alloc::vec::Vec;

use crate::error::{CompareError, CompareSide};
use crate::macros::{invariant, optionally_unsafe, trace};
use crate::segment::{EditKind, EditSegment};


mod furthest_points;
mod merge;
mod path;
mod snake;
/// Test-only utilities.
#[cfg(any(test, doc))]
mod test_utils;

use furthest_points::FurthestPoints;
use merge::SegmentMerger;


/// Two sequence lengths normalized so that the shorter one comes first.
///
/// Internally, the shorter sequence is indexed by the *column* and the longer
/// one is indexed by the *row*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Orientation {
    /// The length of the shorter sequence.
    m: usize,
    /// The length of the longer sequence.
    n: usize,
    /// Whether the left sequence is the longer one.
    is_swapped: bool,
}

impl Orientation {
    /// Normalizes two sequence lengths.
    ///
    /// If both lengths are the same, the left sequence is the shorter one.
    pub(crate) fn new(left_len: usize, right_len: usize) -> Self {
        let is_swapped = left_len > right_len;
        if is_swapped {
            Self { m: right_len, n: left_len, is_swapped }
        } else {
            Self { m: left_len, n: right_len, is_swapped }
        }
    }

    /// Checks whether all diagonals can be addressed with [`isize`].
    ///
    /// If the shorter sequence is empty, no diagonals are required.
    pub(crate) fn is_addressable(&self) -> bool {
        if self.m == 0 {
            return true;
        }
        match self.m.checked_add(self.n).and_then(|len| len.checked_add(3)) {
            Some(len) => len <= isize::MAX as usize,
            None => false,
        }
    }

    /// The diagonal which contains the end of both sequences.
    #[inline]
    pub(crate) fn delta(&self) -> isize {
        (self.n - self.m) as isize
    }

    /// Maps a (row, column) pair to a (left, right) pair.
    #[inline(always)]
    pub(crate) fn to_sides(&self, row: usize, column: usize) -> (usize, usize) {
        if self.is_swapped { (row, column) } else { (column, row) }
    }
}


/// The comparison state of two sequences.
struct Comparator<F> {
    /// Normalized sequence lengths.
    orientation: Orientation,
    /// Furthest points found so far.
    fp: FurthestPoints,
    /// The equality predicate (takes left and right indices).
    is_equal: F,
}

impl<F> Comparator<F>
where
    F: FnMut(usize, usize) -> bool,
{
    /// Creates a comparison state.
    ///
    /// The caller must check [`Orientation::is_addressable()`] beforehand.
    /// Note that the diagonal table is allocated here.
    fn new(orientation: Orientation, is_equal: F) -> Self {
        Self {
            orientation,
            fp: FurthestPoints::new(orientation.m, orientation.n),
            is_equal,
        }
    }

    /// Compares two elements at the given row and column.
    #[inline(always)]
    fn is_equal_at(&mut self, row: usize, column: usize) -> bool {
        let (left, right) = self.orientation.to_sides(row, column);
        (self.is_equal)(left, right)
    }

    /// Runs the comparison and returns the edit script.
    ///
    /// Both sequences must not be empty.
    fn run(mut self) -> Vec<EditSegment> {
        let Orientation { m, n, .. } = self.orientation;
        optionally_unsafe! {
            invariant!(m != 0);
        }

        // The shortest edit script has the edit distance of delta + 2p.
        // p never exceeds m (all elements of the shorter sequence deleted).
        let delta = self.orientation.delta();
        let max_p = m as isize;
        let mut p: isize = 0;
        let last = loop {
            for k in -p..delta {
                self.snake(k);
            }
            let mut last = self.snake(delta + p);
            for k in (delta..delta + p).rev() {
                last = self.snake(k);
            }
            if self.fp.point(last).row == n || p == max_p {
                break last;
            }
            p += 1;
        };
        optionally_unsafe! {
            invariant!(self.fp.point(last).row == n);
        }

        let mut merger = SegmentMerger::new();
        path::reconstruct(&self.fp, last, &self.orientation, &mut merger);
        let segments = merger.into_segments();
        trace!(
            target: "onp::compare",
            "compared {} x {} elements (swapped={}): p={}, distance={}, segments={}",
            m,
            n,
            self.orientation.is_swapped,
            p,
            delta + 2 * p,
            segments.len()
        );
        segments
    }
}


/// Compares two sequences of normalized lengths.
fn compare_normalized<F>(orientation: Orientation, is_equal: F) -> Vec<EditSegment>
where
    F: FnMut(usize, usize) -> bool,
{
    let Orientation { m, n, is_swapped } = orientation;
    if m == 0 {
        if n == 0 {
            return Vec::new();
        }
        return alloc::vec![if is_swapped {
            EditSegment::new(EditKind::Deleted, 0, n, 0, 0)
        } else {
            EditSegment::new(EditKind::Inserted, 0, 0, 0, n)
        }];
    }
    Comparator::new(orientation, is_equal).run()
}


/// Compares two sequences and returns the shortest edit script.
///
/// Two sequences are given as their lengths and the equality predicate
/// `is_equal(left_index, right_index)`, which must be pure: it must return
/// the same result for the same indices because it may be called more than
/// once for the same pair.
///
/// The result is a sequence of [`EditSegment`]s in the forward order, which
/// forms a gapless partition of both sequences.  Neighboring segments are
/// merged whenever possible: adjacent insertions and deletions form a single
/// [`Replaced`](EditKind::Replaced) segment.
///
/// The number of inserted and deleted elements in the result is minimum.
/// If two sequences have more than one edit script with the minimum
/// edit distance, the choice is deterministic: whenever two paths reach
/// equally far on a diagonal, the one whose last edit consumed an element
/// of the shorter sequence (the left one if both have the same length)
/// is kept.
///
/// This function uses Wu's O(NP) algorithm and its time complexity is
/// `O((M+N)P)` where `M + N` is the total length and `P` is the number of
/// deleted elements from the longer sequence (in the shortest edit script).
///
/// # Panics
///
/// This function panics if both sequences are not empty and
/// `left_len + right_len + 3` does not fit in [`isize`].
/// This is not the case for lengths of existing slices.
///
/// Any panic inside `is_equal` is propagated as is.
///
/// # Example
///
/// ```
/// use onp::{EditKind, EditSegment};
///
/// let left = [1, 2, 3, 4];
/// let right = [1, 3, 4, 5];
/// let script = onp::compare(left.len(), right.len(), |l, r| left[l] == right[r]);
/// assert_eq!(script, [
///     EditSegment::new(EditKind::Identical, 0, 1, 0, 1),
///     EditSegment::new(EditKind::Deleted,   1, 1, 1, 0),
///     EditSegment::new(EditKind::Identical, 2, 2, 1, 2),
///     EditSegment::new(EditKind::Inserted,  4, 0, 3, 1),
/// ]);
/// ```
pub fn compare<F>(left_len: usize, right_len: usize, is_equal: F) -> Vec<EditSegment>
where
    F: FnMut(usize, usize) -> bool,
{
    let orientation = Orientation::new(left_len, right_len);
    assert!(orientation.is_addressable(), "{}", CompareError::LengthTooLarge);
    compare_normalized(orientation, is_equal)
}

/// Compares two sequences with signed lengths and returns
/// the shortest edit script.
///
/// This is the same as [`compare()`] except that it accepts signed lengths
/// (convenient when lengths come from signed index arithmetics) and returns
/// an error instead of panicking.
///
/// # Errors
///
/// *   [`CompareError::InvalidArgument`] if either length is negative.
/// *   [`CompareError::LengthTooLarge`] if both sequences are not empty and
///     `left_len + right_len + 3` does not fit in [`isize`].
///
/// # Example
///
/// ```
/// use onp::{CompareError, CompareSide};
///
/// assert_eq!(
///     onp::try_compare(-1, 3, |_, _| true),
///     Err(CompareError::InvalidArgument(CompareSide::Left))
/// );
/// assert_eq!(onp::try_compare(3, 3, |l, r| l == r).unwrap().len(), 1);
/// ```
pub fn try_compare<F>(
    left_len: isize,
    right_len: isize,
    is_equal: F,
) -> Result<Vec<EditSegment>, CompareError>
where
    F: FnMut(usize, usize) -> bool,
{
    let left_len = usize::try_from(left_len)
        .map_err(|_| CompareError::InvalidArgument(CompareSide::Left))?;
    let right_len = usize::try_from(right_len)
        .map_err(|_| CompareError::InvalidArgument(CompareSide::Right))?;
    let orientation = Orientation::new(left_len, right_len);
    if !orientation.is_addressable() {
        return Err(CompareError::LengthTooLarge);
    }
    Ok(compare_normalized(orientation, is_equal))
}
