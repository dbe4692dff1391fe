// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

//! Storage of furthest points.
//!
//! Every furthest point ever computed in a comparison is appended to
//! a single arena and referred by its index.  A furthest point refers its
//! predecessor (the point on a neighboring diagonal it started from)
//! by such an index so that the whole path can be traced backwards
//! after the comparison.
//!
//! A separate table keeps the most recent furthest point for each diagonal.

use alloc::vec::Vec;

use crate::macros::{invariant, optionally_unsafe};


#[cfg(test)]
mod tests;


/// The row reported for a diagonal without any furthest point.
///
/// This is as if there were a furthest point just before the first row.
/// Extending a "down" move from this point yields the row 0.
pub(crate) const UNSET_ROW: isize = -1;


/// The index of a furthest point inside [`FurthestPoints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PointIndex(usize);

/// The furthest point on a diagonal.
///
/// `row` is an index of the longer sequence and `column` is of the shorter
/// one (both are the number of consumed elements).
/// The diagonal of the point is `row - column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FurthestPoint {
    /// The row (the position in the longer sequence).
    pub(crate) row: usize,
    /// The column (the position in the shorter sequence).
    pub(crate) column: usize,
    /// The furthest point this point is extended from.
    pub(crate) prev: Option<PointIndex>,
}

impl FurthestPoint {
    /// The diagonal this point is located.
    #[inline]
    pub(crate) fn diagonal(&self) -> isize {
        self.row as isize - self.column as isize
    }
}


/// Furthest points on all diagonals in a comparison.
///
/// Diagonals `-(m+1)..=(n+1)` are addressable where `m` and `n` are
/// the lengths of the shorter and the longer sequences respectively.
#[derive(Debug, Clone)]
pub(crate) struct FurthestPoints {
    /// The offset to convert a diagonal into an index of `diagonals`.
    offset: isize,
    /// The most recent furthest point for each diagonal.
    diagonals: Vec<Option<PointIndex>>,
    /// All furthest points (append only).
    points: Vec<FurthestPoint>,
}

impl FurthestPoints {
    /// Creates an empty storage for given lengths.
    ///
    /// The caller must make sure that `m + n + 3` fits in [`isize`].
    pub(crate) fn new(m: usize, n: usize) -> Self {
        let len = m + n + 3;
        optionally_unsafe! {
            invariant!(len <= isize::MAX as usize);
        }
        Self {
            offset: m as isize + 1,
            diagonals: alloc::vec![None; len],
            points: Vec::new(),
        }
    }

    /// Converts a diagonal into an index of the diagonal table.
    #[inline(always)]
    fn slot(&self, k: isize) -> usize {
        let slot = k + self.offset;
        optionally_unsafe! {
            invariant!(slot >= 0);
            invariant!((slot as usize) < self.diagonals.len());
        }
        slot as usize
    }

    /// Returns the most recent furthest point on the diagonal `k`.
    #[inline]
    pub(crate) fn get(&self, k: isize) -> Option<PointIndex> {
        let slot = self.slot(k);
        optionally_unsafe! {
            invariant!(slot < self.diagonals.len());
        }
        self.diagonals[slot] // grcov-excl-br-line:ARRAY
    }

    /// Returns the row of the most recent furthest point on the diagonal `k`
    /// or [`UNSET_ROW`] if there is none.
    #[inline]
    pub(crate) fn row(&self, k: isize) -> isize {
        match self.get(k) {
            Some(index) => self.point(index).row as isize,
            None => UNSET_ROW,
        }
    }

    /// Appends a new furthest point and makes it the most recent one
    /// on its diagonal.
    pub(crate) fn set(&mut self, k: isize, point: FurthestPoint) -> PointIndex {
        optionally_unsafe! {
            invariant!(point.diagonal() == k);
        }
        let slot = self.slot(k);
        let index = PointIndex(self.points.len());
        self.points.push(point);
        optionally_unsafe! {
            invariant!(slot < self.diagonals.len());
        }
        let entry = &mut self.diagonals[slot]; // grcov-excl-br-line:ARRAY
        // A newer point always comes from a larger edit distance.
        debug_assert!(entry.map_or(true, |old| old < index));
        *entry = Some(index);
        index
    }

    /// Returns the furthest point at the given index.
    #[inline]
    pub(crate) fn point(&self, index: PointIndex) -> &FurthestPoint {
        optionally_unsafe! {
            invariant!(index.0 < self.points.len());
        }
        &self.points[index.0] // grcov-excl-br-line:ARRAY
    }
}
