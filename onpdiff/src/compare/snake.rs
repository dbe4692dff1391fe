// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

use crate::compare::Comparator;
use crate::compare::furthest_points::{FurthestPoint, PointIndex};
use crate::macros::{invariant, optionally_unsafe};




impl<F> Comparator<F>
where
    F: FnMut(usize, usize) -> bool,
{
    /// Computes the next furthest point on the diagonal `k`.
    ///
    /// It starts from the better one of:
    ///
    /// *   one row below the furthest point on the diagonal `k-1`
    ///     ("down" move, consuming an element of the longer sequence) and
    /// *   one column right of the furthest point on the diagonal `k+1`
    ///     ("right" move, consuming an element of the shorter sequence),
    ///
    /// preferring the "right" move on a tie.  Then it follows the "snake",
    /// the run of matching elements along the diagonal.
    ///
    /// An unset diagonal `k-1` reports the row 0 as its "down" candidate,
    /// which may tie with a real furthest point on `k+1`.  Taking the "down"
    /// move there would start a path from nowhere.
    ///
    /// The new point is stored on the diagonal `k` with a reference to
    /// the point it started from.
    pub(super) fn snake(&mut self, k: isize) -> PointIndex {
        let row_down = self.fp.row(k - 1) + 1;
        let row_right = self.fp.row(k + 1);
        let (row, prev) = if row_down > row_right {
            (row_down, self.fp.get(k - 1))
        } else {
            (row_right, self.fp.get(k + 1))
        };
        // row_down is never negative.
        optionally_unsafe! {
            invariant!(row >= 0);
            invariant!(row - k >= 0);
        }
        let mut row = row as usize;
        let mut column = (row as isize - k) as usize;
        let (m, n) = (self.orientation.m, self.orientation.n);
        while column < m && row < n && self.is_equal_at(row, column) {
            row += 1;
            column += 1;
        }
        optionally_unsafe! {
            invariant!(column <= m);
            invariant!(row <= n);
        }
        self.fp.set(k, FurthestPoint { row, column, prev })
    }
}
