// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.
// grcov-excl-br-start

#![cfg(test)]

use super::{FurthestPoint, FurthestPoints, PointIndex, UNSET_ROW};
use crate::test_utils::{cover_auto_clone, cover_auto_debug};


#[test]
fn empty_storage() {
    for m in 0..5usize {
        for n in m..8usize {
            let fp = FurthestPoints::new(m, n);
            cover_auto_clone(&fp);
            cover_auto_debug(&fp);
            assert_eq!(fp.diagonals.len(), m + n + 3, "failed on m={}, n={}", m, n);
            assert!(fp.points.is_empty(), "failed on m={}, n={}", m, n);
            // All diagonals in -(m+1)..=(n+1) are addressable and unset.
            for k in -(m as isize + 1)..=(n as isize + 1) {
                assert_eq!(fp.get(k), None, "failed on m={}, n={}, k={}", m, n, k);
                assert_eq!(fp.row(k), UNSET_ROW, "failed on m={}, n={}, k={}", m, n, k);
            }
        }
    }
}

#[test]
fn unset_row_behaves_as_row_minus_one() {
    // "down" move from an unset diagonal reaches the row 0.
    assert_eq!(UNSET_ROW + 1, 0);
    // Any set row wins against an unset one on the "right" move.
    assert!(0 > UNSET_ROW);
}

#[cfg(not(onpdiff_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn out_of_range_diagonal_lower() {
    let fp = FurthestPoints::new(2, 3);
    let _ = fp.get(-4);
}

#[cfg(not(onpdiff_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn out_of_range_diagonal_upper() {
    let fp = FurthestPoints::new(2, 3);
    let _ = fp.get(5);
}

#[test]
fn set_and_get() {
    let mut fp = FurthestPoints::new(3, 5);
    let first = fp.set(0, FurthestPoint { row: 2, column: 2, prev: None });
    assert_eq!(first, PointIndex(0));
    assert_eq!(fp.get(0), Some(first));
    assert_eq!(fp.row(0), 2);
    assert_eq!(fp.get(1), None);
    let second = fp.set(1, FurthestPoint { row: 3, column: 2, prev: Some(first) });
    assert_eq!(second, PointIndex(1));
    assert!(first < second);
    assert_eq!(fp.row(1), 3);
    assert_eq!(fp.point(second).prev, Some(first));
    assert_eq!(fp.point(second).diagonal(), 1);
    let third = fp.set(-1, FurthestPoint { row: 2, column: 3, prev: Some(first) });
    assert_eq!(fp.row(-1), 2);
    assert_eq!(fp.point(third).diagonal(), -1);
    // Replace the point on the diagonal 0 (the old one is kept in the arena).
    let fourth = fp.set(0, FurthestPoint { row: 3, column: 3, prev: Some(third) });
    assert_eq!(fp.get(0), Some(fourth));
    assert_eq!(fp.row(0), 3);
    assert_eq!(*fp.point(first), FurthestPoint { row: 2, column: 2, prev: None });
    assert_eq!(fp.points.len(), 4);
}

#[test]
fn boundary_diagonals() {
    let (m, n) = (2usize, 4usize);
    let mut fp = FurthestPoints::new(m, n);
    let lower = -(m as isize + 1);
    let upper = n as isize + 1;
    fp.set(lower, FurthestPoint { row: 0, column: m + 1, prev: None });
    fp.set(upper, FurthestPoint { row: n + 1, column: 0, prev: None });
    assert_eq!(fp.row(lower), 0);
    assert_eq!(fp.row(upper), n as isize + 1);
    assert_eq!(fp.diagonals.first(), Some(&Some(PointIndex(0))));
    assert_eq!(fp.diagonals.last(), Some(&Some(PointIndex(1))));
}

#[cfg(not(onpdiff_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn set_on_wrong_diagonal() {
    let mut fp = FurthestPoints::new(2, 3);
    fp.set(1, FurthestPoint { row: 1, column: 1, prev: None });
}
