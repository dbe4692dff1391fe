// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

//! Test utilities for [`crate::compare`](mod@crate::compare).

#![cfg(any(test, doc))]

/// Computes the edit distance between two given sequences.
///
/// Specifically, it computes the Longest Common Subsequence (LCS)
/// distance, allowing element addition and deletion as two primitive
/// operations (in cost 1).
///
/// This is a straightforward dynamic programming implementation
/// (`O(MN)` time and `O(N)` space) to check the optimality of
/// the edit script computed by [`compare()`](crate::compare()).
#[allow(dead_code)]
pub(crate) fn edit_distn<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    let mut row = std::vec::Vec::from_iter(0usize..=s2.len());
    for (i1, s1ch) in s1.iter().enumerate() {
        let mut prev_l = row[0];
        row[0] = i1 + 1;
        for (i2, s2ch) in s2.iter().enumerate() {
            let curr_l = row[i2];
            let prev_c = row[i2 + 1];
            // Costs of element addition and deletion
            let cost_a = curr_l + 1;
            let cost_d = prev_c + 1;
            // Replacement cost below: 2 for LCS distance
            let cost_r = prev_l + if s1ch == s2ch { 0 } else { 2 };
            prev_l = prev_c;
            row[i2 + 1] = cost_a.min(cost_d.min(cost_r));
        }
    }
    row[s2.len()]
}
