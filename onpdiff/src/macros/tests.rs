// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

//! Tests: [`crate::macros`].

#![cfg(test)]

// grcov-excl-br-start

#[forbid(unsafe_code)]
#[cfg(not(onpdiff_tests_without_debug_assertions))]
#[test]
#[should_panic]
fn violation_invariant() {
    // On tests, an invariant is just a debug_assert,
    // that should work outside an unsafe block.
    super::invariant!(false);
}

#[test]
fn invariant_holds_inside_optionally_unsafe() {
    let table = [1u32, 2, 3];
    let slot = 2usize;
    let mut value = 0;
    super::optionally_unsafe! {
        super::invariant!(slot < table.len());
        value = table[slot];
    }
    assert_eq!(value, 3);
}

#[test]
fn trace_does_not_disturb_control_flow() {
    let mut visited = 0usize;
    for _ in 0..3 {
        super::trace!("visited={}", visited);
        visited += 1;
    }
    assert_eq!(visited, 3);
}

// grcov-excl-br-end
