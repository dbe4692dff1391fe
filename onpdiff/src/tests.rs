// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

//! Tests: [`crate`].

#![cfg(test)]

#[cfg(not(onpdiff_tests_without_debug_assertions))]
#[test]
fn test_prerequisites() {
    assert!(cfg!(debug_assertions), "\
        The tests in this crate require debug assertions to be enabled (by default).  \
        To test this crate without debug assertions, add rustc flags \"--cfg onpdiff_tests_without_debug_assertions\".\
    ");
}

#[test]
fn public_api() {
    use crate::{compare, edit_distance, try_compare, EditKind, EditSegment};

    let script = compare(3, 4, |l, r| l + 1 == r);
    assert_eq!(script, [
        EditSegment::new(EditKind::Inserted,  0, 0, 0, 1),
        EditSegment::new(EditKind::Identical, 0, 3, 1, 3),
    ]);
    assert_eq!(edit_distance(&script), 1);
    assert_eq!(try_compare(3, 4, |l, r| l + 1 == r), Ok(script));
}
