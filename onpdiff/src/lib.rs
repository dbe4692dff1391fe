// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

// Separate from README.md to use rustdoc-specific features in _docs/readme.md.
#![doc = include_str!("_docs/readme.md")]
// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// Regular nightly features
#![cfg_attr(feature = "unstable", feature(doc_cfg))]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
// unsafe code is *only* allowed on enabling the "unsafe" feature or on the
// tests.
#![cfg_attr(not(any(feature = "unsafe", test)), forbid(unsafe_code))]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: allow unused unsafe blocks (invariant! does will not need unsafe
// on tests but others may need this macro).
#![cfg_attr(test, allow(unused_unsafe))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]
// Tests: obvious 1 * n like operations should be allowed.
#![cfg_attr(test, allow(clippy::identity_op))]

// The edit script is always returned as a Vec.
extern crate alloc;

mod compare;
mod compare_easy;
mod error;
mod macros;
mod segment;
mod test_utils;

pub use compare::{compare, try_compare};
#[cfg(feature = "easy-functions")]
pub use compare_easy::{compare_chars, compare_slices};
pub use error::{CompareError, CompareSide};
pub use segment::{edit_distance, EditKind, EditSegment};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use static_assertions::const_assert;

    // We expect that usize is at least 16 bits in width.
    const_assert!(usize::BITS >= 16);

    // Diagonals are signed and share the width of lengths.
    const_assert!(core::mem::size_of::<isize>() == core::mem::size_of::<usize>());
}

mod tests;
