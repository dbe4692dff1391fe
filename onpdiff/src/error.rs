// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

use crate::macros::impl_error;




/// The operand (side) which caused a comparison error.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSide {
    /// The left hand side.
    Left,
    /// The right hand side.
    Right,
}

impl core::fmt::Display for CompareSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CompareSide::Left  => "left",
            CompareSide::Right => "right",
        })
    }
}


/// The error type for [`try_compare()`](crate::try_compare()).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// The length of the given operand is negative.
    InvalidArgument(CompareSide),

    /// Two sequences are too long to be compared.
    ///
    /// The comparison keeps one furthest point slot per diagonal
    /// (the sum of both lengths plus 3 slots) and each diagonal index
    /// must be representable as an [`isize`].
    LengthTooLarge,
}

impl CompareError {
    /// Returns which operand caused this error (if known).
    pub fn side(&self) -> Option<CompareSide> {
        match self {
            CompareError::InvalidArgument(side) => Some(*side),
            CompareError::LengthTooLarge => None,
        }
    }
}

impl core::fmt::Display for CompareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CompareError::InvalidArgument(side) => {
                write!(f, "the length of the {} sequence is negative", side)
            }
            CompareError::LengthTooLarge => {
                f.write_str("the sequences are too long to be compared")
            }
        }
    }
}

impl_error! { CompareError {} }
