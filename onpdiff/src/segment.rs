// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

use core::ops::Range;




/// The kind of an [`EditSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Both sides contain the same elements.
    Identical,
    /// Elements only exist on the right side.
    Inserted,
    /// Elements only exist on the left side.
    Deleted,
    /// Elements on the left side are replaced with ones on the right side.
    Replaced,
}

impl EditKind {
    /// Returns the kind seen from the opposite direction.
    ///
    /// [`Inserted`](Self::Inserted) and [`Deleted`](Self::Deleted) are
    /// swapped and other kinds are kept as is.
    pub const fn mirrored(self) -> Self {
        match self {
            EditKind::Inserted => EditKind::Deleted,
            EditKind::Deleted  => EditKind::Inserted,
            other => other,
        }
    }
}

impl core::fmt::Display for EditKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            EditKind::Identical => "identical",
            EditKind::Inserted  => "inserted",
            EditKind::Deleted   => "deleted",
            EditKind::Replaced  => "replaced",
        })
    }
}


/// A segment of an edit script.
///
/// Each segment covers `left_count` elements of the left sequence starting
/// at `left_start` and `right_count` elements of the right sequence starting
/// at `right_start`.
///
/// # Shape
///
/// Segments returned by [`compare()`](crate::compare()) always satisfy:
///
/// | Kind                              | Left count | Right count        |
/// | --------------------------------- | ---------- | ------------------ |
/// | [`Identical`](EditKind::Identical) | `n >= 1`  | `n` (same as left) |
/// | [`Inserted`](EditKind::Inserted)   | `0`       | `>= 1`             |
/// | [`Deleted`](EditKind::Deleted)     | `>= 1`    | `0`                |
/// | [`Replaced`](EditKind::Replaced)   | `>= 1`    | `>= 1`             |
///
/// and a script is a gapless partition of both sequences: the end of each
/// segment is the start of the next one on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditSegment {
    /// The kind of this segment.
    kind: EditKind,
    /// The start index in the left sequence.
    left_start: usize,
    /// The number of elements in the left sequence.
    left_count: usize,
    /// The start index in the right sequence.
    right_start: usize,
    /// The number of elements in the right sequence.
    right_count: usize,
}

impl EditSegment {
    /// Creates a new segment.
    pub const fn new(
        kind: EditKind,
        left_start: usize,
        left_count: usize,
        right_start: usize,
        right_count: usize,
    ) -> Self {
        Self { kind, left_start, left_count, right_start, right_count }
    }

    /// The kind of this segment.
    #[inline]
    pub const fn kind(&self) -> EditKind { self.kind }
    /// The start index in the left sequence.
    #[inline]
    pub const fn left_start(&self) -> usize { self.left_start }
    /// The number of covered elements in the left sequence.
    #[inline]
    pub const fn left_count(&self) -> usize { self.left_count }
    /// The start index in the right sequence.
    #[inline]
    pub const fn right_start(&self) -> usize { self.right_start }
    /// The number of covered elements in the right sequence.
    #[inline]
    pub const fn right_count(&self) -> usize { self.right_count }

    /// The end index (exclusive) in the left sequence.
    #[inline]
    pub const fn left_end(&self) -> usize { self.left_start + self.left_count }
    /// The end index (exclusive) in the right sequence.
    #[inline]
    pub const fn right_end(&self) -> usize { self.right_start + self.right_count }

    /// The covered index range of the left sequence.
    #[inline]
    pub const fn left_range(&self) -> Range<usize> { self.left_start..self.left_end() }
    /// The covered index range of the right sequence.
    #[inline]
    pub const fn right_range(&self) -> Range<usize> { self.right_start..self.right_end() }

    /// Returns whether this segment is [`Identical`](EditKind::Identical).
    #[inline]
    pub fn is_identical(&self) -> bool { self.kind == EditKind::Identical }

    /// Returns the same segment seen from the opposite direction.
    ///
    /// Left and right sides are swapped and the kind is
    /// [mirrored](EditKind::mirrored()).  Comparing two sequences with
    /// different lengths in the reverse order yields the mirrored segments
    /// of the original comparison.
    pub const fn mirrored(&self) -> Self {
        Self::new(
            self.kind.mirrored(),
            self.right_start,
            self.right_count,
            self.left_start,
            self.left_count,
        )
    }

    /// Checks whether `self` immediately precedes `next` on both sequences.
    #[inline]
    pub(crate) fn precedes(&self, next: &EditSegment) -> bool {
        self.left_end() == next.left_start && self.right_end() == next.right_start
    }
}


/// Computes the edit distance represented by an edit script.
///
/// This is the number of single element insertions and deletions
/// (a replaced segment counts elements of both sides).
///
/// For scripts returned by [`compare()`](crate::compare()), this is
/// the minimum number of such operations to transform the left sequence
/// into the right one.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "easy-functions")]
/// # {
/// let script = onp::compare_chars("abcd", "acbd");
/// assert_eq!(onp::edit_distance(&script), 2);
/// # }
/// ```
pub fn edit_distance(segments: &[EditSegment]) -> usize {
    segments
        .iter()
        .filter(|segment| !segment.is_identical())
        .map(|segment| segment.left_count + segment.right_count)
        .sum()
}
