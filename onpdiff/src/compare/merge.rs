// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 onpdiff developers.

use alloc::vec::Vec;

use crate::segment::{EditKind, EditSegment};




/// Returns the kind of the merged segment when a segment of the kind `next`
/// is merged into the preceding segment of the kind `last`.
///
/// Identical segments are never merged.
fn merged_kind(last: EditKind, next: EditKind) -> Option<EditKind> {
    match (last, next) {
        (EditKind::Inserted, EditKind::Inserted) => Some(EditKind::Inserted),
        (EditKind::Deleted,  EditKind::Deleted)  => Some(EditKind::Deleted),
        (EditKind::Inserted, EditKind::Deleted)
        | (EditKind::Deleted,  EditKind::Inserted)
        | (EditKind::Replaced, EditKind::Inserted)
        | (EditKind::Replaced, EditKind::Deleted) => Some(EditKind::Replaced),
        _ => None,
    }
}


/// Folds primitive segments (given in the reverse order) into
/// coalesced edit segments.
///
/// Only the most recently pushed segment is considered for merging.
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentMerger {
    /// Segments in the reverse order.
    segments: Vec<EditSegment>,
}

impl SegmentMerger {
    /// Creates an empty merger.
    pub(crate) fn new() -> Self {
        Self { segments: Vec::new() }
    }

    /// Pushes a segment which precedes all segments pushed so far.
    ///
    /// If `segment` immediately precedes the last segment on both sequences
    /// and their kinds allow, they are merged into one.
    pub(crate) fn push(&mut self, segment: EditSegment) {
        if let Some(last) = self.segments.last_mut() {
            if segment.precedes(last) {
                if let Some(kind) = merged_kind(last.kind(), segment.kind()) {
                    *last = EditSegment::new(
                        kind,
                        segment.left_start(),
                        last.left_count() + segment.left_count(),
                        segment.right_start(),
                        last.right_count() + segment.right_count(),
                    );
                    return;
                }
            }
        }
        self.segments.push(segment);
    }

    /// Returns merged segments in the forward order.
    pub(crate) fn into_segments(self) -> Vec<EditSegment> {
        let mut segments = self.segments;
        segments.reverse();
        segments
    }
}
