// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers for keeping markup lists in document order.

use alloc::vec::Vec;
use core::cmp::Ordering;

use markup_model::Markup;

/// Inserts `markup` after every markup that sorts at or before it.
pub(crate) fn insert_sorted(markups: &mut Vec<Markup>, markup: Markup) {
    let at = markups.partition_point(|m| m.document_cmp(&markup) != Ordering::Greater);
    markups.insert(at, markup);
}

pub(crate) fn sort(markups: &mut [Markup]) {
    markups.sort_by(Markup::document_cmp);
}

pub(crate) fn has_lists(markups: &[Markup]) -> bool {
    markups.iter().any(|m| m.is_list() || m.is_list_item())
}

/// Index of the first block (or list item) covering `offset`, ends included.
pub(crate) fn block_at(markups: &[Markup], offset: usize) -> Option<usize> {
    markups
        .iter()
        .position(|m| m.is_block() && m.start <= offset && offset <= m.end)
}
