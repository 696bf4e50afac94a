// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind, MarkupTag, BLOCK_BREAK};

use crate::order::insert_sorted;

/// Cuts every markup spanning `split` in two around a block break inserted there.
///
/// Call this after [`adjust_markups`](crate::adjust_markups) has made room for the break. The
/// first half ends at `split`; the second half starts after the break, with the same tag and
/// data. Exceptions:
///
/// - a block ending right after the break was split at its end, so the new block is a fresh
///   paragraph,
/// - list wrappers are left whole, as the break already grew them,
/// - an inline half that would be empty is dropped. Its tag is returned so the caller can
///   stage it as an override and keep the formatting going in the new block.
#[must_use]
pub fn split_markups(markups: Vec<Markup>, split: usize) -> (Vec<Markup>, Vec<MarkupTag>) {
    let new_start = split + BLOCK_BREAK.len();
    let mut out = Vec::with_capacity(markups.len() + 2);
    let mut siblings = Vec::new();
    let mut carried = Vec::new();

    for mut markup in markups {
        if markup.is_list() || markup.start > split || markup.end <= split {
            out.push(markup);
            continue;
        }

        let end = markup.end;
        let fresh = markup.kind() == MarkupKind::Block && end == new_start;
        let sibling = if fresh {
            Markup::new(MarkupTag::P, new_start, end)
        } else {
            markup.with_range(new_start, end.max(new_start))
        };
        markup.end = split;

        if sibling.kind() == MarkupKind::Inline && sibling.is_empty() {
            if sibling.data.is_none() && !carried.contains(&sibling.tag) {
                carried.push(sibling.tag);
            }
        } else {
            siblings.push(sibling);
        }

        if !(markup.kind() == MarkupKind::Inline && markup.is_empty()) {
            out.push(markup);
        }
    }

    for sibling in siblings {
        insert_sorted(&mut out, sibling);
    }
    (out, carried)
}
