// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind};

/// Moves every markup so it tracks the replacement of `from..to` with `added` bytes.
///
/// Each markup is classified against the replaced range:
///
/// - **enveloped**: dropped, except that a block (or list) starting at `from` survives and
///   stretches over the inserted text, an inline starting at `from` survives a non-empty
///   replacement, and a line break sitting at `to` moves behind the insertion. A line break
///   at `from` of a non-empty range is removed.
/// - **containing**: its end shifts. An inline starting at a collapsed caret shifts entirely,
///   so text typed before a run is not swallowed by it.
/// - **after**: both ends shift.
/// - **straddling `from`**: an inline is cut at the end of the inserted text; a block absorbs
///   the block still covering `to`, which is removed.
/// - **straddling `to`**: starts at the end of the inserted text.
///
/// Inline markups left with zero width are removed. The result is in document order when the
/// input is.
#[must_use]
pub fn adjust_markups(markups: &[Markup], from: usize, to: usize, added: usize) -> Vec<Markup> {
    let collapsed = from == to;
    let inserted_end = from + added;
    // Only applied to offsets at or after `to`.
    let shift = |offset: usize| offset - to + inserted_end;

    let mut absorbed = vec![false; markups.len()];
    let mut out = Vec::with_capacity(markups.len());

    for (i, markup) in markups.iter().enumerate() {
        if absorbed[i] {
            continue;
        }
        let mut next = markup.clone();

        if markup.end < from {
            // Entirely before the edit.
        } else if markup.start >= from && markup.end <= to {
            let keeps_start = markup.is_block()
                || markup.is_list()
                || (markup.is_inline() && !markup.is_self_closing() && added > 0);
            if markup.is_self_closing() && markup.start == from && !collapsed {
                continue;
            } else if markup.is_self_closing() && markup.start == from {
                next.start = inserted_end;
                next.end = inserted_end;
            } else if markup.start == from && keeps_start {
                next.end = inserted_end;
                if markup.is_block() && !collapsed {
                    if let Some(closing) = closing_block(markups, i, to) {
                        next.end = shift(markups[closing].end);
                        absorbed[closing] = true;
                    }
                }
            } else if markup.is_self_closing() && markup.start == to {
                next.start = inserted_end;
                next.end = inserted_end;
            } else {
                continue;
            }
        } else if markup.start <= from && markup.end >= to {
            next.end = shift(markup.end);
            if collapsed && markup.start == from && markup.is_inline() {
                next.start = inserted_end;
            }
        } else if markup.start >= to {
            next.start = shift(markup.start);
            next.end = shift(markup.end);
        } else if markup.start < from {
            // Straddles `from`: ends inside the replaced range.
            next.end = inserted_end;
            if markup.is_block() {
                if let Some(closing) = closing_block(markups, i, to) {
                    next.end = shift(markups[closing].end);
                    absorbed[closing] = true;
                }
            }
        } else {
            // Straddles `to`: starts inside the replaced range.
            next.start = inserted_end;
            next.end = shift(markup.end);
        }

        if next.is_empty() && markup.kind() == MarkupKind::Inline {
            continue;
        }
        out.push(next);
    }
    out
}

/// The first block after `index` that still covers `to`.
fn closing_block(markups: &[Markup], index: usize, to: usize) -> Option<usize> {
    markups
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, m)| m.is_block() && m.start <= to && m.end >= to)
        .map(|(i, _)| i)
}
