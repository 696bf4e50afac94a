// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind};

use crate::order::sort;

/// Merges markups that meet at `index`.
///
/// A block closing at `index` absorbs the block opening there; an inline closing at `index`
/// absorbs an inline of the same tag and data opening there. Absorbed markups are removed and
/// the result is put back in document order.
#[must_use]
pub fn join_markups(markups: Vec<Markup>, index: usize) -> Vec<Markup> {
    let mut out: Vec<Markup> = Vec::with_capacity(markups.len());
    let mut closing_block = None;
    let mut closing_inlines = BTreeMap::new();
    let mut merged = false;

    for markup in markups {
        if markup.end == index && !markup.is_empty() {
            if markup.is_block() {
                closing_block = Some(out.len());
            } else if markup.kind() == MarkupKind::Inline {
                closing_inlines.insert(markup.tag, out.len());
            }
        } else if markup.start == index {
            let target = if markup.is_block() {
                closing_block.take()
            } else if markup.kind() == MarkupKind::Inline {
                closing_inlines
                    .get(&markup.tag)
                    .copied()
                    .filter(|&t| out[t].data == markup.data)
            } else {
                None
            };
            if let Some(target) = target {
                out[target].end = markup.end;
                merged = true;
                if markup.kind() == MarkupKind::Inline {
                    closing_inlines.remove(&markup.tag);
                }
                continue;
            }
        }
        out.push(markup);
    }
    if merged {
        sort(&mut out);
    }
    out
}
