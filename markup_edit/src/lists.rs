// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Markup, MarkupTag};

use crate::order::insert_sorted;

/// Rebuilds list wrappers from the list items they hold.
///
/// Every run of consecutive list items of one kind gets exactly one wrapper spanning its first
/// to last item. Adjacent lists of the same kind merge, lists left without items disappear and
/// stray list items are wrapped.
#[must_use]
pub fn sanitize_lists(markups: Vec<Markup>) -> Vec<Markup> {
    regroup_lists(markups, |_| None)
}

/// Like [`sanitize_lists`], with `kind_of` choosing the list kind of selected items.
///
/// An item not chosen by `kind_of` keeps the kind of the wrapper holding its start, else the
/// kind of the item before it, else becomes part of an unordered list.
pub(crate) fn regroup_lists(
    markups: Vec<Markup>,
    kind_of: impl Fn(&Markup) -> Option<MarkupTag>,
) -> Vec<Markup> {
    let (wrappers, mut out): (Vec<Markup>, Vec<Markup>) =
        markups.into_iter().partition(Markup::is_list);

    let mut lists: Vec<Markup> = Vec::new();
    let mut open: Option<Markup> = None;
    for block in out.iter().filter(|m| m.is_block()) {
        if !block.is_list_item() {
            lists.extend(open.take());
            continue;
        }
        let container = wrappers
            .iter()
            .find(|w| w.start <= block.start && block.start <= w.end);
        let kind = kind_of(block)
            .or(container.map(|w| w.tag))
            .or(open.as_ref().map(|l| l.tag))
            .unwrap_or(MarkupTag::Ul);
        match &mut open {
            Some(list) if list.tag == kind => list.end = block.end,
            _ => {
                lists.extend(open.take());
                open = Some(Markup {
                    tag: kind,
                    start: block.start,
                    end: block.end,
                    data: container.and_then(|w| w.data.clone()),
                });
            }
        }
    }
    lists.extend(open);

    for list in lists {
        insert_sorted(&mut out, list);
    }
    out
}
