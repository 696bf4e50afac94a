// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Error, Markup, MarkupKind, MarkupTag};

use crate::lists::regroup_lists;
use crate::State;

/// Retags every block overlapping the selection.
///
/// `tag` is a block tag or a list tag. With a list tag the blocks become list items of that
/// kind, joining neighbouring lists of the same kind; with a block tag any list items among
/// them leave their list, which is split around them as needed.
pub fn change_block_type(state: &State, tag: MarkupTag) -> Result<State, Error> {
    if !tag.is_block_type() {
        return Err(Error::NotBlock(tag));
    }
    let targets = state.enveloped_block_indices();
    let (item_tag, list_tag) = match tag.kind() {
        MarkupKind::List => (MarkupTag::Li, Some(tag)),
        _ => (tag, None),
    };

    let starts: Vec<usize> = targets.iter().map(|&i| state.markups()[i].start).collect();
    let markups = state
        .markups()
        .iter()
        .enumerate()
        .map(|(i, markup)| {
            if targets.contains(&i) && markup.tag != item_tag {
                Markup::new(item_tag, markup.start, markup.end)
            } else {
                markup.clone()
            }
        })
        .collect();
    let markups = regroup_lists(markups, |block| {
        list_tag.filter(|_| starts.contains(&block.start))
    });

    Ok(State::assemble(
        state.text().into(),
        markups,
        state.selection(),
        state.overrides().to_vec(),
    ))
}

pub(crate) fn retag_block(markups: &[Markup], index: usize, tag: MarkupTag) -> Vec<Markup> {
    let mut markups = markups.to_vec();
    markups[index] = Markup::new(tag, markups[index].start, markups[index].end);
    markups
}
