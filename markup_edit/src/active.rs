// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind, MarkupTag, Selection};

use crate::State;

/// Markups active at a selection, as indices into the scanned markup list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Activation {
    pub(crate) inline: Vec<usize>,
    pub(crate) block: Option<usize>,
    pub(crate) list: Option<usize>,
    pub(crate) enveloped: Vec<usize>,
}

impl Activation {
    /// Scans `markups` once, left to right.
    ///
    /// An inline tag is active when markups of that tag cover the whole selection. Abutting
    /// runs of the same tag in consecutive blocks count as one run: each is parked in a
    /// per-tag list until a later run reaches the selection end, or a gap drops the list.
    pub(crate) fn scan(markups: &[Markup], selection: Selection) -> Self {
        let (from, to) = (selection.start(), selection.end());
        let mut activation = Self::default();
        let mut consecutive: BTreeMap<MarkupTag, Vec<usize>> = BTreeMap::new();
        let mut parent_block: Option<&Markup> = None;

        for (i, markup) in markups.iter().enumerate() {
            let formatting = markup.kind() == MarkupKind::Inline;
            let continues_run = consecutive.get(&markup.tag).is_some_and(|run| !run.is_empty());

            if markup.start <= from && markup.end >= from {
                if markup.is_block() {
                    activation.block.get_or_insert(i);
                } else if markup.is_list() {
                    activation.list = Some(i);
                } else if formatting && markup.end >= to {
                    activation.inline.push(i);
                } else if formatting && parent_block.is_some_and(|block| markup.end == block.end) {
                    consecutive.entry(markup.tag).or_default().push(i);
                    continue;
                }
            }

            if formatting {
                let joins_run = continues_run
                    && parent_block.is_some_and(|block| {
                        markup.start == block.start && (markup.end >= to || markup.end == block.end)
                    });
                if joins_run {
                    let run = consecutive.entry(markup.tag).or_default();
                    run.push(i);
                    if to <= markup.end {
                        activation.inline.append(run);
                    }
                } else {
                    consecutive.remove(&markup.tag);
                }
                continue;
            }

            if !markup.is_block() {
                continue;
            }
            parent_block = Some(markup);
            if overlaps(markup, from, to) {
                activation.enveloped.push(i);
            }
        }

        activation.inline.sort_unstable();
        activation.inline.dedup();
        activation
    }
}

fn overlaps(block: &Markup, from: usize, to: usize) -> bool {
    (from >= block.start && from < block.end)
        || (to > block.start && to <= block.end)
        || (from <= block.start && to >= block.end)
}

/// Returns `state` with its selection set to `selection` and the active markups recomputed.
///
/// Pending overrides are kept; see [`State::with_selection`] for the variant used when the
/// caret is moved.
#[must_use]
pub fn set_active_markups(state: &State, selection: Selection) -> State {
    State::assemble(
        state.text().into(),
        state.markups().to_vec(),
        selection,
        state.overrides().to_vec(),
    )
}
