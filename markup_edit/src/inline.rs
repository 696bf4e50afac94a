// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Error, Markup, MarkupData, MarkupKind, MarkupTag, Selection};

use crate::active::Activation;
use crate::order::insert_sorted;
use crate::{ingest_markups, join_markups, State};

/// Formats `from..to` with `tag`, merging with touching markups of the same tag.
///
/// A range spanning several blocks is formatted block by block.
pub fn add_inline_markup(
    state: &State,
    tag: MarkupTag,
    from: usize,
    to: usize,
    data: Option<MarkupData>,
) -> Result<State, Error> {
    ensure_inline(tag)?;
    let markups = add_inline(state.markups().to_vec(), tag, from, to, data.as_ref());
    Ok(State::assemble(
        state.text().into(),
        markups,
        state.selection(),
        Vec::new(),
    ))
}

/// Clears `tag` from `from..to`.
pub fn remove_inline_markup(
    state: &State,
    tag: MarkupTag,
    from: usize,
    to: usize,
) -> Result<State, Error> {
    ensure_inline(tag)?;
    let markups = remove_inline(state.markups().to_vec(), tag, from, to);
    Ok(State::assemble(
        state.text().into(),
        markups,
        state.selection(),
        Vec::new(),
    ))
}

/// Toggles `tag` over `range`.
///
/// On a collapsed range nothing is formatted yet: `tag` is staged as an override (or
/// unstaged) for the next inserted text. Otherwise `tag` is removed when it already covers the
/// whole range and added when it does not. Line breaks cannot be toggled.
pub fn toggle_inline(
    state: &State,
    tag: MarkupTag,
    range: Selection,
    data: Option<MarkupData>,
) -> Result<State, Error> {
    if tag.kind() != MarkupKind::Inline {
        return Err(Error::NotInline(tag));
    }
    if range.is_collapsed() {
        let mut overrides = state.overrides().to_vec();
        match overrides.iter().position(|&t| t == tag) {
            Some(at) => {
                overrides.remove(at);
            }
            None => overrides.push(tag),
        }
        return Ok(State::assemble(
            state.text().into(),
            state.markups().to_vec(),
            state.selection(),
            overrides,
        ));
    }

    let activation = Activation::scan(state.markups(), range);
    let active = activation
        .inline
        .iter()
        .any(|&i| state.markups()[i].tag == tag);
    let (from, to) = (range.start(), range.end());
    let markups = if active {
        remove_inline(state.markups().to_vec(), tag, from, to)
    } else {
        add_inline(state.markups().to_vec(), tag, from, to, data.as_ref())
    };
    Ok(State::assemble(state.text().into(), markups, range, Vec::new()))
}

fn ensure_inline(tag: MarkupTag) -> Result<(), Error> {
    if tag.is_inline() {
        Ok(())
    } else {
        Err(Error::NotInline(tag))
    }
}

pub(crate) fn add_inline(
    markups: Vec<Markup>,
    tag: MarkupTag,
    from: usize,
    to: usize,
    data: Option<&MarkupData>,
) -> Vec<Markup> {
    per_block(markups, tag, from, to, |markups, from, to| {
        let mut markups = ingest_markups(markups, tag, from, to);
        insert_sorted(
            &mut markups,
            Markup {
                tag,
                start: from,
                end: to,
                data: data.cloned(),
            },
        );
        let markups = join_markups(markups, from);
        join_markups(markups, to)
    })
}

pub(crate) fn remove_inline(
    markups: Vec<Markup>,
    tag: MarkupTag,
    from: usize,
    to: usize,
) -> Vec<Markup> {
    per_block(markups, tag, from, to, |markups, from, to| {
        ingest_markups(markups, tag, from, to)
    })
}

/// Runs `apply` once per block overlapping `from..to`, clipped to that block.
///
/// Clipped ranges that come out empty are skipped unless `tag` is self-closing. A range
/// overlapping no block, such as a bare block break, changes nothing.
fn per_block(
    mut markups: Vec<Markup>,
    tag: MarkupTag,
    from: usize,
    to: usize,
    mut apply: impl FnMut(Vec<Markup>, usize, usize) -> Vec<Markup>,
) -> Vec<Markup> {
    let blocks: Vec<(usize, usize)> = Activation::scan(&markups, Selection::new(from, to))
        .enveloped
        .iter()
        .map(|&i| (markups[i].start, markups[i].end))
        .collect();
    let point = tag.kind() == MarkupKind::SelfClosing;
    for (start, end) in blocks {
        let (from, to) = (from.max(start), to.min(end));
        if from < to || (point && from == to) {
            markups = apply(markups, from, to);
        }
    }
    markups
}
