// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind, MarkupTag, Selection, BLOCK_BREAK};

use crate::insert::{apply_overrides, splice};
use crate::lists::sanitize_lists;
use crate::order::{has_lists, sort};
use crate::State;

/// Parses plain clipboard text into paragraph and line break markups.
///
/// Blank lines (`"\n\n"`, taken left to right) separate paragraphs; every other newline is a
/// `br`. Offsets are relative to the start of `text`.
#[must_use]
pub fn parse_clipboard(text: &str) -> Vec<Markup> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut breaks = Vec::new();
    let mut block_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            if text[i..].starts_with(BLOCK_BREAK) {
                blocks.push(Markup::new(MarkupTag::P, block_start, i));
                i += BLOCK_BREAK.len();
                block_start = i;
                continue;
            }
            breaks.push(Markup::new(MarkupTag::Br, i, i));
        }
        i += 1;
    }
    blocks.push(Markup::new(MarkupTag::P, block_start, text.len()));
    blocks.extend(breaks);
    sort(&mut blocks);
    blocks
}

/// Pastes plain `text` over `from..to`.
///
/// The block receiving the paste is replaced by the pasted paragraphs. The first keeps the
/// receiving block's tag and starts where it started; the last ends where it ended. Inline
/// markups of the receiving block are clipped to the paragraphs they overlap. Pending
/// overrides apply to the pasted run.
#[must_use]
pub fn insert_from_clipboard(state: &State, text: &str, from: usize, to: usize) -> State {
    let text = text.replace("\r\n", "\n");
    let (document, markups) = splice(state, from, to, &text);
    let caret = Selection::caret(from + text.len());

    let Some(host_index) = markups
        .iter()
        .position(|m| m.is_block() && m.start <= from && m.end >= from)
    else {
        let next = State::assemble(document, markups, caret, Vec::new());
        return apply_overrides(state, next, from, from + text.len());
    };
    let host = markups[host_index].clone();

    let parsed = parse_clipboard(&text);
    let mut blocks: Vec<Markup> = parsed
        .iter()
        .filter(|m| m.is_block())
        .map(|m| Markup::new(MarkupTag::P, m.start + from, m.end + from))
        .collect();
    if let Some(first) = blocks.first_mut() {
        first.tag = host.tag;
        first.data.clone_from(&host.data);
        first.start = host.start;
    }
    if let Some(last) = blocks.last_mut() {
        last.end = host.end;
    }

    let mut out = Vec::with_capacity(markups.len() + parsed.len());
    let mut hosted = Vec::new();
    for (i, markup) in markups.into_iter().enumerate() {
        if i == host_index {
            continue;
        }
        if markup.is_inline() && markup.start >= host.start && markup.end <= host.end {
            hosted.push(markup);
        } else {
            out.push(markup);
        }
    }
    out.extend(
        parsed
            .iter()
            .filter(|m| m.is_self_closing())
            .map(|m| m.with_range(m.start + from, m.end + from)),
    );
    for markup in hosted {
        out.extend(blocks.iter().filter_map(|block| clip(&markup, block)));
    }
    out.extend(blocks);
    sort(&mut out);
    let out = if has_lists(&out) {
        sanitize_lists(out)
    } else {
        out
    };

    let next = State::assemble(document, out, caret, Vec::new());
    apply_overrides(state, next, from, from + text.len())
}

/// The part of `markup` inside `block`, if it keeps any width (or is a point inside it).
fn clip(markup: &Markup, block: &Markup) -> Option<Markup> {
    let start = markup.start.max(block.start);
    let end = markup.end.min(block.end);
    match markup.kind() {
        MarkupKind::SelfClosing if start == end => Some(markup.with_range(start, end)),
        _ if start < end => Some(markup.with_range(start, end)),
        _ => None,
    }
}
