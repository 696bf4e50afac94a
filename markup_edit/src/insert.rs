// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use markup_model::{Markup, MarkupData, MarkupTag, Selection, BLOCK_BREAK, LINE_BREAK};

use crate::block::retag_block;
use crate::inline::{add_inline, remove_inline};
use crate::lists::sanitize_lists;
use crate::order::{block_at, has_lists};
use crate::{adjust_markups, join_markups, split_markups, State};

/// What [`insert`] puts in place of the replaced range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Content<'a> {
    /// Plain text. An empty string deletes the range.
    ///
    /// The text must not contain a block break; use
    /// [`insert_from_clipboard`](crate::insert_from_clipboard) for multi-paragraph text.
    Text(&'a str),
    /// A line break inside the current block.
    LineBreak,
    /// A block break, splitting the current block in two.
    BlockBreak,
}

impl Content<'_> {
    /// The text this content inserts.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::LineBreak => LINE_BREAK,
            Self::BlockBreak => BLOCK_BREAK,
        }
    }
}

/// Replaces `range` with `content`, moving every markup to track the edit.
///
/// The caret ends up after the inserted content. A block break splits the markups around it, a
/// line break adds a `br` markup, and a deletion joins the markups meeting at its edges. Text
/// insertion consumes pending overrides; breaks keep them.
#[must_use]
pub fn insert(state: &State, range: Selection, content: Content<'_>) -> State {
    let (from, to) = (range.start(), range.end());
    let (text, markups) = splice(state, from, to, content.as_str());
    let added = content.as_str().len();

    let mut overrides = Vec::new();
    let markups = match content {
        Content::BlockBreak => {
            let (markups, carried) = split_markups(markups, from);
            overrides.extend_from_slice(state.overrides());
            // A carried tag turns formatting on in the new block, so an override that was
            // turning it off cancels out.
            for tag in carried {
                match overrides.iter().position(|&t| t == tag) {
                    Some(at) => {
                        overrides.remove(at);
                    }
                    None => overrides.push(tag),
                }
            }
            markups
        }
        Content::LineBreak => {
            overrides.extend_from_slice(state.overrides());
            add_inline(markups, MarkupTag::Br, from, from, None)
        }
        // Both edges of a deletion meet at `from`.
        Content::Text("") => join_markups(markups, from),
        Content::Text(_) => markups,
    };
    let markups = if has_lists(&markups) {
        sanitize_lists(markups)
    } else {
        markups
    };

    let next = State::assemble(text, markups, Selection::caret(from + added), overrides);
    match content {
        Content::Text(inserted) if !inserted.is_empty() => {
            apply_overrides(state, next, from, from + added)
        }
        _ => next,
    }
}

/// Replaces `range` with plain `text`.
#[must_use]
pub fn insert_text(state: &State, range: Selection, text: &str) -> State {
    insert(state, range, Content::Text(text))
}

/// Replaces `range` with a line break.
#[must_use]
pub fn insert_line_break(state: &State, range: Selection) -> State {
    insert(state, range, Content::LineBreak)
}

/// Replaces `range` with a block break.
///
/// Breaking an empty list item instead turns it into a paragraph, ending the list there.
#[must_use]
pub fn insert_block_break(state: &State, range: Selection) -> State {
    if range.is_collapsed() {
        let at = range.start();
        let empty_item = block_at(state.markups(), at).filter(|&i| {
            let block = &state.markups()[i];
            block.is_list_item() && block.is_empty()
        });
        if let Some(item) = empty_item {
            let markups = sanitize_lists(retag_block(state.markups(), item, MarkupTag::P));
            return State::assemble(
                state.text().into(),
                markups,
                state.selection(),
                state.overrides().to_vec(),
            );
        }
    }
    insert(state, range, Content::BlockBreak)
}

/// Breaks the block at `range` and opens an empty `custom` block carrying `data` between the
/// two halves. The caret lands at the start of the block after it.
#[must_use]
pub fn insert_custom_block(state: &State, range: Selection, data: MarkupData) -> State {
    let broken = insert(state, range, Content::BlockBreak);
    let at = broken.selection().start();
    let opened = insert(&broken, Selection::caret(at), Content::BlockBreak);
    let markups = opened
        .markups()
        .iter()
        .map(|m| {
            if m.is_block() && m.start == at && m.is_empty() {
                Markup::new(MarkupTag::Custom, at, at).with_data(data.clone())
            } else {
                m.clone()
            }
        })
        .collect::<Vec<_>>();
    let markups = if has_lists(&markups) {
        sanitize_lists(markups)
    } else {
        markups
    };
    State::assemble(opened.text().into(), markups, opened.selection(), Vec::new())
}

/// Deletes forward from `range`.
///
/// A collapsed caret deletes the next character, or the following block break when it sits at
/// the end of a block. Returns `None` at the end of the text.
#[must_use]
pub fn delete(state: &State, range: Selection) -> Option<State> {
    if !range.is_collapsed() {
        return Some(insert(state, range, Content::Text("")));
    }
    let from = range.start();
    let text = state.text();
    let next_char = text.get(from..)?.chars().next()?;
    let ends_block = state
        .markups()
        .iter()
        .any(|m| m.is_block() && m.end == from);
    let to = if ends_block && text[from..].starts_with(BLOCK_BREAK) {
        from + BLOCK_BREAK.len()
    } else {
        from + next_char.len_utf8()
    };
    Some(insert(state, Selection::new(from, to), Content::Text("")))
}

/// Deletes backward from `range`.
///
/// A collapsed caret deletes the previous character, or the preceding block break when it sits
/// at the start of a block. Returns `None` at the start of the text.
#[must_use]
pub fn backspace(state: &State, range: Selection) -> Option<State> {
    if !range.is_collapsed() {
        return Some(insert(state, range, Content::Text("")));
    }
    let to = range.start();
    let text = state.text();
    let prev_char = text.get(..to)?.chars().next_back()?;
    let starts_block = state
        .markups()
        .iter()
        .any(|m| m.is_block() && m.start == to);
    let from = if starts_block && text[..to].ends_with(BLOCK_BREAK) {
        to - BLOCK_BREAK.len()
    } else {
        to - prev_char.len_utf8()
    };
    Some(insert(state, Selection::new(from, to), Content::Text("")))
}

/// Removes the selected text for a cut. Returns `None` for a collapsed range.
///
/// Reading the text for the clipboard is [`State::slice`].
#[must_use]
pub fn cut(state: &State, range: Selection) -> Option<State> {
    (!range.is_collapsed()).then(|| insert(state, range, Content::Text("")))
}

/// The text and adjusted markups after replacing `from..to` with `content`.
pub(crate) fn splice(state: &State, from: usize, to: usize, content: &str) -> (String, Vec<Markup>) {
    let source = state.text();
    let mut text = String::with_capacity(source.len() - (to - from) + content.len());
    text.push_str(&source[..from]);
    text.push_str(content);
    text.push_str(&source[to..]);
    let markups = adjust_markups(state.markups(), from, to, content.len());
    (text, markups)
}

/// Applies the overrides staged on `prev` to `from..to` of `next`.
///
/// A tag active in `prev` is removed from the run; any other tag is added.
pub(crate) fn apply_overrides(prev: &State, next: State, from: usize, to: usize) -> State {
    if prev.overrides().is_empty() {
        return next;
    }
    let mut markups = next.markups().to_vec();
    for &tag in prev.overrides() {
        markups = if prev.is_tag_active(tag) {
            remove_inline(markups, tag, from, to)
        } else {
            add_inline(markups, tag, from, to, None)
        };
    }
    State::assemble(next.text().into(), markups, next.selection(), Vec::new())
}
