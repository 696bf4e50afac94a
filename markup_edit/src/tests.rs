// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end edit sequences over whole states.

use alloc::vec;
use alloc::vec::Vec;

use markup_model::{Markup, MarkupTag, Selection, Value};

use crate::{
    backspace, change_block_type, delete, insert, insert_block_break, insert_from_clipboard,
    insert_text, remove_inline_markup, set_active_markups, Content, State,
};

fn m(tag: MarkupTag, start: usize, end: usize) -> Markup {
    Markup::new(tag, start, end)
}

fn state(text: &str, markups: Vec<Markup>) -> State {
    State::from_value(Value::new(text, markups)).unwrap()
}

#[test]
fn typing_a_character() {
    let s = state("Lorem ipsum", vec![m(MarkupTag::P, 0, 11)]);
    let next = insert(&s, Selection::caret(5), Content::Text("s"));
    assert_eq!(next.text(), "Lorems ipsum");
    assert_eq!(next.markups(), &[m(MarkupTag::P, 0, 12)]);
}

#[test]
fn replacing_a_range_pulls_inline_markups_back() {
    let s = state(
        "Lorem ipsum.",
        vec![m(MarkupTag::P, 0, 12), m(MarkupTag::Strong, 6, 11)],
    );
    let next = insert(&s, Selection::new(3, 6), Content::Text("f"));
    assert_eq!(next.text(), "Lorfipsum.");
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::P, 0, 10), m(MarkupTag::Strong, 4, 9)]
    );
}

#[test]
fn block_break_over_a_space() {
    let s = state("Lorem ipsum dolor. Sit amet.", vec![m(MarkupTag::P, 0, 28)]);
    let next = insert(&s, Selection::new(18, 19), Content::BlockBreak);
    assert_eq!(next.text(), "Lorem ipsum dolor.\n\nSit amet.");
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::P, 0, 18), m(MarkupTag::P, 20, 29)]
    );
    assert_eq!(next.selection(), Selection::caret(20));
}

#[test]
fn removing_the_middle_of_an_inline_splits_it() {
    let s = state(
        "Lorem ipsum dolor.",
        vec![m(MarkupTag::P, 0, 18), m(MarkupTag::Strong, 6, 17)],
    );
    let next = remove_inline_markup(&s, MarkupTag::Strong, 12, 14).unwrap();
    assert_eq!(
        next.markups(),
        &[
            m(MarkupTag::P, 0, 18),
            m(MarkupTag::Strong, 6, 12),
            m(MarkupTag::Strong, 14, 17),
        ]
    );
}

#[test]
fn pasting_two_paragraphs_into_an_empty_document() {
    let s = state("", vec![m(MarkupTag::P, 0, 0)]);
    let next = insert_from_clipboard(&s, "A\n\nB", 0, 0);
    assert_eq!(next.text(), "A\n\nB");
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::P, 0, 1), m(MarkupTag::P, 3, 4)]
    );
}

#[test]
fn deleting_a_block_break_merges_paragraphs() {
    let s = state(
        "Lorem ipsum dolor.\n\nSit amet.",
        vec![m(MarkupTag::P, 0, 18), m(MarkupTag::P, 20, 29)],
    );
    let next = insert(&s, Selection::new(18, 20), Content::Text(""));
    assert_eq!(next.text(), "Lorem ipsum dolor.Sit amet.");
    assert_eq!(next.markups(), &[m(MarkupTag::P, 0, 27)]);
}

#[test]
fn deleting_across_blocks_keeps_formatting_of_both() {
    let s = state(
        "Lorem ipsum dolor.\n\nSit amet.",
        vec![
            m(MarkupTag::P, 0, 18),
            m(MarkupTag::Em, 6, 11),
            m(MarkupTag::P, 20, 29),
            m(MarkupTag::Strong, 24, 28),
        ],
    );
    let next = insert(&s, Selection::new(11, 22), Content::Text(""));
    assert_eq!(next.text(), "Lorem ipsumt amet.");
    assert_eq!(
        next.markups(),
        &[
            m(MarkupTag::P, 0, 18),
            m(MarkupTag::Em, 6, 11),
            m(MarkupTag::Strong, 13, 17),
        ]
    );
}

#[test]
fn typing_replaces_a_whole_inline_run() {
    let s = state(
        "Lorem ipsum dolor.",
        vec![m(MarkupTag::P, 0, 18), m(MarkupTag::Strong, 6, 11)],
    );
    let next = insert(&s, Selection::new(6, 11), Content::Text("dolor"));
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::P, 0, 18), m(MarkupTag::Strong, 6, 11)]
    );
}

#[test]
fn writing_a_short_list() {
    let s = state("", vec![]);
    let s = change_block_type(&s, MarkupTag::Ol).unwrap();
    let s = insert_text(&s, Selection::caret(0), "one");
    let s = insert_block_break(&s, s.selection());
    let s = insert_text(&s, s.selection(), "two");
    let s = insert_block_break(&s, s.selection());
    // Breaking the empty third item leaves the list.
    let s = insert_block_break(&s, s.selection());
    assert_eq!(s.text(), "one\n\ntwo\n\n");
    assert_eq!(
        s.markups(),
        &[
            m(MarkupTag::Ol, 0, 8),
            m(MarkupTag::Li, 0, 3),
            m(MarkupTag::Li, 5, 8),
            m(MarkupTag::P, 10, 10),
        ]
    );
    assert_eq!(s.active_block_markup(), Some(&m(MarkupTag::P, 10, 10)));
    assert_eq!(s.active_list_markup(), None);
}

#[test]
fn backspacing_an_empty_paragraph_returns_to_the_list() {
    let s = state(
        "one\n\n",
        vec![
            m(MarkupTag::Ul, 0, 3),
            m(MarkupTag::Li, 0, 3),
            m(MarkupTag::P, 5, 5),
        ],
    );
    let next = backspace(&s, Selection::caret(5)).unwrap();
    assert_eq!(next.text(), "one");
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::Ul, 0, 3), m(MarkupTag::Li, 0, 3)]
    );
    assert_eq!(next.selection(), Selection::caret(3));
}

#[test]
fn forward_delete_of_a_selection_across_list_items() {
    let s = state(
        "one\n\ntwo\n\nthree",
        vec![
            m(MarkupTag::Ul, 0, 15),
            m(MarkupTag::Li, 0, 3),
            m(MarkupTag::Li, 5, 8),
            m(MarkupTag::Li, 10, 15),
        ],
    );
    let next = delete(&s, Selection::new(2, 12)).unwrap();
    assert_eq!(next.text(), "onree");
    assert_eq!(
        next.markups(),
        &[m(MarkupTag::Ul, 0, 5), m(MarkupTag::Li, 0, 5)]
    );
}

#[test]
fn active_markups_follow_the_selection() {
    let s = state(
        "Lorem ipsum dolor.\n\nSit amet.",
        vec![
            m(MarkupTag::H1, 0, 18),
            m(MarkupTag::Em, 0, 18),
            m(MarkupTag::P, 20, 29),
            m(MarkupTag::Em, 20, 29),
        ],
    );
    let across = set_active_markups(&s, Selection::new(4, 24));
    assert!(across.is_tag_active(MarkupTag::Em));
    assert_eq!(across.active_block_markup(), Some(&m(MarkupTag::H1, 0, 18)));
    assert_eq!(across.enveloped_block_markups().count(), 2);

    let again = set_active_markups(&across, Selection::new(4, 24));
    assert_eq!(again, across);
}
