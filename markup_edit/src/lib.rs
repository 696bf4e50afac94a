// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup Edit is the transformation engine for rich text documents built from
//! [`markup_model`] types.
//!
//! A [`State`] is an immutable snapshot: text, markups in document order, a selection and the
//! markups active at that selection. Every edit is a pure function taking a `&State` and
//! returning a new one; no function here mutates its input.
//!
//! - [`insert`] replaces a range with text, a line break or a block break, and keeps every
//!   markup tracking the edit. [`delete`], [`backspace`] and [`cut`] are deletions built on it.
//! - [`add_inline_markup`], [`remove_inline_markup`] and [`toggle_inline`] format text. A range
//!   spanning several blocks is applied block by block, so inline markups never cross a block
//!   boundary.
//! - [`change_block_type`] retags the selected blocks, creating or leaving lists as needed.
//! - [`insert_from_clipboard`] pastes plain text, turning blank lines into paragraphs.
//!
//! The markup-list primitives ([`adjust_markups`], [`split_markups`], [`join_markups`],
//! [`ingest_markups`], [`sanitize_lists`]) are exposed for callers building their own edits.
//!
//! ## Example
//!
//! ```
//! use markup_edit::{insert_text, State};
//! use markup_model::{Markup, MarkupTag, Selection, Value};
//!
//! let state = State::from_value(Value::new(
//!     "Lorem ipsum",
//!     vec![Markup::new(MarkupTag::P, 0, 11)],
//! ))
//! .unwrap();
//! let next = insert_text(&state, Selection::caret(5), "s");
//! assert_eq!(next.text(), "Lorems ipsum");
//! assert_eq!(next.markups(), &[Markup::new(MarkupTag::P, 0, 12)]);
//! assert_eq!(next.selection(), Selection::caret(6));
//! ```
//!
//! ## Offsets
//!
//! All offsets are byte offsets into the UTF-8 text. The engine expects ranges that lie inside
//! the text, on character boundaries, and not inside a block break; validating input ranges is
//! the caller's job (see [`markup_model::validate_range`] and [`State::validate_selection`]).
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod active;
mod adjust;
mod block;
mod clipboard;
mod ingest;
mod inline;
mod insert;
mod join;
mod lists;
mod order;
mod split;
mod state;

#[cfg(test)]
mod tests;

pub use crate::active::set_active_markups;
pub use crate::adjust::adjust_markups;
pub use crate::block::change_block_type;
pub use crate::clipboard::{insert_from_clipboard, parse_clipboard};
pub use crate::ingest::ingest_markups;
pub use crate::inline::{add_inline_markup, remove_inline_markup, toggle_inline};
pub use crate::insert::{
    backspace, cut, delete, insert, insert_block_break, insert_custom_block, insert_line_break,
    insert_text, Content,
};
pub use crate::join::join_markups;
pub use crate::lists::sanitize_lists;
pub use crate::split::split_markups;
pub use crate::state::{ActiveInlineMarkups, State};
