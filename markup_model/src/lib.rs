// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup Model holds the data types shared by the rich text crates in this workspace.
//!
//! A document is a flat UTF-8 string plus an ordered list of [`Markup`]s: tagged, half-open
//! byte ranges over that string. A markup's [`MarkupKind`] is a pure function of its
//! [`MarkupTag`] and decides how the editing and tree building crates treat it:
//!
//! - block markups (`p`, headings, custom blocks) and list items partition the text,
//!   separated by [`BLOCK_BREAK`],
//! - list markups wrap runs of list items,
//! - inline markups format characters inside a single block,
//! - self-closing markups mark a point, such as a line break.
//!
//! [`Value`] is the persisted form of a document, serialized as
//! `{ "text": ..., "markups": [[tag, start, end, data?], ...] }`.
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

mod error;
mod markup;
mod range;
mod selection;
mod tag;
mod value;

pub use crate::error::{Endpoint, Error};
pub use crate::markup::{Markup, MarkupData};
pub use crate::range::validate_range;
pub use crate::selection::{Direction, Selection};
pub use crate::tag::{MarkupKind, MarkupTag};
pub use crate::value::Value;

/// The text separating two consecutive blocks.
pub const BLOCK_BREAK: &str = "\n\n";

/// The text inserted for a line break inside a block.
pub const LINE_BREAK: &str = "\n";
