// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup Tree turns a flat document (text plus [`Markup`](markup_model::Markup) ranges) into a
//! properly nested tree, ready for a renderer to walk.
//!
//! Markup ranges may overlap without nesting, e.g. `strong` over `6..11` and `em` over `8..14`.
//! [`Tree::build`] splits such ranges so that every node lies inside its parent: the `em` above
//! becomes one node inside the `strong` and a second node after it.
//!
//! Every node records its path, the child indices leading to it from the root. A renderer that
//! mirrors the tree can use paths to go between its own nodes and document offsets; see
//! [`Tree::locate`] and [`Tree::resolve`].
//!
//! ## Example
//!
//! ```
//! use markup_model::{Markup, MarkupTag};
//! use markup_tree::{NodeTag, Tree};
//!
//! let markups = [
//!     Markup::new(MarkupTag::P, 0, 11),
//!     Markup::new(MarkupTag::Em, 6, 11),
//! ];
//! let tree = Tree::build("Lorem ipsum", &markups);
//! let p = tree.root().children[0];
//! assert_eq!(tree[p].tag, NodeTag::Markup(MarkupTag::P));
//! let leaves: Vec<&str> = tree.leaves().map(|id| tree[id].text.as_str()).collect();
//! assert_eq!(leaves, ["Lorem ", "ipsum"]);
//! ```
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

mod builder;
mod node;
mod position;

pub use crate::node::{Node, NodeId, NodePath, NodeTag, Tree};
pub use crate::position::Caret;
