// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup History drives an editing session: it applies [`Action`]s to the current
//! [`State`](markup_edit::State), keeps an undo history of the results and has a [`Renderer`]
//! show whatever is current.
//!
//! Rapid typing or deleting does not flood the history. Such edits are merged into the current
//! entry until a short window passes without one, or until the edit direction changes (typing
//! after deleting). A longer backup interval caps how much merged typing a single undo can
//! remove. [`HistoryConfig`] sets both durations and the history limit, and a [`Clock`] tells
//! the time, so tests can use a [`ManualClock`].
//!
//! ## Example
//!
//! ```
//! use markup_history::{Action, HistoryConfig, StateManager, TreeRenderer};
//! use markup_model::{Selection, Value};
//!
//! let mut manager =
//!     StateManager::new(Value::new("Lorem", vec![]), TreeRenderer::new(), &HistoryConfig::default())
//!         .unwrap();
//! manager.apply_action(Action::select(Selection::caret(5))).unwrap();
//! manager.apply_action(Action::insert_text(" ipsum")).unwrap();
//! assert_eq!(manager.state().text(), "Lorem ipsum");
//!
//! manager.apply_action(Action::Undo).unwrap();
//! assert_eq!(manager.state().text(), "Lorem");
//! ```
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

mod action;
mod clock;
mod config;
mod error;
mod history;
mod manager;
mod policy;
mod renderer;


pub use crate::action::{Action, ActionType, SelectionOrigin};
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::config::HistoryConfig;
pub use crate::error::Error;
pub use crate::history::History;
pub use crate::manager::StateManager;
pub use crate::policy::{decide, Decision, Manipulation};
pub use crate::renderer::{RenderError, Renderer, TreeRenderer};
