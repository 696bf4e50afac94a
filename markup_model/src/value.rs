// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::Markup;

/// The persisted form of a document.
///
/// ```
/// use markup_model::{Markup, MarkupTag, Value};
///
/// let value: Value = serde_json::from_str(
///     r#"{"text":"Lorem ipsum.","markups":[["p",0,12],["strong",6,11]]}"#,
/// )
/// .unwrap();
/// assert_eq!(value.markups[1], Markup::new(MarkupTag::Strong, 6, 11));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// The document text.
    pub text: String,
    /// The markups, in document order.
    #[serde(default)]
    pub markups: Vec<Markup>,
}

impl Value {
    /// Creates a value from its parts.
    #[must_use]
    pub fn new(text: impl Into<String>, markups: Vec<Markup>) -> Self {
        Self {
            text: text.into(),
            markups,
        }
    }
}
