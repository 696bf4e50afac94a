// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{MarkupKind, MarkupTag};

/// Opaque data attached to a markup, such as a link target.
pub type MarkupData = BTreeMap<String, String>;

/// A tagged, half-open byte range over a document's text.
///
/// Markups serialize as `[tag, start, end]`, or `[tag, start, end, data]` when data is present.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Markup {
    /// The tag.
    pub tag: MarkupTag,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Optional opaque payload.
    pub data: Option<MarkupData>,
}

impl Markup {
    /// Creates a markup without data.
    #[must_use]
    pub const fn new(tag: MarkupTag, start: usize, end: usize) -> Self {
        Self {
            tag,
            start,
            end,
            data: None,
        }
    }

    /// Returns this markup with `data` attached.
    #[must_use]
    pub fn with_data(mut self, data: MarkupData) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns this markup moved to `start..end`, keeping tag and data.
    #[must_use]
    pub fn with_range(&self, start: usize, end: usize) -> Self {
        Self {
            tag: self.tag,
            start,
            end,
            data: self.data.clone(),
        }
    }

    /// The structural kind of this markup's tag.
    #[must_use]
    pub const fn kind(&self) -> MarkupKind {
        self.tag.kind()
    }

    /// Whether this markup is one of the units partitioning the text (blocks and list items).
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self.kind(), MarkupKind::Block | MarkupKind::ListItem)
    }

    /// Whether this markup wraps list items.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind(), MarkupKind::List)
    }

    /// Whether this markup is a list item.
    #[must_use]
    pub const fn is_list_item(&self) -> bool {
        matches!(self.kind(), MarkupKind::ListItem)
    }

    /// Whether this markup formats characters. Includes self-closing markups.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.tag.is_inline()
    }

    /// Whether this markup is a zero-width point annotation.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        matches!(self.kind(), MarkupKind::SelfClosing)
    }

    /// Whether `start == end`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// The covered byte range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Document order: ascending start, then outer kinds before inner kinds, then longer
    /// before shorter.
    ///
    /// This is the order the tree builder expects, so that at a shared start offset a list
    /// opens before its first item, a block before its inline content and an inline run
    /// before a line break inside it.
    #[must_use]
    pub fn document_cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| nesting_rank(self.kind()).cmp(&nesting_rank(other.kind())))
            .then_with(|| other.end.cmp(&self.end))
    }
}

const fn nesting_rank(kind: MarkupKind) -> u8 {
    match kind {
        MarkupKind::List => 0,
        MarkupKind::Block | MarkupKind::ListItem => 1,
        MarkupKind::Inline => 2,
        MarkupKind::SelfClosing => 3,
    }
}

impl Serialize for Markup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.data.is_some() { 4 } else { 3 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&self.start)?;
        tuple.serialize_element(&self.end)?;
        if let Some(data) = &self.data {
            tuple.serialize_element(data)?;
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Markup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MarkupVisitor;

        impl<'de> Visitor<'de> for MarkupVisitor {
            type Value = Markup;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array [tag, start, end, data?]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Markup, A::Error> {
                let tag = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let start = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let end = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let data = seq.next_element::<Option<MarkupData>>()?.flatten();
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(5, &self));
                }
                Ok(Markup {
                    tag,
                    start,
                    end,
                    data,
                })
            }
        }

        deserializer.deserialize_seq(MarkupVisitor)
    }
}
