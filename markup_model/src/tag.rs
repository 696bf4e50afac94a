// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How a [`MarkupTag`] participates in document structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// A paragraph-level unit: headings, paragraphs and custom blocks.
    Block,
    /// A wrapper around a run of list items.
    List,
    /// A list entry. Partitions the text like [`MarkupKind::Block`].
    ListItem,
    /// Character formatting confined to a single block.
    Inline,
    /// A zero-width point annotation such as a line break.
    SelfClosing,
}

/// The closed set of tags a [`Markup`](crate::Markup) can carry.
///
/// The string form of each tag is its lowercase name, e.g. `"h1"` or `"strong"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupTag {
    /// Level 1 heading.
    H1,
    /// Level 2 heading.
    H2,
    /// Level 3 heading.
    H3,
    /// Level 4 heading.
    H4,
    /// Level 5 heading.
    H5,
    /// Level 6 heading.
    H6,
    /// Paragraph.
    P,
    /// An opaque block whose content lives in the markup's data.
    Custom,
    /// Unordered list.
    Ul,
    /// Ordered list.
    Ol,
    /// List item.
    Li,
    /// Strong emphasis.
    Strong,
    /// Emphasis.
    Em,
    /// Underline.
    U,
    /// Strikethrough.
    S,
    /// Inline code.
    Code,
    /// Subscript.
    Sub,
    /// Superscript.
    Sup,
    /// Link. The target is carried in the markup's data.
    A,
    /// Line break.
    Br,
}

impl MarkupTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::P,
        Self::Custom,
        Self::Ul,
        Self::Ol,
        Self::Li,
        Self::Strong,
        Self::Em,
        Self::U,
        Self::S,
        Self::Code,
        Self::Sub,
        Self::Sup,
        Self::A,
        Self::Br,
    ];

    /// Returns the structural kind of this tag.
    #[must_use]
    pub const fn kind(self) -> MarkupKind {
        match self {
            Self::H1
            | Self::H2
            | Self::H3
            | Self::H4
            | Self::H5
            | Self::H6
            | Self::P
            | Self::Custom => MarkupKind::Block,
            Self::Ul | Self::Ol => MarkupKind::List,
            Self::Li => MarkupKind::ListItem,
            Self::Strong
            | Self::Em
            | Self::U
            | Self::S
            | Self::Code
            | Self::Sub
            | Self::Sup
            | Self::A => MarkupKind::Inline,
            Self::Br => MarkupKind::SelfClosing,
        }
    }

    /// Returns the lowercase tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Custom => "custom",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::Strong => "strong",
            Self::Em => "em",
            Self::U => "u",
            Self::S => "s",
            Self::Code => "code",
            Self::Sub => "sub",
            Self::Sup => "sup",
            Self::A => "a",
            Self::Br => "br",
        }
    }

    /// Whether this tag formats characters, including self-closing point markups.
    #[must_use]
    pub const fn is_inline(self) -> bool {
        matches!(self.kind(), MarkupKind::Inline | MarkupKind::SelfClosing)
    }

    /// Whether this tag can be the target of a block type change.
    #[must_use]
    pub const fn is_block_type(self) -> bool {
        matches!(self.kind(), MarkupKind::Block | MarkupKind::List)
    }
}

impl fmt::Display for MarkupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}
