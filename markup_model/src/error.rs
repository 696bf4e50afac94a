// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

use crate::MarkupTag;

/// Errors raised when a caller hands the document crates malformed input.
///
/// These are programmer errors in whatever layer translates input into edits; a well-formed
/// caller never sees them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Provided range indices were out of bounds relative to the text length.
    #[error("range {start}..{end} out of bounds for len {len}")]
    InvalidBounds {
        /// The start byte index of the caller-provided range.
        start: usize,
        /// The end byte index of the caller-provided range.
        end: usize,
        /// The length in bytes of the text.
        len: usize,
    },

    /// The provided range had `start > end`.
    #[error("invalid range {start}..{end}: start > end")]
    InvalidRange {
        /// The start byte index of the caller-provided range.
        start: usize,
        /// The end byte index of the caller-provided range.
        end: usize,
    },

    /// Either endpoint was not aligned to a UTF-8 character boundary.
    #[error("range {start}..{end}: {which} index {index} not on UTF-8 boundary")]
    NotOnCharBoundary {
        /// The start byte index of the caller-provided range.
        start: usize,
        /// The end byte index of the caller-provided range.
        end: usize,
        /// Which endpoint failed.
        which: Endpoint,
        /// The offending byte index.
        index: usize,
    },

    /// An offset lies strictly inside the block break between two blocks.
    #[error("offset {index} lies between two blocks")]
    BetweenBlocks {
        /// The offending byte index.
        index: usize,
    },

    /// A tag name that does not name any [`MarkupTag`].
    #[error("unknown markup tag `{0}`")]
    UnknownTag(String),

    /// An inline-only operation was given a tag that is not inline.
    #[error("`{0}` is not an inline markup tag")]
    NotInline(MarkupTag),

    /// A block-only operation was given a tag that is neither a block nor a list.
    #[error("`{0}` is not a block or list markup tag")]
    NotBlock(MarkupTag),
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}
