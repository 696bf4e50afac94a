// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error};

/// Checks that `range` is ordered, inside `text` and on UTF-8 boundaries.
#[inline]
pub fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    let (start, end) = (range.start, range.end);
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    if start > len || end > len {
        return Err(Error::InvalidBounds { start, end, len });
    }
    for (which, index) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !text.is_char_boundary(index) {
            return Err(Error::NotOnCharBoundary {
                start,
                end,
                which,
                index,
            });
        }
    }
    Ok(())
}
