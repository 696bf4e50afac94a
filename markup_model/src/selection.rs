// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Which end of a [`Selection`] the user started from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The anchor is the start; the focus is the end.
    #[default]
    Ltr,
    /// The anchor is the end; the focus is the start.
    Rtl,
}

/// A selected byte range, or a caret when collapsed.
///
/// `from` and `to` may arrive in either order; range math goes through [`start`](Self::start)
/// and [`end`](Self::end).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// One endpoint.
    pub from: usize,
    /// The other endpoint.
    pub to: usize,
    /// Which side the anchor is on.
    pub direction: Direction,
}

impl Selection {
    /// A left-to-right selection of `from..to`.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            direction: Direction::Ltr,
        }
    }

    /// A selection with an explicit direction.
    #[must_use]
    pub const fn with_direction(from: usize, to: usize, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }

    /// A collapsed selection at `offset`.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn start(&self) -> usize {
        if self.from <= self.to {
            self.from
        } else {
            self.to
        }
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn end(&self) -> usize {
        if self.from <= self.to {
            self.to
        } else {
            self.from
        }
    }

    /// Where the selection was started.
    #[must_use]
    pub const fn anchor(&self) -> usize {
        match self.direction {
            Direction::Ltr => self.start(),
            Direction::Rtl => self.end(),
        }
    }

    /// Where the selection was extended to.
    #[must_use]
    pub const fn focus(&self) -> usize {
        match self.direction {
            Direction::Ltr => self.end(),
            Direction::Rtl => self.start(),
        }
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.from == self.to
    }

    /// The covered byte range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
