// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Markup, MarkupTag};

use crate::order::sort;

/// Clears `tag` from `from..to`, cutting or trimming the markups of that tag it overlaps.
///
/// Markups inside the range are removed, a markup spanning the range is cut in two, and a
/// markup overlapping one edge is trimmed back to that edge. Other tags are untouched.
#[must_use]
pub fn ingest_markups(markups: Vec<Markup>, tag: MarkupTag, from: usize, to: usize) -> Vec<Markup> {
    let mut out = Vec::with_capacity(markups.len() + 1);
    for mut markup in markups {
        if markup.tag != tag {
            out.push(markup);
            continue;
        }
        if markup.start >= from && markup.end <= to {
            continue;
        }
        if markup.start < from && markup.end > to {
            out.push(markup.with_range(to, markup.end));
            markup.end = from;
        } else if markup.start < from && markup.end > from {
            markup.end = from;
        } else if markup.start >= from && markup.start < to {
            markup.start = to;
        }
        out.push(markup);
    }
    sort(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use markup_model::{Markup, MarkupTag};

    use super::ingest_markups;

    fn m(tag: MarkupTag, start: usize, end: usize) -> Markup {
        Markup::new(tag, start, end)
    }

    #[test]
    fn excises_the_middle_of_a_markup() {
        let markups = vec![m(MarkupTag::P, 0, 18), m(MarkupTag::Strong, 6, 17)];
        assert_eq!(
            ingest_markups(markups, MarkupTag::Strong, 12, 14),
            vec![
                m(MarkupTag::P, 0, 18),
                m(MarkupTag::Strong, 6, 12),
                m(MarkupTag::Strong, 14, 17),
            ]
        );
    }

    #[test]
    fn trims_edges_and_drops_inner_markups() {
        let markups = vec![
            m(MarkupTag::P, 0, 30),
            m(MarkupTag::Em, 2, 8),
            m(MarkupTag::Em, 10, 12),
            m(MarkupTag::Strong, 10, 20),
            m(MarkupTag::Em, 14, 25),
        ];
        assert_eq!(
            ingest_markups(markups, MarkupTag::Em, 5, 20),
            vec![
                m(MarkupTag::P, 0, 30),
                m(MarkupTag::Em, 2, 5),
                m(MarkupTag::Strong, 10, 20),
                m(MarkupTag::Em, 20, 25),
            ]
        );
    }

    #[test]
    fn front_of_a_markup_is_consumed() {
        let markups = vec![m(MarkupTag::P, 0, 30), m(MarkupTag::U, 5, 25)];
        assert_eq!(
            ingest_markups(markups, MarkupTag::U, 5, 9),
            vec![m(MarkupTag::P, 0, 30), m(MarkupTag::U, 9, 25)]
        );
    }
}
