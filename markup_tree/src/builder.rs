// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_model::{Markup, MarkupKind};

use crate::node::{NodeId, NodeTag, Tree};

/// A markup currently open on the builder's stack.
#[derive(Copy, Clone, Debug)]
struct Open {
    /// Position of the markup in document order.
    rank: usize,
    node: NodeId,
}

struct Builder<'a> {
    text: &'a str,
    /// Markups in document order.
    markups: Vec<&'a Markup>,
    tree: Tree,
    stack: Vec<Open>,
    leaf: Option<NodeId>,
}

impl Tree {
    /// Builds the tree of `text` annotated with `markups`.
    ///
    /// Markups may come in any order and may overlap without nesting; a markup interrupted by
    /// the end of a markup it was opened inside is continued by a new node right after it.
    /// Text not covered by any markup becomes a leaf of the root, e.g. the break between two
    /// blocks. A zero-width markup still gets a node, and a zero-width markup that is not
    /// self-closing gets one empty text leaf.
    ///
    /// Markups reaching past the end of `text` are ignored.
    #[must_use]
    pub fn build(text: &str, markups: &[Markup]) -> Self {
        let mut markups: Vec<&Markup> = markups
            .iter()
            .filter(|m| m.start <= m.end && m.end <= text.len())
            .collect();
        markups.sort_by(|a, b| a.document_cmp(b));

        let mut boundaries: Vec<usize> = Vec::with_capacity(2 + markups.len() * 2);
        boundaries.push(0);
        boundaries.push(text.len());
        for markup in &markups {
            boundaries.push(markup.start);
            boundaries.push(markup.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut builder = Builder {
            text,
            markups,
            tree: Self::with_root(text.len()),
            stack: Vec::new(),
            leaf: None,
        };
        let mut next = 0;
        for offset in boundaries {
            builder.close(offset, false);
            while let Some(markup) = builder.markups.get(next) {
                if markup.start != offset {
                    break;
                }
                builder.open(next, offset);
                next += 1;
            }
            builder.close(offset, true);
            if builder.leaf.is_none() && offset < text.len() {
                let parent = builder.parent();
                builder.leaf = Some(builder.tree.push(parent, NodeTag::Text, offset, offset));
            }
        }
        builder.seal_leaf(text.len());
        builder.tree
    }
}

impl Builder<'_> {
    fn parent(&self) -> NodeId {
        self.stack.last().map_or(NodeId::ROOT, |open| open.node)
    }

    fn open(&mut self, rank: usize, offset: usize) {
        self.seal_leaf(offset);
        let parent = self.parent();
        let markup = self.markups[rank];
        let node = self
            .tree
            .push(parent, NodeTag::Markup(markup.tag), offset, markup.end);
        self.stack.push(Open { rank, node });
    }

    /// Closes the open markups ending at `offset`, latest in document order first.
    ///
    /// With `zero_width` only markups that also start at `offset` are closed, otherwise only
    /// those that started before it. Markups popped on the way to a closing one are reopened
    /// afterwards, outermost first, unless they end here too.
    fn close(&mut self, offset: usize, zero_width: bool) {
        let mut targets: Vec<usize> = self
            .stack
            .iter()
            .map(|open| open.rank)
            .filter(|&rank| {
                let markup = self.markups[rank];
                markup.end == offset && (markup.start == offset) == zero_width
            })
            .collect();
        if targets.is_empty() {
            return;
        }
        targets.sort_unstable_by(|a, b| b.cmp(a));

        let mut reopen = Vec::new();
        for target in targets {
            let Some(depth) = self.stack.iter().position(|open| open.rank == target) else {
                // Already popped while closing a later markup.
                continue;
            };
            self.seal_leaf(offset);
            while self.stack.len() > depth {
                let Some(closed) = self.stack.pop() else {
                    break;
                };
                self.finish(closed.node, offset);
                if closed.rank != target && self.markups[closed.rank].end > offset {
                    reopen.push(closed.rank);
                }
            }
        }
        for rank in reopen.into_iter().rev() {
            self.open(rank, offset);
        }
    }

    fn finish(&mut self, id: NodeId, offset: usize) {
        let node = self.tree.node_mut(id);
        node.end = offset;
        let needs_leaf = node.start == offset
            && node.children.is_empty()
            && !matches!(node.tag, NodeTag::Markup(tag) if tag.kind() == MarkupKind::SelfClosing);
        if needs_leaf {
            self.tree.push(id, NodeTag::Text, offset, offset);
        }
    }

    fn seal_leaf(&mut self, offset: usize) {
        if let Some(id) = self.leaf.take() {
            let leaf = self.tree.node_mut(id);
            leaf.end = offset;
            leaf.text = self.text.get(leaf.start..offset).unwrap_or_default().into();
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use markup_model::{Markup, MarkupTag};

    use crate::{NodeTag, Tree};

    fn m(tag: MarkupTag, start: usize, end: usize) -> Markup {
        Markup::new(tag, start, end)
    }

    fn texts(tree: &Tree) -> Vec<&str> {
        tree.leaves().map(|id| tree[id].text.as_str()).collect()
    }

    #[test]
    fn single_paragraph() {
        let tree = Tree::build("Lorem ipsum dolor sit.", &[m(MarkupTag::P, 0, 22)]);
        let root = tree.root();
        assert_eq!(root.children.len(), 1);
        let p = &tree[root.children[0]];
        assert_eq!(p.tag, NodeTag::Markup(MarkupTag::P));
        assert_eq!((p.start, p.end), (0, 22));
        assert_eq!(p.children.len(), 1);
        let leaf = &tree[p.children[0]];
        assert!(leaf.is_text());
        assert_eq!((leaf.start, leaf.end), (0, 22));
        assert_eq!(leaf.text, "Lorem ipsum dolor sit.");
    }

    #[test]
    fn empty_block_gets_an_empty_leaf() {
        let tree = Tree::build("", &[m(MarkupTag::P, 0, 0)]);
        let p = &tree[tree.root().children[0]];
        assert_eq!(tree.root().children.len(), 1);
        assert_eq!(p.children.len(), 1);
        let leaf = &tree[p.children[0]];
        assert!(leaf.is_text());
        assert_eq!((leaf.start, leaf.end), (0, 0));
    }

    #[test]
    fn inline_over_an_empty_block() {
        let markups = [
            m(MarkupTag::P, 0, 18),
            m(MarkupTag::Em, 0, 18),
            m(MarkupTag::P, 19, 19),
            m(MarkupTag::Em, 19, 19),
            m(MarkupTag::P, 20, 29),
            m(MarkupTag::Em, 20, 29),
        ];
        let tree = Tree::build("Lorem ipsum dolor.\n\nSit amet.", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 5);
        for (i, &id) in root.children.iter().enumerate() {
            let node = &tree[id];
            if i % 2 == 1 {
                assert!(node.is_text());
                assert!(node.children.is_empty());
                continue;
            }
            assert_eq!(node.tag, NodeTag::Markup(MarkupTag::P));
            assert_eq!(node.children.len(), 1);
            let em = &tree[node.children[0]];
            assert_eq!(em.tag, NodeTag::Markup(MarkupTag::Em));
            assert_eq!((em.start, em.end), (node.start, node.end));
            assert_eq!(em.children.len(), 1);
            let leaf = &tree[em.children[0]];
            assert!(leaf.is_text());
            assert_eq!((leaf.start, leaf.end), (em.start, em.end));
        }
    }

    #[test]
    fn overlapping_inlines_are_split() {
        // <p>Lorem <strong>ip<em>sum</em></strong><em> do</em>lor.</p>
        let markups = [
            m(MarkupTag::P, 0, 18),
            m(MarkupTag::Strong, 6, 11),
            m(MarkupTag::Em, 8, 14),
        ];
        let tree = Tree::build("Lorem ipsum dolor.", &markups);
        let p = &tree[tree.root().children[0]];
        assert_eq!(p.children.len(), 4);

        let strong = &tree[p.children[1]];
        assert_eq!(strong.tag, NodeTag::Markup(MarkupTag::Strong));
        assert_eq!(tree[strong.children[0]].text, "ip");
        let inner = &tree[strong.children[1]];
        assert_eq!(inner.tag, NodeTag::Markup(MarkupTag::Em));
        assert_eq!(tree[inner.children[0]].text, "sum");

        let outer = &tree[p.children[2]];
        assert_eq!(outer.tag, NodeTag::Markup(MarkupTag::Em));
        assert_eq!((outer.start, outer.end), (11, 14));
        assert_eq!(outer.children.len(), 1);
        assert_eq!(tree[outer.children[0]].text, " do");

        assert_eq!(texts(&tree), ["Lorem ", "ip", "sum", " do", "lor."]);
    }

    #[test]
    fn abutting_inlines_stay_siblings() {
        let markups = [
            m(MarkupTag::P, 0, 11),
            m(MarkupTag::Strong, 0, 5),
            m(MarkupTag::Em, 5, 11),
        ];
        let tree = Tree::build("Lorem ipsum", &markups);
        let p = &tree[tree.root().children[0]];
        let tags: Vec<NodeTag> = p.children.iter().map(|&id| tree[id].tag).collect();
        assert_eq!(
            tags,
            [
                NodeTag::Markup(MarkupTag::Strong),
                NodeTag::Markup(MarkupTag::Em)
            ]
        );
    }

    #[test]
    fn break_between_blocks_is_bare_text() {
        let markups = [m(MarkupTag::P, 0, 9), m(MarkupTag::P, 11, 20)];
        let tree = Tree::build("Line one.\n\nLine two.", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 3);

        let first = &tree[root.children[0]];
        assert_eq!((first.start, first.end), (0, 9));
        assert_eq!(tree[first.children[0]].text, "Line one.");

        let gap = &tree[root.children[1]];
        assert!(gap.is_text());
        assert!(gap.children.is_empty());
        assert_eq!(gap.text, "\n\n");
        assert_eq!((gap.start, gap.end), (9, 11));

        let second = &tree[root.children[2]];
        assert_eq!((second.start, second.end), (11, 20));
        assert_eq!(tree[second.children[0]].text, "Line two.");
    }

    #[test]
    fn inline_spanning_several_blocks() {
        // <p>Line <b>one.</b></p> <p><b>Line two.</b></p> <p><b>Line</b> three.</p>
        let markups = [
            m(MarkupTag::P, 0, 9),
            m(MarkupTag::Strong, 4, 9),
            m(MarkupTag::P, 11, 20),
            m(MarkupTag::Strong, 11, 20),
            m(MarkupTag::P, 22, 33),
            m(MarkupTag::Strong, 22, 26),
        ];
        let tree = Tree::build("Line one.\n\nLine two.\n\nLine three.", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 5);
        let counts: Vec<usize> = [0, 2, 4]
            .iter()
            .map(|&i| tree[root.children[i]].children.len())
            .collect();
        assert_eq!(counts, [2, 1, 2]);
        let second = &tree[root.children[2]];
        let strong = &tree[second.children[0]];
        assert_eq!(strong.tag, NodeTag::Markup(MarkupTag::Strong));
        assert!(tree[strong.children[0]].is_text());
    }

    #[test]
    fn nested_inlines_over_blocks() {
        // <p>Line <b>one<i>.</i></b></p> <p><b><i>L</i>ine </b>two.</p>
        let markups = [
            m(MarkupTag::P, 0, 9),
            m(MarkupTag::Strong, 5, 9),
            m(MarkupTag::Em, 8, 9),
            m(MarkupTag::P, 11, 20),
            m(MarkupTag::Strong, 11, 16),
            m(MarkupTag::Em, 11, 12),
        ];
        let tree = Tree::build("Line one.\n\nLine two.", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 3);

        let first = &tree[root.children[0]];
        let strong = &tree[first.children[1]];
        assert_eq!(strong.tag, NodeTag::Markup(MarkupTag::Strong));
        assert_eq!(tree[strong.children[1]].tag, NodeTag::Markup(MarkupTag::Em));
        assert!(tree[root.children[1]].is_text());

        let second = &tree[root.children[2]];
        let strong = &tree[second.children[0]];
        assert_eq!(strong.tag, NodeTag::Markup(MarkupTag::Strong));
        assert_eq!(tree[strong.children[0]].tag, NodeTag::Markup(MarkupTag::Em));
        assert_eq!(texts(&tree), ["Line ", "one", ".", "\n\n", "L", "ine ", "two."]);
    }

    #[test]
    fn line_break_at_the_start_of_a_block() {
        let markups = [m(MarkupTag::P, 0, 10), m(MarkupTag::Br, 0, 0)];
        let tree = Tree::build("\nLine one.", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 1);
        let p = &tree[root.children[0]];
        assert_eq!(p.children.len(), 2);
        let br = &tree[p.children[0]];
        assert_eq!(br.tag, NodeTag::Markup(MarkupTag::Br));
        assert!(br.children.is_empty());
        assert!(br.is_self_closing());
        assert_eq!(tree[p.children[1]].text, "\nLine one.");
    }

    #[test]
    fn inline_inside_a_block() {
        // <p>Lin<em>e </em>one.</p>
        let markups = [m(MarkupTag::P, 0, 9), m(MarkupTag::Em, 3, 5)];
        let tree = Tree::build("Line one.", &markups);
        let p = &tree[tree.root().children[0]];
        let tags: Vec<NodeTag> = p.children.iter().map(|&id| tree[id].tag).collect();
        assert_eq!(
            tags,
            [NodeTag::Text, NodeTag::Markup(MarkupTag::Em), NodeTag::Text]
        );
    }

    #[test]
    fn lists_wrap_their_items() {
        let markups = [
            m(MarkupTag::Ul, 0, 10),
            m(MarkupTag::Li, 0, 3),
            m(MarkupTag::Li, 5, 10),
        ];
        let tree = Tree::build("one\n\nthree", &markups);
        let root = tree.root();
        assert_eq!(root.children.len(), 1);
        let ul = &tree[root.children[0]];
        let tags: Vec<NodeTag> = ul.children.iter().map(|&id| tree[id].tag).collect();
        assert_eq!(
            tags,
            [
                NodeTag::Markup(MarkupTag::Li),
                NodeTag::Text,
                NodeTag::Markup(MarkupTag::Li)
            ]
        );
    }

    #[test]
    fn markups_are_sorted_before_building() {
        let sorted = [m(MarkupTag::P, 0, 11), m(MarkupTag::Em, 6, 11)];
        let shuffled = [m(MarkupTag::Em, 6, 11), m(MarkupTag::P, 0, 11)];
        assert_eq!(
            Tree::build("Lorem ipsum", &sorted),
            Tree::build("Lorem ipsum", &shuffled)
        );
    }

    #[test]
    fn paths_follow_child_indices() {
        let markups = vec![
            m(MarkupTag::P, 0, 9),
            m(MarkupTag::Em, 5, 9),
            m(MarkupTag::P, 11, 20),
        ];
        let tree = Tree::build("Line one.\n\nLine two.", &markups);
        for (i, node) in tree.nodes().iter().enumerate() {
            let id = tree.node_at(&node.path).unwrap();
            assert_eq!(id.index(), i);
        }
        let em = tree.node_at(&[0, 1]).unwrap();
        assert_eq!(tree[em].tag, NodeTag::Markup(MarkupTag::Em));
        assert_eq!(tree.node_at(&[3]), None);
    }

    #[test]
    fn out_of_range_markups_are_ignored() {
        let tree = Tree::build("Lorem", &[m(MarkupTag::P, 0, 5), m(MarkupTag::Em, 3, 9)]);
        assert_eq!(texts(&tree), ["Lorem"]);
    }
}
