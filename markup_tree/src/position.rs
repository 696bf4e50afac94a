// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use markup_model::{Direction, Selection};

use crate::node::{NodeId, NodeTag, Tree};

/// A position inside one node of a [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Caret {
    /// The leaf holding the position.
    pub node: NodeId,
    /// Byte offset from the start of the leaf.
    pub offset: usize,
}

impl Tree {
    /// Finds the leaf holding document `offset`.
    ///
    /// An offset on the boundary of two leaves goes to the first one, except that the bare text
    /// between two blocks is only chosen for offsets strictly inside it. Self-closing nodes are
    /// skipped.
    #[must_use]
    pub fn locate(&self, offset: usize) -> Option<Caret> {
        let node = self.locate_in(self.root_id(), offset)?;
        Some(Caret {
            node,
            offset: offset - self[node].start,
        })
    }

    fn locate_in(&self, parent: NodeId, offset: usize) -> Option<NodeId> {
        let bare = self[parent].tag == NodeTag::Root;
        for &id in &self[parent].children {
            let node = &self[id];
            if node.start > offset {
                break;
            }
            if node.end < offset || node.is_self_closing() {
                continue;
            }
            if node.children.is_empty() {
                if bare && node.is_text() && node.end == offset {
                    continue;
                }
                return Some(id);
            }
            if let Some(found) = self.locate_in(id, offset) {
                return Some(found);
            }
        }
        None
    }

    /// Maps a position given as a node path plus an offset back to a document offset.
    ///
    /// Within a text leaf the offset counts bytes. Within any other node it counts children,
    /// so it resolves to the start of that child, or to the end of the node past its last child.
    /// A position in the bare text between two blocks moves forward to the start of the next
    /// block.
    #[must_use]
    pub fn resolve(&self, path: &[usize], offset: usize) -> Option<usize> {
        let node = &self[self.node_at(path)?];
        if !node.is_text() {
            if node.is_self_closing() {
                return Some(node.start);
            }
            return Some(
                node.children
                    .get(offset)
                    .map_or(node.end, |&child| self[child].start),
            );
        }
        let in_root = node
            .parent
            .is_some_and(|parent| self[parent].tag == NodeTag::Root);
        if in_root {
            return Some(node.end);
        }
        Some((node.start + offset).min(node.end))
    }

    /// The selection between two resolved positions.
    ///
    /// The direction is [`Direction::Rtl`] when `focus` precedes `anchor`, comparing paths
    /// first and offsets second.
    #[must_use]
    pub fn selection(&self, anchor: (&[usize], usize), focus: (&[usize], usize)) -> Option<Selection> {
        let from = self.resolve(anchor.0, anchor.1)?;
        let to = self.resolve(focus.0, focus.1)?;
        let rtl = focus.0 < anchor.0 || (focus.0 == anchor.0 && focus.1 < anchor.1);
        Some(if rtl {
            Selection::with_direction(to, from, Direction::Rtl)
        } else {
            Selection::new(from, to)
        })
    }
}
