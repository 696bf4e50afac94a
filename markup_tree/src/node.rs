// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, Range};

use markup_model::{MarkupKind, MarkupTag};
use smallvec::SmallVec;

/// Child indices leading from the root to a node.
pub type NodePath = SmallVec<[usize; 8]>;

/// Identifies a node within its [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    /// Position of the node in [`Tree::nodes`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a node stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// The single root node.
    Root,
    /// A text leaf.
    Text,
    /// A markup, or one piece of a markup split around another.
    Markup(MarkupTag),
}

/// A node of a [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// What the node stands for.
    pub tag: NodeTag,
    /// Offset of the first byte covered.
    pub start: usize,
    /// Offset after the last byte covered.
    pub end: usize,
    /// The covered text, for text leaves. Empty otherwise.
    pub text: String,
    /// Child indices from the root; the root's path is empty.
    pub path: NodePath,
    /// The parent, `None` for the root.
    pub parent: Option<NodeId>,
    /// The children, in document order.
    pub children: Vec<NodeId>,
}

impl Node {
    /// Whether this is a text leaf.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.tag == NodeTag::Text
    }

    /// Whether this node is a self-closing markup such as a line break.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        matches!(self.tag, NodeTag::Markup(tag) if tag.kind() == MarkupKind::SelfClosing)
    }

    /// Whether this node is a block or a list item.
    #[must_use]
    pub fn is_block(&self) -> bool {
        matches!(
            self.tag,
            NodeTag::Markup(tag) if matches!(tag.kind(), MarkupKind::Block | MarkupKind::ListItem)
        )
    }

    /// The covered byte range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the covered range in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the node covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A document as nested nodes, stored in an arena.
///
/// Nodes are stored in creation order, which is also document (pre-)order. The root is always
/// the first node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn with_root(len: usize) -> Self {
        Self {
            nodes: alloc::vec![Node {
                tag: NodeTag::Root,
                start: 0,
                end: len,
                text: String::new(),
                path: NodePath::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Appends a node as the last child of `parent`.
    pub(crate) fn push(&mut self, parent: NodeId, tag: NodeTag, start: usize, end: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut path = self.nodes[parent.0].path.clone();
        path.push(self.nodes[parent.0].children.len());
        self.nodes.push(Node {
            tag,
            start,
            end,
            text: String::new(),
            path,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Id of the root node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node with `id`, if it belongs to this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Every node, in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Ids of the text leaves, in document order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_text())
            .map(|(i, _)| NodeId(i))
    }

    /// The node reached by following `path` from the root.
    #[must_use]
    pub fn node_at(&self, path: &[usize]) -> Option<NodeId> {
        let mut id = NodeId::ROOT;
        for &index in path {
            id = *self.nodes[id.0].children.get(index)?;
        }
        Some(id)
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
