// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use markup_model::{Markup, Selection};
use markup_tree::{Caret, Tree};

/// The error type renderers report.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// The surface a [`StateManager`](crate::StateManager) keeps in sync with its current state.
pub trait Renderer {
    /// Shows a document.
    ///
    /// With `repaint` set to `false` the surface already shows this document, e.g. after an
    /// external mutation, and only the renderer's own model needs rebuilding.
    fn render(&mut self, text: &str, markups: &[Markup], repaint: bool) -> Result<(), RenderError>;

    /// Places the caret or selection after a render.
    fn position_caret(&mut self, selection: Selection) -> Result<(), RenderError>;

    /// The selection currently shown by the surface, if it has one of its own.
    ///
    /// Consulted by a selection change that carries no range.
    fn current_selection(&self) -> Option<Selection> {
        None
    }
}

/// A headless renderer that keeps the [`Tree`] of the last rendered document.
///
/// Hosts that draw through their own widget tree can use it as the model they mirror; a
/// pending selection picked by node paths is reported to the manager on the next selection
/// change.
#[derive(Clone, Debug, Default)]
pub struct TreeRenderer {
    tree: Option<Tree>,
    selection: Option<Selection>,
    caret: Option<(Caret, Caret)>,
    pending: Option<Selection>,
    renders: usize,
    repaints: usize,
}

impl TreeRenderer {
    /// A renderer that has not rendered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree of the last rendered document.
    #[must_use]
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// The last positioned selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The leaves holding the start and end of the last positioned selection.
    #[must_use]
    pub fn caret(&self) -> Option<(Caret, Caret)> {
        self.caret
    }

    /// How many times a document was rendered, and how many of those repainted.
    #[must_use]
    pub fn render_counts(&self) -> (usize, usize) {
        (self.renders, self.repaints)
    }

    /// Picks a selection by node path and offset, as a user would on the rendered surface.
    ///
    /// Returns the resolved selection, or `None` when nothing was rendered or a path does not
    /// exist.
    pub fn select(&mut self, anchor: (&[usize], usize), focus: (&[usize], usize)) -> Option<Selection> {
        let selection = self.tree.as_ref()?.selection(anchor, focus)?;
        self.pending = Some(selection);
        Some(selection)
    }
}

impl Renderer for TreeRenderer {
    fn render(&mut self, text: &str, markups: &[Markup], repaint: bool) -> Result<(), RenderError> {
        self.tree = Some(Tree::build(text, markups));
        self.pending = None;
        self.renders += 1;
        if repaint {
            self.repaints += 1;
        }
        Ok(())
    }

    fn position_caret(&mut self, selection: Selection) -> Result<(), RenderError> {
        let tree = self.tree.as_ref().ok_or("no document rendered")?;
        let from = tree.locate(selection.start());
        let to = tree.locate(selection.end());
        self.caret = from.zip(to);
        self.selection = Some(selection);
        Ok(())
    }

    fn current_selection(&self) -> Option<Selection> {
        self.pending.or(self.selection)
    }
}
