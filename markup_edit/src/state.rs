// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use markup_model::{validate_range, Error, Markup, MarkupTag, Selection, Value};

use crate::active::Activation;
use crate::order::{insert_sorted, sort};

/// An immutable snapshot of a document and its selection.
///
/// States are produced by [`State::from_value`] and by the transformation functions of this
/// crate; there is no way to mutate one in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    text: String,
    markups: Vec<Markup>,
    selection: Selection,
    active_inline_markups: ActiveInlineMarkups,
    active_block_markup: Option<usize>,
    active_list_markup: Option<usize>,
    enveloped_block_markups: Vec<usize>,
}

/// The inline markups covering a state's whole selection, plus staged overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveInlineMarkups {
    markups: Vec<usize>,
    tags: Vec<MarkupTag>,
    overrides: Vec<MarkupTag>,
}

impl ActiveInlineMarkups {
    /// Indices into [`State::markups`] of the active inline markups.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.markups
    }

    /// The distinct active tags, in document order of first appearance.
    #[must_use]
    pub fn tags(&self) -> &[MarkupTag] {
        &self.tags
    }

    /// Whether markups of `tag` cover the whole selection.
    #[must_use]
    pub fn is_tag_active(&self, tag: MarkupTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Tags toggled at a collapsed caret, waiting for the next inserted text.
    #[must_use]
    pub fn overrides(&self) -> &[MarkupTag] {
        &self.overrides
    }

    /// Whether `tag` is currently staged as an override.
    #[must_use]
    pub fn is_overridden(&self, tag: MarkupTag) -> bool {
        self.overrides.contains(&tag)
    }
}

impl State {
    /// Builds the initial state of a document with the caret at the start.
    ///
    /// Markups are validated against the text and put in document order. A paragraph covering
    /// the whole text is added when `value` contains no block markup.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let Value { text, mut markups } = value;
        for markup in &markups {
            validate_range(&text, &markup.range())?;
        }
        sort(&mut markups);
        if !markups.iter().any(Markup::is_block) {
            insert_sorted(&mut markups, Markup::new(MarkupTag::P, 0, text.len()));
        }
        Ok(Self::assemble(text, markups, Selection::caret(0), Vec::new()))
    }

    /// Builds a state and derives its active markups for `selection`.
    pub(crate) fn assemble(
        text: String,
        markups: Vec<Markup>,
        selection: Selection,
        overrides: Vec<MarkupTag>,
    ) -> Self {
        let activation = Activation::scan(&markups, selection);
        let mut tags = Vec::new();
        for &i in &activation.inline {
            if !tags.contains(&markups[i].tag) {
                tags.push(markups[i].tag);
            }
        }
        Self {
            text,
            markups,
            selection,
            active_inline_markups: ActiveInlineMarkups {
                markups: activation.inline,
                tags,
                overrides,
            },
            active_block_markup: activation.block,
            active_list_markup: activation.list,
            enveloped_block_markups: activation.enveloped,
        }
    }

    /// Checks that `selection` can be handed to the edits of this crate.
    ///
    /// Besides [`validate_range`], both ends must lie inside a block or on its edge, not
    /// within the block break separating two blocks.
    pub fn validate_selection(&self, selection: Selection) -> Result<(), Error> {
        validate_range(&self.text, &selection.range())?;
        for index in [selection.start(), selection.end()] {
            let in_block = self
                .markups
                .iter()
                .any(|m| m.is_block() && m.start <= index && index <= m.end);
            if !in_block {
                return Err(Error::BetweenBlocks { index });
            }
        }
        Ok(())
    }

    /// The persisted form of this state.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::new(self.text.clone(), self.markups.clone())
    }

    /// Returns this state with the caret moved to `selection`.
    ///
    /// Moving the caret discards pending overrides.
    #[must_use]
    pub fn with_selection(&self, selection: Selection) -> Self {
        Self::assemble(self.text.clone(), self.markups.clone(), selection, Vec::new())
    }

    /// The document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The markups, in document order.
    #[must_use]
    pub fn markups(&self) -> &[Markup] {
        &self.markups
    }

    /// The selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The text covered by `selection`, e.g. for placing on a clipboard.
    #[must_use]
    pub fn slice(&self, selection: Selection) -> Option<&str> {
        self.text.get(selection.range())
    }

    /// The inline markups active at the selection.
    #[must_use]
    pub fn active_inline_markups(&self) -> &ActiveInlineMarkups {
        &self.active_inline_markups
    }

    /// The block (or list item) holding the start of the selection.
    #[must_use]
    pub fn active_block_markup(&self) -> Option<&Markup> {
        self.active_block_markup.map(|i| &self.markups[i])
    }

    /// The list wrapping the start of the selection, if any.
    #[must_use]
    pub fn active_list_markup(&self) -> Option<&Markup> {
        self.active_list_markup.map(|i| &self.markups[i])
    }

    /// Every block overlapping the selection, even partially.
    pub fn enveloped_block_markups(&self) -> impl Iterator<Item = &Markup> + '_ {
        self.enveloped_block_markups.iter().map(|&i| &self.markups[i])
    }

    pub(crate) fn enveloped_block_indices(&self) -> &[usize] {
        &self.enveloped_block_markups
    }

    /// Whether markups of `tag` cover the whole selection.
    #[must_use]
    pub fn is_tag_active(&self, tag: MarkupTag) -> bool {
        self.active_inline_markups.is_tag_active(tag)
    }

    /// Staged overrides; shorthand for `active_inline_markups().overrides()`.
    #[must_use]
    pub fn overrides(&self) -> &[MarkupTag] {
        self.active_inline_markups.overrides()
    }
}
