// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use markup_model::{MarkupData, MarkupTag, Selection, Value};

/// What caused a selection change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionOrigin {
    /// Keyboard navigation, e.g. arrow keys.
    Keyboard,
    /// A pointer click or drag.
    Pointer,
    /// Set by the host application.
    #[default]
    Programmatic,
}

/// An edit or navigation request for a [`StateManager`](crate::StateManager).
///
/// A `range` of `None` means the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Types `text` over `range`.
    InsertText {
        /// The typed text.
        text: String,
        /// Where to type.
        range: Option<Selection>,
    },
    /// Inserts a line break inside the current block.
    InsertLineBreak {
        /// Where to break.
        range: Option<Selection>,
    },
    /// Splits the current block.
    InsertBlockBreak {
        /// Where to break.
        range: Option<Selection>,
    },
    /// Opens an empty `custom` block carrying `data`.
    InsertCustomBlock {
        /// Host data for the block, e.g. an embed's source.
        data: MarkupData,
        /// Where to open the block.
        range: Option<Selection>,
    },
    /// Deletes backward.
    Backspace {
        /// What to delete, or the caret to delete from.
        range: Option<Selection>,
    },
    /// Deletes forward.
    Delete {
        /// What to delete, or the caret to delete from.
        range: Option<Selection>,
    },
    /// Toggles an inline markup, or stages it at a collapsed caret.
    ToggleInlineMarkup {
        /// The inline tag.
        tag: MarkupTag,
        /// Data for the added markup, e.g. a link target.
        data: Option<MarkupData>,
        /// What to format.
        range: Option<Selection>,
    },
    /// Retags the selected blocks.
    ChangeBlockType {
        /// A block or list tag.
        tag: MarkupTag,
        /// Which blocks to retag.
        range: Option<Selection>,
    },
    /// Moves the selection.
    SetSelection {
        /// What moved it.
        origin: SelectionOrigin,
        /// The new selection; `None` asks the renderer for its live selection.
        range: Option<Selection>,
    },
    /// Replaces the whole document.
    ReplaceValue {
        /// The new document.
        value: Value,
    },
    /// Removes the selected text for the clipboard.
    Cut {
        /// What to cut.
        range: Option<Selection>,
    },
    /// Copies the selection. Never changes the document.
    Copy {
        /// What to copy.
        range: Option<Selection>,
    },
    /// Pastes plain text.
    Paste {
        /// The clipboard text.
        text: String,
        /// Where to paste.
        range: Option<Selection>,
    },
    /// Records a document the rendering surface already shows, e.g. after a spell checker
    /// edited it. The renderer rebuilds without repainting.
    MutateExternally {
        /// The document as shown.
        value: Value,
        /// The selection as shown.
        selection: Selection,
    },
    /// Steps back in the history.
    Undo,
    /// Steps forward in the history.
    Redo,
}

impl Action {
    /// The kind of this action.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::InsertText { .. } => ActionType::InsertText,
            Self::InsertLineBreak { .. } => ActionType::InsertLineBreak,
            Self::InsertBlockBreak { .. } => ActionType::InsertBlockBreak,
            Self::InsertCustomBlock { .. } => ActionType::InsertCustomBlock,
            Self::Backspace { .. } => ActionType::Backspace,
            Self::Delete { .. } => ActionType::Delete,
            Self::ToggleInlineMarkup { .. } => ActionType::ToggleInlineMarkup,
            Self::ChangeBlockType { .. } => ActionType::ChangeBlockType,
            Self::SetSelection { .. } => ActionType::SetSelection,
            Self::ReplaceValue { .. } => ActionType::ReplaceValue,
            Self::Cut { .. } => ActionType::Cut,
            Self::Copy { .. } => ActionType::Copy,
            Self::Paste { .. } => ActionType::Paste,
            Self::MutateExternally { .. } => ActionType::MutateExternally,
            Self::Undo => ActionType::Undo,
            Self::Redo => ActionType::Redo,
        }
    }

    /// The explicit range of this action, if it takes one and has one.
    #[must_use]
    pub fn range(&self) -> Option<Selection> {
        match self {
            Self::InsertText { range, .. }
            | Self::InsertLineBreak { range }
            | Self::InsertBlockBreak { range }
            | Self::InsertCustomBlock { range, .. }
            | Self::Backspace { range }
            | Self::Delete { range }
            | Self::ToggleInlineMarkup { range, .. }
            | Self::ChangeBlockType { range, .. }
            | Self::SetSelection { range, .. }
            | Self::Cut { range }
            | Self::Copy { range }
            | Self::Paste { range, .. } => *range,
            Self::ReplaceValue { .. } | Self::MutateExternally { .. } | Self::Undo | Self::Redo => {
                None
            }
        }
    }

    /// Types `text` at the current selection.
    #[must_use]
    pub fn insert_text(text: impl Into<String>) -> Self {
        Self::InsertText {
            text: text.into(),
            range: None,
        }
    }

    /// Sets the selection from the host.
    #[must_use]
    pub fn select(range: Selection) -> Self {
        Self::SetSelection {
            origin: SelectionOrigin::Programmatic,
            range: Some(range),
        }
    }
}

/// The kind of an [`Action`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// [`Action::InsertText`].
    InsertText,
    /// [`Action::InsertLineBreak`].
    InsertLineBreak,
    /// [`Action::InsertBlockBreak`].
    InsertBlockBreak,
    /// [`Action::InsertCustomBlock`].
    InsertCustomBlock,
    /// [`Action::Backspace`].
    Backspace,
    /// [`Action::Delete`].
    Delete,
    /// [`Action::ToggleInlineMarkup`].
    ToggleInlineMarkup,
    /// [`Action::ChangeBlockType`].
    ChangeBlockType,
    /// [`Action::SetSelection`].
    SetSelection,
    /// [`Action::ReplaceValue`].
    ReplaceValue,
    /// [`Action::Cut`].
    Cut,
    /// [`Action::Copy`].
    Copy,
    /// [`Action::Paste`].
    Paste,
    /// [`Action::MutateExternally`].
    MutateExternally,
    /// [`Action::Undo`].
    Undo,
    /// [`Action::Redo`].
    Redo,
}

impl ActionType {
    /// The kebab-case name of this action type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsertText => "insert-text",
            Self::InsertLineBreak => "insert-line-break",
            Self::InsertBlockBreak => "insert-block-break",
            Self::InsertCustomBlock => "insert-custom-block",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::ToggleInlineMarkup => "toggle-inline-markup",
            Self::ChangeBlockType => "change-block-type",
            Self::SetSelection => "set-selection",
            Self::ReplaceValue => "replace-value",
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::MutateExternally => "mutate-externally",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
