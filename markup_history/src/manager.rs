// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use markup_edit::{
    backspace, change_block_type, cut, delete, insert_block_break, insert_custom_block,
    insert_from_clipboard, insert_line_break, insert_text, set_active_markups, toggle_inline,
    State,
};
use markup_model::{Selection, Value};
use tracing::{debug, error, trace};

use crate::policy::{decide, Coalescer};
use crate::{Action, ActionType, Clock, Error, History, HistoryConfig, Renderer, SystemClock};

type StateChangeCallback = Box<dyn FnMut(&State, ActionType)>;

/// Owns the history of a document and keeps a [`Renderer`] showing its current state.
///
/// Every edit goes through [`apply_action`](Self::apply_action), which runs the edit, commits
/// the result to the history (pushing a new entry or coalescing into the current one) and
/// renders it.
pub struct StateManager<R, C = SystemClock> {
    history: History,
    renderer: R,
    clock: C,
    coalescer: Coalescer,
    last_action: Option<ActionType>,
    on_state_change: Option<StateChangeCallback>,
}

impl<R: Renderer> StateManager<R, SystemClock> {
    /// Opens `value` and renders it with the caret at the start.
    pub fn new(value: Value, renderer: R, config: &HistoryConfig) -> Result<Self, Error> {
        Self::with_clock(value, renderer, config, SystemClock)
    }
}

impl<R: Renderer, C: Clock> StateManager<R, C> {
    /// Like [`new`](StateManager::new), timing the coalescing window with `clock`.
    pub fn with_clock(
        value: Value,
        renderer: R,
        config: &HistoryConfig,
        clock: C,
    ) -> Result<Self, Error> {
        let initial = State::from_value(value)?;
        let mut manager = Self {
            history: History::new(initial, config.limit),
            renderer,
            clock,
            coalescer: Coalescer::new(config.coalesce_window(), config.backup_interval()),
            last_action: None,
            on_state_change: None,
        };
        manager.render(true, true)?;
        Ok(manager)
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &Arc<State> {
        self.history.current()
    }

    /// The position of the current state in the history.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// The committed states.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, e.g. to pick a selection on it.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The current document.
    #[must_use]
    pub fn get_value(&self) -> Value {
        self.state().to_value()
    }

    /// Replaces the whole document.
    pub fn set_value(&mut self, value: Value) -> Result<bool, Error> {
        self.apply_action(Action::ReplaceValue { value })
    }

    /// Calls `callback` with every state committed, undone or redone, after it was rendered.
    pub fn on_state_change(&mut self, callback: impl FnMut(&State, ActionType) + 'static) {
        self.on_state_change = Some(Box::new(callback));
    }

    /// Applies `action` to the current state.
    ///
    /// Returns `Ok(false)` when the action changed nothing, e.g. a delete at the end of the
    /// text. A renderer failure is returned after the new state was committed; the history
    /// stays authoritative and the caller may render it again.
    pub fn apply_action(&mut self, action: Action) -> Result<bool, Error> {
        match action {
            Action::Undo => return self.undo(),
            Action::Redo => return self.redo(),
            _ => {}
        }
        let action_type = action.action_type();
        let prev = Arc::clone(self.state());

        let range = match action.range() {
            Some(range) => {
                prev.validate_selection(range)?;
                range
            }
            None if action_type == ActionType::SetSelection => {
                match self.renderer.current_selection() {
                    Some(range) if range != prev.selection() => {
                        prev.validate_selection(range)?;
                        range
                    }
                    _ => {
                        trace!(%action_type, "selection unchanged");
                        return Ok(false);
                    }
                }
            }
            None => prev.selection(),
        };

        let Some(next) = reduce(&prev, &action, range)? else {
            trace!(%action_type, "futile action");
            return Ok(false);
        };
        if next == *prev {
            trace!(%action_type, "futile action");
            return Ok(false);
        }

        let now = self.clock.now();
        let can_push = self.coalescer.can_push(now);
        let decision = decide(&action, range, self.last_action, can_push);
        trace!(?decision, can_push, %action_type, "history decision");
        if decision.restart_window {
            self.coalescer.restart(now);
        }
        self.history.commit(Arc::new(next), decision.manipulation);
        self.last_action = Some(action_type);
        debug!(
            manipulation = ?decision.manipulation,
            %action_type,
            cursor = self.history.cursor(),
            len = self.history.len(),
            "committed state"
        );

        match action_type {
            ActionType::SetSelection => {}
            ActionType::MutateExternally => self.render_or_log(&prev, false, false)?,
            _ => self.render_or_log(&prev, true, true)?,
        }
        self.notify(action_type);
        Ok(true)
    }

    /// Steps back in the history. Returns `Ok(false)` at the oldest state.
    pub fn undo(&mut self) -> Result<bool, Error> {
        let prev = Arc::clone(self.state());
        if !self.history.undo() {
            trace!("nothing to undo");
            return Ok(false);
        }
        debug!(cursor = self.history.cursor(), "undo");
        self.render_or_log(&prev, true, true)?;
        self.notify(ActionType::Undo);
        Ok(true)
    }

    /// Steps forward in the history. Returns `Ok(false)` at the newest state.
    pub fn redo(&mut self) -> Result<bool, Error> {
        let prev = Arc::clone(self.state());
        if !self.history.redo() {
            trace!("nothing to redo");
            return Ok(false);
        }
        debug!(cursor = self.history.cursor(), "redo");
        self.render_or_log(&prev, true, true)?;
        self.notify(ActionType::Redo);
        Ok(true)
    }

    fn render(&mut self, repaint: bool, position_caret: bool) -> Result<(), Error> {
        let state = Arc::clone(self.history.current());
        self.renderer
            .render(state.text(), state.markups(), repaint)
            .map_err(|source| Error::Render { source })?;
        if position_caret {
            self.renderer
                .position_caret(state.selection())
                .map_err(|source| Error::Render { source })?;
        }
        Ok(())
    }

    fn render_or_log(
        &mut self,
        prev: &State,
        repaint: bool,
        position_caret: bool,
    ) -> Result<(), Error> {
        self.render(repaint, position_caret).inspect_err(|err| {
            let next = self.history.current();
            error!(?prev, ?next, %err, "rendering failed");
        })
    }

    fn notify(&mut self, action_type: ActionType) {
        let state = Arc::clone(self.history.current());
        if let Some(callback) = &mut self.on_state_change {
            callback(&state, action_type);
        }
    }
}

impl<R: fmt::Debug, C: fmt::Debug> fmt::Debug for StateManager<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateManager")
            .field("history", &self.history)
            .field("renderer", &self.renderer)
            .field("clock", &self.clock)
            .field("coalescer", &self.coalescer)
            .field("last_action", &self.last_action)
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

/// Runs the edit `action` asks for. `None` means the action cannot change the document.
fn reduce(prev: &State, action: &Action, range: Selection) -> Result<Option<State>, Error> {
    let next = match action {
        Action::InsertText { text, .. } if text.contains('\n') => Some(insert_from_clipboard(
            prev,
            text,
            range.start(),
            range.end(),
        )),
        Action::InsertText { text, .. } => Some(insert_text(prev, range, text)),
        Action::InsertLineBreak { .. } => Some(insert_line_break(prev, range)),
        Action::InsertBlockBreak { .. } => Some(insert_block_break(prev, range)),
        Action::InsertCustomBlock { data, .. } => {
            Some(insert_custom_block(prev, range, data.clone()))
        }
        Action::Backspace { .. } => backspace(prev, range),
        Action::Delete { .. } => delete(prev, range),
        Action::ToggleInlineMarkup { tag, data, .. } => {
            Some(toggle_inline(prev, *tag, range, data.clone())?)
        }
        Action::ChangeBlockType { tag, .. } => {
            Some(change_block_type(&set_active_markups(prev, range), *tag)?)
        }
        Action::SetSelection { .. } => Some(prev.with_selection(range)),
        Action::ReplaceValue { value } => Some(State::from_value(value.clone())?),
        Action::Cut { .. } => cut(prev, range),
        Action::Paste { text, .. } => Some(insert_from_clipboard(
            prev,
            text,
            range.start(),
            range.end(),
        )),
        Action::MutateExternally { value, selection } => {
            let state = State::from_value(value.clone())?;
            state.validate_selection(*selection)?;
            Some(state.with_selection(*selection))
        }
        Action::Copy { .. } | Action::Undo | Action::Redo => None,
    };
    Ok(next)
}
