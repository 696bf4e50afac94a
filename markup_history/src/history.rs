// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use markup_edit::State;

use crate::Manipulation;

/// A bounded list of states with a cursor on the current one.
///
/// States are shared, so stepping back and forth hands out the very same snapshots.
#[derive(Clone, Debug)]
pub struct History {
    states: Vec<Arc<State>>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// A history holding `initial` only. `limit` is raised to at least one.
    #[must_use]
    pub fn new(initial: State, limit: usize) -> Self {
        Self {
            states: vec![Arc::new(initial)],
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// The state at the cursor.
    #[must_use]
    pub fn current(&self) -> &Arc<State> {
        &self.states[self.cursor]
    }

    /// Index of the current state.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of states held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: a history holds at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Commits `state`, discarding any states after the cursor first.
    ///
    /// A push at the limit drops the oldest state and leaves the cursor where it is.
    pub fn commit(&mut self, state: Arc<State>, manipulation: Manipulation) {
        self.states.truncate(self.cursor + 1);
        match manipulation {
            Manipulation::Replace => self.states[self.cursor] = state,
            Manipulation::Push if self.states.len() < self.limit => {
                self.states.push(state);
                self.cursor += 1;
            }
            Manipulation::Push => {
                self.states.remove(0);
                self.states.push(state);
            }
        }
    }

    /// Moves the cursor back. Returns `false` at the oldest state.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor forward. Returns `false` at the newest state.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
