// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

use markup_model::Selection;

use crate::{Action, ActionType, SelectionOrigin};

/// How a new state enters the history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Manipulation {
    /// Appended as a new entry.
    Push,
    /// Overwrites the current entry.
    Replace,
}

/// The outcome of [`decide`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// How to commit the state.
    pub manipulation: Manipulation,
    /// Whether the coalescing window restarts, forbidding pushes until it elapses.
    pub restart_window: bool,
}

/// Chooses how the state produced by `action` over `range` is committed.
///
/// Typing and deleting coalesce: they replace the current entry while pushing is forbidden,
/// unless the previous action went the other way (typing after deleting, or deleting after
/// typing or pasting). Keyboard selection changes and overrides staged at a collapsed caret
/// replace. Everything else pushes.
#[must_use]
pub fn decide(
    action: &Action,
    range: Selection,
    last: Option<ActionType>,
    can_push: bool,
) -> Decision {
    use Manipulation::{Push, Replace};

    let (manipulation, restart_window) = match action {
        Action::InsertText { .. } => {
            let reversed = matches!(
                last,
                Some(ActionType::Delete | ActionType::Backspace | ActionType::Cut)
            );
            (if reversed || can_push { Push } else { Replace }, true)
        }
        Action::Delete { .. } | Action::Backspace { .. } => {
            let reversed = matches!(last, Some(ActionType::InsertText | ActionType::Paste));
            (if reversed || can_push { Push } else { Replace }, true)
        }
        Action::SetSelection {
            origin: SelectionOrigin::Keyboard,
            ..
        } => (Replace, false),
        Action::SetSelection { .. } => (Push, false),
        Action::ToggleInlineMarkup { .. } if range.is_collapsed() => (Replace, false),
        Action::ToggleInlineMarkup { .. } => (Push, false),
        _ => (Push, true),
    };
    Decision {
        manipulation,
        restart_window,
    }
}

/// The two coalescing deadlines, evaluated lazily.
#[derive(Clone, Debug)]
pub(crate) struct Coalescer {
    window: Duration,
    backup: Duration,
    /// Pushing is forbidden until then.
    window_deadline: Option<Instant>,
    /// Pushing is allowed again from then on, even inside the window.
    backup_deadline: Option<Instant>,
}

impl Coalescer {
    pub(crate) fn new(window: Duration, backup: Duration) -> Self {
        Self {
            window,
            backup,
            window_deadline: None,
            backup_deadline: None,
        }
    }

    pub(crate) fn can_push(&mut self, now: Instant) -> bool {
        if self.backup_deadline.is_some_and(|deadline| now >= deadline) {
            self.backup_deadline = None;
            self.window_deadline = None;
        }
        self.window_deadline.is_none_or(|deadline| now >= deadline)
    }

    pub(crate) fn restart(&mut self, now: Instant) {
        self.window_deadline = Some(now + self.window);
        self.backup_deadline.get_or_insert(now + self.backup);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use markup_model::{MarkupTag, Selection};

    use super::{decide, Coalescer, Manipulation};
    use crate::{Action, ActionType, SelectionOrigin};

    fn manipulation(action: &Action, last: Option<ActionType>, can_push: bool) -> Manipulation {
        decide(action, Selection::caret(0), last, can_push).manipulation
    }

    fn edits() -> [Action; 3] {
        [
            Action::insert_text("a"),
            Action::Delete { range: None },
            Action::Backspace { range: None },
        ]
    }

    #[test]
    fn edits_replace_inside_the_window() {
        for action in edits() {
            assert_eq!(manipulation(&action, None, false), Manipulation::Replace);
            assert!(decide(&action, Selection::caret(0), None, false).restart_window);
        }
    }

    #[test]
    fn edits_push_when_allowed() {
        for action in edits() {
            assert_eq!(manipulation(&action, None, true), Manipulation::Push);
        }
    }

    #[test]
    fn typing_after_deleting_pushes() {
        for last in [ActionType::Delete, ActionType::Backspace, ActionType::Cut] {
            let action = Action::insert_text("a");
            assert_eq!(manipulation(&action, Some(last), false), Manipulation::Push);
        }
    }

    #[test]
    fn deleting_after_typing_pushes() {
        for last in [ActionType::InsertText, ActionType::Paste] {
            for action in [Action::Delete { range: None }, Action::Backspace { range: None }] {
                assert_eq!(manipulation(&action, Some(last), false), Manipulation::Push);
            }
        }
    }

    #[test]
    fn keyboard_selection_replaces() {
        let keyboard = Action::SetSelection {
            origin: SelectionOrigin::Keyboard,
            range: None,
        };
        let pointer = Action::SetSelection {
            origin: SelectionOrigin::Pointer,
            range: None,
        };
        assert_eq!(manipulation(&keyboard, None, true), Manipulation::Replace);
        assert_eq!(manipulation(&pointer, None, false), Manipulation::Push);
        assert!(!decide(&pointer, Selection::caret(0), None, false).restart_window);
    }

    #[test]
    fn collapsed_toggle_replaces() {
        let toggle = Action::ToggleInlineMarkup {
            tag: MarkupTag::Strong,
            data: None,
            range: None,
        };
        let at_caret = decide(&toggle, Selection::caret(3), None, true);
        assert_eq!(at_caret.manipulation, Manipulation::Replace);
        let over_text = decide(&toggle, Selection::new(1, 3), None, false);
        assert_eq!(over_text.manipulation, Manipulation::Push);
    }

    #[test]
    fn other_actions_push_and_restart() {
        let action = Action::ChangeBlockType {
            tag: MarkupTag::H1,
            range: None,
        };
        let decision = decide(&action, Selection::caret(0), Some(ActionType::InsertText), false);
        assert_eq!(decision.manipulation, Manipulation::Push);
        assert!(decision.restart_window);
    }

    #[test]
    fn window_forbids_pushing_until_it_elapses() {
        let start = Instant::now();
        let mut coalescer = Coalescer::new(Duration::from_millis(750), Duration::from_secs(2));
        assert!(coalescer.can_push(start));
        coalescer.restart(start);
        assert!(!coalescer.can_push(start + Duration::from_millis(749)));
        assert!(coalescer.can_push(start + Duration::from_millis(750)));
    }

    #[test]
    fn backup_deadline_is_not_pushed_back() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut coalescer = Coalescer::new(ms(750), ms(2000));
        coalescer.restart(start);
        for step in 1..=4 {
            let now = start + ms(step * 400);
            assert!(!coalescer.can_push(now));
            coalescer.restart(now);
        }
        // The window restarted at 1600ms is still open, but the backup armed at 0ms expired.
        assert!(coalescer.can_push(start + ms(2000)));
        coalescer.restart(start + ms(2000));
        assert!(!coalescer.can_push(start + ms(2100)));
    }
}
