//! Edit history: invertible actions plus undo/redo stacks.

/// A single recorded edit, addressed by byte offset into the document.
#[derive(Debug, Clone)]
pub enum Action {
    /// Text inserted at `at`.
    Insert { at: usize, text: String },
    /// Text deleted from `at`.
    Delete { at: usize, text: String },
    /// Several edits undone and redone as one step (wholesale replacement,
    /// replace-all).
    Group { actions: Vec<Action> },
}

impl Action {
    /// The action that undoes this one.
    pub fn inverse(&self) -> Action {
        match self {
            Action::Insert { at, text } => Action::Delete {
                at: *at,
                text: text.clone(),
            },
            Action::Delete { at, text } => Action::Insert {
                at: *at,
                text: text.clone(),
            },
            Action::Group { actions } => Action::Group {
                actions: actions.iter().rev().map(Action::inverse).collect(),
            },
        }
    }

    /// Check whether `next` continues this action as part of the same typing
    /// burst.
    ///
    /// Forward typing: a single character inserted right where the previous
    /// insertion ended. Backspacing: a single character deleted right before
    /// the previous deletion. Newlines always start a fresh action.
    fn continues_with(&self, next: &Action) -> bool {
        match (self, next) {
            (Action::Insert { at, text }, Action::Insert { at: next_at, text: next_text }) => {
                next_text.chars().count() == 1
                    && !next_text.contains('\n')
                    && !text.contains('\n')
                    && *next_at == at + text.len()
            }
            (Action::Delete { at, text }, Action::Delete { at: next_at, text: next_text }) => {
                next_text.chars().count() == 1
                    && !next_text.contains('\n')
                    && !text.contains('\n')
                    && next_at + next_text.len() == *at
            }
            _ => false,
        }
    }

    /// Fold `next` into this action. Only meaningful when
    /// [`continues_with`](Action::continues_with) held.
    fn absorb(&mut self, next: Action) {
        match (self, next) {
            (Action::Insert { text, .. }, Action::Insert { text: next_text, .. }) => {
                text.push_str(&next_text);
            }
            (Action::Delete { at, text }, Action::Delete { at: next_at, text: next_text }) => {
                *at = next_at;
                text.insert_str(0, &next_text);
            }
            _ => {}
        }
    }
}

/// Undo/redo stacks with merge of consecutive single-character edits.
///
/// New edits accumulate into a pending action until something breaks the
/// typing burst; [`commit_pending`](History::commit_pending) seals the
/// current burst explicitly.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
    /// Maximum number of committed undo steps.
    limit: usize,
    pending: Option<Action>,
}

impl History {
    /// Create a history with the default step limit.
    pub fn new() -> Self {
        Self::with_limit(1000)
    }

    /// Create a history keeping at most `limit` undo steps.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
            pending: None,
        }
    }

    /// Record an edit. Any redoable actions are discarded.
    pub fn push(&mut self, action: Action) {
        self.redo_stack.clear();

        let merges = self
            .pending
            .as_ref()
            .is_some_and(|p| p.continues_with(&action));
        if merges {
            if let Some(pending) = &mut self.pending {
                pending.absorb(action);
            }
            return;
        }

        if let Some(completed) = self.pending.take() {
            self.undo_stack.push(completed);
        }
        self.pending = Some(action);

        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Seal the current typing burst so the next edit starts a new step.
    pub fn commit_pending(&mut self) {
        if let Some(action) = self.pending.take() {
            self.undo_stack.push(action);
        }
    }

    /// Take the next undo step, returning the action that reverts it.
    pub fn undo(&mut self) -> Option<Action> {
        self.commit_pending();

        let action = self.undo_stack.pop()?;
        let inverse = action.inverse();
        self.redo_stack.push(action);
        Some(inverse)
    }

    /// Take the next redo step, returning the original action to reapply.
    pub fn redo(&mut self) -> Option<Action> {
        self.commit_pending();

        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Check if undo is possible.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.pending.is_some()
    }

    /// Check if redo is possible.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Forget all recorded edits.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
