//! The in-memory document: text, caret, selection, modified flag, history.

use std::ops::Range;

use crate::{Action, History, LineEnding, UndoCapability};

/// The single open document.
///
/// Content is a UTF-8 string; the caret and all ranges are byte offsets and
/// always sit on character boundaries. Every mutation records its inverse in
/// the history and raises the modified flag.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    /// Caret byte offset, `0..=text.len()`.
    caret: usize,
    /// Selected byte range, if any.
    selection: Option<Range<usize>>,
    modified: bool,
    line_ending: LineEnding,
    history: History,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::with_history_limit(1000)
    }

    /// Create an empty document with a bounded undo history.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            selection: None,
            modified: false,
            line_ending: LineEnding::default(),
            history: History::with_limit(limit),
        }
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Document length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the content changed since the last load or save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Line ending to restore when writing to disk.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Replace the content wholesale without recording history.
    ///
    /// Used when a file is opened or the document is reset to "New": the
    /// previous document's edits are not reachable by undo afterwards.
    pub fn load(&mut self, text: String, line_ending: LineEnding) {
        self.text = text;
        self.caret = 0;
        self.selection = None;
        self.modified = false;
        self.line_ending = line_ending;
        self.history.clear();
    }

    /// Replace the content wholesale as a single undoable edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        let old_text = std::mem::replace(&mut self.text, new_text.clone());

        self.history.commit_pending();
        self.history.push(Action::Group {
            actions: vec![
                Action::Delete {
                    at: 0,
                    text: old_text,
                },
                Action::Insert {
                    at: 0,
                    text: new_text,
                },
            ],
        });
        self.history.commit_pending();

        self.caret = self.text.len();
        self.selection = None;
        self.modified = true;
    }

    /// Caret byte offset.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, clamping to the nearest character boundary.
    pub fn set_caret(&mut self, at: usize) {
        self.caret = self.floor_boundary(at);
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Select a byte range; the caret moves to the end of the selection.
    pub fn select(&mut self, range: Range<usize>) {
        let start = self.floor_boundary(range.start);
        let end = self.floor_boundary(range.end.max(start));
        if start == end {
            self.selection = None;
            self.caret = start;
        } else {
            self.selection = Some(start..end);
            self.caret = end;
        }
    }

    /// Drop the selection, leaving the caret where it is.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Text covered by the selection, if any.
    pub fn selected_text(&self) -> Option<&str> {
        self.selection
            .as_ref()
            .map(|range| &self.text[range.clone()])
    }

    /// Insert text at a byte offset (clamped to a character boundary).
    pub fn insert(&mut self, at: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.floor_boundary(at);
        self.text.insert_str(at, text);
        self.history.push(Action::Insert {
            at,
            text: text.to_string(),
        });
        self.caret = at + text.len();
        self.selection = None;
        self.modified = true;
    }

    /// Delete a byte range and return the removed text.
    pub fn delete_range(&mut self, range: Range<usize>) -> String {
        let start = self.floor_boundary(range.start);
        let end = self.floor_boundary(range.end.max(start));
        if start == end {
            return String::new();
        }

        let removed: String = self.text[start..end].to_string();
        self.text.replace_range(start..end, "");
        self.history.push(Action::Delete {
            at: start,
            text: removed.clone(),
        });
        self.caret = start;
        self.selection = None;
        self.modified = true;
        removed
    }

    /// Replace a byte range with new text as a single undoable edit.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let start = self.floor_boundary(range.start);
        let end = self.floor_boundary(range.end.max(start));
        let removed = self.text[start..end].to_string();
        if removed.is_empty() && text.is_empty() {
            return;
        }

        self.text.replace_range(start..end, text);

        let mut actions = Vec::new();
        if !removed.is_empty() {
            actions.push(Action::Delete {
                at: start,
                text: removed,
            });
        }
        if !text.is_empty() {
            actions.push(Action::Insert {
                at: start,
                text: text.to_string(),
            });
        }
        self.history.commit_pending();
        match actions.len() {
            1 => self.history.push(actions.remove(0)),
            _ => self.history.push(Action::Group { actions }),
        }
        self.history.commit_pending();

        self.caret = start + text.len();
        self.selection = None;
        self.modified = true;
    }

    /// Insert at the caret, replacing the selection if one exists.
    pub fn insert_at_caret(&mut self, text: &str) {
        match self.selection.clone() {
            Some(range) => self.replace_range(range, text),
            None => self.insert(self.caret, text),
        }
    }

    /// Remove the selected text, if any, and return it.
    pub fn delete_selection(&mut self) -> Option<String> {
        let range = self.selection.clone()?;
        Some(self.delete_range(range))
    }

    /// Seal the current typing burst in the history.
    pub fn commit_edits(&mut self) {
        self.history.commit_pending();
    }

    /// Round a byte offset down to the nearest character boundary, clamping
    /// to the document length.
    fn floor_boundary(&self, at: usize) -> usize {
        let mut at = at.min(self.text.len());
        while at > 0 && !self.text.is_char_boundary(at) {
            at -= 1;
        }
        at
    }

    /// Apply a history action to the text without re-recording it.
    fn apply(&mut self, action: Action) {
        match action {
            Action::Insert { at, text } => {
                let at = self.floor_boundary(at);
                self.text.insert_str(at, &text);
                self.caret = at + text.len();
            }
            Action::Delete { at, text } => {
                let start = self.floor_boundary(at);
                let end = self.floor_boundary(start + text.len());
                self.text.replace_range(start..end, "");
                self.caret = start;
            }
            Action::Group { actions } => {
                for action in actions {
                    self.apply(action);
                }
            }
        }
        self.selection = None;
        self.modified = true;
    }
}

impl UndoCapability for Document {
    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(inverse) => {
                self.apply(inverse);
                true
            }
            None => false,
        }
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
