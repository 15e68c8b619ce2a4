//! The editor session: one document, one search state, one file binding.

use std::path::{Path, PathBuf};

use jotpad_buffer::{Document, LineEnding, UndoCapability};
use jotpad_config::Config;
use jotpad_search::{MatchSpan, SearchDirection, SearchState};

use crate::command::{Command, Outcome};
use crate::error::EditorError;
use crate::io;
use crate::shell::{Printer, Shell, TextClipboard};

/// All mutable state of one editor window.
///
/// An explicit object instead of ambient globals, so handlers are plain
/// methods and several independent sessions could coexist. The search state
/// is deliberately not reset when the document is edited; stale match
/// offsets are tolerated by the search machine itself.
#[derive(Debug, Default)]
pub struct EditorSession {
    document: Document,
    search: SearchState,
    /// Path bound to the document; `None` until the user opens or first
    /// saves ("New" state).
    file: Option<PathBuf>,
}

impl EditorSession {
    /// Create a session with an empty, unbound document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session honoring the editor configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            document: Document::with_history_limit(config.editor.history_limit),
            search: SearchState::new(),
            file: None,
        }
    }

    /// The open document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for the host's typing path.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Current search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Path currently bound to the document, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Reset to an empty, unbound document. Not undoable.
    pub fn new_document(&mut self) {
        self.document.load(String::new(), LineEnding::default());
        self.file = None;
        jotpad_logger::info("New document");
    }

    /// Read `path` into the document wholesale and bind it.
    ///
    /// On failure the previous document, file binding and history are all
    /// left untouched.
    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        let (text, ending) = match io::read_document(path) {
            Ok(read) => read,
            Err(err) => {
                jotpad_logger::error(format!("Open failed: {err}"));
                return Err(err);
            }
        };

        self.document.load(text, ending);
        self.file = Some(path.to_path_buf());
        jotpad_logger::info(format!("Opened {}", path.display()));
        Ok(())
    }

    /// Save to the bound file.
    ///
    /// Returns the path written, or `None` when no file is bound yet and
    /// the host should fall through to Save As.
    pub fn save(&mut self) -> Result<Option<PathBuf>, EditorError> {
        match self.file.clone() {
            Some(path) => {
                self.save_as(path.clone())?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Bind `path` and save the document to it.
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), EditorError> {
        if let Err(err) = io::write_document(&path, self.document.text(), self.document.line_ending())
        {
            jotpad_logger::error(format!("Save failed: {err}"));
            return Err(err);
        }

        self.document.mark_saved();
        jotpad_logger::info(format!("Saved {}", path.display()));
        self.file = Some(path);
        Ok(())
    }

    /// Send the full document text to the host printer.
    pub fn print(&mut self, printer: &mut dyn Printer) -> Result<(), EditorError> {
        printer.print(self.document.text()).map_err(|message| {
            jotpad_logger::error(format!("Print failed: {message}"));
            EditorError::Print(message)
        })?;
        jotpad_logger::info("Document printed");
        Ok(())
    }

    /// Copy the selection to the clipboard. No selection is a no-op.
    pub fn copy(&mut self, clipboard: &mut dyn TextClipboard) {
        if let Some(selected) = self.document.selected_text() {
            clipboard.set_text(selected);
        }
    }

    /// Cut the selection to the clipboard. No selection is a no-op.
    pub fn cut(&mut self, clipboard: &mut dyn TextClipboard) {
        if let Some(selected) = self.document.selected_text() {
            clipboard.set_text(selected);
            self.document.delete_selection();
        }
    }

    /// Insert clipboard text at the caret, replacing any selection.
    pub fn paste(&mut self, clipboard: &mut dyn TextClipboard) {
        if let Some(text) = clipboard.text() {
            self.document.insert_at_caret(&text);
        }
    }

    /// Revert the most recent edit, if any.
    pub fn undo(&mut self) -> bool {
        self.document.undo()
    }

    /// Reapply the most recently undone edit, if any.
    pub fn redo(&mut self) -> bool {
        self.document.redo()
    }

    /// Start a new search with `term` and jump to the first match in the
    /// given direction.
    ///
    /// An empty term leaves the machine idle and reports `NoActiveSearch`
    /// (the UI normally rejects empty input before it gets here).
    pub fn begin_search(
        &mut self,
        term: &str,
        direction: SearchDirection,
    ) -> Result<MatchSpan, EditorError> {
        self.search.set_term(term);
        self.find(direction)
    }

    /// Jump to the next match of the active term.
    pub fn find_next(&mut self) -> Result<MatchSpan, EditorError> {
        self.find(SearchDirection::Forward)
    }

    /// Jump to the previous match of the active term.
    pub fn find_previous(&mut self) -> Result<MatchSpan, EditorError> {
        self.find(SearchDirection::Backward)
    }

    fn find(&mut self, direction: SearchDirection) -> Result<MatchSpan, EditorError> {
        let span = self.search.find(self.document.text(), direction)?;
        // Highlight the hit the way a text widget selects found text.
        self.document.select(span.start..span.end);
        Ok(span)
    }

    /// Replace every occurrence of `find` with `replace_with`, as one
    /// undoable edit.
    ///
    /// Stateless with respect to the search term and match cursor. Zero
    /// occurrences reports `NotFound` and leaves the document unchanged.
    pub fn replace_all(&mut self, find: &str, replace_with: &str) -> Result<usize, EditorError> {
        let (new_text, count) = jotpad_search::replace_all(self.document.text(), find, replace_with);
        if count == 0 {
            return Err(EditorError::NotFound);
        }

        self.document.set_text(new_text);
        jotpad_logger::info(format!("Replaced {count} occurrence(s)"));
        Ok(count)
    }

    /// Dispatch one menu command, collecting dialog input from the shell.
    ///
    /// Errors are returned for the host to show modally; the session state
    /// is already rolled back (or was never touched) when that happens.
    pub fn execute<S: Shell + ?Sized>(
        &mut self,
        command: Command,
        shell: &mut S,
    ) -> Result<Outcome, EditorError> {
        match command {
            Command::New => {
                self.new_document();
                Ok(Outcome::Done)
            }
            Command::Open => match shell.choose_open_path() {
                Some(path) => {
                    self.open(&path)?;
                    Ok(Outcome::Opened(path))
                }
                None => Ok(Outcome::Cancelled),
            },
            Command::Save => match self.save()? {
                Some(path) => Ok(Outcome::Saved(path)),
                None => self.save_via_dialog(shell),
            },
            Command::SaveAs => self.save_via_dialog(shell),
            Command::Print => {
                self.print(shell.printer())?;
                Ok(Outcome::Printed)
            }
            Command::Cut => {
                self.cut(shell.clipboard());
                Ok(Outcome::Done)
            }
            Command::Copy => {
                self.copy(shell.clipboard());
                Ok(Outcome::Done)
            }
            Command::Paste => {
                self.paste(shell.clipboard());
                Ok(Outcome::Done)
            }
            Command::Undo => {
                self.undo();
                Ok(Outcome::Done)
            }
            Command::Redo => {
                self.redo();
                Ok(Outcome::Done)
            }
            Command::Find => match shell.prompt_find() {
                Some(prompt) if !prompt.term.is_empty() => {
                    let span = self.begin_search(&prompt.term, prompt.direction)?;
                    Ok(Outcome::Match(span))
                }
                _ => Ok(Outcome::Cancelled),
            },
            Command::FindNext => Ok(Outcome::Match(self.find_next()?)),
            Command::FindPrevious => Ok(Outcome::Match(self.find_previous()?)),
            Command::Replace => match shell.prompt_replace() {
                Some(prompt) if !prompt.find.is_empty() => {
                    let count = self.replace_all(&prompt.find, &prompt.replace_with)?;
                    Ok(Outcome::Replaced(count))
                }
                _ => Ok(Outcome::Cancelled),
            },
        }
    }

    fn save_via_dialog<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<Outcome, EditorError> {
        match shell.choose_save_path() {
            Some(path) => {
                self.save_as(path.clone())?;
                Ok(Outcome::Saved(path))
            }
            None => Ok(Outcome::Cancelled),
        }
    }
}
