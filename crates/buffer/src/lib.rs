//! Document buffer with undo/redo history for jotpad.
//!
//! Holds the text content of the single open document as a plain UTF-8
//! string with byte-offset addressing, along with the caret, an optional
//! selection, the modified flag, and the edit history.

mod document;
mod history;

pub use document::Document;
pub use history::{Action, History};

/// Line ending type, detected at load time and restored on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix `\n`
    #[default]
    Lf,
    /// Windows `\r\n`
    Crlf,
}

impl LineEnding {
    /// Detect the line ending used by `text`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    /// The line terminator as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Undo/redo as a capability, detached from any concrete widget or toolkit.
///
/// [`Document`] implements this over its own [`History`]; a host with its
/// own command stack can substitute another implementation at the same seam.
pub trait UndoCapability {
    /// Check if there is anything to undo.
    fn can_undo(&self) -> bool;

    /// Revert the most recent edit. Returns false if there was nothing to
    /// undo.
    fn undo(&mut self) -> bool;

    /// Check if there is anything to redo.
    fn can_redo(&self) -> bool;

    /// Reapply the most recently undone edit. Returns false if there was
    /// nothing to redo.
    fn redo(&mut self) -> bool;
}
