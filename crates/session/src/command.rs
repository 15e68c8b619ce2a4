//! Menu commands and dispatch outcomes.
//!
//! Each menu action is a variant of [`Command`] mapped 1:1 to a session
//! handler, instead of dispatching on the menu item's label string. Hosts
//! wiring a real menu can still translate labels via
//! [`Command::from_menu_label`].

use std::path::PathBuf;

use jotpad_search::MatchSpan;

/// One user action from the menu, hotkey or dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
    Find,
    FindNext,
    FindPrevious,
    Replace,
}

impl Command {
    /// Menu label for this command.
    pub fn menu_label(self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Print => "Print",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Find => "Find",
            Command::FindNext => "Find Next",
            Command::FindPrevious => "Find Previous",
            Command::Replace => "Replace",
        }
    }

    /// Translate a menu label back into a command.
    pub fn from_menu_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.menu_label() == label)
    }

    /// All commands, in menu order.
    pub const ALL: [Command; 14] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Print,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::Undo,
        Command::Redo,
        Command::Find,
        Command::FindNext,
        Command::FindPrevious,
        Command::Replace,
    ];
}

/// What a successfully dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Handled with nothing further to report (New, clipboard ops,
    /// undo/redo).
    Done,
    /// The user dismissed the dialog; nothing happened.
    Cancelled,
    /// A file was read into the document.
    Opened(PathBuf),
    /// The document was written out.
    Saved(PathBuf),
    /// A search landed on this span; the document selection covers it.
    Match(MatchSpan),
    /// Replace-all substituted this many occurrences.
    Replaced(usize),
    /// The document went to the printer.
    Printed,
}
