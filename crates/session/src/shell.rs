//! Capability seams toward the host UI shell.
//!
//! The window, menu bar, file chooser and print spooler live outside this
//! crate. The session only needs three narrow capabilities from them:
//! modal dialogs, a text clipboard, and a printer. Each is a trait so
//! handlers run headless in tests.

use std::path::PathBuf;

use jotpad_search::SearchDirection;

/// Confirmed input from the Find dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPrompt {
    pub term: String,
    pub direction: SearchDirection,
}

/// Confirmed input from the Replace dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePrompt {
    pub find: String,
    pub replace_with: String,
}

/// Synchronous modal dialogs provided by the host.
///
/// Every method returns `None` on cancellation. Hosts also return `None`
/// for an empty confirmation, mirroring a dialog whose confirm button is
/// disabled while the input is empty.
pub trait Dialogs {
    /// File chooser for Open.
    fn choose_open_path(&mut self) -> Option<PathBuf>;

    /// File chooser for Save/Save As.
    fn choose_save_path(&mut self) -> Option<PathBuf>;

    /// Find dialog: term plus direction.
    fn prompt_find(&mut self) -> Option<FindPrompt>;

    /// Replace dialog: (find, replace) pair.
    fn prompt_replace(&mut self) -> Option<ReplacePrompt>;
}

/// Text clipboard capability.
///
/// Cut/copy/paste semantics live in the session; this is only the storage.
pub trait TextClipboard {
    /// Place text on the clipboard.
    fn set_text(&mut self, text: &str);

    /// Current clipboard text, if any.
    fn text(&mut self) -> Option<String>;
}

/// The system clipboard, backed by `jotpad-clipboard` (arboard).
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl TextClipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) {
        if let Err(err) = jotpad_clipboard::set_text(text) {
            jotpad_logger::error(format!("Clipboard write failed: {err:#}"));
        }
    }

    fn text(&mut self) -> Option<String> {
        jotpad_clipboard::get_text()
    }
}

/// In-process clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextClipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }

    fn text(&mut self) -> Option<String> {
        self.contents.clone()
    }
}

/// Printing capability provided by the host.
pub trait Printer {
    /// Print the full document text. The error string is shown to the user.
    fn print(&mut self, text: &str) -> Result<(), String>;
}

/// Everything the command dispatcher needs from the host in one place.
pub trait Shell: Dialogs {
    fn clipboard(&mut self) -> &mut dyn TextClipboard;
    fn printer(&mut self) -> &mut dyn Printer;
}
