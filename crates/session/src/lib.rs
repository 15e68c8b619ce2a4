//! Editor session core for jotpad.
//!
//! Owns the single open document, the find/replace search state and the
//! bound file path, and dispatches menu commands to handlers. The UI shell
//! (window, menus, file chooser, printer) stays on the other side of the
//! capability traits in [`shell`].

mod command;
mod error;
pub mod io;
mod session;
mod shell;

pub use command::{Command, Outcome};
pub use error::EditorError;
pub use session::EditorSession;
pub use shell::{
    Dialogs, FindPrompt, MemoryClipboard, Printer, ReplacePrompt, Shell, SystemClipboard,
    TextClipboard,
};

// Re-exported so hosts depend on one crate for the common types.
pub use jotpad_buffer::{Document, LineEnding, UndoCapability};
pub use jotpad_search::{MatchSpan, SearchDirection, SearchState};
