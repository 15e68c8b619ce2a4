//! System clipboard access for jotpad.
//!
//! Wraps arboard behind a lazily initialized global instance. On Linux,
//! text is mirrored to both the CLIPBOARD and PRIMARY selections, and paste
//! falls back to PRIMARY when CLIPBOARD is empty.

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::sync::{Mutex, OnceLock};

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Clipboard handle for the application lifetime. Initialization is
/// deferred so that headless test runs never touch the display server.
static CLIPBOARD: OnceLock<Mutex<Option<Clipboard>>> = OnceLock::new();

fn with_clipboard<T>(f: impl FnOnce(&mut Clipboard) -> Result<T>) -> Result<T> {
    let cell = CLIPBOARD.get_or_init(|| Mutex::new(None));
    let mut guard = cell
        .lock()
        .map_err(|_| anyhow!("clipboard lock poisoned"))?;

    if guard.is_none() {
        *guard = Some(Clipboard::new().context("failed to initialize system clipboard")?);
    }
    match guard.as_mut() {
        Some(clipboard) => f(clipboard),
        None => Err(anyhow!("system clipboard unavailable")),
    }
}

/// Place text on the system clipboard.
///
/// On Linux this fills the CLIPBOARD selection and best-effort mirrors to
/// PRIMARY so middle-click paste works too.
pub fn set_text(text: &str) -> Result<()> {
    with_clipboard(|clipboard| {
        #[cfg(target_os = "linux")]
        {
            clipboard
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string())
                .context("failed to write clipboard text")?;
            let _ = clipboard
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
            Ok(())
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard
                .set_text(text.to_string())
                .context("failed to write clipboard text")
        }
    })
}

/// Read text from the system clipboard.
///
/// Returns `None` when the clipboard is empty or inaccessible.
pub fn get_text() -> Option<String> {
    with_clipboard(|clipboard| {
        #[cfg(target_os = "linux")]
        {
            if let Ok(text) = clipboard
                .get()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text()
            {
                if !text.is_empty() {
                    return Ok(text);
                }
            }
            clipboard
                .get()
                .clipboard(LinuxClipboardKind::Primary)
                .text()
                .context("clipboard is empty")
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard.get_text().context("clipboard is empty")
        }
    })
    .ok()
}
