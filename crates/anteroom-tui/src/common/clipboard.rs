//! System clipboard access.
//!
//! Fallback for terminals that deliver Ctrl+V as a key event instead
//! of bracketed paste.

use anyhow::{Context, Result};

pub struct Clipboard;

impl Clipboard {
    /// Reads text from the system clipboard.
    pub fn read() -> Result<String> {
        let mut clipboard = arboard::Clipboard::new().context("open clipboard")?;
        clipboard.get_text().context("read clipboard text")
    }
}
