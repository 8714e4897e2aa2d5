//! Copying share links out of the terminal.

use std::io::{self, Write};

use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// How a link ended up outside the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// System clipboard.
    Clipboard,
    /// OSC 52 escape sequence, picked up by the terminal emulator.
    Osc52,
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl Default for ClipboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardHandler {
    /// The system clipboard is optional; headless sessions fall back to OSC 52.
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::debug!(error = %err, "System clipboard unavailable");
                None
            }
        };
        Self { clipboard }
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err("No system clipboard".to_string());
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }

    /// Copy `text`, trying the system clipboard first and OSC 52 second.
    pub fn copy(&mut self, text: &str) -> Result<CopyMethod, String> {
        match self.set_text(text) {
            Ok(()) => Ok(CopyMethod::Clipboard),
            Err(clipboard_err) => {
                let mut stdout = io::stdout();
                write_osc52(&mut stdout, text).map_err(|osc_err| {
                    format!("{}; OSC 52 failed: {}", clipboard_err, osc_err)
                })?;
                Ok(CopyMethod::Osc52)
            }
        }
    }
}

/// Emit an OSC 52 "set clipboard" sequence.
pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let encoded = STANDARD.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{}\x07", encoded)?;
    out.flush()
}
