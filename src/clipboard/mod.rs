//! Writing selected items back to the system clipboard.
//!
//! Re-copying a history item is the one clipboard operation this crate owns;
//! monitoring the clipboard for new items is the surrounding application's
//! job. Access goes through [`ClipboardProvider`] so tests never need a real
//! display server.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Refuse to write absurdly large payloads back to the clipboard.
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard write capability, injectable in tests.
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }
    Ok(())
}

#[cfg(test)]
fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_text(text)?;
    provider.set_text(text)
}

/// Copy an item's text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate before touching the clipboard so headless environments still
    // report input problems accurately.
    validate_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)
}
