use crate::error::{ClipmemoError, Result};
use arboard::Clipboard;
use tracing::warn;

/// Something that can receive copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened lazily on first copy
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    wait_for_owner: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for a process that exits right after copying.
    ///
    /// On Linux the copied text belongs to the process that set it, so each
    /// write blocks until another program (a paste or a clipboard manager)
    /// has taken it over.
    pub fn for_one_shot() -> Self {
        Self {
            inner: None,
            wait_for_owner: true,
        }
    }

    pub fn waits_for_owner(&self) -> bool {
        self.wait_for_owner
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ClipmemoError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipmemoError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let wait = self.wait_for_owner;
        let result = set_text(self.handle()?, text, wait)
            .map_err(|e| ClipmemoError::Clipboard(e.to_string()));

        if let Err(e) = &result {
            warn!("failed to copy: {}", e);
            // A broken handle is reopened on the next attempt
            self.inner = None;
        }
        result
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, wait: bool) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        clipboard.set().wait().text(text.to_owned())
    } else {
        clipboard.set_text(text.to_owned())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _wait: bool) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// Keeps the last copied text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            contents: None,
            fail_with: Some(message.into()),
        }
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(ClipmemoError::Clipboard(message.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
