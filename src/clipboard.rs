//! Clipboard capability used by both tools.
//
//! The host clipboard is modelled as three fallible operations behind the
//! [`Clipboard`] trait. [`SystemClipboard`] talks to the real clipboard through
//! the `arboard` crate; [`MemoryClipboard`] keeps the contents in process so the
//! copy and paste flows can be exercised without a display server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),
}

/// Text access to a clipboard.
///
/// Implementations must not cache contents between calls: every `read` sees
/// whatever is current at call time, and other processes may write in between.
pub trait Clipboard {
    fn read(&mut self) -> Result<String, ClipboardError>;

    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.write("")
    }
}

/// The operating system clipboard.
///
/// A fresh `arboard` handle is opened for each operation and dropped right
/// after it, so no clipboard state is held across calls.
///
/// On X11 and Wayland the selection is served by the process that set it.
/// Text written here outlives the process only when a clipboard manager takes
/// it over as the handle drops; without one it is gone once `ccopy` exits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        get()
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        set(text)
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))
}

/// Read the system clipboard as a `String`.
///
/// A clipboard holding no text is an error
/// (`arboard::Error::ContentNotAvailable`), not an empty string.
pub fn get() -> Result<String, ClipboardError> {
    let mut cb = open()?;
    cb.get_text().map_err(ClipboardError::from)
}

/// Set the system clipboard to `text`.
pub fn set(text: &str) -> Result<(), ClipboardError> {
    let mut cb = open()?;
    cb.set_text(text.to_owned()).map_err(ClipboardError::from)
}

/// In-process clipboard with switchable failures.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: String,
    fail_reads: bool,
    fail_writes: bool,
    no_text: bool,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// A clipboard whose every operation fails, as when no display is reachable.
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// A reachable clipboard that holds no text. Reads fail until the first
    /// successful write.
    pub fn without_text() -> Self {
        Self {
            no_text: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of successful writes, clears included.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        if self.fail_reads {
            return Err(ClipboardError::Unavailable("read refused".into()));
        }
        if self.no_text {
            return Err(ClipboardError::Backend(arboard::Error::ContentNotAvailable));
        }
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes {
            return Err(ClipboardError::Unavailable("write refused".into()));
        }
        self.contents.clear();
        self.contents.push_str(text);
        self.no_text = false;
        self.writes += 1;
        Ok(())
    }
}
