// ABOUTME: ClipboardWriter capability with an in-memory fake and a system implementation.
// ABOUTME: SystemClipboard pipes text into the platform clipboard utility (pbcopy, wl-copy, xclip, clip).

//! Clipboard delivery.
//!
//! The extractor hands its JSON to a [`ClipboardWriter`] exactly once. Real
//! runs use [`SystemClipboard`]; tests use [`MemoryClipboard`].

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{ExtractError, Result};

/// Something that can replace the contents of a clipboard.
pub trait ClipboardWriter {
    /// Replaces the clipboard contents with `text`.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// In-memory clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that already holds `text`.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// The operating system clipboard, reached through an external utility that
/// reads the new contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Uses an explicit utility, e.g. `xsel` with `["--clipboard", "--input"]`.
    pub fn command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Picks the usual clipboard utility for this platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::command("pbcopy", Vec::<String>::new())
        } else if cfg!(windows) {
            Self::command("clip", Vec::<String>::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::command("wl-copy", Vec::<String>::new())
        } else {
            Self::command("xclip", ["-selection", "clipboard"])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        tracing::debug!(program = %self.program, bytes = text.len(), "writing clipboard");

        // xclip and wl-copy fork to serve the selection; the fork must not
        // hold a pipe we wait on.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ExtractError::clipboard(&self.program, e))?;

        let written = match child.stdin.take() {
            // stdin is dropped at the end of the arm so the utility sees EOF.
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| ExtractError::clipboard(&self.program, e))?;
        if !status.success() {
            return Err(ExtractError::clipboard(&self.program, status));
        }
        written.map_err(|e| ExtractError::clipboard(&self.program, e))
    }
}
