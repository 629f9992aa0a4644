//! Clipboard access
//!
//! Copying is the only side effect the front end performs with a password.
//! The system implementation shells out to whatever copy tool the platform
//! provides.

use std::io::Write;
use std::process::{Command, Stdio};

use parking_lot::Mutex;

use crate::error::{PassForgeError, Result};

/// Something a password can be copied into
pub trait Clipboard {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`
    fn copy(&self, text: &str) -> Result<()>;
}

type CopyTool = (&'static str, &'static [&'static str]);

const WL_COPY: CopyTool = ("wl-copy", &[]);
const XCLIP: CopyTool = ("xclip", &["-selection", "clipboard"]);
const XSEL: CopyTool = ("xsel", &["--clipboard", "--input"]);

/// A platform copy tool invoked with the text on stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Use an explicit program
    pub fn with_command(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Pick the copy tool for the current platform
    pub fn detect() -> Result<Self> {
        if cfg!(target_os = "macos") {
            return Ok(Self::with_command("pbcopy", &[]));
        }
        if cfg!(target_os = "windows") {
            return Ok(Self::with_command("clip", &[]));
        }

        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        let x11 = std::env::var_os("DISPLAY").is_some();

        let mut candidates: Vec<CopyTool> = Vec::new();
        if wayland {
            candidates.push(WL_COPY);
        }
        if x11 || !wayland {
            candidates.push(XCLIP);
            candidates.push(XSEL);
        }

        for (program, args) in candidates {
            if program_exists(program) {
                tracing::debug!(program, "clipboard tool found");
                return Ok(Self::with_command(program, args));
            }
        }

        Err(PassForgeError::clipboard(
            "none",
            "no clipboard tool found (tried wl-copy, xclip, xsel)",
        ))
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PassForgeError::clipboard(&self.program, e.to_string()))?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                PassForgeError::clipboard(&self.program, "stdin was not captured")
            })?;
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| PassForgeError::clipboard(&self.program, e.to_string()))?;
        }
        // Close stdin so the tool sees EOF.
        drop(child.stdin.take());

        let status = child
            .wait()
            .map_err(|e| PassForgeError::clipboard(&self.program, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(PassForgeError::clipboard(
                &self.program,
                format!("exited with {}", status),
            ))
        }
    }
}

fn program_exists(program: &str) -> bool {
    matches!(
        Command::new("which").arg(program).output(),
        Ok(output) if output.status.success()
    )
}

/// In-process clipboard, useful for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if any
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn copy(&self, text: &str) -> Result<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
