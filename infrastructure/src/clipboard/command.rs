//! Clipboard backed by an external command reading stdin

use crate::config::FileClipboardConfig;
use async_trait::async_trait;
use pareto_application::{Clipboard, ClipboardError};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Candidate commands, most specific first
const CANDIDATES: [(&str, &[&str]); 5] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Find the first clipboard command installed on this system
pub fn detect_clipboard_command() -> Option<(PathBuf, Vec<String>)> {
    CANDIDATES.iter().find_map(|(name, args)| {
        which::which(name)
            .ok()
            .map(|path| (path, args.iter().map(|a| a.to_string()).collect()))
    })
}

/// Clipboard that pipes text into a command such as `pbcopy`
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Auto-detect a clipboard command
    pub fn detect() -> Option<Self> {
        let (program, args) = detect_clipboard_command()?;
        info!("Using clipboard command {}", program.display());
        Some(Self::new(program, args))
    }

    /// Use the configured command, or auto-detect when none is configured
    pub fn from_config(config: &FileClipboardConfig) -> Option<Self> {
        match config.command.split_first() {
            Some((program, args)) => Some(Self::new(program, args.to_vec())),
            None => Self::detect(),
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        debug!("Copying {} bytes via {}", text.len(), self.program.display());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ClipboardError::Failed(format!(
                    "Failed to spawn {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::Failed(format!("Failed to write to clipboard: {}", e)))?;
            // Dropping stdin closes the pipe so the command can finish
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ClipboardError::Failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ClipboardError::Failed(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr
            )));
        }

        Ok(())
    }
}
