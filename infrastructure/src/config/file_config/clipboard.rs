//! Clipboard configuration from TOML (`[clipboard]` section)
//!
//! ```toml
//! [clipboard]
//! command = ["xclip", "-selection", "clipboard"]
//! ```

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Raw clipboard configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClipboardConfig {
    /// Program and arguments reading the text on stdin.
    /// Empty means auto-detect.
    pub command: Vec<String>,
}

impl FileClipboardConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match self.command.first() {
            Some(program) if program.trim().is_empty() => {
                Err(ConfigValidationError::EmptyClipboardCommand)
            }
            _ => Ok(()),
        }
    }
}
