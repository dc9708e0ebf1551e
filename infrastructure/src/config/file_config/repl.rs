//! Interactive form configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw interactive form configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file; defaults to the platform data directory
    pub history_file: Option<String>,
}
