//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated with [`FileConfig::validate`].

mod api;
mod clipboard;
mod model;
mod output;
mod repl;

pub use api::{DEFAULT_API_URL, FileApiConfig};
pub use clipboard::FileClipboardConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.url cannot be empty")]
    EmptyApiUrl,

    #[error("api.url is not an absolute http(s) URL: {0}")]
    InvalidApiUrl(String),

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("clipboard.command cannot contain an empty program name")]
    EmptyClipboardCommand,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Summarization backend
    pub api: FileApiConfig,
    /// Model field defaults
    pub model: FileModelConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive form settings
    pub repl: FileReplConfig,
    /// Clipboard command override
    pub clipboard: FileClipboardConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.api.validate()?;
        self.clipboard.validate()?;
        Ok(())
    }

    /// Effective configuration as TOML, for `--show-config`
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_full_toml_roundtrip_fields() {
        let toml_str = r#"
[api]
url = "https://summaries.example.com/api"
timeout_seconds = 90

[model]
default = "anthropic/claude-3-haiku"

[output]
render = false
color = false

[repl]
history_file = "/tmp/pareto_history"

[clipboard]
command = ["xsel", "--clipboard", "--input"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.url, "https://summaries.example.com/api");
        assert_eq!(config.api.timeout_seconds, Some(90));
        assert_eq!(config.model.default, "anthropic/claude-3-haiku");
        assert!(!config.output.render);
        assert!(!config.output.color);
        assert_eq!(config.repl.history_file.as_deref(), Some("/tmp/pareto_history"));
        assert_eq!(config.clipboard.command, vec!["xsel", "--clipboard", "--input"]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = FileConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[api]"));
        assert!(!rendered.contains("timeout_seconds"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str("[model]\ndefault = \"x/y\"\n").unwrap();
        assert_eq!(config.api, FileApiConfig::default());
        assert!(config.output.render);
    }
}
