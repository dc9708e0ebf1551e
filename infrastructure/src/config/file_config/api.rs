//! Backend configuration from TOML (`[api]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the summarization backend during local development
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL; requests go to `{url}/summarize`
    pub url: String,
    /// Request timeout in seconds. Unset means wait indefinitely.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }
        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return Err(ConfigValidationError::InvalidApiUrl(url.to_string())),
        }
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
