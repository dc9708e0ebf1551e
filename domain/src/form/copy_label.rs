//! Label of the copy trigger

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the acknowledgement label stays up after a successful copy
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyLabel {
    /// Idle
    #[default]
    Copy,
    /// Transient acknowledgement after a successful clipboard write
    Copied,
}

impl CopyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied",
        }
    }
}

impl std::fmt::Display for CopyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
