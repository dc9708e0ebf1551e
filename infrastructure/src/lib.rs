//! Infrastructure layer for pareto
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod clipboard;
pub mod config;
pub mod render;
pub mod summarizer;

// Re-export commonly used types
pub use clipboard::CommandClipboard;
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_API_URL, FileApiConfig, FileClipboardConfig,
    FileConfig, FileModelConfig, FileOutputConfig, FileReplConfig,
};
pub use render::{CommonMarkRenderer, html_to_text};
pub use summarizer::HttpSummarizerGateway;
