//! Application layer for pareto
//!
//! This crate contains the submission controller and the port definitions
//! it drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    clipboard::{Clipboard, ClipboardError, NoClipboard},
    renderer::MarkdownRenderer,
    summarizer::{GatewayError, SummarizerGateway},
    view::{NoView, SubmissionView},
};
pub use use_cases::submission_controller::{
    COPY_FAILED_MESSAGE, CopyOutcome, SubmissionController, SubmitError,
};
