//! Domain layer for pareto
//!
//! This crate contains the value objects and the explicit form state that the
//! submission workflow operates on. It has no dependencies on transport,
//! rendering or terminal concerns.
//!
//! # Core Concepts
//!
//! - **SubmissionText**: text that has passed the length bounds check
//! - **ModelId**: opaque backend model identifier with a fixed default
//! - **SubmissionState**: everything the form surface shows, as plain data

pub mod core;
pub mod form;
pub mod submission;

// Re-export commonly used types
pub use core::{
    error::ValidationError,
    model::{DEFAULT_MODEL, ModelId},
    string::preview,
    text::{MAX_TEXT_CHARS, MIN_TEXT_CHARS, SubmissionText, Validity, char_count},
};
pub use form::{
    copy_label::{COPY_ACK_DURATION, CopyLabel},
    state::SubmissionState,
};
pub use submission::{
    rendered::RenderedSummary,
    request::{FALLBACK_ERROR_MESSAGE, SubmissionRequest, SubmissionResult, SummaryResponseBody},
};
