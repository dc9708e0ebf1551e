//! Core value objects shared by the form and the submission.
//!
//! - [`text::SubmissionText`] - text within the accepted length bounds
//! - [`model::ModelId`] - backend model identifier
//! - [`error::ValidationError`] - why a text was rejected

pub mod error;
pub mod model;
pub mod string;
pub mod text;
