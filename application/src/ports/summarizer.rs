//! Summarizer gateway port
//!
//! Defines the interface for talking to the summarization backend.

use async_trait::async_trait;
use pareto_domain::{SubmissionRequest, SubmissionResult};
use thiserror::Error;

/// Errors that prevent a structured answer from reaching the controller
///
/// A backend that answers with a non-success status and a JSON body is not
/// an error here: it is a [`SubmissionResult::Failure`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out")]
    Timeout,
}

/// Gateway for the summarization backend
///
/// Implementations issue exactly one request per call, with no retry.
#[async_trait]
pub trait SummarizerGateway: Send + Sync {
    async fn summarize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResult, GatewayError>;
}
