//! Wire-level request and result types

use crate::core::{model::ModelId, text::SubmissionText};
use serde::{Deserialize, Serialize};

/// Failure reason used when a non-success response carries no `error` field
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Body of `POST {api_url}/summarize`
///
/// Serializes to `{"text": ..., "model": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub text: SubmissionText,
    pub model: ModelId,
}

impl SubmissionRequest {
    pub fn new(text: SubmissionText, model: ModelId) -> Self {
        Self { text, model }
    }
}

/// Raw JSON body returned by the backend, for any status.
///
/// Both fields are optional on the wire; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one submission as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Markdown summary (possibly empty)
    Success { summary: String },
    /// Reason the backend gave for refusing the request
    Failure { error: String },
}

impl SubmissionResult {
    /// Interpret a decoded body given whether the HTTP status was 2xx.
    ///
    /// A missing or empty `summary` becomes an empty summary; a missing or
    /// empty `error` becomes [`FALLBACK_ERROR_MESSAGE`].
    pub fn from_body(success_status: bool, body: SummaryResponseBody) -> Self {
        if success_status {
            SubmissionResult::Success {
                summary: body.summary.unwrap_or_default(),
            }
        } else {
            let error = body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            SubmissionResult::Failure { error }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}
