//! Submission controller
//!
//! Mediates between the form surface and the summarization backend:
//! live character counting, validation, the busy lifecycle of a submission,
//! result rendering and copying the result to the clipboard.
//!
//! All form state lives in a [`SubmissionState`] owned by the controller, so
//! the whole workflow can be driven and inspected without a rendering
//! surface. Surface updates are pushed through [`SubmissionView`].
//!
//! # Flow
//!
//! ```text
//! submit()
//!    ↓ validate length (reject: alert, no request)
//!    ↓ resolve model (blank → default)
//! Busy ──→ POST {text, model} ──→ Success: render, reveal result
//!    │                        └─→ Failure: alert "Error: <reason>"
//!    ↓
//! Idle (always, via drop guard)
//! ```

use crate::ports::clipboard::{Clipboard, ClipboardError};
use crate::ports::renderer::MarkdownRenderer;
use crate::ports::summarizer::{GatewayError, SummarizerGateway};
use crate::ports::view::{NoView, SubmissionView};
use pareto_domain::{
    COPY_ACK_DURATION, CopyLabel, RenderedSummary, SubmissionRequest, SubmissionResult,
    SubmissionState, SubmissionText, ValidationError, preview,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Alert shown when the clipboard write fails
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy";

/// Errors ending a submission. The display string is the user-facing alert.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Transport(#[from] GatewayError),

    #[error("Error: {message}")]
    Backend { message: String },

    #[error("A submission is already in progress")]
    Busy,
}

impl SubmitError {
    /// True if a request reached (or tried to reach) the backend
    pub fn was_sent(&self) -> bool {
        matches!(self, SubmitError::Transport(_) | SubmitError::Backend { .. })
    }
}

/// Result of a copy request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing rendered yet; clipboard untouched
    Empty,
    /// Text written and acknowledgement label shown
    Copied,
}

/// Controller for one summarization form
pub struct SubmissionController {
    gateway: Arc<dyn SummarizerGateway>,
    renderer: Option<Arc<dyn MarkdownRenderer>>,
    clipboard: Arc<dyn Clipboard>,
    view: Arc<dyn SubmissionView>,
    state: Arc<Mutex<SubmissionState>>,
}

impl SubmissionController {
    /// Create a controller without renderer and with a no-op view
    pub fn new(gateway: Arc<dyn SummarizerGateway>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            gateway,
            renderer: None,
            clipboard,
            view: Arc::new(NoView),
            state: Arc::new(Mutex::new(SubmissionState::new())),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_view(mut self, view: Arc<dyn SubmissionView>) -> Self {
        self.view = view;
        self
    }

    /// Pre-fill the model field
    pub fn with_model(self, model: impl Into<String>) -> Self {
        self.lock_state().set_model(model);
        self
    }

    /// Snapshot of the current form state
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Push the initial counter and idle state to the view
    pub fn initialize(&self) {
        let (count, validity, line_count) = {
            let state = self.lock_state();
            (state.char_count, state.validity, state.text.lines().count())
        };
        self.view.on_input_resize(line_count);
        self.view.on_char_count(count, validity);
        self.view.on_busy_changed(false);
        self.view.on_copy_label(CopyLabel::Copy);
    }

    // ==================== Field events ====================

    /// Text field edited: recount, revalidate and resize. Never fails.
    pub fn on_text_changed(&self, text: impl Into<String>) {
        let (count, validity, line_count) = {
            let mut state = self.lock_state();
            state.set_text(text);
            (state.char_count, state.validity, state.text.lines().count())
        };
        self.view.on_input_resize(line_count);
        self.view.on_char_count(count, validity);
    }

    /// Model field edited
    pub fn on_model_changed(&self, model: impl Into<String>) {
        self.lock_state().set_model(model);
    }

    // ==================== Submission ====================

    /// Fill both fields, then submit
    pub async fn submit_with(
        &self,
        text: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<RenderedSummary, SubmitError> {
        self.on_text_changed(text);
        self.on_model_changed(model);
        self.submit().await
    }

    /// Submit the current field values
    ///
    /// Sends at most one request. Busy is set only once validation passed and
    /// is cleared on every exit path, including panics in adapters and the
    /// returned future being dropped.
    pub async fn submit(&self) -> Result<RenderedSummary, SubmitError> {
        let request = {
            let mut state = self.lock_state();

            if state.busy {
                debug!("Submit ignored: a submission is already in progress");
                return Err(SubmitError::Busy);
            }

            let text = match SubmissionText::parse(&state.text) {
                Ok(text) => text,
                Err(e) => {
                    drop(state);
                    debug!("Submit rejected: {}", e);
                    self.view.on_alert(&e.to_string());
                    return Err(e.into());
                }
            };

            state.enter_busy();
            SubmissionRequest::new(text, state.resolved_model())
        };

        let _busy = BusyGuard {
            state: &self.state,
            view: self.view.as_ref(),
        };
        self.view.on_busy_changed(true);
        self.view.on_result_hidden();

        info!(
            "Submitting {} characters to model {}: {}",
            request.text.len(),
            request.model,
            preview(request.text.as_str(), 60)
        );

        let outcome = match self.gateway.summarize(&request).await {
            Ok(SubmissionResult::Success { summary }) => Ok(self.render(&summary)),
            Ok(SubmissionResult::Failure { error }) => Err(SubmitError::Backend { message: error }),
            Err(e) => Err(SubmitError::Transport(e)),
        };

        match outcome {
            Ok(rendered) => {
                debug!("Summary received ({} characters)", rendered.text.len());
                self.lock_state().show_result(rendered.clone());
                self.view.on_result_shown(&rendered);
                Ok(rendered)
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.view.on_alert(&e.to_string());
                Err(e)
            }
        }
    }

    fn render(&self, markdown: &str) -> RenderedSummary {
        match &self.renderer {
            Some(renderer) => renderer.render(markdown),
            None => RenderedSummary::raw(markdown),
        }
    }

    // ==================== Copy ====================

    /// Copy the rendered result's text to the clipboard
    ///
    /// No-op when nothing is rendered. On success the copy label reads
    /// `Copied` for [`COPY_ACK_DURATION`] and then reverts; a later copy
    /// restarts the window. Must be called within a tokio runtime.
    pub async fn on_copy_requested(&self) -> Result<CopyOutcome, ClipboardError> {
        let text = self.lock_state().result_text().to_string();
        if text.is_empty() {
            return Ok(CopyOutcome::Empty);
        }

        if let Err(e) = self.clipboard.write_text(&text).await {
            warn!("Clipboard write failed: {}", e);
            self.view.on_alert(COPY_FAILED_MESSAGE);
            return Err(e);
        }

        let generation = self.lock_state().acknowledge_copy();
        self.view.on_copy_label(CopyLabel::Copied);

        let state = Arc::clone(&self.state);
        let view = Arc::clone(&self.view);
        tokio::spawn(async move {
            tokio::time::sleep(COPY_ACK_DURATION).await;
            let reverted = state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .revert_copy_label(generation);
            if reverted {
                view.on_copy_label(CopyLabel::Copy);
            }
        });

        Ok(CopyOutcome::Copied)
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Leaves the busy state when dropped
struct BusyGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    view: &'a dyn SubmissionView,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .exit_busy();
        self.view.on_busy_changed(false);
    }
}
