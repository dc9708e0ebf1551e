//! Submission form state
//!
//! Single source of truth for everything the form surface shows: field
//! values, character count, busy flag, result visibility and the copy label.
//! Mutated only by the submission controller.

use super::copy_label::CopyLabel;
use crate::core::{
    model::{DEFAULT_MODEL, ModelId},
    text::{Validity, char_count},
};
use crate::submission::rendered::RenderedSummary;

/// Central form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    // -- Fields --
    pub text: String,
    pub model: String,

    // -- Live validation --
    pub char_count: usize,
    pub validity: Validity,

    // -- Submission lifecycle --
    pub busy: bool,

    // -- Result surface --
    /// Last rendered summary; kept while hidden, like a hidden DOM region
    pub result: Option<RenderedSummary>,
    pub result_visible: bool,

    // -- Copy trigger --
    pub copy_label: CopyLabel,
    /// Bumped on every acknowledgement so a stale revert can be ignored
    pub copy_generation: u64,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            text: String::new(),
            model: DEFAULT_MODEL.to_string(),
            char_count: 0,
            validity: Validity::Invalid,
            busy: false,
            result: None,
            result_visible: false,
            copy_label: CopyLabel::Copy,
            copy_generation: 0,
        }
    }
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Field editing --

    /// Replace the text field; the count uses the untrimmed value
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_count = char_count(&self.text);
        self.validity = Validity::for_length(self.char_count);
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn resolved_model(&self) -> ModelId {
        ModelId::resolve(&self.model)
    }

    /// Counter label, e.g. `"120 characters"`
    pub fn char_count_label(&self) -> String {
        format!("{} characters", self.char_count)
    }

    // -- Busy --

    pub fn enter_busy(&mut self) {
        self.busy = true;
        self.result_visible = false;
    }

    pub fn exit_busy(&mut self) {
        self.busy = false;
    }

    pub fn submit_enabled(&self) -> bool {
        !self.busy
    }

    pub fn progress_visible(&self) -> bool {
        self.busy
    }

    // -- Result --

    pub fn show_result(&mut self, rendered: RenderedSummary) {
        self.result = Some(rendered);
        self.result_visible = true;
    }

    /// Trimmed plain text of the result region, empty when nothing rendered
    pub fn result_text(&self) -> &str {
        self.result.as_ref().map(|r| r.copy_text()).unwrap_or("")
    }

    // -- Copy acknowledgement --

    /// Switch to `Copied` and return the generation a revert must match
    pub fn acknowledge_copy(&mut self) -> u64 {
        self.copy_generation += 1;
        self.copy_label = CopyLabel::Copied;
        self.copy_generation
    }

    /// Revert to `Copy` unless a newer acknowledgement happened since.
    /// Returns whether the label changed.
    pub fn revert_copy_label(&mut self, generation: u64) -> bool {
        if generation == self.copy_generation && self.copy_label == CopyLabel::Copied {
            self.copy_label = CopyLabel::Copy;
            true
        } else {
            false
        }
    }
}
