//! Form view port
//!
//! Defines how the controller reports state changes to whatever surface
//! displays the form (terminal, GUI, tests).

use pareto_domain::{CopyLabel, RenderedSummary, Validity};

/// Callbacks for form surface updates
///
/// Called after the corresponding change has been applied to the
/// [`SubmissionState`](pareto_domain::SubmissionState), never while the
/// state lock is held.
pub trait SubmissionView: Send + Sync {
    /// Character count or validity changed
    fn on_char_count(&self, count: usize, validity: Validity);

    /// Busy state entered or left (submit trigger and progress indicator)
    fn on_busy_changed(&self, busy: bool);

    /// A summary was rendered; the surface should reveal and scroll to it
    fn on_result_shown(&self, summary: &RenderedSummary);

    /// Blocking user-facing notice
    fn on_alert(&self, message: &str);

    /// Prior result hidden at the start of a submission
    fn on_result_hidden(&self) {}

    /// Copy trigger label changed
    fn on_copy_label(&self, _label: CopyLabel) {}

    /// Input surface should resize to fit its content
    fn on_input_resize(&self, _line_count: usize) {}
}

/// No-op view for headless use
pub struct NoView;

impl SubmissionView for NoView {
    fn on_char_count(&self, _count: usize, _validity: Validity) {}
    fn on_busy_changed(&self, _busy: bool) {}
    fn on_result_shown(&self, _summary: &RenderedSummary) {}
    fn on_alert(&self, _message: &str) {}
}
