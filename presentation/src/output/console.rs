//! Console rendition of the summarization form
//!
//! The summary goes to stdout so it can be piped; everything else (counter,
//! spinner, alerts, copy acknowledgement) goes to stderr.

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pareto_application::SubmissionView;
use pareto_domain::{CopyLabel, RenderedSummary, Validity};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, trace};

/// Terminal view: colored counter, busy spinner, result on stdout
pub struct ConsoleView {
    format: OutputFormat,
    show_progress: bool,
    show_count: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleView {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_progress: true,
            show_count: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to print the live character counter
    pub fn with_char_count(mut self, show: bool) -> Self {
        self.show_count = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Counter line, green when the length is submittable, red otherwise
    pub fn format_char_count(count: usize, validity: Validity) -> String {
        let label = format!("{} characters", count);
        if validity.is_valid() {
            label.green().to_string()
        } else {
            label.red().to_string()
        }
    }

    /// The part of the rendered summary written to stdout
    pub fn format_result(summary: &RenderedSummary, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Text => summary.text.trim_end(),
            OutputFormat::Html => summary.html.trim_end(),
        }
    }

    fn start_spinner(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Summarizing...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }
}

impl SubmissionView for ConsoleView {
    fn on_char_count(&self, count: usize, validity: Validity) {
        if self.show_count {
            eprintln!("{}", Self::format_char_count(count, validity));
        }
    }

    fn on_busy_changed(&self, busy: bool) {
        if busy && self.show_progress {
            self.start_spinner();
        } else if !busy {
            self.stop_spinner();
        }
    }

    fn on_result_shown(&self, summary: &RenderedSummary) {
        // The summary must not share a terminal line with the spinner
        self.stop_spinner();
        if summary.is_empty() {
            eprintln!("{}", "(empty summary)".dimmed());
            return;
        }
        println!("{}", Self::format_result(summary, self.format));
    }

    fn on_alert(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{}", message.red());
    }

    fn on_result_hidden(&self) {
        trace!("Result hidden");
    }

    fn on_copy_label(&self, label: CopyLabel) {
        match label {
            CopyLabel::Copied => eprintln!("{}", label.as_str().green()),
            CopyLabel::Copy => debug!("Copy label reverted"),
        }
    }

    fn on_input_resize(&self, line_count: usize) {
        trace!("Input spans {} lines", line_count);
    }
}
