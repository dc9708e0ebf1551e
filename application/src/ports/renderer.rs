//! Markdown renderer port

use pareto_domain::RenderedSummary;

/// Turns a markdown summary into what the result surface displays.
///
/// Optional for the controller: without one the markdown is shown as-is.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> RenderedSummary;
}
