//! pulldown-cmark implementation of [`MarkdownRenderer`]

use super::text::html_to_text;
use pareto_application::MarkdownRenderer;
use pareto_domain::RenderedSummary;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark renderer with the GitHub-flavoured extensions summaries use
/// (tables, strikethrough, task lists)
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    /// Markdown to an HTML fragment
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> RenderedSummary {
        let html = self.to_html(markdown);
        let text = html_to_text(&html);
        RenderedSummary { html, text }
    }
}
