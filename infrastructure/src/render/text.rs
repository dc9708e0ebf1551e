//! Plain-text extraction from rendered HTML
//!
//! Approximates what a browser reports as the visible text of the result
//! region: text nodes in document order, one line per block element.
//! Whitespace in flowing text collapses to single spaces; `<pre>` content
//! is kept verbatim.

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree is not visible text
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Tags that end a line of visible text
const BLOCK_TAGS: [&str; 19] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote", "tr", "table",
    "hr", "dt", "dd", "section", "article",
];

/// Extract visible text from an HTML fragment
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut collector = TextCollector::default();
    collector.collect(fragment.root_element());
    collector.finish()
}

/// Accumulates finished lines plus the flowing text of the current block
#[derive(Default)]
struct TextCollector {
    lines: Vec<String>,
    flow: String,
}

impl TextCollector {
    /// Recursively append text of an element, skipping invisible subtrees
    fn collect(&mut self, element: ElementRef) {
        let tag_name = element.value().name();
        if SKIP_TAGS.contains(&tag_name) {
            return;
        }
        match tag_name {
            "br" => {
                self.flow.push('\n');
                return;
            }
            "pre" => {
                self.push_preformatted(&element.text().collect::<String>());
                return;
            }
            _ => {}
        }

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    // Soft breaks and indentation render as a single space
                    self.flow.extend(
                        text.chars()
                            .map(|c| if c.is_whitespace() { ' ' } else { c }),
                    );
                }
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.collect(child_el);
                    }
                }
                _ => {}
            }
        }

        if matches!(tag_name, "td" | "th") {
            self.flow.push('\t');
        } else if BLOCK_TAGS.contains(&tag_name) {
            self.flow.push('\n');
        }
    }

    fn push_preformatted(&mut self, text: &str) {
        self.flush_flow();
        let text = text.trim_end_matches('\n');
        if !text.trim().is_empty() {
            self.lines.extend(text.lines().map(str::to_string));
        }
    }

    fn flush_flow(&mut self) {
        let cleaned = clean_whitespace(&self.flow);
        if !cleaned.is_empty() {
            self.lines.push(cleaned);
        }
        self.flow.clear();
    }

    fn finish(mut self) -> String {
        self.flush_flow();
        self.lines.join("\n")
    }
}

/// Collapse runs of spaces, trim each line and drop blank lines
fn clean_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| {
            line.split(' ')
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
