//! Markdown rendering for the result surface
//!
//! - [`markdown::CommonMarkRenderer`] - markdown → HTML fragment
//! - [`text::html_to_text`] - visible plain text of a fragment

pub mod markdown;
pub mod text;

pub use markdown::CommonMarkRenderer;
pub use text::html_to_text;
