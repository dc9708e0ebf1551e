//! Presentation layer for pareto
//!
//! This crate contains the CLI definition, the console view of the
//! summarization form, and the interactive form REPL.

pub mod cli;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleView;
pub use repl::{FormCommand, FormRepl, parse_input};
