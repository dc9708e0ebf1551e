//! Interactive form module
//!
//! Provides a readline-based interactive form for entering and summarizing text.

mod form;

pub use form::{FormCommand, FormRepl, parse_input};
