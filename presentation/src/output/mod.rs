//! Terminal output for the summarization form

pub mod console;
