//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod clipboard;
pub mod renderer;
pub mod summarizer;
pub mod view;
