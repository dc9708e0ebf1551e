//! One request/response exchange with the summarization backend.

pub mod rendered;
pub mod request;
