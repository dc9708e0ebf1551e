//! HTTP adapter for the summarization backend

pub mod gateway;

pub use gateway::HttpSummarizerGateway;
