//! Use cases (application services)

pub mod submission_controller;
