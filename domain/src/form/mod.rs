//! Form surface state, kept as plain data so the submission workflow can be
//! driven and inspected without any rendering surface.

pub mod copy_label;
pub mod state;
