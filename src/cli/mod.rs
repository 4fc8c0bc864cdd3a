//! Command-line interface for postpone.

pub mod args;
pub mod commands;
