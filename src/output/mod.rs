//! Output formatting for postpone.
//!
//! This module renders parsed commands and resolved due times in the
//! selected output format.

mod json;
mod pretty;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PostponeError;
use crate::features::postpone::Command;

pub use json::*;
pub use pretty::*;

/// A resolved postponement ready for display.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// The parsed command.
    pub command: Command,
    /// Anchor time the command was resolved against.
    pub now: DateTime<Tz>,
    /// Resulting due time, in the anchor's zone.
    pub due: DateTime<Tz>,
    /// Optional task name for the confirmation line.
    pub task: Option<&'a str>,
}

/// Format a parsed command based on output format
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_command(
    command: &Command,
    input: &str,
    format: OutputFormat,
) -> Result<String, PostponeError> {
    match format {
        OutputFormat::Pretty => Ok(format_command_pretty(command)),
        OutputFormat::Json => format_command_json(command, input),
    }
}

/// Format a resolved due time based on output format
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_resolution(
    resolution: &Resolution<'_>,
    format: OutputFormat,
) -> Result<String, PostponeError> {
    match format {
        OutputFormat::Pretty => Ok(format_resolution_pretty(resolution)),
        OutputFormat::Json => format_resolution_json(resolution),
    }
}

/// Format the suggested replies based on output format
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_suggestions(replies: &[&str], format: OutputFormat) -> Result<String, PostponeError> {
    match format {
        OutputFormat::Pretty => Ok(format_suggestions_pretty(replies)),
        OutputFormat::Json => format_suggestions_json(replies),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PostponeError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => to_json(config),
    }
}
