//! Command implementations for postpone.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod parse;
mod resolve;

pub use config::config;
pub use parse::parse_phrase;
pub use resolve::resolve_phrase;

use crate::cli::args::OutputFormat;
use crate::error::PostponeError;
use crate::features::postpone::SUGGESTED_REPLIES;
use crate::output::format_suggestions;

/// Execute suggest command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn suggest(format: OutputFormat) -> Result<String, PostponeError> {
    format_suggestions(&SUGGESTED_REPLIES, format)
}
