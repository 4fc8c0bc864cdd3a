//! Parse command implementation.

use tracing::debug;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::PostponeError;
use crate::features::postpone::parse_command;
use crate::output::format_command;

/// Execute parse command
///
/// # Errors
///
/// Returns an error if the phrase is not understood or output formatting fails.
pub fn parse_phrase(args: &ParseArgs, format: OutputFormat) -> Result<String, PostponeError> {
    let text = args.text();
    let command = parse_command(&text)?;
    debug!(input = %text, %command, "parsed phrase");
    format_command(&command, &text, format)
}
