//! JSON output formatting for postpone.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use super::Resolution;
use crate::error::PostponeError;
use crate::features::postpone::{confirmation, Command};

/// Format a parsed command as JSON
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_command_json(command: &Command, input: &str) -> Result<String, PostponeError> {
    let output = json!({
        "input": input,
        "canonical": command.to_string(),
        "tree": command,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a resolved due time as JSON
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_resolution_json(resolution: &Resolution<'_>) -> Result<String, PostponeError> {
    let output = json!({
        "command": resolution.command.to_string(),
        "tree": resolution.command,
        "timezone": resolution.due.timezone().name(),
        "now": resolution.now.to_rfc3339_opts(SecondsFormat::Secs, true),
        "due": resolution.due.to_rfc3339_opts(SecondsFormat::Secs, true),
        "due_utc": resolution
            .due
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        "task": resolution.task,
        "message": confirmation(resolution.task, &resolution.due),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format suggested replies as JSON
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn format_suggestions_json(replies: &[&str]) -> Result<String, PostponeError> {
    let output = json!({
        "count": replies.len(),
        "items": replies
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PostponeError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PostponeError> {
    Ok(serde_json::to_string_pretty(value)?)
}
