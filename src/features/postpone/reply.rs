//! Reply text for a completed postponement.

use chrono::DateTime;
use chrono_tz::Tz;

/// Escape the characters Telegram-style Markdown treats as markup.
///
/// # Examples
///
/// ```
/// use postpone::features::postpone::escape_markdown;
///
/// assert_eq!(escape_markdown("fix_bug *now*"), r"fix\_bug \*now\*");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Human-readable due time, e.g. `Friday (25 Oct) 00:00`.
#[must_use]
pub fn format_due(due: &DateTime<Tz>) -> String {
    due.format("%A (%d %b) %H:%M").to_string()
}

/// Confirmation message sent after postponing.
///
/// With a task name the name is emphasized and escaped:
/// `Task *Buy milk* postponed to Friday (25 Oct) 00:00`.
#[must_use]
pub fn confirmation(task: Option<&str>, due: &DateTime<Tz>) -> String {
    match task {
        Some(name) => format!(
            "Task *{}* postponed to {}",
            escape_markdown(name),
            format_due(due)
        ),
        None => format!("Postponed to {}", format_due(due)),
    }
}
