use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;

use super::Resolution;
use crate::config::Config;
use crate::error::PostponeError;
use crate::features::postpone::{
    confirmation, Command, ForSpec, TimeUnit, ToSpec, VaguePhrase, FEW_DAYS, FEW_HOURS,
};

/// Format a parsed command as a short description
#[must_use]
pub fn format_command_pretty(command: &Command) -> String {
    let (kind, detail) = match command {
        Command::For(ForSpec::Duration { amount, unit }) => {
            let unit = match unit {
                None | Some(TimeUnit::Seconds) => "seconds",
                Some(TimeUnit::Hours) => "hours",
                Some(TimeUnit::Days) => "days",
            };
            ("relative", format!("{amount} {unit}"))
        },
        Command::For(ForSpec::Vague { phrase }) => {
            let (range, unit) = match phrase {
                VaguePhrase::FewHours => (FEW_HOURS, "hours"),
                VaguePhrase::FewDays => (FEW_DAYS, "days, at 00:00"),
            };
            (
                "relative (random)",
                format!("{}-{} {unit}", range.start(), range.end()),
            )
        },
        Command::To(ToSpec::NamedTarget { phrase }) => ("absolute", format!("{phrase}, at 00:00")),
        Command::To(ToSpec::Timestamp { value }) => {
            let day = DateTime::from_timestamp(*value, 0).map_or_else(
                || "out of range".to_string(),
                |dt| dt.format("%Y-%m-%d UTC").to_string(),
            );
            ("absolute", format!("{value} ({day}), at 00:00"))
        },
    };

    let mut output = format!("{}\n", command.to_string().bold());
    let _ = writeln!(output, "  {}: {kind}", "Type".dimmed());
    let _ = write!(output, "  {}: {detail}", "Target".dimmed());
    output
}

/// Format a resolved due time
#[must_use]
pub fn format_resolution_pretty(resolution: &Resolution<'_>) -> String {
    let due = &resolution.due;

    let mut output = format!("{}\n", confirmation(resolution.task, due).green().bold());
    let _ = writeln!(
        output,
        "  {}: {} ({})",
        "Due".dimmed(),
        due.to_rfc3339_opts(SecondsFormat::Secs, true).yellow(),
        due.timezone().name()
    );
    let _ = writeln!(
        output,
        "  {}: {}",
        "UTC".dimmed(),
        due.with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let _ = write!(
        output,
        "  {}: {}",
        "Command".dimmed(),
        resolution.command.to_string().cyan()
    );
    output
}

/// Format suggested replies as a list
#[must_use]
pub fn format_suggestions_pretty(replies: &[&str]) -> String {
    let mut output = format!("Suggested replies ({} items)\n", replies.len());
    output.push_str(&"─".repeat(40));
    for reply in replies {
        let _ = write!(output, "\n  /postpone {reply}");
    }
    output
}

/// Format the configuration as YAML
///
/// # Errors
///
/// Returns `PostponeError::Config` if YAML serialization fails.
pub fn format_config_pretty(config: &Config) -> Result<String, PostponeError> {
    serde_yaml::to_string(config)
        .map(|yaml| yaml.trim_end().to_string())
        .map_err(|e| PostponeError::Config(format!("Failed to serialize config: {e}")))
}
