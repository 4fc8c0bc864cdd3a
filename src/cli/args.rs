use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "postpone")]
#[command(about = "Turn postponement phrases like \"for a few days\" into due dates")]
#[command(long_about = "postpone - resolve postponement phrases into due dates

Parses the words that follow a /postpone command and works out when the
task should come back, in your timezone.

QUICK START:
  postpone resolve for 3h                 Three hours from now
  postpone resolve to the next week       Next Monday at 00:00
  postpone resolve for a few days         2-5 days from now, at 00:00
  postpone parse to friday                Show the parsed command

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  postpone <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting, which is
    /// 'pretty' unless changed.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Use this config file instead of ~/.postpone/config.yaml
    #[arg(long, global = true, env = "POSTPONE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a postponement phrase and show the command tree
    ///
    /// # Examples
    ///
    ///   postpone parse for 1h
    ///   postpone parse to the next month
    ///   postpone parse /postpone for a few days -o json
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Resolve a postponement phrase into a due time
    ///
    /// # Supported Phrases
    ///
    ///   for 3600            seconds
    ///   for 3h, for 2d      hours, days (time of day kept)
    ///   for a few hours     2-5 hours
    ///   for a few days      2-5 days, at 00:00
    ///   to tomorrow         tomorrow at 00:00
    ///   to the next week    next Monday at 00:00
    ///   to the next month   the 1st of next month at 00:00
    ///   to friday, to fri   the next Friday at 00:00 (never today)
    ///   to the weekend      the next Saturday at 00:00
    ///   to 1571475504       that day at 00:00
    ///
    /// # Examples
    ///
    ///   postpone resolve for a few days --tz Europe/Moscow
    ///   postpone resolve to friday --now 2019-10-16T15:00:00Z
    ///   postpone resolve for a few hours --seed 42 -o json
    #[command(alias = "r")]
    Resolve(ResolveArgs),

    /// List the suggested quick replies
    Suggest,

    /// Show or change configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// The postponement phrase, e.g. `for a few days`
    #[arg(required = true, num_args = 1.., value_name = "WORDS")]
    pub words: Vec<String>,
}

impl ParseArgs {
    /// The words joined back into one phrase.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args)]
pub struct ResolveArgs {
    /// The postponement phrase, e.g. `to the next week`
    #[arg(required = true, num_args = 1.., value_name = "WORDS")]
    pub words: Vec<String>,

    /// IANA timezone to resolve in (defaults to the configured timezone)
    #[arg(long, env = "POSTPONE_TZ", value_name = "TZ")]
    pub tz: Option<String>,

    /// Anchor time in RFC 3339 (defaults to now)
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,

    /// Seed for the "few hours"/"few days" draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Task name to include in the confirmation
    #[arg(long)]
    pub task: Option<String>,
}

impl ResolveArgs {
    /// The words joined back into one phrase.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set the default timezone
    ///
    /// # Examples
    ///
    ///   postpone config timezone Europe/Moscow
    Timezone {
        /// IANA timezone name
        name: String,
    },
}
