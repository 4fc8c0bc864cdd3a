//! Resolve command implementation.
//!
//! Picks the timezone, anchor time and random source for a single
//! resolution, then hands off to the resolver.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::core::{parse_anchor, parse_timezone, RandomSource, SeededRandom, ThreadRandom};
use crate::error::PostponeError;
use crate::features::postpone::{parse_command, resolve};
use crate::output::{format_resolution, Resolution};

/// Execute resolve command
///
/// # Errors
///
/// Returns an error if the phrase is not understood, the timezone or
/// anchor is invalid, or the due time cannot be computed.
pub fn resolve_phrase(
    args: &ResolveArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PostponeError> {
    let command = parse_command(&args.text())?;

    let tz = match args.tz.as_deref() {
        Some(name) => parse_timezone(name)?,
        None => config.postpone.timezone()?,
    };
    let now = anchor(args.now.as_deref(), tz)?;

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    debug!(%command, timezone = tz.name(), seeded = args.seed.is_some(), "resolving");

    let due = resolve(command, now, rng.as_mut())?;

    let resolution = Resolution {
        command,
        now,
        due,
        task: args.task.as_deref(),
    };
    format_resolution(&resolution, format)
}

fn anchor(now: Option<&str>, tz: Tz) -> Result<DateTime<Tz>, PostponeError> {
    now.map_or_else(
        || Ok(Utc::now().with_timezone(&tz)),
        |input| parse_anchor(input, tz),
    )
}
