//! Config command implementation.

use std::path::Path;

use tracing::debug;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::core::parse_timezone;
use crate::error::PostponeError;
use crate::output::{format_config, to_json};

/// Execute config subcommands
///
/// `path` is the config file given on the command line, if any; changes
/// are written there instead of `~/.postpone/config.yaml`.
///
/// # Errors
///
/// Returns an error if the timezone is unknown or the config cannot be written.
pub fn config(
    cmd: ConfigCommands,
    mut config: Config,
    path: Option<&Path>,
    format: OutputFormat,
) -> Result<String, PostponeError> {
    match cmd {
        ConfigCommands::Show => format_config(&config, format),
        ConfigCommands::Timezone { name } => {
            let tz = parse_timezone(&name)?;
            config.postpone.timezone = tz.name().to_string();
            match path {
                Some(path) => config.save_to_path(path)?,
                None => config.save()?,
            }
            debug!(timezone = tz.name(), "saved default timezone");

            match format {
                OutputFormat::Json => to_json(&config.postpone),
                OutputFormat::Pretty => Ok(format!("Default timezone set to {}", tz.name())),
            }
        },
    }
}
