use clap::Parser;
use colored::Colorize;

use postpone::cli::args::{Cli, Commands};
use postpone::cli::commands;
use postpone::config::Config;
use postpone::error::PostponeError;
use postpone::logging;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {e}", "warning".yellow().bold());
    }

    if let Err(e) = run(cli) {
        let message = if e.is_internal() {
            tracing::error!(error = %e, "postponement failed");
            e.user_message()
        } else {
            e.to_string()
        };
        eprintln!("{}: {message}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PostponeError> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse_phrase(&args, format)?,
        Commands::Resolve(args) => commands::resolve_phrase(&args, &config, format)?,
        Commands::Suggest => commands::suggest(format)?,
        Commands::Config(args) => {
            commands::config(args.command, config, cli.config.as_deref(), format)?
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
