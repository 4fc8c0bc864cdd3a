//! postpone - turn postponement phrases into due dates
//!
//! This crate parses short commands such as `for a few days` or
//! `to the next week` and resolves them against an anchor time in the
//! user's timezone.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PostponeError;
pub use features::postpone::{
    normalize_command, parse, parse_command, resolve, Command, ForSpec, NamedPhrase, ParseError,
    ResolveError, TimeUnit, ToSpec, VaguePhrase,
};
