//! Postponement expressions.
//!
//! This module turns commands like these into due dates:
//! - "for 3h", "for 2d", "for 3600"
//! - "for a few hours", "for a few days"
//! - "to tomorrow", "to the next week", "to friday", "to 1571475504"

mod command;
mod parser;
mod reply;
mod resolver;

pub use crate::error::{ParseError, ResolveError};
pub use command::{Command, ForSpec, NamedPhrase, TimeUnit, ToSpec, VaguePhrase};
pub use parser::{normalize_command, parse, parse_command, SUGGESTED_REPLIES};
pub use reply::{confirmation, escape_markdown, format_due};
pub use resolver::{resolve, FEW_DAYS, FEW_HOURS};
