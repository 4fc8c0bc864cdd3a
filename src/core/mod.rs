//! Core utilities for postpone.
//!
//! Calendar arithmetic and the injectable random source shared by the
//! resolver and the CLI.

mod datetime;
mod random;

pub use datetime::{first_of_next_month, next_weekday, parse_anchor, parse_timezone, start_of_day};
#[cfg(test)]
pub use random::MockRandomSource;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
