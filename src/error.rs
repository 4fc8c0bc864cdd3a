//! Error types for postpone.
//!
//! Parsing and resolution each have their own error enum; [`PostponeError`]
//! wraps them together with the configuration and I/O failures of the CLI.

use chrono::NaiveDate;
use thiserror::Error;

use crate::features::postpone::{NamedPhrase, TimeUnit};

/// Reply shown to the user when a command cannot be understood.
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't understand";

/// Reply shown to the user when resolution hits an internal fault.
pub const INTERNAL_FAILURE: &str = "Sorry, something went wrong while postponing";

/// The command text does not match the postponement grammar.
///
/// Offsets are byte offsets into the lowercased input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("empty command")]
    Empty,

    /// A token that cannot appear at this position.
    #[error("unexpected '{token}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        /// The offending token.
        token: String,
        /// Where it starts.
        offset: usize,
        /// What the grammar allows here.
        expected: &'static str,
    },

    /// The input stopped before the command was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the grammar allows here.
        expected: &'static str,
    },

    /// Digits that do not fit the target integer type.
    #[error("'{token}' at offset {offset} is not a valid integer")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// Where it starts.
        offset: usize,
    },

    /// An amount followed by a suffix other than `h` or `d`.
    #[error("unknown time unit in '{token}' at offset {offset}, expected 'h' or 'd'")]
    UnknownUnit {
        /// The offending token.
        token: String,
        /// Where it starts.
        offset: usize,
    },

    /// A complete command followed by more text.
    #[error("unexpected trailing input '{token}' at offset {offset}")]
    TrailingInput {
        /// The first unconsumed token.
        token: String,
        /// Where it starts.
        offset: usize,
    },
}

impl ParseError {
    /// The offending token, if the error points at one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::UnexpectedToken { token, .. }
            | Self::InvalidInteger { token, .. }
            | Self::UnknownUnit { token, .. }
            | Self::TrailingInput { token, .. } => Some(token),
            Self::Empty | Self::UnexpectedEnd { .. } => None,
        }
    }
}

/// A well-formed command that could not be turned into a due time.
///
/// These indicate a grammar/resolver mismatch or calendar overflow, not bad
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The unit has no resolution rule.
    #[error("no resolution rule for time unit {0:?}")]
    UnsupportedUnit(TimeUnit),

    /// The postponement does not fit the calendar.
    #[error("postponement of {amount} {what} is out of range")]
    OutOfRange {
        /// The requested amount.
        amount: u64,
        /// What is being counted (seconds, hours, days).
        what: &'static str,
    },

    /// The named target lies past the last representable date.
    #[error("no date for '{phrase}' after {from}")]
    NoTargetDate {
        /// The named target.
        phrase: NamedPhrase,
        /// The local date it was counted from.
        from: NaiveDate,
    },

    /// The epoch value cannot be represented as a date.
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    /// Local midnight is skipped by a DST transition on that date.
    #[error("start of day on {date} does not exist in {timezone}")]
    NonexistentLocalTime {
        /// The local date.
        date: NaiveDate,
        /// The IANA zone name.
        timezone: String,
    },
}

/// Main error type for postpone.
#[derive(Debug, Error)]
pub enum PostponeError {
    /// Command text rejected by the parser.
    #[error("Sorry, I don't understand: {0}")]
    Parse(#[from] ParseError),

    /// Parsed command that could not be resolved.
    #[error("failed to resolve due date: {0}")]
    Resolve(#[from] ResolveError),

    /// Unknown IANA timezone name.
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),

    /// Anchor time that is not RFC 3339.
    #[error("invalid anchor time '{input}': {reason}")]
    InvalidAnchor {
        /// What was passed.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PostponeError {
    /// Whether this error is a defect rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Resolve(_))
    }

    /// The message an end user should see.
    ///
    /// Resolver faults are never shown verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(_) => NOT_UNDERSTOOD.to_string(),
            Self::Resolve(_) => INTERNAL_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let err = ParseError::UnexpectedToken {
            token: "purple".to_string(),
            offset: 4,
            expected: "a number or 'few'",
        };
        assert_eq!(
            err.to_string(),
            "unexpected 'purple' at offset 4, expected a number or 'few'"
        );
        assert_eq!(err.token(), Some("purple"));
    }

    #[test]
    fn test_unexpected_end_has_no_token() {
        let err = ParseError::UnexpectedEnd {
            expected: "'hours' or 'days'",
        };
        assert_eq!(err.token(), None);
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_parse_error_user_message() {
        let err = PostponeError::from(ParseError::Empty);
        assert!(!err.is_internal());
        assert_eq!(err.user_message(), NOT_UNDERSTOOD);
        assert_eq!(err.to_string(), "Sorry, I don't understand: empty command");
    }

    #[test]
    fn test_resolve_error_is_internal_and_hidden() {
        let err = PostponeError::from(ResolveError::UnsupportedUnit(TimeUnit::Seconds));
        assert!(err.is_internal());
        assert_eq!(err.user_message(), INTERNAL_FAILURE);
        assert!(err.to_string().contains("Seconds"));
    }

    #[test]
    fn test_no_target_date_display() {
        let err = ResolveError::NoTargetDate {
            phrase: NamedPhrase::NextMonth,
            from: NaiveDate::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("no date for 'next month' after {}", NaiveDate::MAX)
        );
    }

    #[test]
    fn test_nonexistent_local_time_display() {
        let err = ResolveError::NonexistentLocalTime {
            date: NaiveDate::from_ymd_opt(2018, 11, 4).unwrap(),
            timezone: "America/Sao_Paulo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "start of day on 2018-11-04 does not exist in America/Sao_Paulo"
        );
    }

    #[test]
    fn test_timezone_error_message_is_shown() {
        let err = PostponeError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.user_message(), "unknown timezone 'Mars/Olympus'");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostponeError>();
    }
}
