//! Postponement command tree.
//!
//! A [`Command`] is built by the parser and consumed once by the resolver.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A parsed postponement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "spec", rename_all = "snake_case")]
pub enum Command {
    /// Relative postponement (`for 3h`, `for a few days`).
    For(ForSpec),
    /// Absolute-target postponement (`to tomorrow`, `to 1571475504`).
    To(ToSpec),
}

/// What follows `for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForSpec {
    /// An exact amount. A missing unit means raw seconds.
    Duration {
        amount: u64,
        unit: Option<TimeUnit>,
    },
    /// A randomized range.
    Vague { phrase: VaguePhrase },
}

/// What follows `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToSpec {
    /// A calendar reference point.
    NamedTarget { phrase: NamedPhrase },
    /// Unix epoch seconds.
    Timestamp { value: i64 },
}

/// Unit attached to a `for` amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// `h` suffix.
    Hours,
    /// `d` suffix.
    Days,
    /// Explicit seconds. The grammar never produces this; bare integers are
    /// already seconds.
    Seconds,
}

impl TimeUnit {
    /// Short suffix used when rendering an amount.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Seconds => 's',
        }
    }

    /// Map a suffix character to a unit.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            _ => None,
        }
    }
}

/// Randomized `for` phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaguePhrase {
    /// `few hours`
    FewHours,
    /// `few days`
    FewDays,
}

/// Named `to` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedPhrase {
    Tomorrow,
    NextWeek,
    NextMonth,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    /// Alias for the coming Saturday.
    Weekend,
}

impl NamedPhrase {
    /// Look up a single-word weekday name or its three-letter abbreviation.
    #[must_use]
    pub fn weekday_from_word(word: &str) -> Option<Self> {
        match word {
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            "saturday" | "sat" => Some(Self::Saturday),
            "sunday" | "sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// The weekday this phrase lands on, if it is weekday-based.
    ///
    /// `next week` counts as Monday and `weekend` as Saturday.
    #[must_use]
    pub const fn target_weekday(self) -> Option<Weekday> {
        match self {
            Self::NextWeek | Self::Monday => Some(Weekday::Mon),
            Self::Tuesday => Some(Weekday::Tue),
            Self::Wednesday => Some(Weekday::Wed),
            Self::Thursday => Some(Weekday::Thu),
            Self::Friday => Some(Weekday::Fri),
            Self::Weekend | Self::Saturday => Some(Weekday::Sat),
            Self::Sunday => Some(Weekday::Sun),
            Self::Tomorrow | Self::NextMonth => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Tomorrow => "tomorrow",
            Self::NextWeek => "next week",
            Self::NextMonth => "next month",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
            Self::Weekend => "weekend",
        }
    }
}

impl fmt::Display for NamedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VaguePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FewHours => "few hours",
            Self::FewDays => "few days",
        })
    }
}

impl fmt::Display for ForSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration { amount, unit: None } => write!(f, "{amount}"),
            Self::Duration {
                amount,
                unit: Some(unit),
            } => write!(f, "{amount}{}", unit.suffix()),
            Self::Vague { phrase } => write!(f, "a {phrase}"),
        }
    }
}

impl fmt::Display for ToSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedTarget {
                phrase: phrase @ (NamedPhrase::NextWeek | NamedPhrase::NextMonth),
            } => write!(f, "the {phrase}"),
            Self::NamedTarget { phrase } => write!(f, "{phrase}"),
            Self::Timestamp { value } => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::For(spec) => write!(f, "for {spec}"),
            Self::To(spec) => write!(f, "to {spec}"),
        }
    }
}
