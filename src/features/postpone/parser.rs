//! Postponement expression parser.
//!
//! # Grammar
//!
//! ```text
//! command   := "for" article? for_time
//!            | "to"  article? to_time
//! article   := "a" | "the"
//! for_time  := "few" ("hours" | "days")
//!            | INTEGER ("h" | "d")?
//! to_time   := "tomorrow" | "next" ("week" | "month")
//!            | weekday | "weekend"
//!            | INTEGER
//! weekday   := "monday" | "mon" | ... | "sunday" | "sun"
//! ```
//!
//! Input is lowercased and split on whitespace. Each branch is chosen by a
//! single lookahead token, so the parse never backtracks. A unit suffix is
//! written directly after its digits (`3h`, `2d`).

use tracing::trace;

use super::command::{Command, ForSpec, NamedPhrase, TimeUnit, ToSpec, VaguePhrase};
use crate::error::ParseError;

const EXPECTED_KEYWORD: &str = "'for' or 'to'";
const EXPECTED_FOR_TIME: &str = "an amount like '3h' or 'few hours'/'few days'";
const EXPECTED_VAGUE_UNIT: &str = "'hours' or 'days'";
const EXPECTED_TO_TIME: &str = "'tomorrow', 'next week', 'next month', a weekday or a timestamp";
const EXPECTED_NEXT_UNIT: &str = "'week' or 'month'";

/// Quick-reply phrases offered after a status request.
///
/// Every entry parses.
pub const SUGGESTED_REPLIES: [&str; 5] = [
    "for a few hours",
    "to tomorrow",
    "for a few days",
    "to the next week",
    "to the next month",
];

/// A whitespace-delimited word and its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl Token<'_> {
    fn unexpected(self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            token: self.text.to_string(),
            offset: self.offset,
            expected,
        }
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &input[s..i],
                    offset: s,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &input[s..],
            offset: s,
        });
    }

    tokens
}

/// Split a token into its leading ASCII digits and the rest.
///
/// Returns `None` when the token does not start with a digit.
fn split_number(text: &str) -> Option<(&str, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    Some(text.split_at(end))
}

fn timestamp(token: Token<'_>) -> Result<ToSpec, ParseError> {
    match split_number(token.text) {
        Some((digits, "")) => digits
            .parse()
            .map(|value| ToSpec::Timestamp { value })
            .map_err(|_| ParseError::InvalidInteger {
                token: token.text.to_string(),
                offset: token.offset,
            }),
        _ => Err(token.unexpected(EXPECTED_TO_TIME)),
    }
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: tokenize(input),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next_token(&mut self, expected: &'static str) -> Result<Token<'a>, ParseError> {
        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    /// Consume the next token if it is one of `words`.
    fn eat_any(&mut self, words: &[&str]) -> bool {
        match self.peek() {
            Some(token) if words.contains(&token.text) => {
                self.pos += 1;
                true
            },
            _ => false,
        }
    }

    fn command(&mut self) -> Result<Command, ParseError> {
        let keyword = self.next_token(EXPECTED_KEYWORD)?;
        match keyword.text {
            "for" => {
                self.eat_any(&["a", "the"]);
                self.for_time().map(Command::For)
            },
            "to" => {
                self.eat_any(&["a", "the"]);
                self.to_time().map(Command::To)
            },
            _ => Err(keyword.unexpected(EXPECTED_KEYWORD)),
        }
    }

    fn for_time(&mut self) -> Result<ForSpec, ParseError> {
        let token = self.next_token(EXPECTED_FOR_TIME)?;

        if token.text == "few" {
            let unit = self.next_token(EXPECTED_VAGUE_UNIT)?;
            let phrase = match unit.text {
                "hours" => VaguePhrase::FewHours,
                "days" => VaguePhrase::FewDays,
                _ => return Err(unit.unexpected(EXPECTED_VAGUE_UNIT)),
            };
            return Ok(ForSpec::Vague { phrase });
        }

        let Some((digits, suffix)) = split_number(token.text) else {
            return Err(token.unexpected(EXPECTED_FOR_TIME));
        };
        let amount: u64 = digits.parse().map_err(|_| ParseError::InvalidInteger {
            token: token.text.to_string(),
            offset: token.offset,
        })?;

        let mut chars = suffix.chars();
        let unit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if TimeUnit::from_suffix(c).is_some() => TimeUnit::from_suffix(c),
            _ => {
                return Err(ParseError::UnknownUnit {
                    token: token.text.to_string(),
                    offset: token.offset,
                })
            },
        };

        Ok(ForSpec::Duration { amount, unit })
    }

    fn to_time(&mut self) -> Result<ToSpec, ParseError> {
        let token = self.next_token(EXPECTED_TO_TIME)?;

        let phrase = match token.text {
            "tomorrow" => NamedPhrase::Tomorrow,
            "weekend" => NamedPhrase::Weekend,
            "next" => {
                let unit = self.next_token(EXPECTED_NEXT_UNIT)?;
                match unit.text {
                    "week" => NamedPhrase::NextWeek,
                    "month" => NamedPhrase::NextMonth,
                    _ => return Err(unit.unexpected(EXPECTED_NEXT_UNIT)),
                }
            },
            word => match NamedPhrase::weekday_from_word(word) {
                Some(day) => day,
                None => return timestamp(token),
            },
        };

        Ok(ToSpec::NamedTarget { phrase })
    }

    fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) => Err(ParseError::TrailingInput {
                token: token.text.to_string(),
                offset: token.offset,
            }),
            None => Ok(()),
        }
    }
}

/// Parse a postponement expression.
///
/// Matching is case-insensitive; articles after `for`/`to` are optional.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending token when the text does
/// not match the grammar, including when a complete command is followed by
/// extra words.
///
/// # Examples
///
/// ```
/// use postpone::{parse, Command, ForSpec, TimeUnit};
///
/// let command = parse("for 1h").unwrap();
/// assert_eq!(
///     command,
///     Command::For(ForSpec::Duration { amount: 1, unit: Some(TimeUnit::Hours) })
/// );
/// assert!(parse("for purple").is_err());
/// ```
pub fn parse(text: &str) -> Result<Command, ParseError> {
    let lowered = text.to_lowercase();
    let mut parser = Parser::new(&lowered);

    if parser.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let command = parser.command()?;
    parser.finish()?;

    trace!(input = text, %command, "parsed postponement");
    Ok(command)
}

/// Normalize raw message text into parser input.
///
/// Lowercases, collapses whitespace and drops a leading `/postpone` or
/// `/postpone@botname` token.
#[must_use]
pub fn normalize_command(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut words = lowered.split_whitespace().peekable();

    if let Some(first) = words.peek().copied() {
        if first.split('@').next() == Some("/postpone") {
            words.next();
        }
    }

    words.collect::<Vec<_>>().join(" ")
}

/// Normalize raw message text and parse it.
///
/// # Errors
///
/// Returns a [`ParseError`] when the normalized text does not match the
/// grammar.
pub fn parse_command(text: &str) -> Result<Command, ParseError> {
    parse(&normalize_command(text))
}
