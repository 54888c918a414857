//! Relative-time offset expressions
//!
//! Offsets are the durations template authors type into start/due fields:
//! - Keywords: `same day` (0 days), `next day` (1 day)
//! - Counted units: `3 days`, `2 weeks`, `1 month`, `1 year`
//! - Bare integers count as days: `5` reads as `5 days`
//! - A trailing `later` is accepted and ignored: `3 days later`
//!
//! Months and years resolve to fixed 30/365-day approximations, so parsing
//! never needs to know the anchor date. Parsing is pure string work: no
//! locale, no clock, and identical input always yields an identical offset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OffsetError {
    #[error("Empty offset expression")]
    Empty,

    #[error("Invalid amount: expected a non-negative whole number, got '{0}'")]
    InvalidAmount(String),

    #[error("Unknown time unit: '{0}' (expected day, week, month, or year)")]
    UnknownUnit(String),

    #[error("Unexpected trailing input: '{0}'")]
    TrailingInput(String),
}

/// Time unit for counted offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Returns the fixed number of days in one of this unit
    ///
    /// Months and years are 30/365-day approximations, never calendar-aware.
    pub fn days(&self) -> i64 {
        match self {
            TimeUnit::Day => 1,
            TimeUnit::Week => 7,
            TimeUnit::Month => 30,
            TimeUnit::Year => 365,
        }
    }

    /// Returns the singular unit name
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// Parses a unit word, accepting singular and plural forms
    fn from_word(word: &str) -> Option<TimeUnit> {
        match word {
            "day" | "days" => Some(TimeUnit::Day),
            "week" | "weeks" => Some(TimeUnit::Week),
            "month" | "months" => Some(TimeUnit::Month),
            "year" | "years" => Some(TimeUnit::Year),
            _ => None,
        }
    }
}

/// A resolved relative-time offset
///
/// Keeps which form produced it so [`Display`](fmt::Display) can re-render
/// the canonical expression; re-parsing that rendering yields an equal
/// value. Construction goes through [`FromStr`], so every `Offset` in the
/// system passed the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Offset {
    /// `same day` - zero days
    SameDay,
    /// `next day` - one day
    NextDay,
    /// A counted amount of a unit (`3 days`, `2 weeks`)
    Count { amount: u32, unit: TimeUnit },
}

impl Offset {
    /// Total number of whole days this offset represents
    ///
    /// Never negative: amounts are unsigned and every unit is positive.
    pub fn total_days(&self) -> i64 {
        match self {
            Offset::SameDay => 0,
            Offset::NextDay => 1,
            Offset::Count { amount, unit } => i64::from(*amount) * unit.days(),
        }
    }

    /// Returns true if this offset adds no days
    pub fn is_zero(&self) -> bool {
        self.total_days() == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::SameDay => write!(f, "same day"),
            Offset::NextDay => write!(f, "next day"),
            Offset::Count { amount, unit } => {
                if *amount == 1 {
                    write!(f, "1 {}", unit.label())
                } else {
                    write!(f, "{} {}s", amount, unit.label())
                }
            }
        }
    }
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let mut words: Vec<&str> = normalized.split_whitespace().collect();

        // A trailing "later" is decoration: "3 days later" reads as "3 days".
        // Only stripped when something precedes it, so "later" alone stays
        // invalid.
        if words.len() > 1 && words[words.len() - 1] == "later" {
            words.pop();
        }

        let (offset, rest): (Offset, &[&str]) = match words.as_slice() {
            [] => return Err(OffsetError::Empty),
            ["same", "day", rest @ ..] => (Offset::SameDay, rest),
            ["next", "day", rest @ ..] => (Offset::NextDay, rest),
            [amount] => (
                Offset::Count {
                    amount: parse_amount(amount)?,
                    unit: TimeUnit::Day,
                },
                &[],
            ),
            [amount, unit, rest @ ..] => {
                let amount = parse_amount(amount)?;
                let unit = TimeUnit::from_word(unit)
                    .ok_or_else(|| OffsetError::UnknownUnit((*unit).to_string()))?;
                (Offset::Count { amount, unit }, rest)
            }
        };

        if !rest.is_empty() {
            return Err(OffsetError::TrailingInput(rest.join(" ")));
        }

        Ok(offset)
    }
}

/// Parses the numeric amount of a counted offset
///
/// Only bare digits are accepted: signs, fractions, and spelled-out numbers
/// ("two") are rejected. `u32::from_str` would allow a leading '+', so the
/// digit check runs first.
fn parse_amount(word: &str) -> Result<u32, OffsetError> {
    if !word.chars().all(|c| c.is_ascii_digit()) {
        return Err(OffsetError::InvalidAmount(word.to_string()));
    }

    word.parse::<u32>()
        .map_err(|_| OffsetError::InvalidAmount(word.to_string()))
}

impl TryFrom<String> for Offset {
    type Error = OffsetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Offset> for String {
    fn from(offset: Offset) -> Self {
        offset.to_string()
    }
}
