/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! 12-hour clock parsing and ordering.
//!
//! Every time string in a schedule (`"10:30am"`, `"01:30 PM"`, `"2pm"`) is
//! converted once into a [`TimeOfDay`] ordinal (minutes since midnight) and
//! all later comparisons happen on integers.
//!
//! | Text | Ordinal |
//! |---|---|
//! | `12:00am` | 0 |
//! | `9:05am` | 545 |
//! | `12:00pm` | 720 |
//! | `11:59pm` | 1439 |
//!
//! Parsing is strict: a wrong ordinal would silently move a column in the
//! column builder, so anything that is not a well-formed 12-hour time is a
//! [`ParseError`].

pub mod error;

pub use error::ParseError;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Minutes since midnight, always in `0..=1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Last representable minute of the day (`11:59pm`).
    pub const MAX_MINUTES: u16 = 1439;

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Parse a 12-hour clock string.
    ///
    /// Case and whitespace are ignored, the leading zero and the `:mm` part
    /// are optional (`"2pm"` is `14:00`).
    ///
    /// # Errors
    /// * [`ParseError::MissingMeridiem`] – no trailing `am`/`pm`.
    /// * [`ParseError::InvalidHour`] / [`ParseError::InvalidMinute`] – a
    ///   component is empty or not made of ASCII digits only.
    /// * [`ParseError::OutOfRange`] – hour not in `1..=12` or minute not in
    ///   `0..=59`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let (body, is_pm) = if let Some(body) = normalized.strip_suffix("pm") {
            (body, true)
        } else if let Some(body) = normalized.strip_suffix("am") {
            (body, false)
        } else {
            return Err(ParseError::MissingMeridiem {
                input: text.to_string(),
            });
        };

        let (hour_text, minute_text) = match body.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (body, None),
        };

        let hour = digits(hour_text).ok_or_else(|| ParseError::InvalidHour {
            input: text.to_string(),
        })?;
        let minute = match minute_text {
            Some(m) => digits(m).ok_or_else(|| ParseError::InvalidMinute {
                input: text.to_string(),
            })?,
            None => 0,
        };

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(ParseError::OutOfRange {
                input: text.to_string(),
                hour,
                minute,
            });
        }

        // 12am → 0h, 12pm → 12h, otherwise pm adds 12h
        let hour24 = (hour % 12) + if is_pm { 12 } else { 0 };

        Ok(TimeOfDay((hour24 * 60 + minute) as u16))
    }
}

/// Unsigned decimal component; signs and other non-digits are rejected.
fn digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

/// Canonical form: two-digit hour, two-digit minute, lower-case suffix
/// (`"01:30pm"`).
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour24 = self.0 / 60;
        let minute = self.0 % 60;
        let suffix = if hour24 >= 12 { "pm" } else { "am" };
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02}{}", hour12, minute, suffix)
    }
}

/// Total order on parsed times; plain integer comparison of the ordinals.
pub fn compare(a: TimeOfDay, b: TimeOfDay) -> Ordering {
    a.0.cmp(&b.0)
}

// ── TimeInterval ──────────────────────────────────────────────────────────────

/// A `[start, end]` pair of parsed times.
///
/// Malformed intervals (`start >= end`) are accepted as-is; the column
/// builder and grid assembler compare them like any other interval and the
/// output position is whatever falls out of those comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse both ends of an interval.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }

    /// `true` when `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// `true` when `self` starts at or before `other` and ends at or after it.
    ///
    /// This is the predicate the grid assembler uses to decide whether an
    /// entry occupies a column.
    pub fn covers(&self, other: &TimeInterval) -> bool {
        compare(self.start, other.start) != Ordering::Greater
            && compare(self.end, other.end) != Ordering::Less
    }

    /// `true` when the two intervals share any time (touching ends do not
    /// count).
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
