/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Error type for 12-hour clock parsing.

use thiserror::Error;

/// Why a clock string could not be turned into a [`TimeOfDay`].
///
/// Every variant carries the original input so the caller can log it
/// verbatim.
///
/// [`TimeOfDay`]: super::TimeOfDay
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not end in `am` or `pm`.
    #[error("'{input}' has no am/pm suffix")]
    MissingMeridiem { input: String },

    /// The hour component is absent or not an integer.
    #[error("'{input}' has an unparseable hour")]
    InvalidHour { input: String },

    /// The minute component is not an integer (or there are extra `:` parts).
    #[error("'{input}' has an unparseable minute")]
    InvalidMinute { input: String },

    /// Hour outside `1..=12` or minute outside `0..=59`.
    #[error("'{input}' is outside the 12-hour clock range (hour {hour}, minute {minute})")]
    OutOfRange {
        input: String,
        hour: u32,
        minute: u32,
    },
}
