/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Error type returned by the render pipeline.
//!
//! Rendering is all-or-nothing: the first error aborts the call and no
//! partial document is produced.

use thiserror::Error;

use crate::time::ParseError;

/// Top-level error returned by [`build_columns`](crate::build_columns) and
/// [`render`](crate::render).
#[derive(Debug, Error)]
pub enum RenderError {
    /// A time string in the schedule could not be parsed.
    ///
    /// `context` names where it came from (`"break slot"`, `"time slot #2"`,
    /// `"entry #4 (IT801 on Monday)"`).
    #[error("invalid time in {context}: {source}")]
    InvalidTime { context: String, source: ParseError },
}
