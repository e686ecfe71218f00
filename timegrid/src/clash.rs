/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Advisory double-booking check.
//!
//! # Status: warning only
//! Clashes are reported and logged, never corrected, and never stop a
//! render.  Multi-hour blocks that overlap by design are expected to show up
//! here occasionally.
//!
//! Two entries clash when they share a participant, the same day and the same
//! start/end text (compared case- and whitespace-insensitively, so the check
//! works on unparsed input).

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::schedule::EntrySpec;

/// One participant booked twice for the same slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clash {
    pub participant: String,
    pub day: String,
    pub start: String,
    pub end: String,
    /// Code of the entry that booked the slot first.
    pub first_code: String,
    /// Code of the later entry.
    pub second_code: String,
}

impl fmt::Display for Clash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has two entries on {} {}-{} ({} and {})",
            self.participant, self.day, self.start, self.end, self.first_code, self.second_code
        )
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<String>().to_lowercase()
}

/// Find every participant clash in `entries`, in input order.
pub fn detect_clashes(entries: &[EntrySpec]) -> Vec<Clash> {
    // (participant, day, start, end) → code of the first booking
    let mut booked: HashMap<(String, String, String, String), &str> = HashMap::new();
    let mut clashes = Vec::new();

    for entry in entries {
        for participant in &entry.participants {
            let key = (
                normalize(participant),
                normalize(&entry.day),
                normalize(&entry.start_time),
                normalize(&entry.end_time),
            );
            if let Some(first) = booked.get(&key).copied() {
                clashes.push(Clash {
                    participant: participant.clone(),
                    day: entry.day.clone(),
                    start: entry.start_time.clone(),
                    end: entry.end_time.clone(),
                    first_code: first.to_string(),
                    second_code: entry.code.clone(),
                });
            } else {
                booked.insert(key, entry.code.as_str());
            }
        }
    }

    clashes
}

/// Run [`detect_clashes`] and log each result at `warn` level.
pub fn log_clashes(entries: &[EntrySpec]) -> Vec<Clash> {
    let clashes = detect_clashes(entries);
    if !clashes.is_empty() {
        warn!(count = clashes.len(), "schedule has participant clashes");
        for clash in &clashes {
            warn!("  {}", clash);
        }
    }
    clashes
}

// ── Tests ─────────────────────────────────────────────────────────────────────
