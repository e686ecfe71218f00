/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Schedule data structures: the input contract and its parsed form.
//!
//! Two distinct layers model the two sides of the render pipeline:
//!
//! ```text
//! generator ──(JSON)──►  Schedule  ──(parse_*)──►  TimeInterval / ScheduleEntry  ──►  columns / grid
//!                        ↑ raw text                 ↑ parsed ordinals
//!                        passed through verbatim    compared as integers
//! ```
//!
//! # Wire format
//! Keys are camelCase.  The names used by the schedule-generation prompt are
//! accepted as aliases (`lunchSlot` for `breakSlot`, `slots` for `entries`,
//! `faculty` for `participants`, `type` for `category`).
//!
//! ```json
//! {
//!   "department": "Information Technology",
//!   "days": ["Monday", "Tuesday"],
//!   "timeSlots": [{"start": "10:30am", "end": "11:30am"}],
//!   "breakSlot": {"start": "01:30pm", "end": "02:30pm"},
//!   "entries": [{"day": "Monday", "startTime": "10:30am", "endTime": "11:30am",
//!                "code": "IT801", "name": "Major Project",
//!                "participants": ["SKS"], "category": "project"}]
//! }
//! ```
//!
//! # Ownership model
//! A `Schedule` is read-only for the duration of a render; every parsed value
//! is a fresh copy built per call and dropped with it.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::render::RenderError;
use crate::time::TimeInterval;

// ── Category ──────────────────────────────────────────────────────────────────

/// Kind of session an entry represents.
///
/// Values the generator invents beyond the four known kinds map to
/// [`Category::Other`] rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Theory,
    Lab,
    Project,
    Tutorial,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Theory => "theory",
            Category::Lab => "lab",
            Category::Project => "project",
            Category::Tutorial => "tutorial",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Raw input types ───────────────────────────────────────────────────────────

/// A `{start, end}` pair as text, e.g. `{"start": "10:30am", "end": "11:30am"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub start: String,
    pub end: String,
}

impl SlotSpec {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn parse(&self) -> Result<TimeInterval, crate::time::ParseError> {
        TimeInterval::parse(&self.start, &self.end)
    }
}

/// One assigned session as delivered by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySpec {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(alias = "subjectCode")]
    pub code: String,
    #[serde(default, alias = "subjectName")]
    pub name: String,
    #[serde(default, alias = "faculty")]
    pub participants: Vec<String>,
    #[serde(default, alias = "type")]
    pub category: Category,
}

/// Legend row: one subject of the timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "type")]
    pub category: Category,
}

/// Participant (faculty member) listed under the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub abbreviation: String,
    #[serde(default)]
    pub full_name: String,
}

/// Signatory block printed at the foot of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub phone: Option<String>,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A full weekly schedule plus the metadata printed around the grid.
///
/// Metadata fields are free-form text handed to the renderer unchanged; only
/// `time_slots`, `break_slot` and the entry times are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    // ── Metadata ──────────────────────────────────────────────────────────────
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub time_table_month: String,

    // ── Grid axes ─────────────────────────────────────────────────────────────
    /// Row labels, rendered in exactly this order.
    pub days: Vec<String>,
    pub time_slots: Vec<SlotSpec>,
    #[serde(alias = "lunchSlot")]
    pub break_slot: SlotSpec,

    #[serde(default, alias = "slots")]
    pub entries: Vec<EntrySpec>,

    // ── Legend and footer ─────────────────────────────────────────────────────
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default, alias = "facultyList")]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub class_coordinator: Signatory,
    #[serde(default)]
    pub class_co_coordinator: Signatory,
}

impl Schedule {
    /// Load a schedule from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has another extension, or
    /// does not match the schedule layout.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading schedule from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open schedule file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let schedule: Schedule = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?,
            _ => bail!(
                "Unsupported schedule file extension (expected .json, .yaml or .yml): {}",
                path.display()
            ),
        };

        debug!(
            days = schedule.days.len(),
            time_slots = schedule.time_slots.len(),
            entries = schedule.entries.len(),
            "schedule loaded"
        );

        Ok(schedule)
    }

    /// Parse every entry, in input order.  The first bad time aborts.
    pub fn parse_entries(&self) -> Result<Vec<ScheduleEntry>, RenderError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                ScheduleEntry::from_spec(spec).map_err(|source| RenderError::InvalidTime {
                    context: format!("entry #{} ({} on {})", i + 1, spec.code, spec.day),
                    source,
                })
            })
            .collect()
    }
}

/// Parse a slot list, naming the 1-based position of the first bad slot.
pub fn parse_slots(slots: &[SlotSpec]) -> Result<Vec<TimeInterval>, RenderError> {
    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.parse().map_err(|source| RenderError::InvalidTime {
                context: format!("time slot #{}", i + 1),
                source,
            })
        })
        .collect()
}

pub fn parse_break(break_slot: &SlotSpec) -> Result<TimeInterval, RenderError> {
    break_slot.parse().map_err(|source| RenderError::InvalidTime {
        context: "break slot".to_string(),
        source,
    })
}

// ── ScheduleEntry (parsed) ────────────────────────────────────────────────────

/// An entry whose times have been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub day: String,
    pub interval: TimeInterval,
    pub code: String,
    pub name: String,
    pub participants: Vec<String>,
    pub category: Category,
}

impl ScheduleEntry {
    pub fn from_spec(spec: &EntrySpec) -> Result<Self, crate::time::ParseError> {
        Ok(Self {
            day: spec.day.clone(),
            interval: TimeInterval::parse(&spec.start_time, &spec.end_time)?,
            code: spec.code.clone(),
            name: spec.name.clone(),
            participants: spec.participants.clone(),
            category: spec.category,
        })
    }

    /// Cell text: `CODE (Name)-P1/P2`.
    pub fn label(&self) -> String {
        format!(
            "{} ({})-{}",
            self.code,
            self.name,
            self.participants.join("/")
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
