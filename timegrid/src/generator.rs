/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Schedule generation through an external text-generation service.
//!
//! The network transport is not part of this crate.  Callers implement
//! [`CompletionClient`] for whatever service they use, build a
//! [`ScheduleGenerator`] around it, and hand the resulting [`Schedule`] to the
//! render pipeline.  Nothing here is global: two generators with different
//! clients or settings can coexist, and tests inject a canned client.
//!
//! ```text
//! requirement ──► ScheduleGenerator::generate ──► CompletionClient::complete ──► JSON ──► Schedule
//!                                                                                  └─► advisory clash log
//! ```

use thiserror::Error;
use tracing::{debug, info};

use crate::clash::log_clashes;
use crate::schedule::Schedule;

/// Environment variable holding the service credential.
pub const API_KEY_VAR: &str = "TIMEGRID_API_KEY";

/// Environment variable selecting the model; optional.
pub const MODEL_VAR: &str = "TIMEGRID_MODEL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Instructions sent with every request; describes the JSON layout that
/// [`Schedule`] deserializes.
pub const SYSTEM_PROMPT: &str = r#"You generate weekly academic timetables.
Constraints:
- A participant (faculty member) is never in two sessions at the same time.
- A room and a section are never used by two sessions at the same time.
- Include exactly one break slot (e.g. 01:30pm to 02:30pm).
- Times use the 12-hour clock with an am/pm suffix, e.g. "10:30am".
- Sessions are usually one slot long; labs and projects may span 2-3 consecutive slots
  and then use the real start and end time of the whole block.
- Use Monday to Friday unless the requirement says otherwise, and fill every day.

Reply with a single JSON object and nothing else:
{
  "department": "...", "semester": "...", "section": "...", "room": "...",
  "effectiveDate": "DD-MM-YYYY", "timeTableMonth": "Mon-YYYY",
  "days": ["Monday", ...],
  "timeSlots": [{"start": "10:30am", "end": "11:30am"}, ...],
  "breakSlot": {"start": "01:30pm", "end": "02:30pm"},
  "subjects": [{"code": "IT801", "name": "Major Project", "category": "project"}, ...],
  "participants": [{"abbreviation": "SKS", "fullName": "Prof. S.K. Sharma"}, ...],
  "classCoordinator": {"name": "...", "abbreviation": "...", "phone": "..."},
  "classCoCoordinator": {"name": "...", "abbreviation": "...", "phone": "..."},
  "entries": [{"day": "Monday", "startTime": "10:30am", "endTime": "11:30am",
               "code": "IT801", "name": "Major Project",
               "participants": ["SKS"], "category": "theory|lab|project|tutorial"}]
}
Every entry names at least one participant listed in "participants" and a code listed in "subjects"."#;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The credential variable is unset or empty.
    #[error("TIMEGRID_API_KEY is not set")]
    MissingApiKey,

    /// The transport failed; the message comes from the client.
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The service answered with no content.
    #[error("empty response from the generation service")]
    EmptyResponse,

    /// The content is not a schedule object.
    #[error("response is not a valid schedule: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Per-generator request settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GeneratorSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 4096,
        }
    }

    /// Read [`API_KEY_VAR`] and [`MODEL_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, GeneratorError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GeneratorError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeneratorError::MissingApiKey)?;

        let mut settings = Self::new(api_key);
        if let Some(model) = lookup(MODEL_VAR).filter(|m| !m.trim().is_empty()) {
            settings.model = model;
        }
        Ok(settings)
    }
}

// ── Client seam ───────────────────────────────────────────────────────────────

/// One chat-style completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Transport to the text-generation service.
pub trait CompletionClient {
    /// Send `request` and return the raw text content of the reply.
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, GeneratorError>;
}

// ── ScheduleGenerator ─────────────────────────────────────────────────────────

/// Turns a natural-language requirement into a [`Schedule`].
pub struct ScheduleGenerator<C> {
    client: C,
    settings: GeneratorSettings,
}

impl<C: CompletionClient> ScheduleGenerator<C> {
    pub fn new(client: C, settings: GeneratorSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Ask the service for a schedule.
    ///
    /// Participant clashes in the reply are logged, not rejected.
    pub fn generate(&self, requirement: &str) -> Result<Schedule, GeneratorError> {
        info!(model = %self.settings.model, "Sending schedule generation request");

        let request = CompletionRequest {
            api_key: &self.settings.api_key,
            model: &self.settings.model,
            system_prompt: SYSTEM_PROMPT,
            user_prompt: requirement,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };
        let content = self.client.complete(&request)?;

        info!(bytes = content.len(), "Received schedule, parsing");
        let schedule = parse_response(&content)?;
        log_clashes(&schedule.entries);

        Ok(schedule)
    }
}

/// Parse a stored or freshly received reply into a [`Schedule`].
pub fn parse_response(content: &str) -> Result<Schedule, GeneratorError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    let schedule: Schedule = serde_json::from_str(content)?;
    debug!(
        days = schedule.days.len(),
        entries = schedule.entries.len(),
        "reply parsed"
    );
    Ok(schedule)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
