/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! timegrid – printable weekly timetable grids
//!
//! Module layout, leaves first:
//!
//! ```text
//! lib.rs
//! ├── time/        – 12-hour clock parsing, TimeOfDay / TimeInterval ordering
//! ├── schedule.rs  – input contract (JSON / YAML) and parsed entries
//! ├── columns/     – header axis: time slots + break column placement
//! ├── grid/        – (day, column) cells, colspans, break / legend spans
//! ├── render/      – HTML serializer and the pipeline error type
//! ├── config/      – render options (labels, legend switch) from YAML
//! ├── clash.rs     – advisory participant double-booking check
//! └── generator.rs – injectable client for the schedule-generation service
//! ```
//!
//! The pipeline has two entry points:
//!
//! ```rust
//! use timegrid::schedule::{Schedule, SlotSpec};
//!
//! let schedule = Schedule {
//!     days: vec!["Monday".into()],
//!     time_slots: vec![SlotSpec::new("10:30am", "11:30am"), SlotSpec::new("2:30pm", "3:30pm")],
//!     break_slot: SlotSpec::new("1:30pm", "2:30pm"),
//!     ..Default::default()
//! };
//!
//! let columns = timegrid::build_columns(&schedule.time_slots, &schedule.break_slot).unwrap();
//! assert!(columns[1].is_break);
//!
//! let html = timegrid::render(&schedule, &columns).unwrap();
//! assert!(html.contains("LUNCH"));
//! ```
//!
//! Every call is a pure function of its input; concurrent renders of
//! different schedules need no coordination.

pub mod clash;
pub mod columns;
pub mod config;
pub mod generator;
pub mod grid;
pub mod render;
pub mod schedule;
pub mod time;

use tracing::debug;

use crate::columns::Column;
use crate::config::RenderOptions;
use crate::render::RenderError;
use crate::schedule::{Schedule, SlotSpec};

/// Parse `time_slots` and `break_slot` and build the header column sequence.
///
/// # Errors
/// [`RenderError::InvalidTime`] for the first slot that does not parse.
pub fn build_columns(
    time_slots: &[SlotSpec],
    break_slot: &SlotSpec,
) -> Result<Vec<Column>, RenderError> {
    let slots = schedule::parse_slots(time_slots)?;
    let break_interval = schedule::parse_break(break_slot)?;

    Ok(columns::build_columns(&slots, break_interval))
}

/// Render `schedule` over `columns` with the default [`RenderOptions`].
pub fn render(schedule: &Schedule, columns: &[Column]) -> Result<String, RenderError> {
    render_with(schedule, columns, &RenderOptions::default())
}

/// Render `schedule` over `columns`.
///
/// # Errors
/// [`RenderError::InvalidTime`] if any entry time does not parse; no partial
/// document is returned.
pub fn render_with(
    schedule: &Schedule,
    columns: &[Column],
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let entries = schedule.parse_entries()?;
    let grid = grid::assemble(columns, &schedule.days, &entries, options.legend_column);

    debug!(
        rows = grid.rows.len(),
        columns = columns.len(),
        entries = entries.len(),
        "grid assembled"
    );

    Ok(render::render_document(&grid, schedule, options))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EntrySpec;

    fn schedule() -> Schedule {
        Schedule {
            department: "Computer Science".to_string(),
            days: vec!["Monday".to_string(), "Tuesday".to_string()],
            time_slots: vec![
                SlotSpec::new("10:30am", "11:30am"),
                SlotSpec::new("11:30am", "12:30pm"),
                SlotSpec::new("12:30pm", "1:30pm"),
                SlotSpec::new("2:30pm", "3:30pm"),
            ],
            break_slot: SlotSpec::new("1:30pm", "2:30pm"),
            entries: vec![EntrySpec {
                day: "Monday".to_string(),
                start_time: "10:30am".to_string(),
                end_time: "12:30pm".to_string(),
                code: "ALG".to_string(),
                name: "Algorithms".to_string(),
                participants: vec!["RK".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn build_columns_places_break_before_afternoon_slot() {
        let s = schedule();
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();

        assert_eq!(columns.len(), 5);
        assert_eq!(columns.iter().filter(|c| c.is_break).count(), 1);
        assert!(columns[3].is_break);
        assert_eq!(columns[4].interval.start.to_string(), "02:30pm");
    }

    #[test]
    fn build_columns_reports_bad_slot() {
        let mut s = schedule();
        s.time_slots[2].end = "1:30".to_string();
        let err = build_columns(&s.time_slots, &s.break_slot).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid time in time slot #3: '1:30' has no am/pm suffix"
        );
    }

    #[test]
    fn render_spans_multi_slot_entry() {
        let s = schedule();
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();
        let html = render(&s, &columns).unwrap();

        assert!(html.contains("colspan=\"2\">ALG (Algorithms)-RK</td>"));
        assert!(html.contains("rowspan=\"3\">LUNCH</th>"));
    }

    #[test]
    fn render_is_byte_identical_across_calls() {
        let s = schedule();
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();
        assert_eq!(render(&s, &columns).unwrap(), render(&s, &columns).unwrap());
    }

    #[test]
    fn render_aborts_on_bad_entry_time() {
        let mut s = schedule();
        s.entries[0].start_time = "half past ten".to_string();
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();

        let err = render(&s, &columns).unwrap_err();
        assert!(matches!(err, RenderError::InvalidTime { .. }));
    }

    #[test]
    fn render_with_custom_labels() {
        let s = schedule();
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();
        let options = RenderOptions {
            break_label: "RECESS".to_string(),
            legend_column: false,
            ..Default::default()
        };
        let html = render_with(&s, &columns, &options).unwrap();

        assert!(html.contains(">RECESS</th>"));
        assert!(!html.contains(">LUNCH</th>"));
    }

    #[test]
    fn malformed_input_renders_in_caller_order_without_error() {
        let entry = |start: &str, end: &str, code: &str| EntrySpec {
            day: "Monday".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            code: code.to_string(),
            ..Default::default()
        };
        let s = Schedule {
            days: vec!["Monday".to_string()],
            time_slots: vec![
                SlotSpec::new("2:30pm", "3:30pm"),
                SlotSpec::new("10:30am", "11:30am"),
                SlotSpec::new("11:00am", "12:00pm"),
                SlotSpec::new("5pm", "4pm"),
            ],
            break_slot: SlotSpec::new("1:30pm", "2:30pm"),
            entries: vec![
                entry("3:30pm", "10:30am", "BACK"),
                entry("10:30am", "12:00pm", "OV"),
            ],
            ..Default::default()
        };
        let columns = build_columns(&s.time_slots, &s.break_slot).unwrap();
        let html = render(&s, &columns).unwrap();

        let positions: Vec<usize> = [
            "<th>02:30pm to 03:30pm</th>",
            "<th>10:30am to 11:30am</th>",
            "<th>11:00am to 12:00pm</th>",
            "rowspan=\"2\">LUNCH</th>",
            "<th>05:00pm to 04:00pm</th>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("<td class=\"slot-cell\" colspan=\"2\">OV ()-</td>"));
        assert!(!html.contains("BACK"));
        assert_eq!(html.matches("<td></td>").count(), 2);
    }
}
