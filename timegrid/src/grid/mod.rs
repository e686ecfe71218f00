/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Grid assembler: places entries on the `(day, column)` grid and computes
//! horizontal and vertical spans.
//!
//! # Cell rules
//! For each day row and each ordinary column:
//!
//! 1. The *covering* entries are those of that day whose interval starts at
//!    or before the column and ends at or after it.
//! 2. **First in input order wins**: only the first covering entry is
//!    considered for the cell.  Later covering entries are ignored for that
//!    cell without any report; their own cells elsewhere are unaffected.
//! 3. An entry's *home* column is the first ordinary column (in header order)
//!    it covers.  At the home column the cell is `Rendered` with
//!    `colspan` = number of ordinary columns the entry covers; at any other
//!    column the cell is `Spanned`.
//! 4. No covering entry → `Empty`.
//!
//! Break columns are `Spanned` in every day row; the single header cell for
//! each break is described by a [`BreakSpan`].  The optional legend column
//! sits after the last time column and is emitted once, in the first day row.
//!
//! Entries that do not line up with column boundaries are placed wherever
//! rule 1 puts them (possibly nowhere); the assembler never fails on them.

use tracing::debug;

use crate::columns::Column;
use crate::schedule::ScheduleEntry;

// ── Grid types ────────────────────────────────────────────────────────────────

/// State of one `(day, column)` position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// No entry covers this column on this day.
    Empty,
    /// Covered by a span rendered elsewhere (an entry's home column or a
    /// break header); produces no output.
    Spanned,
    /// The home column of `entry`.
    Rendered {
        entry: &'a ScheduleEntry,
        colspan: usize,
    },
}

/// One day's row; `cells` has one element per column, break columns included.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub day: &'a str,
    pub cells: Vec<Cell<'a>>,
}

/// The vertical span of a break column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakSpan {
    /// Index into the column sequence.
    pub column: usize,
    /// Number of day rows the break covers.
    pub rows: usize,
}

impl BreakSpan {
    /// The break is emitted in the header row, so its cell also covers that
    /// row on top of every day row.
    pub fn header_rowspan(&self) -> usize {
        self.rows + 1
    }
}

/// The static legend column, emitted once at the end of the first day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSpan {
    pub rows: usize,
}

/// Read-only result of [`assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<'a> {
    pub columns: &'a [Column],
    pub rows: Vec<GridRow<'a>>,
    pub breaks: Vec<BreakSpan>,
    pub legend: Option<LegendSpan>,
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Home column and colspan of one entry, computed once per call.
#[derive(Debug, Clone, Copy)]
struct Placement {
    home: usize,
    colspan: usize,
}

/// Build the grid for `days` × `columns` from `entries`.
///
/// `legend_column` adds a [`LegendSpan`] when there is at least one day row
/// to attach it to.
pub fn assemble<'a>(
    columns: &'a [Column],
    days: &'a [String],
    entries: &'a [ScheduleEntry],
    legend_column: bool,
) -> Grid<'a> {
    let placements: Vec<Option<Placement>> =
        entries.iter().map(|e| placement(e, columns)).collect();

    let unknown_day = entries
        .iter()
        .filter(|e| !days.iter().any(|d| *d == e.day))
        .count();
    if unknown_day > 0 {
        debug!(count = unknown_day, "entries for days not in the day list are not rendered");
    }

    let rows = days
        .iter()
        .map(|day| GridRow {
            day: day.as_str(),
            cells: columns
                .iter()
                .enumerate()
                .map(|(index, column)| cell_for(day, index, column, entries, &placements))
                .collect(),
        })
        .collect();

    let breaks = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_break)
        .map(|(column, _)| BreakSpan {
            column,
            rows: days.len(),
        })
        .collect();

    let legend = (legend_column && !days.is_empty()).then_some(LegendSpan { rows: days.len() });

    Grid {
        columns,
        rows,
        breaks,
        legend,
    }
}

/// First ordinary column covered by `entry`, and how many it covers.
/// `None` when the entry covers no column at all.
fn placement(entry: &ScheduleEntry, columns: &[Column]) -> Option<Placement> {
    let mut covered = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_break && entry.interval.covers(&c.interval))
        .map(|(i, _)| i);

    let home = covered.next()?;
    Some(Placement {
        home,
        colspan: 1 + covered.count(),
    })
}

fn cell_for<'a>(
    day: &str,
    index: usize,
    column: &Column,
    entries: &'a [ScheduleEntry],
    placements: &[Option<Placement>],
) -> Cell<'a> {
    if column.is_break {
        return Cell::Spanned;
    }

    // First covering entry in input order takes the cell.
    let winner = entries
        .iter()
        .zip(placements)
        .find(|(e, _)| e.day == day && e.interval.covers(&column.interval));

    match winner {
        Some((entry, Some(p))) if p.home == index => Cell::Rendered {
            entry,
            colspan: p.colspan,
        },
        Some(_) => Cell::Spanned,
        None => Cell::Empty,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::build_columns;
    use crate::schedule::Category;
    use crate::time::TimeInterval;

    fn iv(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).unwrap()
    }

    fn entry(day: &str, start: &str, end: &str, code: &str) -> ScheduleEntry {
        ScheduleEntry {
            day: day.to_string(),
            interval: iv(start, end),
            code: code.to_string(),
            name: String::new(),
            participants: Vec::new(),
            category: Category::Theory,
        }
    }

    /// `10:30-11:30 | 11:30-12:30 | 12:30-1:30 | BREAK | 2:30-3:30`
    fn standard_columns() -> Vec<Column> {
        build_columns(
            &[
                iv("10:30am", "11:30am"),
                iv("11:30am", "12:30pm"),
                iv("12:30pm", "1:30pm"),
                iv("2:30pm", "3:30pm"),
            ],
            iv("1:30pm", "2:30pm"),
        )
    }

    fn days(names: &[&str]) -> Vec<String> {
        names.iter().map(|d| d.to_string()).collect()
    }

    fn rendered_code(cell: &Cell<'_>) -> Option<(String, usize)> {
        match cell {
            Cell::Rendered { entry, colspan } => Some((entry.code.clone(), *colspan)),
            _ => None,
        }
    }

    #[test]
    fn multi_column_entry_renders_once_with_colspan() {
        let columns = standard_columns();
        let days = days(&["Monday"]);
        let entries = vec![entry("Monday", "10:30am", "12:30pm", "ALG")];
        let grid = assemble(&columns, &days, &entries, false);

        let row = &grid.rows[0];
        assert_eq!(rendered_code(&row.cells[0]), Some(("ALG".to_string(), 2)));
        assert_eq!(row.cells[1], Cell::Spanned);
        assert_eq!(row.cells[2], Cell::Empty);
        assert_eq!(row.cells[3], Cell::Spanned, "break column");
        assert_eq!(row.cells[4], Cell::Empty);
    }

    #[test]
    fn entry_does_not_span_across_break() {
        let columns = standard_columns();
        let days = days(&["Monday"]);
        // Covers 12:30-1:30 and 2:30-3:30 but the break is never counted.
        let entries = vec![entry("Monday", "12:30pm", "3:30pm", "LAB")];
        let grid = assemble(&columns, &days, &entries, false);

        assert_eq!(
            rendered_code(&grid.rows[0].cells[2]),
            Some(("LAB".to_string(), 2))
        );
        assert_eq!(grid.rows[0].cells[4], Cell::Spanned);
    }

    #[test]
    fn first_entry_in_input_order_wins_shared_column() {
        let columns = standard_columns();
        let days = days(&["Monday"]);
        let entries = vec![
            entry("Monday", "10:30am", "11:30am", "FIRST"),
            entry("Monday", "10:30am", "11:30am", "SECOND"),
        ];
        let grid = assemble(&columns, &days, &entries, false);

        assert_eq!(
            rendered_code(&grid.rows[0].cells[0]),
            Some(("FIRST".to_string(), 1))
        );
        let second_visible = grid.rows[0]
            .cells
            .iter()
            .any(|c| rendered_code(c).map(|(code, _)| code) == Some("SECOND".to_string()));
        assert!(!second_visible);
    }

    #[test]
    fn losing_entry_keeps_its_uncontested_home_column() {
        let columns = standard_columns();
        let days = days(&["Monday"]);
        // B is first in input order and wins 11:30-12:30; A still renders at
        // its own home 10:30-11:30 with its full colspan.
        let entries = vec![
            entry("Monday", "11:30am", "1:30pm", "B"),
            entry("Monday", "10:30am", "12:30pm", "A"),
        ];
        let grid = assemble(&columns, &days, &entries, false);
        let row = &grid.rows[0];

        assert_eq!(rendered_code(&row.cells[0]), Some(("A".to_string(), 2)));
        assert_eq!(rendered_code(&row.cells[1]), Some(("B".to_string(), 2)));
        assert_eq!(row.cells[2], Cell::Spanned);
    }

    #[test]
    fn entries_are_kept_to_their_own_day() {
        let columns = standard_columns();
        let days = days(&["Monday", "Tuesday"]);
        let entries = vec![entry("Tuesday", "2:30pm", "3:30pm", "NET")];
        let grid = assemble(&columns, &days, &entries, false);

        assert!(grid.rows[0]
            .cells
            .iter()
            .all(|c| matches!(c, Cell::Empty | Cell::Spanned)));
        assert_eq!(
            rendered_code(&grid.rows[1].cells[4]),
            Some(("NET".to_string(), 1))
        );
    }

    #[test]
    fn rows_follow_day_order_verbatim() {
        let columns = standard_columns();
        let days = days(&["Friday", "Monday", "Wednesday"]);
        let grid = assemble(&columns, &days, &[], false);
        let order: Vec<&str> = grid.rows.iter().map(|r| r.day).collect();
        assert_eq!(order, vec!["Friday", "Monday", "Wednesday"]);
    }

    #[test]
    fn unknown_day_and_misaligned_entries_do_not_fail() {
        let columns = standard_columns();
        let days = days(&["Monday"]);
        let entries = vec![
            entry("Sunday", "10:30am", "11:30am", "GHOST"),
            entry("Monday", "10:45am", "11:15am", "SHORT"),
        ];
        let grid = assemble(&columns, &days, &entries, false);
        assert!(grid.rows[0].cells.iter().all(|c| rendered_code(c).is_none()));
    }

    #[test]
    fn break_spans_every_day_row() {
        let columns = standard_columns();
        let days = days(&["Monday", "Tuesday", "Wednesday"]);
        let grid = assemble(&columns, &days, &[], false);

        assert_eq!(grid.breaks, vec![BreakSpan { column: 3, rows: 3 }]);
        assert_eq!(grid.breaks[0].header_rowspan(), 4);
        assert!(grid.rows.iter().all(|r| r.cells[3] == Cell::Spanned));
    }

    #[test]
    fn legend_spans_all_rows_when_requested() {
        let columns = standard_columns();
        let days = days(&["Monday", "Tuesday"]);

        let with = assemble(&columns, &days, &[], true);
        assert_eq!(with.legend, Some(LegendSpan { rows: 2 }));

        let without = assemble(&columns, &days, &[], false);
        assert_eq!(without.legend, None);

        let no_days = assemble(&columns, &[], &[], true);
        assert_eq!(no_days.legend, None);
    }

    #[test]
    fn unsorted_columns_and_backwards_entry_are_placed_by_comparison_only() {
        // 02:30pm | 10:30am | 11:00am | BREAK | 05:00pm to 04:00pm
        let columns = build_columns(
            &[
                iv("2:30pm", "3:30pm"),
                iv("10:30am", "11:30am"),
                iv("11:00am", "12:00pm"),
                iv("5:00pm", "4:00pm"),
            ],
            iv("1:30pm", "2:30pm"),
        );
        let days = days(&["Monday"]);
        let entries = vec![
            entry("Monday", "3:30pm", "10:30am", "BACK"),
            entry("Monday", "10:30am", "12:00pm", "OV"),
        ];
        let grid = assemble(&columns, &days, &entries, false);
        let row = &grid.rows[0];

        assert_eq!(row.cells[0], Cell::Empty);
        assert_eq!(rendered_code(&row.cells[1]), Some(("OV".to_string(), 2)));
        assert_eq!(row.cells[2], Cell::Spanned);
        assert_eq!(row.cells[3], Cell::Spanned, "break column");
        assert_eq!(row.cells[4], Cell::Empty);
        assert!(row
            .cells
            .iter()
            .all(|c| rendered_code(c).map(|(code, _)| code) != Some("BACK".to_string())));
    }

    #[test]
    fn backwards_entry_matching_backwards_column_renders_there() {
        let columns = build_columns(
            &[iv("10:30am", "11:30am"), iv("5:00pm", "4:00pm")],
            iv("1:30pm", "2:30pm"),
        );
        let days = days(&["Monday"]);
        let entries = vec![entry("Monday", "5:00pm", "4:00pm", "ODD")];
        let grid = assemble(&columns, &days, &entries, false);

        assert_eq!(grid.rows[0].cells[0], Cell::Empty);
        assert_eq!(
            rendered_code(&grid.rows[0].cells[2]),
            Some(("ODD".to_string(), 1))
        );
    }
}
