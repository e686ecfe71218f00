/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Column builder: merges the time slots and the break interval into the
//! ordered header axis of the grid.
//!
//! Slots are processed in the order the caller supplies them.  For each slot:
//!
//! | Slot vs. break | Action |
//! |---|---|
//! | same start **and** same end | the slot *becomes* the break column |
//! | same start **or** same end (not both) | appended as an ordinary column, no break insertion |
//! | otherwise, break not placed yet, at least one column accumulated, `slot.start >= break.start` | break column appended first, then the slot |
//! | otherwise | appended as an ordinary column |
//!
//! If the scan finishes without placing the break, it is inserted before the
//! first column whose start is `>= break.start`, or appended at the end.
//!
//! The single-boundary row is kept exactly as is: a slot that shares one
//! boundary with the break never triggers insertion, even when the break
//! would chronologically belong before it.  The post-scan step then decides
//! the position.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::time::{compare, TimeInterval};

// ── Column ────────────────────────────────────────────────────────────────────

/// One header cell of the grid: a teaching slot or the break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub interval: TimeInterval,
    pub is_break: bool,
}

impl Column {
    pub fn slot(interval: TimeInterval) -> Self {
        Self {
            interval,
            is_break: false,
        }
    }

    pub fn break_of(interval: TimeInterval) -> Self {
        Self {
            interval,
            is_break: true,
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Build the ordered column sequence from parsed slots and the break.
///
/// The result holds exactly one break column.  A second slot identical to the
/// break is dropped (it would otherwise be a second break column).
pub fn build_columns(slots: &[TimeInterval], break_slot: TimeInterval) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::with_capacity(slots.len() + 1);
    let mut break_placed = false;

    for &slot in slots {
        let same_start = slot.start == break_slot.start;
        let same_end = slot.end == break_slot.end;

        if same_start && same_end {
            if break_placed {
                warn!(slot = %slot, "duplicate break slot dropped");
                continue;
            }
            debug!(slot = %slot, "slot coincides with break, used as break column");
            columns.push(Column::break_of(slot));
            break_placed = true;
        } else if same_start || same_end {
            debug!(slot = %slot, "slot shares one boundary with break, no insertion");
            columns.push(Column::slot(slot));
        } else {
            if !columns.is_empty()
                && !break_placed
                && compare(slot.start, break_slot.start) != Ordering::Less
            {
                columns.push(Column::break_of(break_slot));
                break_placed = true;
            }
            columns.push(Column::slot(slot));
        }
    }

    if !break_placed {
        let position = columns
            .iter()
            .position(|c| compare(c.interval.start, break_slot.start) != Ordering::Less)
            .unwrap_or(columns.len());
        debug!(position, "break placed after scan");
        columns.insert(position, Column::break_of(break_slot));
    }

    report_layout_anomalies(&columns);
    columns
}

/// Log (never repair) column sequences that are out of order, hold a
/// backwards interval, or whose ordinary columns overlap.
fn report_layout_anomalies(columns: &[Column]) {
    for column in columns.iter().filter(|c| !c.interval.is_well_formed()) {
        warn!(
            interval = %column.interval,
            is_break = column.is_break,
            "column ends at or before its start"
        );
    }

    for pair in columns.windows(2) {
        if pair[1].interval.start < pair[0].interval.start {
            warn!(
                before = %pair[0].interval,
                after = %pair[1].interval,
                "columns are not in ascending start order"
            );
        }
    }

    let ordinary: Vec<&Column> = columns.iter().filter(|c| !c.is_break).collect();
    for (i, a) in ordinary.iter().enumerate() {
        for b in &ordinary[i + 1..] {
            if a.interval.overlaps(&b.interval) {
                warn!(a = %a.interval, b = %b.interval, "time slots overlap");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
