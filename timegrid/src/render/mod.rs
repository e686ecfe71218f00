/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! HTML serializer for an assembled [`Grid`].
//!
//! Pure and deterministic: the same grid, schedule metadata and options
//! always produce the same bytes.  The renderer walks rows and columns in the
//! order the assembler produced them and maps each cell to markup:
//!
//! | Cell | Markup |
//! |---|---|
//! | `Empty` | `<td></td>` |
//! | `Spanned` | nothing |
//! | `Rendered` | `<td class="slot-cell" colspan="n">…</td>` (`colspan` only when `n > 1`) |
//! | break | one `<th rowspan="…">` in the header row |
//! | legend | one `<td rowspan="…">` closing the first day row |
//!
//! Every piece of schedule text is HTML-escaped before interpolation.

pub mod error;

pub use error::RenderError;

use std::fmt::{self, Write};

use crate::config::RenderOptions;
use crate::grid::{Cell, Grid};
use crate::schedule::{Schedule, Signatory};

const STYLE: &str = r#"  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Times New Roman', Times, serif; background: #fff; padding: 20px; }
  .container { max-width: 1200px; margin: 0 auto; }
  .header { text-align: center; margin-bottom: 20px; }
  .header h2 { text-decoration: underline; font-size: 18px; margin-bottom: 8px; }
  .header p { font-size: 14px; font-weight: bold; margin-bottom: 3px; }
  table { width: 100%; border-collapse: collapse; margin-bottom: 20px; font-size: 12px; }
  th, td { border: 1px solid #000; padding: 6px 8px; text-align: center; vertical-align: middle; }
  th { background-color: #f5f5f5; font-weight: bold; }
  .day-col { width: 80px; font-weight: bold; text-align: left; padding-left: 10px; }
  .break-col { background-color: #f0f0f0; font-weight: bold; font-size: 13px; }
  .legend-col { width: 100px; font-size: 11px; }
  .slot-cell { font-size: 11px; line-height: 1.3; }
  .subject-bar { background-color: #555; color: #fff; padding: 6px; font-weight: bold; }
  .signatory { font-size: 12px; }
  @media print {
    body { padding: 0; }
    table { page-break-inside: avoid; }
  }
"#;

/// Escape `&`, `<`, `>`, `"` and `'` for use in element content and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `grid` into a complete HTML document.
pub fn render_document(grid: &Grid<'_>, schedule: &Schedule, options: &RenderOptions) -> String {
    HtmlDocument {
        grid,
        schedule,
        options,
    }
    .to_string()
}

/// Borrowed view of everything one document is built from; its
/// [`Display`](fmt::Display) impl streams the markup.
struct HtmlDocument<'r, 'g> {
    grid: &'r Grid<'g>,
    schedule: &'r Schedule,
    options: &'r RenderOptions,
}

impl fmt::Display for HtmlDocument<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")?;
        f.write_str("<meta charset=\"UTF-8\">\n")?;
        f.write_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        )?;
        writeln!(
            f,
            "<title>Timetable - {}</title>",
            escape_html(&self.schedule.department)
        )?;
        f.write_str("<style>\n")?;
        f.write_str(STYLE)?;
        f.write_str("</style>\n</head>\n<body>\n<div class=\"container\">\n")?;

        write_header(f, self.schedule)?;
        write_grid(f, self.grid, self.schedule, self.options)?;
        write_footer(f, self.schedule, self.options)?;

        f.write_str("</div>\n</body>\n</html>\n")
    }
}

fn write_header(out: &mut impl Write, schedule: &Schedule) -> fmt::Result {
    out.write_str("  <div class=\"header\">\n")?;
    writeln!(
        out,
        "    <h2>Department of {}</h2>",
        escape_html(&schedule.department)
    )?;
    writeln!(
        out,
        "    <p>Time Table: {} w.e.f: {}</p>",
        escape_html(&schedule.time_table_month),
        escape_html(&schedule.effective_date)
    )?;
    writeln!(
        out,
        "    <p>{} {} - ROOM NO: {}</p>",
        escape_html(&schedule.semester),
        escape_html(&schedule.section),
        escape_html(&schedule.room)
    )?;
    out.write_str("  </div>\n")
}

fn write_grid(
    out: &mut impl Write,
    grid: &Grid<'_>,
    schedule: &Schedule,
    options: &RenderOptions,
) -> fmt::Result {
    out.write_str("  <table>\n    <thead>\n      <tr>\n")?;
    writeln!(
        out,
        "        <th class=\"day-col\">{}</th>",
        escape_html(&options.day_header)
    )?;

    for (index, column) in grid.columns.iter().enumerate() {
        match grid.breaks.iter().find(|b| b.column == index) {
            Some(span) => writeln!(
                out,
                "        <th class=\"break-col\" rowspan=\"{}\">{}</th>",
                span.header_rowspan(),
                escape_html(&options.break_label)
            )?,
            None => writeln!(out, "        <th>{}</th>", column.interval)?,
        }
    }
    if grid.legend.is_some() {
        writeln!(
            out,
            "        <th class=\"legend-col\">{}</th>",
            escape_html(&options.legend_header)
        )?;
    }
    out.write_str("      </tr>\n    </thead>\n    <tbody>\n")?;

    for (row_index, row) in grid.rows.iter().enumerate() {
        out.write_str("      <tr>\n")?;
        writeln!(
            out,
            "        <td class=\"day-col\">{}</td>",
            escape_html(row.day)
        )?;

        for cell in &row.cells {
            match cell {
                Cell::Empty => out.write_str("        <td></td>\n")?,
                Cell::Spanned => {}
                Cell::Rendered { entry, colspan } => {
                    out.write_str("        <td class=\"slot-cell\"")?;
                    if *colspan > 1 {
                        write!(out, " colspan=\"{}\"", colspan)?;
                    }
                    writeln!(out, ">{}</td>", escape_html(&entry.label()))?;
                }
            }
        }

        if let (0, Some(legend)) = (row_index, grid.legend) {
            write!(
                out,
                "        <td class=\"legend-col\" rowspan=\"{}\">",
                legend.rows
            )?;
            for (i, subject) in schedule.subjects.iter().enumerate() {
                if i > 0 {
                    out.write_str("<br>")?;
                }
                write!(
                    out,
                    "{}-{}",
                    escape_html(&subject.code),
                    escape_html(&subject.name)
                )?;
            }
            out.write_str("</td>\n")?;
        }

        out.write_str("      </tr>\n")?;
    }

    out.write_str("    </tbody>\n  </table>\n")
}

fn write_footer(out: &mut impl Write, schedule: &Schedule, options: &RenderOptions) -> fmt::Result {
    out.write_str("  <table style=\"width:100%\">\n")?;
    out.write_str("    <tr>\n      <td class=\"subject-bar\" colspan=\"2\">")?;
    for (i, subject) in schedule.subjects.iter().enumerate() {
        if i > 0 {
            out.write_str(" | ")?;
        }
        write!(
            out,
            "{} - {}",
            escape_html(&subject.code),
            escape_html(&subject.name)
        )?;
    }
    out.write_str("</td>\n      <td colspan=\"2\"></td>\n    </tr>\n")?;

    out.write_str("    <tr>\n      <td colspan=\"2\" style=\"text-align:left\">")?;
    for (i, participant) in schedule.participants.iter().enumerate() {
        if i > 0 {
            out.write_str(" / ")?;
        }
        out.write_str(&escape_html(&participant.abbreviation))?;
    }
    out.write_str("</td>\n")?;
    writeln!(
        out,
        "      <th>{}</th>\n      <th>{}</th>",
        escape_html(&options.coordinator_title),
        escape_html(&options.co_coordinator_title)
    )?;
    out.write_str("    </tr>\n")?;

    out.write_str("    <tr>\n      <td colspan=\"2\"></td>\n")?;
    write_signatory(out, &schedule.class_coordinator)?;
    write_signatory(out, &schedule.class_co_coordinator)?;
    out.write_str("    </tr>\n  </table>\n")
}

fn write_signatory(out: &mut impl Write, signatory: &Signatory) -> fmt::Result {
    write!(
        out,
        "      <td class=\"signatory\">{}<br>({})",
        escape_html(&signatory.name),
        escape_html(&signatory.abbreviation)
    )?;
    if let Some(phone) = signatory.phone.as_deref().filter(|p| !p.is_empty()) {
        write!(out, "<br>{}", escape_html(phone))?;
    }
    out.write_str("</td>\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
