//! Monday-date resolution.
//!
//! A block's first row, anchor column, holds the week's start date —
//! either a native date value or free-form text someone typed by hand
//! (`"2024/01/15"`, `"03.07"`, `"9"`). Text is normalized by collapsing
//! every non-digit run to a dot and reading up to three numeric parts;
//! missing parts fill in from `today`. All callers pass `today`
//! explicitly, so resolution never reaches for ambient clock state.

use chrono::{Datelike, NaiveDate};

use crate::config::LayoutConfig;
use crate::error::{Result, WeekgridError};
use crate::grid::Grid;
use crate::layout::Layout;
use crate::types::CellValue;

/// Resolve the Monday-date of the block at `index` (0-based).
///
/// An out-of-range index falls back to row 1 — a defensive default,
/// not a validated input.
pub fn read_monday_date<G: Grid + ?Sized>(
    grid: &G,
    layout: &Layout,
    index: usize,
    cfg: &LayoutConfig,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let row = layout.get(index).map_or(1, |b| b.start);

    match grid.value(row, cfg.anchor_col) {
        CellValue::Date(d) => Ok(d),
        CellValue::Empty => Err(WeekgridError::MissingDate { row }),
        other => {
            let raw = other.to_display_text();
            if raw.trim().is_empty() {
                return Err(WeekgridError::MissingDate { row });
            }
            normalize_date(&raw, today)
        }
    }
}

/// Normalize loosely formatted date text.
///
/// Every run of non-digit characters becomes a single dot; leading and
/// trailing dots are stripped; the remaining dot-separated parts are
/// read as:
/// - 3+ parts: year, month, day (extra parts ignored)
/// - 2 parts: month, day in the current year
/// - 1 part: day in the current year and month
///
/// Zero parts, or parts that do not form a real calendar date, fail
/// with [`WeekgridError::DateParse`] naming the raw text.
pub fn normalize_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let mut norm = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            norm.push(ch);
        } else if !norm.ends_with('.') {
            norm.push('.');
        }
    }

    let parts: Vec<u32> = norm
        .split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u32>()
                .map_err(|_| WeekgridError::DateParse(raw.to_string()))
        })
        .collect::<Result<_>>()?;

    let (year, month, day) = match parts.as_slice() {
        [y, m, d, ..] => {
            let year =
                i32::try_from(*y).map_err(|_| WeekgridError::DateParse(raw.to_string()))?;
            (year, *m, *d)
        }
        [m, d] => (today.year(), *m, *d),
        [d] => (today.year(), today.month(), *d),
        [] => return Err(WeekgridError::DateParse(raw.to_string())),
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| WeekgridError::DateParse(raw.to_string()))
}
