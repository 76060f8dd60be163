//! Shared fixtures for integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use chrono::NaiveDate;
use weekgrid::types::{Cell, CellValue, Sheet, Workbook};
use weekgrid::{Grid, LayoutConfig};

/// Fixed "today" so partial-date normalization is deterministic.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A template sheet whose block 0 starts on `monday`, with a styled
/// body so formatting propagation can be asserted on.
pub fn template_sheet(cfg: &LayoutConfig, monday: NaiveDate) -> Sheet {
    let mut sheet = Sheet::new(&cfg.template_sheet, cfg.default_height);
    sheet.set_value(1, cfg.anchor_col, CellValue::Date(monday));
    for dr in 2..cfg.default_height {
        for c in 1..=cfg.block_width {
            sheet.set_cell(1 + dr, c, Cell::styled(CellValue::Empty, 1));
        }
    }
    sheet
}

/// A workbook with a template (block 0 starting on `monday`) and an
/// empty schedule sheet, named per `cfg`.
pub fn workbook(cfg: &LayoutConfig, monday: NaiveDate) -> Workbook {
    let mut wb = Workbook::new();
    wb.push(template_sheet(cfg, monday));
    wb.push(Sheet::new(&cfg.schedule_sheet, 1));
    wb
}
