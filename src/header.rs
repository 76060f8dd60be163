//! Week header writing.
//!
//! A block's first two rows carry its day headers: the date of each day
//! across the top, the weekday label underneath, one day group every
//! `day_block` columns. The height marker is stamped last.

use chrono::{Duration, NaiveDate};

use crate::config::LayoutConfig;
use crate::grid::Grid;
use crate::marker;
use crate::types::CellValue;

/// Write the six day headers for the block starting at `start_row`.
///
/// Day group `i` gets `monday + i` days at `(start_row, day_col(i))`
/// and its label at `(start_row + 1, day_col(i))`. Afterward the
/// *default*-height marker is stamped — always the default, regardless
/// of the block's eventual height; callers that change the height must
/// re-stamp with [`stamp_height`].
pub fn write_week_header<G: Grid + ?Sized>(
    grid: &mut G,
    cfg: &LayoutConfig,
    start_row: u32,
    monday: NaiveDate,
) {
    for i in 0..cfg.num_days {
        let col = cfg.day_col(i);
        let date = monday + Duration::days(i64::from(i));
        grid.set_value(start_row, col, CellValue::Date(date));
        grid.set_value(
            start_row + 1,
            col,
            CellValue::Text(cfg.day_label(i).to_string()),
        );
    }
    stamp_height(grid, cfg, start_row, cfg.default_height);
}

/// Rewrite the height marker of the block starting at `start_row`.
///
/// The marker cell is the only place block heights are serialized back
/// to the grid.
pub fn stamp_height<G: Grid + ?Sized>(
    grid: &mut G,
    cfg: &LayoutConfig,
    start_row: u32,
    height: u32,
) {
    grid.set_value(
        start_row,
        cfg.marker_col,
        CellValue::Text(marker::format_height(height)),
    );
}
