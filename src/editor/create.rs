use chrono::{Duration, NaiveDate};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::grid::{copy_between, Grid, Range};
use crate::header;
use crate::layout::{Block, Layout};
use crate::monday;

/// Append the next week block to `target`.
///
/// The template sheet's block 0 (a `default_height × block_width`
/// range) is copied to the first row after the existing blocks, the
/// sheet growing first if it is short. The new block's Monday-date is
/// seeded from the template when the target is empty; otherwise it is
/// the *first* target block's date plus 7 days per existing block.
/// Dates anchor to the earliest block: the layout is assumed to hold
/// consecutive, never-reordered weeks.
///
/// The template copy lands before the date is resolved, so a
/// [`MissingDate`](crate::WeekgridError::MissingDate) or
/// [`DateParse`](crate::WeekgridError::DateParse) error here leaves the
/// copied rows in place without headers.
pub fn create_next_week<T, S>(
    template: &T,
    target: &mut S,
    cfg: &LayoutConfig,
    today: NaiveDate,
) -> Result<Block>
where
    T: Grid + ?Sized,
    S: Grid + ?Sized,
{
    let layout = Layout::scan(target, cfg);
    let week_count = layout.len();
    let new_start = layout.next_start();
    log::info!("creating week {} at row {}", week_count + 1, new_start);

    let need_last = new_start + cfg.default_height - 1;
    if target.max_rows() < need_last {
        let short = need_last - target.max_rows();
        target.insert_rows_after(target.max_rows(), short);
    }

    copy_between(
        template,
        Range::new(1, 1, cfg.default_height, cfg.block_width),
        target,
        new_start,
        1,
    );

    let new_monday = if week_count == 0 {
        let template_layout = Layout::scan(template, cfg);
        monday::read_monday_date(template, &template_layout, 0, cfg, today)?
    } else {
        let base = monday::read_monday_date(target, &layout, 0, cfg, today)?;
        base + Duration::weeks(i64::try_from(week_count).unwrap_or(0))
    };

    header::write_week_header(target, cfg, new_start, new_monday);
    log::debug!("week {} starts {}", week_count + 1, new_monday);

    Ok(Block {
        start: new_start,
        height: cfg.default_height,
    })
}
