use crate::config::LayoutConfig;
use crate::error::{Result, WeekgridError};
use crate::grid::{ClearMode, Grid, Range};
use crate::header;
use crate::layout::{Block, Layout};

/// Grow the block containing `selected_row` by `units × grow_step` rows.
///
/// Fresh rows are appended at the sheet's end, the trailing range below
/// the block moves down by the added amount, the vacated rows are
/// cleared contents-only, and the block's marker is rewritten. Rows
/// above the insertion point — the block's own body included — are
/// never touched.
pub fn grow_current_week<G: Grid + ?Sized>(
    grid: &mut G,
    cfg: &LayoutConfig,
    selected_row: u32,
    units: u32,
) -> Result<Block> {
    let layout = Layout::scan(grid, cfg);
    let block = layout
        .block_containing(selected_row)
        .ok_or(WeekgridError::NoActiveBlock { row: selected_row })?;

    if units == 0 {
        return Err(WeekgridError::InvalidInput(
            "grow units must be at least 1".to_string(),
        ));
    }
    let rows_to_add = units.checked_mul(cfg.grow_step).ok_or_else(|| {
        WeekgridError::InvalidInput(format!("grow units out of range: {units}"))
    })?;

    let insertion_point = block.start + block.height;
    log::info!(
        "growing block at row {} by {} row(s)",
        block.start,
        rows_to_add
    );

    // Spare capacity first, regardless of where the shift target lands.
    let original_max = grid.max_rows();
    if original_max < insertion_point {
        grid.insert_rows_after(original_max, insertion_point - original_max);
    }
    grid.insert_rows_after(grid.max_rows(), rows_to_add);

    let rows_below = (original_max + 1).saturating_sub(insertion_point);
    if rows_below > 0 {
        grid.move_range(
            Range::new(insertion_point, 1, rows_below, cfg.block_width),
            insertion_point + rows_to_add,
            1,
        );
    }

    grid.clear_range(
        Range::new(insertion_point, 1, rows_to_add, cfg.block_width),
        ClearMode::ContentsOnly,
    );

    let grown = Block {
        start: block.start,
        height: block.height + rows_to_add,
    };
    header::stamp_height(grid, cfg, grown.start, grown.height);
    Ok(grown)
}

/// Shrink the block containing `selected_row` by `rows` rows, removed
/// from the block's bottom.
///
/// Valid only while at least the two header rows survive:
/// `1 ≤ rows < height − 2`. The trailing range is fully cleared
/// (contents and styles) and the marker rewritten; no row moves, so
/// blocks below keep their physical position and the removed rows
/// simply fall out of the block's logical footprint.
pub fn shrink_current_week<G: Grid + ?Sized>(
    grid: &mut G,
    cfg: &LayoutConfig,
    selected_row: u32,
    rows: u32,
) -> Result<Block> {
    let layout = Layout::scan(grid, cfg);
    let block = layout
        .block_containing(selected_row)
        .ok_or(WeekgridError::NoActiveBlock { row: selected_row })?;

    let too_large = rows.checked_add(2).map_or(true, |r| r >= block.height);
    if rows == 0 || too_large {
        return Err(WeekgridError::InvalidInput(format!(
            "cannot remove {rows} row(s) from a {}-row block",
            block.height
        )));
    }

    let start_row = block.start + block.height - rows;
    log::info!(
        "shrinking block at row {} by {} row(s)",
        block.start,
        rows
    );

    grid.clear_range(
        Range::new(start_row, 1, rows, cfg.block_width),
        ClearMode::All,
    );

    let shrunk = Block {
        start: block.start,
        height: block.height - rows,
    };
    header::stamp_height(grid, cfg, shrunk.start, shrunk.height);
    Ok(shrunk)
}
