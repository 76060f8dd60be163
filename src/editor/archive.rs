use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::{Result, WeekgridError};
use crate::grid::{copy_between, ClearMode, Grid, Range};
use crate::layout::{Block, Layout};

/// What an archive operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveReport {
    /// The block removed from the schedule sheet.
    pub removed: Block,
    /// Row in the archive sheet where the copy begins.
    pub archived_to: u32,
}

/// Archive the oldest week: copy block 0 to the archive sheet, then
/// compact every later block upward by block 0's height.
///
/// The copy is appended at the archive's first free row. Compaction is
/// a full-width copy of the trailing rows over block 0's old position,
/// followed by a clear of the stale tail; markers embedded in the
/// shifted rows travel with their content, so no separate marker
/// rewrite happens here.
pub fn archive_oldest_week<T, A>(
    target: &mut T,
    archive: &mut A,
    cfg: &LayoutConfig,
) -> Result<ArchiveReport>
where
    T: Grid + ?Sized,
    A: Grid + ?Sized,
{
    let layout = Layout::scan(target, cfg);
    let first = layout.first().ok_or(WeekgridError::NothingToArchive)?;
    log::info!(
        "archiving block at rows {}..={} ({} more remain)",
        first.start,
        first.end(),
        layout.len() - 1
    );

    let dest_row = archive.last_row() + 1;
    copy_between(
        target,
        Range::new(first.start, 1, first.height, cfg.block_width),
        archive,
        dest_row,
        1,
    );

    let below = target.last_row().saturating_sub(first.end());
    if below > 0 {
        target.copy_range(
            Range::new(first.start + first.height, 1, below, cfg.block_width),
            first.start,
            1,
        );
        target.clear_range(
            Range::new(first.start + below, 1, first.height, cfg.block_width),
            ClearMode::All,
        );
    } else {
        target.clear_range(
            Range::new(first.start, 1, first.height, cfg.block_width),
            ClearMode::All,
        );
    }

    Ok(ArchiveReport {
        removed: first,
        archived_to: dest_row,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]
mod tests {
    use super::*;
    use crate::types::{Cell, CellValue, Sheet};

    /// Blocks of the given heights, each filled with numbered content
    /// so shifts are observable: cell (r, c) of block i holds
    /// `i * 10_000 + r_offset * 100 + c`.
    fn filled_sheet(cfg: &LayoutConfig, heights: &[u32]) -> Sheet {
        let mut sheet = Sheet::new("Schedule", 200);
        let mut start = 1;
        for (i, &h) in heights.iter().enumerate() {
            for dr in 0..h {
                for c in 1..=cfg.block_width {
                    let tag = i as u32 * 10_000 + dr * 100 + c;
                    sheet.set_cell(
                        start + dr,
                        c,
                        Cell::styled(CellValue::Number(f64::from(tag)), i as u32),
                    );
                }
            }
            sheet.set_value(
                start,
                cfg.marker_col,
                CellValue::Text(crate::marker::format_height(h)),
            );
            start += h;
        }
        sheet
    }

    #[test]
    fn test_archive_moves_block_zero_to_archive() {
        let cfg = LayoutConfig::default();
        let mut target = filled_sheet(&cfg, &[6, 4]);
        let mut archive = Sheet::new("Archive", 20);

        let report = archive_oldest_week(&mut target, &mut archive, &cfg).unwrap();

        assert_eq!(report.removed, Block { start: 1, height: 6 });
        assert_eq!(report.archived_to, 1);
        // Archived copy equals pre-archive block 0, styles included.
        assert_eq!(archive.value(1, 1), CellValue::Number(1.0));
        assert_eq!(archive.value(6, 2), CellValue::Number(502.0));
        assert_eq!(archive.cell(1, 1).style, Some(0));
    }

    #[test]
    fn test_archive_compacts_remaining_blocks_up() {
        let cfg = LayoutConfig::default();
        let mut target = filled_sheet(&cfg, &[6, 4, 5]);
        let mut archive = Sheet::new("Archive", 20);

        archive_oldest_week(&mut target, &mut archive, &cfg).unwrap();

        let layout = Layout::scan(&target, &cfg);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.blocks()[0], Block { start: 1, height: 4 });
        assert_eq!(layout.blocks()[1], Block { start: 5, height: 5 });
        // Former block 1 content now sits at row 1.
        assert_eq!(target.value(1, 1), CellValue::Number(10_001.0));
        // Stale tail rows are fully cleared.
        assert_eq!(target.last_row(), 9);
        assert!(target.cell(10, 1).is_blank());
    }

    #[test]
    fn test_archive_last_block_just_clears() {
        let cfg = LayoutConfig::default();
        let mut target = filled_sheet(&cfg, &[6]);
        let mut archive = Sheet::new("Archive", 20);

        archive_oldest_week(&mut target, &mut archive, &cfg).unwrap();

        assert_eq!(Layout::scan(&target, &cfg).len(), 0);
        assert_eq!(target.last_row(), 0);
    }

    #[test]
    fn test_archive_appends_after_existing_entries() {
        let cfg = LayoutConfig::default();
        let mut target = filled_sheet(&cfg, &[6, 4]);
        let mut archive = Sheet::new("Archive", 20);
        archive.set_value(3, 1, CellValue::Text("older".into()));

        let report = archive_oldest_week(&mut target, &mut archive, &cfg).unwrap();
        assert_eq!(report.archived_to, 4);
    }

    #[test]
    fn test_archive_empty_sheet_aborts() {
        let cfg = LayoutConfig::default();
        let mut target = Sheet::new("Schedule", 40);
        let mut archive = Sheet::new("Archive", 20);

        let err = archive_oldest_week(&mut target, &mut archive, &cfg).unwrap_err();
        assert!(matches!(err, WeekgridError::NothingToArchive));
        assert_eq!(archive.cell_count(), 0);
    }
}
