//! Week-block layout recovery.
//!
//! A sheet holds its week blocks back-to-back from row 1, each block's
//! height recorded in its marker cell. There is no separate index
//! structure: the layout is recovered by walking the sheet, reading one
//! marker per block and skipping ahead by its height. [`Layout`] is the
//! explicit in-memory form of that list; operations compute against it
//! and re-materialize changes through [`Grid`] calls.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::grid::Grid;
use crate::marker;

/// A contiguous run of rows making up one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// 1-based row where the block begins.
    pub start: u32,
    /// Rows the block occupies.
    pub height: u32,
}

impl Block {
    /// Last row of the block.
    pub fn end(&self) -> u32 {
        self.start + self.height - 1
    }

    /// Containment test: `row ∈ [start, start + height)`.
    pub fn contains(&self, row: u32) -> bool {
        row >= self.start && row < self.start + self.height
    }
}

/// The ordered list of blocks recovered from a sheet.
///
/// Invariant: blocks are contiguous in ascending order from row 1;
/// `blocks[i+1].start == blocks[i].start + blocks[i].height`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    blocks: Vec<Block>,
}

impl Layout {
    /// Recover the block list by walking the sheet from row 1.
    ///
    /// A candidate start row with an empty anchor cell ends the walk.
    /// Otherwise the marker cell is read for an embedded height; a
    /// missing or unreadable marker (including a height of 0, which
    /// would stall the walk) falls back to `cfg.default_height`.
    pub fn scan<G: Grid + ?Sized>(grid: &G, cfg: &LayoutConfig) -> Self {
        let mut blocks = Vec::new();
        let mut row = 1;

        while row <= grid.max_rows() {
            if grid.value(row, cfg.anchor_col).is_empty() {
                break;
            }

            let meta = grid.value(row, cfg.marker_col).to_display_text();
            let height = marker::parse_height(&meta)
                .filter(|h| *h > 0)
                .unwrap_or(cfg.default_height)
                .max(1);

            blocks.push(Block { start: row, height });
            row += height;
        }

        log::debug!("scanned {} block(s), next start {}", blocks.len(), row);
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn first(&self) -> Option<Block> {
        self.blocks.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<Block> {
        self.blocks.get(index).copied()
    }

    /// The block containing `row`, if any.
    pub fn block_containing(&self, row: u32) -> Option<Block> {
        self.blocks.iter().find(|b| b.contains(row)).copied()
    }

    /// Row where the next appended block would begin:
    /// 1 plus the sum of all block heights.
    pub fn next_start(&self) -> u32 {
        self.blocks.iter().fold(1, |acc, b| acc + b.height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{Cell, CellValue, Sheet};

    /// Lay out blocks of the given heights contiguously from row 1,
    /// writing anchor text and a height marker for each.
    fn sheet_with_blocks(heights: &[u32]) -> Sheet {
        let cfg = LayoutConfig::default();
        let mut sheet = Sheet::new("Schedule", 200);
        let mut row = 1;
        for &h in heights {
            sheet.set_value(row, cfg.anchor_col, CellValue::Text("2024.1.1".into()));
            sheet.set_value(
                row,
                cfg.marker_col,
                CellValue::Text(crate::marker::format_height(h)),
            );
            row += h;
        }
        sheet
    }

    #[test]
    fn test_scan_recovers_contiguous_blocks() {
        let cfg = LayoutConfig::default();
        let layout = Layout::scan(&sheet_with_blocks(&[20, 26, 14]), &cfg);

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.blocks()[0], Block { start: 1, height: 20 });
        assert_eq!(layout.blocks()[1], Block { start: 21, height: 26 });
        assert_eq!(layout.blocks()[2], Block { start: 47, height: 14 });
        assert_eq!(layout.next_start(), 61);
    }

    #[test]
    fn test_scan_stops_at_empty_anchor() {
        let cfg = LayoutConfig::default();
        let mut sheet = sheet_with_blocks(&[20]);
        // Stray marker past the first block, but no anchor: not a block.
        sheet.set_value(21, cfg.marker_col, CellValue::Text("H=8".into()));
        let layout = Layout::scan(&sheet, &cfg);
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_scan_empty_sheet() {
        let cfg = LayoutConfig::default();
        let layout = Layout::scan(&Sheet::new("Schedule", 50), &cfg);
        assert!(layout.is_empty());
        assert_eq!(layout.next_start(), 1);
    }

    #[test]
    fn test_missing_marker_defaults_height() {
        let cfg = LayoutConfig::default();
        let mut sheet = Sheet::new("Schedule", 100);
        sheet.set_value(1, cfg.anchor_col, CellValue::Text("2024.1.1".into()));
        // No marker at all; next anchor sits a default-height away.
        sheet.set_value(21, cfg.anchor_col, CellValue::Text("2024.1.8".into()));
        sheet.set_value(21, cfg.marker_col, CellValue::Text("hello".into()));

        let layout = Layout::scan(&sheet, &cfg);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.blocks()[0].height, 20);
        assert_eq!(layout.blocks()[1].height, 20);
    }

    #[test]
    fn test_zero_height_marker_defaults() {
        let cfg = LayoutConfig::default();
        let mut sheet = Sheet::new("Schedule", 100);
        sheet.set_value(1, cfg.anchor_col, CellValue::Text("wk".into()));
        sheet.set_value(1, cfg.marker_col, CellValue::Text("H=0".into()));

        let layout = Layout::scan(&sheet, &cfg);
        assert_eq!(layout.blocks()[0].height, 20);
    }

    #[test]
    fn test_anchor_may_be_any_non_empty_value() {
        let cfg = LayoutConfig::default();
        let mut sheet = Sheet::new("Schedule", 100);
        sheet.set_value(1, cfg.anchor_col, CellValue::Number(45_292.0));
        sheet.set_cell(1, cfg.marker_col, Cell::new(CellValue::Text("H=5".into())));

        let layout = Layout::scan(&sheet, &cfg);
        assert_eq!(layout.blocks()[0], Block { start: 1, height: 5 });
    }

    #[test]
    fn test_block_containing() {
        let cfg = LayoutConfig::default();
        let layout = Layout::scan(&sheet_with_blocks(&[20, 10]), &cfg);

        assert_eq!(layout.block_containing(1).unwrap().start, 1);
        assert_eq!(layout.block_containing(20).unwrap().start, 1);
        assert_eq!(layout.block_containing(21).unwrap().start, 21);
        assert_eq!(layout.block_containing(30).unwrap().start, 21);
        assert_eq!(layout.block_containing(31), None);
    }
}
