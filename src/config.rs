//! Layout configuration.
//!
//! The grid layout is governed by a handful of constants: how wide a
//! week block is, how many columns a day occupies, where the anchor and
//! marker cells sit. [`LayoutConfig::default`] reproduces the layout
//! the engine was originally written against (21 columns, Mon–Sat,
//! 20-row template); all operations take the config explicitly so a
//! differently shaped sheet only needs a different value.

use serde::{Deserialize, Serialize};

/// Fixed layout constants for a week-block sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Total columns a week block spans.
    pub block_width: u32,
    /// Columns occupied by a single day group.
    pub day_block: u32,
    /// Day groups per block (Monday through Saturday).
    pub num_days: u32,
    /// Rows in a freshly created block; also the scanner's fallback
    /// when a marker is absent or unreadable.
    pub default_height: u32,
    /// Column of a block's first row holding the height marker.
    pub marker_col: u32,
    /// Column of a block's first row holding the Monday date.
    pub anchor_col: u32,
    /// Rows added per unit when growing a block.
    pub grow_step: u32,
    /// Weekday labels written under the day headers (localization point).
    pub day_labels: Vec<String>,
    /// Name of the sheet holding the running week blocks.
    pub schedule_sheet: String,
    /// Name of the sheet holding the block template (block 0).
    pub template_sheet: String,
    /// Name of the sheet archived blocks are appended to.
    pub archive_sheet: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_width: 21,
            day_block: 3,
            num_days: 6,
            default_height: 20,
            marker_col: 20,
            anchor_col: 1,
            grow_step: 3,
            day_labels: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from)
            .to_vec(),
            schedule_sheet: "Schedule".to_string(),
            template_sheet: "Template".to_string(),
            archive_sheet: "Archive".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Column of day group `i` (0-based) within a block.
    pub fn day_col(&self, i: u32) -> u32 {
        1 + i * self.day_block
    }

    /// Label for day group `i`, or an empty string past the configured set.
    pub fn day_label(&self, i: u32) -> &str {
        self.day_labels
            .get(i as usize)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_original_sheet() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.block_width, 21);
        assert_eq!(cfg.day_block, 3);
        assert_eq!(cfg.num_days, 6);
        assert_eq!(cfg.default_height, 20);
        assert_eq!(cfg.marker_col, 20);
        assert_eq!(cfg.anchor_col, 1);
        assert_eq!(cfg.day_labels.len(), 6);
    }

    #[test]
    fn test_day_columns_advance_by_day_block() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.day_col(0), 1);
        assert_eq!(cfg.day_col(1), 4);
        assert_eq!(cfg.day_col(5), 16);
    }

    #[test]
    fn test_day_label_out_of_range_is_empty() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.day_label(0), "Monday");
        assert_eq!(cfg.day_label(6), "");
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = LayoutConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{"defaultHeight": 12}"#).unwrap();
        assert_eq!(cfg.default_height, 12);
        assert_eq!(cfg.block_width, 21);
    }
}
