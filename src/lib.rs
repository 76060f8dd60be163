//! weekgrid - week-block scheduling grid engine
//!
//! Manages a week-based scheduling grid inside a spreadsheet sheet:
//! - Variable-height weekly blocks stored contiguously from row 1
//! - Per-block height markers (`H=<n>`) as the layout side channel
//! - Append / archive / grow / shrink operations that preserve block
//!   contiguity and re-synchronize markers
//! - Loose date normalization for hand-typed week-start dates
//!
//! Cell I/O goes through the [`grid::Grid`] trait; the bundled
//! [`types::Sheet`] is the in-memory implementation used by the CLI
//! and tests, and a hosted-spreadsheet adapter slots in the same way.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use weekgrid::{create_next_week, Grid, Layout, LayoutConfig};
//! use weekgrid::types::{CellValue, Sheet};
//!
//! let cfg = LayoutConfig::default();
//!
//! // A template sheet: block 0 starts on a Monday.
//! let mut template = Sheet::new("Template", cfg.default_height);
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! template.set_value(1, cfg.anchor_col, CellValue::Date(monday));
//!
//! // Append two weeks to an empty schedule sheet.
//! let mut schedule = Sheet::new("Schedule", 1);
//! let today = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
//! create_next_week(&template, &mut schedule, &cfg, today).unwrap();
//! create_next_week(&template, &mut schedule, &cfg, today).unwrap();
//!
//! let layout = Layout::scan(&schedule, &cfg);
//! assert_eq!(layout.len(), 2);
//! assert_eq!(layout.blocks()[1].start, 21);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod header;
pub mod layout;
pub mod marker;
pub mod monday;
pub mod types;

pub use config::LayoutConfig;
pub use editor::{
    archive_oldest_week, create_next_week, grow_current_week, shrink_current_week, ArchiveReport,
};
pub use error::{Result, WeekgridError};
pub use grid::{copy_between, ClearMode, Grid, Range};
pub use layout::{Block, Layout};
pub use monday::{normalize_date, read_monday_date};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
