//! In-memory workbook model.
//!
//! [`Sheet`] is the crate's reference [`Grid`](crate::grid::Grid)
//! implementation; [`Workbook`] is the named-sheet lookup layer above
//! it. Both serialize to JSON for the CLI surface.

mod cell;
mod sheet;
mod workbook;

pub use cell::{Cell, CellData, CellValue};
pub use sheet::Sheet;
pub use workbook::Workbook;
