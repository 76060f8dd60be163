//! Structured error types for weekgrid.
//!
//! Every fallible operation in the crate returns [`Result`]; the CLI
//! surfaces errors on stderr with a nonzero exit code.

/// All errors that can occur while scanning or editing a week grid.
#[derive(Debug, thiserror::Error)]
pub enum WeekgridError {
    /// A required named sheet is absent from the workbook.
    #[error("missing sheet: {0}")]
    MissingSheet(String),

    /// A block's anchor cell is empty where a date was expected.
    #[error("no date in anchor cell at row {row}")]
    MissingDate { row: u32 },

    /// The anchor cell held text that does not normalize to a date.
    #[error("could not parse date from {0:?}")]
    DateParse(String),

    /// The selected row is not inside any recognized block.
    #[error("row {row} is not inside any week block")]
    NoActiveBlock { row: u32 },

    /// A grow/shrink count is zero or out of bounds.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Archive was requested on a sheet with no blocks.
    #[error("no week blocks to archive")]
    NothingToArchive,

    /// I/O error (CLI file layer).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error (CLI file layer).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WeekgridError>;
