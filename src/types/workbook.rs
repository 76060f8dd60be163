use serde::{Deserialize, Serialize};

use super::Sheet;
use crate::error::{Result, WeekgridError};

/// A named, ordered collection of sheets.
///
/// The workbook is the lookup layer above [`Grid`](crate::grid::Grid):
/// operations take sheet handles, the workbook resolves names to
/// handles and reports [`WeekgridError::MissingSheet`] for absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| WeekgridError::MissingSheet(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| WeekgridError::MissingSheet(name.to_string()))
    }

    /// Ensure a sheet with this name exists, creating an empty one
    /// (with `max_rows` rows) if absent.
    pub fn ensure_sheet(&mut self, name: &str, max_rows: u32) {
        if self.sheets.iter().all(|s| s.name() != name) {
            self.sheets.push(Sheet::new(name, max_rows));
        }
    }

    /// Borrow two distinct sheets mutably at once.
    ///
    /// Needed by operations that read one sheet while writing another
    /// (create-week's template/target, archive's target/archive).
    pub fn two_sheets_mut(&mut self, a: &str, b: &str) -> Result<(&mut Sheet, &mut Sheet)> {
        if a == b {
            return Err(WeekgridError::InvalidInput(format!(
                "sheets {a:?} and {b:?} must be distinct"
            )));
        }
        let mut first = None;
        let mut second = None;
        for sheet in &mut self.sheets {
            if sheet.name() == a {
                first = Some(sheet);
            } else if sheet.name() == b {
                second = Some(sheet);
            }
        }
        match (first, second) {
            (Some(fa), Some(fb)) => Ok((fa, fb)),
            (None, _) => Err(WeekgridError::MissingSheet(a.to_string())),
            (_, None) => Err(WeekgridError::MissingSheet(b.to_string())),
        }
    }
}
