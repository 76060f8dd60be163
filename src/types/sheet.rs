use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Cell, CellData};
use crate::grid::Grid;

/// In-memory sheet: sparse 1-based cell storage plus a physical row count.
///
/// Serializes as `{name, maxRows, cells: [{r, c, cell}]}` with cells in
/// row-major order. Unlike a hosted sheet, writing past `max_rows` does
/// not fail; the sheet grows to cover the written row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SheetRepr", into = "SheetRepr")]
pub struct Sheet {
    name: String,
    max_rows: u32,
    cells: BTreeMap<(u32, u32), Cell>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetRepr {
    name: String,
    max_rows: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cells: Vec<CellData>,
}

impl From<SheetRepr> for Sheet {
    fn from(repr: SheetRepr) -> Self {
        let mut sheet = Sheet::new(&repr.name, repr.max_rows);
        for data in repr.cells {
            sheet.set_cell(data.r, data.c, data.cell);
        }
        sheet
    }
}

impl From<Sheet> for SheetRepr {
    fn from(sheet: Sheet) -> Self {
        let cells = sheet
            .cells
            .into_iter()
            .map(|((r, c), cell)| CellData { r, c, cell })
            .collect();
        SheetRepr {
            name: sheet.name,
            max_rows: sheet.max_rows,
            cells,
        }
    }
}

impl Sheet {
    pub fn new(name: &str, max_rows: u32) -> Self {
        Self {
            name: name.to_string(),
            max_rows,
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stored (non-blank) cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate stored cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().map(|(&(r, c), cell)| (r, c, cell))
    }
}

impl Grid for Sheet {
    fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells.get(&(row, col)).cloned().unwrap_or_default()
    }

    fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        if cell.is_blank() {
            self.cells.remove(&(row, col));
        } else {
            if row > self.max_rows {
                self.max_rows = row;
            }
            self.cells.insert((row, col), cell);
        }
    }

    fn max_rows(&self) -> u32 {
        self.max_rows
    }

    fn last_row(&self) -> u32 {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.value.is_empty())
            .map(|(&(r, _), _)| r)
            .max()
            .unwrap_or(0)
    }

    fn insert_rows_after(&mut self, after: u32, count: u32) {
        if count == 0 {
            return;
        }
        let shifted = std::mem::take(&mut self.cells)
            .into_iter()
            .map(|((r, c), cell)| {
                let r = if r > after { r + count } else { r };
                ((r, c), cell)
            })
            .collect();
        self.cells = shifted;
        self.max_rows += count;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    #[test]
    fn test_blank_cells_are_not_stored() {
        let mut sheet = Sheet::new("s", 10);
        sheet.set_cell(1, 1, Cell::new(CellValue::Text("x".into())));
        sheet.set_cell(1, 1, Cell::default());
        assert_eq!(sheet.cell_count(), 0);
        assert_eq!(sheet.cell(1, 1), Cell::default());
    }

    #[test]
    fn test_last_row_ignores_style_only_cells() {
        let mut sheet = Sheet::new("s", 10);
        sheet.set_cell(2, 1, Cell::new(CellValue::Number(1.0)));
        sheet.set_cell(7, 1, Cell::styled(CellValue::Empty, 4));
        assert_eq!(sheet.last_row(), 2);
        assert_eq!(sheet.max_rows(), 10);
    }

    #[test]
    fn test_insert_rows_after_shifts_below_only() {
        let mut sheet = Sheet::new("s", 5);
        sheet.set_cell(2, 1, Cell::new(CellValue::Number(2.0)));
        sheet.set_cell(4, 1, Cell::new(CellValue::Number(4.0)));
        sheet.insert_rows_after(3, 2);
        assert_eq!(sheet.value(2, 1), CellValue::Number(2.0));
        assert_eq!(sheet.value(4, 1), CellValue::Empty);
        assert_eq!(sheet.value(6, 1), CellValue::Number(4.0));
        assert_eq!(sheet.max_rows(), 7);
    }

    #[test]
    fn test_write_past_max_rows_grows_sheet() {
        let mut sheet = Sheet::new("s", 3);
        sheet.set_cell(9, 1, Cell::new(CellValue::Bool(true)));
        assert_eq!(sheet.max_rows(), 9);
    }

    #[test]
    fn test_sheet_json_round_trip() {
        let mut sheet = Sheet::new("s", 12);
        sheet.set_cell(1, 1, Cell::new(CellValue::Text("2024.1.15".into())));
        sheet.set_cell(1, 20, Cell::styled(CellValue::Text("H=20".into()), 2));
        let json = serde_json::to_string(&sheet).unwrap();
        let back: Sheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
