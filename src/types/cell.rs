use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cell's value.
///
/// Type tags follow the usual spreadsheet shorthand: s=string, n=number,
/// b=boolean, d=date, z=empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum CellValue {
    #[default]
    #[serde(rename = "z")]
    Empty,
    #[serde(rename = "s")]
    Text(String),
    #[serde(rename = "n")]
    Number(f64),
    #[serde(rename = "b")]
    Bool(bool),
    #[serde(rename = "d")]
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Coerce the value to display text, the way a host grid would when
    /// a string is requested from a non-string cell.
    pub fn to_display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Date(d) => d.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// A single cell: its value plus an opaque style token.
///
/// The style token stands in for the host grid's formatting (fills,
/// borders, conditional formatting); it travels with full copies and
/// survives contents-only clears.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default, skip_serializing_if = "CellValue::is_empty")]
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u32>,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Self { value, style: None }
    }

    pub fn styled(value: CellValue, style: u32) -> Self {
        Self {
            value,
            style: Some(style),
        }
    }

    /// True when the cell carries neither a value nor a style.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.style.is_none()
    }
}

/// Cell with position, the unit of sheet serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellData {
    pub r: u32, // row (1-indexed)
    pub c: u32, // col (1-indexed)
    pub cell: Cell,
}
