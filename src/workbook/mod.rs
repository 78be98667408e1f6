//! In-memory workbook model and XLSX package parsing.

mod parser;
mod shared_strings;
mod sheet;

pub use parser::WorkbookParser;
pub use shared_strings::SharedStrings;
pub use sheet::{parse_cell_ref, CellValue, Sheet};

use indexmap::IndexMap;

/// A loaded workbook: named sheets in package order.
///
/// Directly constructible so the layout strategies can be exercised without
/// a ZIP fixture.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: IndexMap<String, Sheet>,
}

impl Workbook {
    /// Create an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sheet, keyed by its name.
    pub fn insert_sheet(&mut self, sheet: Sheet) {
        self.sheets.insert(sheet.name().to_string(), sheet);
    }

    /// Look up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    /// Sheet names in package order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the workbook has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
