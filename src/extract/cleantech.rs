//! Sheets 3.1 and 3.2: clean-technology demand, by technology-and-mineral
//! and by mineral.
//!
//! Both sheets open with a multi-row title block, so scanning starts at a
//! fixed offset. Sheet 3.2 is flat: one aggregate row per mineral. Sheet
//! 3.1 nests technology rows under mineral headers, where a header is a
//! labeled row with nothing in column B.

use indexmap::IndexMap;

use crate::catalog;
use crate::model::{CleantechDemand, ScenarioRow};
use crate::workbook::Sheet;

use super::scenario::read_scenario_row;

/// First data row (0-based); rows above are title block.
const DATA_START_ROW: usize = 6;

/// Column checked to distinguish 3.1 mineral headers from data rows.
const HEADER_PROBE_COL: usize = 1;

/// Boilerplate labels on sheet 3.2 that are not minerals.
const BY_MINERAL_SKIP: [&str; 2] = [
    "Mineral demand for clean energy technologies - by mineral (kt)",
    "Total",
];

/// Parse sheet 3.2: one aggregate scenario row per mineral, no nesting.
pub fn parse_by_mineral(sheet: &Sheet) -> IndexMap<String, ScenarioRow> {
    let mut result = IndexMap::new();

    for row in DATA_START_ROW..=sheet.last_row() {
        let Some(label) = sheet.label(row, 0) else {
            continue;
        };
        if BY_MINERAL_SKIP.contains(&label.as_str()) || label.starts_with("Note") {
            continue;
        }
        result.insert(
            catalog::display_name(&label).to_string(),
            read_scenario_row(sheet, row),
        );
    }

    result
}

/// Scanner state for sheet 3.1.
#[derive(Clone)]
enum ScanState {
    NoContext,
    InMineral(String),
}

/// Parse sheet 3.1: technology-sector rows grouped under mineral headers.
pub fn parse_by_tech(sheet: &Sheet) -> IndexMap<String, CleantechDemand> {
    let mut result: IndexMap<String, CleantechDemand> = IndexMap::new();
    let mut state = ScanState::NoContext;

    for row in DATA_START_ROW..=sheet.last_row() {
        let Some(label) = sheet.label(row, 0) else {
            continue;
        };

        // A mineral header has an empty second column and is neither a
        // total nor a note.
        if sheet.is_blank(row, HEADER_PROBE_COL)
            && !label.starts_with("Total")
            && !label.starts_with("Note")
        {
            let name = catalog::display_name(&label).to_string();
            // Reopening a header merges into the existing entry.
            result.entry(name.clone()).or_default();
            state = ScanState::InMineral(name);
            continue;
        }

        let ScanState::InMineral(ref mineral) = state else {
            continue;
        };
        let Some(entry) = result.get_mut(mineral) else {
            continue;
        };

        if label.starts_with("Total") {
            entry.total = Some(read_scenario_row(sheet, row));
        } else if !label.starts_with("Note") {
            entry.sectors.insert(label, read_scenario_row(sheet, row));
        }
    }

    result
}
