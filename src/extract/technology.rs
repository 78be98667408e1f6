//! Sheets 4.1-4.6: per-technology mineral breakdowns.
//!
//! Each sheet carries several projection sections; only the base case is
//! extracted. Scanning stays dormant until the "Base case" marker row,
//! then captures mineral rows until a "Wider"/"Note"/"Innovation" section
//! marker closes the window. Rows past the stop marker are never visited.

use indexmap::IndexMap;

use crate::catalog::{self, TECH_SHEETS};
use crate::model::TechnologyDemand;
use crate::workbook::{Sheet, Workbook};

use super::scenario::read_scenario_row;

/// Column that is blank on sub-header rows inside the base-case window.
const SUB_HEADER_PROBE_COL: usize = 1;

/// Base-case window state for one sheet scan.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeBaseCase,
    InBaseCase,
}

/// Labels that close the base-case window.
fn is_stop_marker(label: &str) -> bool {
    label.starts_with("Wider") || label.starts_with("Note") || label.starts_with("Innovation")
}

/// Parse one technology sheet's base-case section.
fn parse_sheet(sheet: &Sheet) -> TechnologyDemand {
    let mut minerals = IndexMap::new();
    let mut state = ScanState::BeforeBaseCase;

    for row in sheet.row_range() {
        let Some(label) = sheet.label(row, 0) else {
            continue;
        };

        match state {
            ScanState::BeforeBaseCase => {
                if label == "Base case" {
                    state = ScanState::InBaseCase;
                }
            }
            ScanState::InBaseCase => {
                if is_stop_marker(&label) {
                    break;
                }
                // Sub-headers inside the window have no data in column B.
                if sheet.is_blank(row, SUB_HEADER_PROBE_COL) {
                    continue;
                }
                minerals.insert(
                    catalog::display_name(&label).to_string(),
                    read_scenario_row(sheet, row),
                );
            }
        }
    }

    TechnologyDemand { minerals }
}

/// Parse all per-technology sheets present in the workbook. A sheet absent
/// from the workbook is skipped with a warning, not an error.
pub fn parse(
    workbook: &Workbook,
    warnings: &mut Vec<String>,
) -> IndexMap<String, TechnologyDemand> {
    let mut result = IndexMap::new();

    for (sheet_name, tech_name) in TECH_SHEETS {
        let Some(sheet) = workbook.sheet(sheet_name) else {
            warnings.push(format!("sheet '{}' not found, skipping", sheet_name));
            continue;
        };
        result.insert(tech_name.to_string(), parse_sheet(sheet));
    }

    result
}
