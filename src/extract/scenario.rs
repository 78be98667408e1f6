//! Scenario-row reading: the column layouts shared by the demand-side
//! sheets, the supply sheet's narrow layout, and the one value-coercion
//! rule every strategy goes through.
//!
//! Columns are 0-based. In spreadsheet terms the wide layout is:
//! B = 2024 baseline, D-H = STEPS 2030-2050, J-N = APS, P-T = NZE.

use crate::model::{ScenarioRow, ScenarioSeries, SupplySeries, MILESTONE_YEARS, SUPPLY_YEARS};
use crate::workbook::{CellValue, Sheet};

/// Baseline-year column of the wide layout.
pub const BASELINE_COL: usize = 1;

/// First milestone column per scenario in the wide layout; the five
/// milestone years then run in consecutive columns.
const SCENARIO_START_COLS: [(&str, usize); 3] = [("STEPS", 3), ("APS", 9), ("NZE", 15)];

/// Supply-sheet column groups: label column, then year columns.
pub const MINING_LABEL_COL: usize = 0;
pub const MINING_YEAR_COLS: [(u16, usize); 4] = [(2024, 1), (2030, 2), (2035, 3), (2040, 4)];
pub const REFINING_LABEL_COL: usize = 6;
pub const REFINING_YEAR_COLS: [(u16, usize); 4] = [(2024, 7), (2030, 8), (2035, 9), (2040, 10)];

/// Coerce a cell to a number, or to "no data".
///
/// Absent, blank, and non-numeric cells all become `None`, never zero and
/// never an error.
pub fn coerce_number(cell: Option<&CellValue>) -> Option<f64> {
    match cell? {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::Error(_) => None,
    }
}

/// Read one wide-layout row: baseline plus three scenarios of five
/// milestone years each. Pure; absent cells yield `None` slots.
pub fn read_scenario_row(sheet: &Sheet, row: usize) -> ScenarioRow {
    let mut result = ScenarioRow {
        baseline: coerce_number(sheet.value(row, BASELINE_COL)),
        ..Default::default()
    };

    for (name, start_col) in SCENARIO_START_COLS {
        let mut series = ScenarioSeries::default();
        for (offset, year) in MILESTONE_YEARS.into_iter().enumerate() {
            series.set(year, coerce_number(sheet.value(row, start_col + offset)));
        }
        if let Some(slot) = result.scenario_mut(name) {
            *slot = series;
        }
    }

    result
}

/// Read one narrow-layout year series from the given column group.
pub fn read_supply_series(sheet: &Sheet, row: usize, cols: &[(u16, usize)]) -> SupplySeries {
    let mut series = SupplySeries::default();
    for (year, col) in cols {
        series.set(*year, coerce_number(sheet.value(row, *col)));
    }
    series
}
