//! Sheet 2: mining and refining supply per country.
//!
//! The sheet interleaves two tables side by side: mining in columns A-E,
//! refining in columns G-K, sharing physical rows. Section headers look
//! like `"Copper - total mine production (kt)"`. Each data row is scanned
//! into up to two typed events (one per column group) which are then
//! applied to the current mineral's entry, so one row may feed mining,
//! refining, both, or neither.

use indexmap::IndexMap;

use crate::catalog;
use crate::model::{MineralSupply, SupplySeries, SupplySide};
use crate::workbook::Sheet;

use super::scenario::{
    read_supply_series, MINING_LABEL_COL, MINING_YEAR_COLS, REFINING_LABEL_COL,
    REFINING_YEAR_COLS,
};

/// Which side of the sheet a column group feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Mining,
    Refining,
}

/// Row classification within a column group. `Rest of world` rows land in
/// the countries map like any named country; the variant only exists to
/// keep the default case explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowKind {
    Total,
    Top3Share,
    RestOfWorld,
    Country(String),
}

/// One captured observation from one column group of one row.
#[derive(Debug)]
struct SupplyEvent {
    side: Side,
    kind: RowKind,
    series: SupplySeries,
}

/// Classify a group's label. `None` drops the row for this group.
fn classify(label: &str, side: Side) -> Option<RowKind> {
    match label {
        "Notes" => None,
        "Total" => Some(RowKind::Total),
        // The refining table titles its total row either way.
        "Total clean technologies" if side == Side::Refining => Some(RowKind::Total),
        "Top 3 share" => Some(RowKind::Top3Share),
        "Rest of world" => Some(RowKind::RestOfWorld),
        other => Some(RowKind::Country(other.to_string())),
    }
}

/// Scan one physical row into zero, one, or two events.
fn row_events(sheet: &Sheet, row: usize) -> Vec<SupplyEvent> {
    let groups: [(Side, usize, &[(u16, usize)]); 2] = [
        (Side::Mining, MINING_LABEL_COL, &MINING_YEAR_COLS),
        (Side::Refining, REFINING_LABEL_COL, &REFINING_YEAR_COLS),
    ];

    let mut events = Vec::new();
    for (side, label_col, year_cols) in groups {
        let Some(label) = sheet.label(row, label_col) else {
            continue;
        };
        if let Some(kind) = classify(&label, side) {
            events.push(SupplyEvent {
                side,
                kind,
                series: read_supply_series(sheet, row, year_cols),
            });
        }
    }
    events
}

fn apply(entry: &mut MineralSupply, event: SupplyEvent) {
    let side: &mut SupplySide = match event.side {
        Side::Mining => &mut entry.mining,
        Side::Refining => &mut entry.refining,
    };
    match event.kind {
        RowKind::Total => side.total = Some(event.series),
        RowKind::Top3Share => side.top3_share = Some(event.series),
        RowKind::RestOfWorld => {
            side.countries
                .insert("Rest of world".to_string(), event.series);
        }
        RowKind::Country(name) => {
            side.countries.insert(name, event.series);
        }
    }
}

/// Scanner state: no section seen yet, or inside a mineral's section.
#[derive(Clone, Copy)]
enum ScanState {
    NoContext,
    InMineral(&'static str),
}

/// Parse the supply sheet into mineral entries keyed by display name.
pub fn parse(sheet: &Sheet) -> IndexMap<String, MineralSupply> {
    let mut result: IndexMap<String, MineralSupply> = IndexMap::new();
    let mut state = ScanState::NoContext;

    for row in sheet.row_range() {
        // Section headers carry a "<mineral> - <description>" label in the
        // mining label column.
        if let Some(label) = sheet.label(row, MINING_LABEL_COL) {
            if label.contains(" - ") {
                let key = label.split(" - ").next().unwrap_or("").trim().to_string();
                if let Some(mineral) = catalog::supply_mineral(&key) {
                    // A recurring header merges into the existing entry.
                    result.entry(mineral.to_string()).or_default();
                    state = ScanState::InMineral(mineral);
                }
                // Unknown prefix: context unchanged, header row contributes
                // no data either way.
                continue;
            }
        }

        let ScanState::InMineral(mineral) = state else {
            continue;
        };
        let Some(entry) = result.get_mut(mineral) else {
            continue;
        };

        for event in row_events(sheet, row) {
            apply(entry, event);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue;

    fn header(sheet: &mut Sheet, row: usize, text: &str) {
        sheet.insert(row, 0, CellValue::Text(text.to_string()));
    }

    fn mining_row(sheet: &mut Sheet, row: usize, label: &str, y2024: f64) {
        sheet.insert(row, 0, CellValue::Text(label.to_string()));
        sheet.insert(row, 1, CellValue::Number(y2024));
    }

    fn refining_row(sheet: &mut Sheet, row: usize, label: &str, y2024: f64) {
        sheet.insert(row, 6, CellValue::Text(label.to_string()));
        sheet.insert(row, 7, CellValue::Number(y2024));
    }

    #[test]
    fn test_countries_totals_and_shares() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Copper - total mine production (kt)");
        mining_row(&mut sheet, 1, "Chile", 5.2);
        mining_row(&mut sheet, 2, "Rest of world", 9.9);
        mining_row(&mut sheet, 3, "Total", 20.0);
        mining_row(&mut sheet, 4, "Top 3 share", 0.44);
        mining_row(&mut sheet, 5, "Notes", 1.0);

        let result = parse(&sheet);
        let copper = &result["Copper"];
        assert_eq!(copper.mining.countries["Chile"].get(2024), Some(5.2));
        assert_eq!(
            copper.mining.countries["Rest of world"].get(2024),
            Some(9.9)
        );
        assert_eq!(copper.mining.total.unwrap().get(2024), Some(20.0));
        assert_eq!(copper.mining.top3_share.unwrap().get(2024), Some(0.44));
        assert!(!copper.mining.countries.contains_key("Notes"));
        assert!(copper.refining.countries.is_empty());
    }

    #[test]
    fn test_one_row_feeds_both_sides() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Lithium - production (kt)");
        mining_row(&mut sheet, 1, "Australia", 1.0);
        refining_row(&mut sheet, 1, "China", 2.0);

        let result = parse(&sheet);
        let lithium = &result["Lithium"];
        assert_eq!(lithium.mining.countries["Australia"].get(2024), Some(1.0));
        assert_eq!(lithium.refining.countries["China"].get(2024), Some(2.0));
    }

    #[test]
    fn test_duplicate_header_merges() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Nickel - mine production (kt)");
        mining_row(&mut sheet, 1, "Indonesia", 3.0);
        header(&mut sheet, 2, "Nickel - refined production (kt)");
        refining_row(&mut sheet, 3, "China", 4.0);

        let result = parse(&sheet);
        assert_eq!(result.len(), 1);
        let nickel = &result["Nickel"];
        assert_eq!(nickel.mining.countries["Indonesia"].get(2024), Some(3.0));
        assert_eq!(nickel.refining.countries["China"].get(2024), Some(4.0));
    }

    #[test]
    fn test_refining_total_alias() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Cobalt - production (kt)");
        refining_row(&mut sheet, 1, "Total clean technologies", 7.0);
        mining_row(&mut sheet, 2, "Total clean technologies", 8.0);

        let result = parse(&sheet);
        let cobalt = &result["Cobalt"];
        // Alias only applies on the refining side; on the mining side the
        // label is just another country-shaped row.
        assert_eq!(cobalt.refining.total.unwrap().get(2024), Some(7.0));
        assert!(cobalt.mining.total.is_none());
        assert!(cobalt
            .mining
            .countries
            .contains_key("Total clean technologies"));
    }

    #[test]
    fn test_unknown_header_keeps_context() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Copper - mine production (kt)");
        mining_row(&mut sheet, 1, "Peru", 1.0);
        header(&mut sheet, 2, "Aluminium - smelter production (kt)");
        mining_row(&mut sheet, 3, "Canada", 2.0);

        let result = parse(&sheet);
        assert_eq!(result.len(), 1);
        // Rows after the unrecognized header still accrue to Copper.
        assert_eq!(result["Copper"].mining.countries["Canada"].get(2024), Some(2.0));
    }

    #[test]
    fn test_rows_before_any_header_dropped() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        mining_row(&mut sheet, 0, "Chile", 1.0);
        header(&mut sheet, 1, "Aluminium - unknown (kt)");
        mining_row(&mut sheet, 2, "Peru", 2.0);

        let result = parse(&sheet);
        assert!(result.is_empty());
    }

    #[test]
    fn test_year_columns_per_side() {
        let mut sheet = Sheet::new(catalog::SUPPLY_SHEET);
        header(&mut sheet, 0, "Graphite - production (kt)");
        sheet.insert(1, 0, CellValue::Text("China".to_string()));
        for (col, v) in [(1, 10.0), (2, 11.0), (3, 12.0), (4, 13.0)] {
            sheet.insert(1, col, CellValue::Number(v));
        }

        let result = parse(&sheet);
        let series = result["Graphite"].mining.countries["China"];
        assert_eq!(series.get(2024), Some(10.0));
        assert_eq!(series.get(2030), Some(11.0));
        assert_eq!(series.get(2035), Some(12.0));
        assert_eq!(series.get(2040), Some(13.0));
    }
}
