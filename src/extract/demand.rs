//! Sheet 1: total demand per mineral, broken down by technology sector.
//!
//! A top-to-bottom scan where a row whose label exactly matches a tracked
//! mineral opens that mineral's section. Inside a section, four aggregate
//! labels go to fixed slots; labels on the mineral's sector whitelist
//! become sector rows; everything else is dropped. Rows before the first
//! header are dropped too.

use indexmap::IndexMap;

use crate::catalog::{self, DemandMineral};
use crate::model::MineralDemand;
use crate::workbook::Sheet;

use super::scenario::read_scenario_row;

/// Scanner state: outside any mineral section, or inside one. The context
/// carries the catalog record, so the sector whitelist travels with it.
#[derive(Clone, Copy)]
enum ScanState {
    NoContext,
    InMineral(&'static DemandMineral),
}

/// How a labeled row inside a mineral section was classified.
enum RowClass {
    TotalClean,
    OtherUses,
    TotalDemand,
    CleanShare,
    Sector,
    /// Label matched nothing; the row is dropped without error.
    Ignored,
}

fn classify(label: &str, mineral: &DemandMineral) -> RowClass {
    match label {
        "Total clean technologies" => RowClass::TotalClean,
        "Other uses" => RowClass::OtherUses,
        "Total demand" => RowClass::TotalDemand,
        _ if label.starts_with("Share of clean technologies") => RowClass::CleanShare,
        _ if mineral.sectors.iter().any(|s| *s == label) => RowClass::Sector,
        _ => RowClass::Ignored,
    }
}

/// Parse the total-demand sheet into mineral entries keyed by display name.
pub fn parse(sheet: &Sheet) -> IndexMap<String, MineralDemand> {
    let mut result: IndexMap<String, MineralDemand> = IndexMap::new();
    let mut state = ScanState::NoContext;

    for row in sheet.row_range() {
        let Some(label) = sheet.label(row, 0) else {
            continue;
        };

        if let Some(mineral) = catalog::demand_mineral(&label) {
            result.insert(
                catalog::display_name(mineral.name).to_string(),
                MineralDemand::default(),
            );
            state = ScanState::InMineral(mineral);
            continue;
        }

        let ScanState::InMineral(mineral) = state else {
            continue;
        };

        let Some(entry) = result.get_mut(catalog::display_name(mineral.name)) else {
            continue;
        };

        match classify(&label, mineral) {
            RowClass::TotalClean => entry.total_clean = Some(read_scenario_row(sheet, row)),
            RowClass::OtherUses => entry.other_uses = Some(read_scenario_row(sheet, row)),
            RowClass::TotalDemand => entry.total_demand = Some(read_scenario_row(sheet, row)),
            RowClass::CleanShare => entry.clean_share = Some(read_scenario_row(sheet, row)),
            RowClass::Sector => {
                entry
                    .sectors
                    .insert(label, read_scenario_row(sheet, row));
            }
            RowClass::Ignored => {}
        }
    }

    result
}
