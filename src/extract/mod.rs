//! Layout strategies and the extraction pipeline.
//!
//! Six sheet-scanning passes run in a fixed order over the loaded
//! workbook; each contributes one grouping of the report. Irregular rows
//! are dropped where they occur (the silent-drop policy); a missing sheet
//! costs only its grouping and is reported as a warning.

pub mod cleantech;
pub mod demand;
pub mod scenario;
pub mod supply;
pub mod technology;

use indexmap::IndexMap;

use crate::catalog;
use crate::model::MineralsReport;
use crate::workbook::{Sheet, Workbook};

/// The outcome of an extraction run: the assembled report plus any
/// non-fatal warnings accumulated along the way.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub report: MineralsReport,
    pub warnings: Vec<String>,
}

/// Look up a sheet, recording a warning when it is absent.
fn sheet_or_warn<'wb>(
    workbook: &'wb Workbook,
    name: &str,
    warnings: &mut Vec<String>,
) -> Option<&'wb Sheet> {
    let found = workbook.sheet(name);
    if found.is_none() {
        warnings.push(format!("sheet '{}' not found, skipping", name));
    }
    found
}

/// Run every strategy against a loaded workbook and assemble the report.
pub fn extract_workbook(workbook: &Workbook) -> Extraction {
    let mut warnings = Vec::new();
    let mut report = MineralsReport::new();

    if let Some(sheet) = sheet_or_warn(workbook, catalog::DEMAND_SHEET, &mut warnings) {
        report.total_demand = demand::parse(sheet);
    }
    if let Some(sheet) = sheet_or_warn(workbook, catalog::SUPPLY_SHEET, &mut warnings) {
        report.supply = supply::parse(sheet);
    }
    if let Some(sheet) = sheet_or_warn(workbook, catalog::CLEANTECH_BY_TECH_SHEET, &mut warnings)
    {
        report.cleantech_by_tech = cleantech::parse_by_tech(sheet);
    }
    if let Some(sheet) =
        sheet_or_warn(workbook, catalog::CLEANTECH_BY_MINERAL_SHEET, &mut warnings)
    {
        report.cleantech_by_mineral = cleantech::parse_by_mineral(sheet);
    }
    report.by_technology = technology::parse(workbook, &mut warnings);

    Extraction { report, warnings }
}

impl Extraction {
    /// Per-grouping entry counts, for progress reporting.
    pub fn section_counts(&self) -> IndexMap<&'static str, usize> {
        let mut counts = IndexMap::new();
        counts.insert("totalDemand", self.report.total_demand.len());
        counts.insert("supply", self.report.supply.len());
        counts.insert("cleantechByTech", self.report.cleantech_by_tech.len());
        counts.insert(
            "cleantechByMineral",
            self.report.cleantech_by_mineral.len(),
        );
        counts.insert("byTechnology", self.report.by_technology.len());
        counts
    }
}
