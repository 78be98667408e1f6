//! Static catalog of the workbook's layout: sheet names, tracked minerals
//! and their sector whitelists, display-name mappings, and the
//! per-technology sheet table.
//!
//! Label text is the only discriminator the workbook offers, so every
//! strategy matches rows against these tables.

/// Sheet holding total demand per mineral and sector.
pub const DEMAND_SHEET: &str = "1 Total demand for key minerals";

/// Sheet holding mining and refining supply per country.
pub const SUPPLY_SHEET: &str = "2 Total supply for key minerals";

/// Sheet holding clean-technology demand broken down by technology.
pub const CLEANTECH_BY_TECH_SHEET: &str = "3.1 Cleantech demand by tech";

/// Sheet holding clean-technology demand broken down by mineral.
pub const CLEANTECH_BY_MINERAL_SHEET: &str = "3.2 Cleantech demand by mineral";

/// A mineral tracked on the total-demand sheet, with the sector labels
/// that count as detail rows underneath its header. Any other label in a
/// mineral's section is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandMineral {
    /// Header label exactly as it appears in column A.
    pub name: &'static str,
    /// Recognized technology-sector row labels for this mineral.
    pub sectors: &'static [&'static str],
}

/// Minerals on the total-demand sheet, in the order they appear.
pub const DEMAND_MINERALS: [DemandMineral; 6] = [
    DemandMineral {
        name: "Copper",
        sectors: &[
            "Solar PV",
            "Wind",
            "Other low emissions power generation",
            "Electric vehicles",
            "Grid battery storage",
            "Electricity networks",
            "Hydrogen technologies",
        ],
    },
    DemandMineral {
        name: "Cobalt",
        sectors: &[
            "Low emissions power generation",
            "Electric vehicles",
            "Grid battery storage",
            "Hydrogen technologies",
        ],
    },
    DemandMineral {
        name: "Lithium",
        sectors: &["Electric vehicles", "Grid battery storage"],
    },
    DemandMineral {
        name: "Nickel",
        sectors: &[
            "Solar PV",
            "Wind",
            "Other low emissions power generation",
            "Electric vehicles",
            "Grid battery storage",
            "Hydrogen technologies",
        ],
    },
    DemandMineral {
        name: "Magnet rare earth elements",
        sectors: &["Wind", "Electric vehicles"],
    },
    DemandMineral {
        name: "Graphite (all grades: natural and synthetic)",
        sectors: &["Electric vehicles", "Grid battery storage"],
    },
];

/// Find the demand-sheet mineral whose header label matches exactly.
pub fn demand_mineral(label: &str) -> Option<&'static DemandMineral> {
    DEMAND_MINERALS.iter().find(|m| m.name == label)
}

/// Workbook mineral names mapped to the dashboard-friendly names used as
/// output keys. Names not listed here pass through unchanged.
const DISPLAY_NAMES: [(&str, &str); 5] = [
    ("Magnet rare earth elements", "Rare Earth Elements"),
    ("Graphite (all grades: natural and synthetic)", "Graphite"),
    ("Battery-grade graphite", "Battery-grade graphite"),
    ("PGMs (other than iridum)", "PGMs"),
    ("Total rare earth elements", "Total REE"),
];

/// Map a workbook mineral name to its dashboard name.
pub fn display_name(raw: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}

/// Supply-sheet section header prefixes and the mineral names they open.
/// Headers look like `"Copper - total mine production (kt)"`; the first
/// matching prefix wins.
pub const SUPPLY_MINERALS: [(&str, &str); 6] = [
    ("Copper", "Copper"),
    ("Cobalt", "Cobalt"),
    ("Lithium", "Lithium"),
    ("Nickel", "Nickel"),
    ("Graphite", "Graphite"),
    ("Magnet rare earth elements", "Rare Earth Elements"),
];

/// Resolve a supply section header's mineral portion to its output name.
pub fn supply_mineral(header_key: &str) -> Option<&'static str> {
    SUPPLY_MINERALS
        .iter()
        .find(|(prefix, _)| header_key.starts_with(prefix))
        .map(|(_, name)| *name)
}

/// Per-technology sheets: workbook sheet name and the technology display
/// name it contributes under.
pub const TECH_SHEETS: [(&str, &str); 6] = [
    ("4.1 Solar PV", "Solar PV"),
    ("4.2 Wind", "Wind"),
    ("4.3 EV", "Electric vehicles"),
    ("4.4 Battery storage", "Grid battery storage"),
    ("4.5 Electricity networks", "Electricity networks"),
    ("4.6 Hydrogen", "Hydrogen technologies"),
];
