//! The assembled report document and its per-grouping entries.
//!
//! Field order and `rename` attributes reproduce the dashboard's JSON
//! contract exactly; maps are insertion-ordered so output follows the
//! workbook's own row order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::series::{ScenarioRow, SupplySeries};

/// Provenance string recorded at the top of every report.
pub const SOURCE: &str = "IEA Critical Minerals Data Explorer (2024), CC BY 4.0";

/// Demand for one mineral: sector detail rows plus the aggregate rows the
/// sheet carries under the same header. Aggregates stay absent until their
/// labeled row is seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MineralDemand {
    #[serde(default)]
    pub sectors: IndexMap<String, ScenarioRow>,

    #[serde(rename = "totalClean", default, skip_serializing_if = "Option::is_none")]
    pub total_clean: Option<ScenarioRow>,

    #[serde(rename = "otherUses", default, skip_serializing_if = "Option::is_none")]
    pub other_uses: Option<ScenarioRow>,

    #[serde(rename = "totalDemand", default, skip_serializing_if = "Option::is_none")]
    pub total_demand: Option<ScenarioRow>,

    #[serde(rename = "cleanShare", default, skip_serializing_if = "Option::is_none")]
    pub clean_share: Option<ScenarioRow>,
}

/// One side of the supply sheet (mining or refining).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplySide {
    #[serde(default)]
    pub countries: IndexMap<String, SupplySeries>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<SupplySeries>,

    #[serde(rename = "top3Share", default, skip_serializing_if = "Option::is_none")]
    pub top3_share: Option<SupplySeries>,
}

/// Supply for one mineral. The two sides come from disjoint column ranges
/// of the same physical rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MineralSupply {
    #[serde(default)]
    pub mining: SupplySide,
    #[serde(default)]
    pub refining: SupplySide,
}

/// Clean-technology demand for one mineral, broken down by technology
/// sector. `total` is always emitted, `null` until its row is seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleantechDemand {
    #[serde(default)]
    pub sectors: IndexMap<String, ScenarioRow>,

    #[serde(default)]
    pub total: Option<ScenarioRow>,
}

/// Mineral demand attributed to a single technology's base case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologyDemand {
    #[serde(default)]
    pub minerals: IndexMap<String, ScenarioRow>,
}

/// The merged top-level document. Each grouping is independently complete;
/// there is no cross-grouping referential integrity to maintain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MineralsReport {
    pub source: String,

    #[serde(rename = "totalDemand", default)]
    pub total_demand: IndexMap<String, MineralDemand>,

    #[serde(default)]
    pub supply: IndexMap<String, MineralSupply>,

    #[serde(rename = "cleantechByTech", default)]
    pub cleantech_by_tech: IndexMap<String, CleantechDemand>,

    #[serde(rename = "cleantechByMineral", default)]
    pub cleantech_by_mineral: IndexMap<String, ScenarioRow>,

    #[serde(rename = "byTechnology", default)]
    pub by_technology: IndexMap<String, TechnologyDemand>,
}

impl MineralsReport {
    /// Create an empty report carrying the provenance string.
    pub fn new() -> Self {
        Self {
            source: SOURCE.to_string(),
            ..Default::default()
        }
    }
}
