//! Report data model.

mod report;
mod series;

pub use report::{
    CleantechDemand, MineralDemand, MineralSupply, MineralsReport, SupplySide, TechnologyDemand,
    SOURCE,
};
pub use series::{
    ScenarioRow, ScenarioSeries, SupplySeries, MILESTONE_YEARS, SCENARIOS, SUPPLY_YEARS,
};
