//! Year-series building blocks of the report.
//!
//! Every observation is either a number or an explicit "no data" `None`,
//! serialized as JSON `null`, never zero. Fixed-field structs guarantee
//! that each row exposes the full set of scenarios and milestone years no
//! matter which cells the source row actually populated.

use serde::{Deserialize, Serialize};

/// The three long-range projection scenarios, in workbook column order.
pub const SCENARIOS: [&str; 3] = ["STEPS", "APS", "NZE"];

/// Milestone years reported by each scenario.
pub const MILESTONE_YEARS: [u16; 5] = [2030, 2035, 2040, 2045, 2050];

/// Years reported by the supply sheet's narrow layout.
pub const SUPPLY_YEARS: [u16; 4] = [2024, 2030, 2035, 2040];

/// One scenario's values at the five milestone years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSeries {
    #[serde(rename = "2030")]
    pub y2030: Option<f64>,
    #[serde(rename = "2035")]
    pub y2035: Option<f64>,
    #[serde(rename = "2040")]
    pub y2040: Option<f64>,
    #[serde(rename = "2045")]
    pub y2045: Option<f64>,
    #[serde(rename = "2050")]
    pub y2050: Option<f64>,
}

impl ScenarioSeries {
    /// Value at a milestone year. Years outside the milestone set are `None`.
    pub fn get(&self, year: u16) -> Option<f64> {
        match year {
            2030 => self.y2030,
            2035 => self.y2035,
            2040 => self.y2040,
            2045 => self.y2045,
            2050 => self.y2050,
            _ => None,
        }
    }

    /// Set the value at a milestone year. Other years are ignored.
    pub fn set(&mut self, year: u16, value: Option<f64>) {
        match year {
            2030 => self.y2030 = value,
            2035 => self.y2035 = value,
            2040 => self.y2040 = value,
            2045 => self.y2045 = value,
            2050 => self.y2050 = value,
            _ => {}
        }
    }
}

/// A single observation row: the 2024 baseline plus the three scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    #[serde(rename = "2024")]
    pub baseline: Option<f64>,
    #[serde(rename = "STEPS", default)]
    pub steps: ScenarioSeries,
    #[serde(rename = "APS", default)]
    pub aps: ScenarioSeries,
    #[serde(rename = "NZE", default)]
    pub nze: ScenarioSeries,
}

impl ScenarioRow {
    /// Access a scenario's series by name.
    pub fn scenario(&self, name: &str) -> Option<&ScenarioSeries> {
        match name {
            "STEPS" => Some(&self.steps),
            "APS" => Some(&self.aps),
            "NZE" => Some(&self.nze),
            _ => None,
        }
    }

    /// Mutable access to a scenario's series by name.
    pub fn scenario_mut(&mut self, name: &str) -> Option<&mut ScenarioSeries> {
        match name {
            "STEPS" => Some(&mut self.steps),
            "APS" => Some(&mut self.aps),
            "NZE" => Some(&mut self.nze),
            _ => None,
        }
    }
}

/// A supply-side year series (mining or refining, narrow layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplySeries {
    #[serde(rename = "2024")]
    pub y2024: Option<f64>,
    #[serde(rename = "2030")]
    pub y2030: Option<f64>,
    #[serde(rename = "2035")]
    pub y2035: Option<f64>,
    #[serde(rename = "2040")]
    pub y2040: Option<f64>,
}

impl SupplySeries {
    /// Value at a supply year. Years outside the set are `None`.
    pub fn get(&self, year: u16) -> Option<f64> {
        match year {
            2024 => self.y2024,
            2030 => self.y2030,
            2035 => self.y2035,
            2040 => self.y2040,
            _ => None,
        }
    }

    /// Set the value at a supply year. Other years are ignored.
    pub fn set(&mut self, year: u16, value: Option<f64>) {
        match year {
            2024 => self.y2024 = value,
            2030 => self.y2030 = value,
            2035 => self.y2035 = value,
            2040 => self.y2040 = value,
            _ => {}
        }
    }
}
