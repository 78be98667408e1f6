//! # minex
//!
//! Extraction of critical-minerals supply and demand time series from the
//! IEA Critical Minerals Data Explorer workbook into normalized JSON for
//! a dashboard.
//!
//! The workbook's sheets are human-authored: headers, section markers,
//! aggregates, and detail rows all share the label column with no type
//! tags. This crate pairs a plain XLSX grid reader with one layout
//! strategy per sheet family, recovering a clean hierarchical report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use minex::{extract_file, render, JsonFormat};
//!
//! let extraction = extract_file("CM_Data_Explorer.xlsx")?;
//! for warning in &extraction.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//!
//! let json = render::to_json(&extraction.report, JsonFormat::Pretty)?;
//! std::fs::write("data/iea.json", json)?;
//! # Ok::<(), minex::Error>(())
//! ```
//!
//! ## Lower-level access
//!
//! ```no_run
//! use minex::workbook::WorkbookParser;
//!
//! let workbook = WorkbookParser::open("CM_Data_Explorer.xlsx")?.parse()?;
//! println!("Sheets: {}", workbook.len());
//! # Ok::<(), minex::Error>(())
//! ```

pub mod catalog;
pub mod container;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod workbook;

// Re-exports
pub use error::{Error, Result};
pub use extract::{extract_workbook, Extraction};
pub use model::{
    CleantechDemand, MineralDemand, MineralSupply, MineralsReport, ScenarioRow, ScenarioSeries,
    SupplySeries, SupplySide, TechnologyDemand,
};
pub use render::JsonFormat;

use std::path::Path;
use workbook::WorkbookParser;

/// Open a workbook file and run the full extraction.
///
/// # Example
///
/// ```no_run
/// use minex::extract_file;
///
/// let extraction = extract_file("CM_Data_Explorer.xlsx")?;
/// println!("Minerals: {}", extraction.report.total_demand.len());
/// # Ok::<(), minex::Error>(())
/// ```
pub fn extract_file(path: impl AsRef<Path>) -> Result<Extraction> {
    let workbook = WorkbookParser::open(path)?.parse()?;
    Ok(extract_workbook(&workbook))
}

/// Run the full extraction over workbook bytes already in memory.
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    let workbook = WorkbookParser::from_bytes(data.to_vec())?.parse()?;
    Ok(extract_workbook(&workbook))
}
