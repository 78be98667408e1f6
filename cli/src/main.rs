//! minex CLI - IEA critical minerals workbook to dashboard JSON
//!
//! Reads CM_Data_Explorer.xlsx and writes data/iea.json for the dashboard.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use minex::render::{self, JsonFormat};

/// Default workbook location when no input path is given.
const DEFAULT_WORKBOOK: &str = "CM_Data_Explorer.xlsx";

/// Convert the IEA Critical Minerals Data Explorer workbook to JSON
#[derive(Parser)]
#[command(
    name = "minex",
    version,
    about = "Extract critical-minerals supply and demand data to JSON",
    long_about = "minex - IEA Critical Minerals Data Explorer extraction tool.\n\n\
                  Walks the workbook's demand, supply, cleantech, and per-technology\n\
                  sheets and writes one normalized JSON document for the dashboard."
)]
struct Cli {
    /// Input workbook path (default: ~/Downloads/CM_Data_Explorer.xlsx)
    input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "data/iea.json")]
    output: PathBuf,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli.input.unwrap_or_else(default_input);
    if !input.exists() {
        return Err(format!("{} not found", input.display()).into());
    }

    println!("Reading {}...", input.display());
    let pb = create_spinner("Parsing workbook...");

    let extraction = minex::extract_file(&input)?;

    pb.set_message("Rendering JSON...");
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&extraction.report, format)?;

    if let Some(dir) = cli.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(&cli.output, &json)?;
    pb.finish_and_clear();

    for warning in &extraction.warnings {
        println!("{} {}", "!".yellow().bold(), warning);
    }

    let size_kb = json.len() as f64 / 1024.0;
    println!(
        "{} Wrote {} ({:.1} KB)",
        "✓".green().bold(),
        cli.output.display(),
        size_kb
    );

    for (section, count) in extraction.section_counts() {
        let unit = if section == "byTechnology" {
            "technologies"
        } else {
            "minerals"
        };
        println!("  {}: {} {}", section.bold(), count, unit);
    }

    Ok(())
}

/// The workbook's well-known download location.
fn default_input() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default();
    home.join("Downloads").join(DEFAULT_WORKBOOK)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
