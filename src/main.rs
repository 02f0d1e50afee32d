//! Storm Impact Report
//!
//! Answers two questions over the NOAA storm database (1950-2011):
//! 1. Which event types are most harmful to population health?
//! 2. Which event types have the greatest economic consequences?
//!
//! Loads the export, sums fatalities / injuries / damage per event type and
//! year, ranks event types by the mean of those yearly sums, prints the top
//! rows and writes one line chart per question.
//!
//! Usage:
//!   cargo run --release                           # uses report.toml
//!   cargo run --release -- --data StormData.csv.bz2 --format svg
//!   cargo run --release -- --no-charts -v
//!
//! Environment (also read from .env):
//!   STORM_DATA_PATH  - storm database export
//!   STORM_OUTPUT_DIR - chart output directory
//!   RUST_LOG         - log filter, overrides -v

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use storm_impact::config::{ChartFormat, DEFAULT_CONFIG_PATH, ReportConfig};
use storm_impact::ingest::storm_data::load_events;
use storm_impact::logging;
use storm_impact::report::{ImpactReport, tables};

#[derive(Debug, Parser)]
#[command(name = "storm_impact", version, about = "Health and economic impact of US storm events")]
struct Cli {
    /// Configuration file; defaults apply if it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Storm database export (.csv, .csv.bz2, .csv.gz).
    #[arg(long, env = "STORM_DATA_PATH")]
    data: Option<PathBuf>,

    /// Directory for the chart images.
    #[arg(long, env = "STORM_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Chart image format.
    #[arg(long, value_enum)]
    format: Option<ChartFormat>,

    /// Print the tables only.
    #[arg(long)]
    no_charts: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    println!("🌪  Storm Impact Report");
    println!("======================\n");

    let mut config = ReportConfig::load_or_default(&cli.config)?;
    config.override_with(cli.data, cli.output_dir, cli.format);

    // Load the dataset; without it there is nothing to report
    println!("📂 Loading {}...", config.data_path.display());
    let table = load_events(&config.data_path).unwrap_or_else(|e| {
        eprintln!("\n❌ {}\n", e);
        std::process::exit(1);
    });
    println!("✓ Loaded {} events", table.len());
    if let Some((first, last)) = table.year_range() {
        println!("  - Years: {}-{}", first, last);
    }
    if let Some(min_year) = config.min_year {
        println!("  - Analysing events from {} onward", min_year);
    }
    println!();

    let report = ImpactReport::build(&table, &config);

    println!(
        "🩺 Most harmful to population health (top {} by injuries ∪ top {} by fatalities)",
        config.ranking.top_injuries, config.ranking.top_fatalities
    );
    println!("{}\n", tables::health_table(&report.top_health));

    println!(
        "💰 Greatest economic consequences (top {} by property + crop damage)",
        config.ranking.top_damage
    );
    println!("{}\n", tables::economic_table(&report.top_economic));

    if cli.no_charts {
        return Ok(());
    }

    println!("📈 Rendering charts...");
    for path in report.render_charts(&config)? {
        println!("   ✓ {}", path.display());
    }

    Ok(())
}
