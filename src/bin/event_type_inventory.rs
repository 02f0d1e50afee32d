//! Event Type Inventory
//!
//! Lists the distinct EVTYPE labels in the storm database export with
//! their row counts. The report groups on these labels verbatim, so this
//! is the place to see how many near-duplicates ("TSTM WIND",
//! "THUNDERSTORM WIND", " HIGH SURF", ...) the raw data carries.
//!
//! Usage:
//!   cargo run --bin event_type_inventory
//!   cargo run --bin event_type_inventory -- --limit 100
//!
//! Environment:
//!   STORM_DATA_PATH - storm database export (overrides report.toml)

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use storm_impact::analysis::groupings::event_type_counts;
use storm_impact::config::{DEFAULT_CONFIG_PATH, ReportConfig};
use storm_impact::ingest::storm_data::load_events;
use storm_impact::logging;
use storm_impact::report::tables::inventory_table;

#[derive(Debug, Parser)]
#[command(name = "event_type_inventory", version, about = "Distinct storm event type labels")]
struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, env = "STORM_DATA_PATH")]
    data: Option<PathBuf>,

    /// Number of labels to list, most frequent first.
    #[arg(long, default_value_t = 25)]
    limit: usize,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    println!("🏷  Event Type Inventory");
    println!("=======================\n");

    let mut config = ReportConfig::load_or_default(&cli.config)?;
    config.override_with(cli.data, None, None);

    let table = load_events(&config.data_path).unwrap_or_else(|e| {
        eprintln!("\n❌ {}\n", e);
        std::process::exit(1);
    });

    let counts = event_type_counts(&table);
    let shown = cli.limit.min(counts.len());

    println!("{}", inventory_table(&counts[..shown]));
    println!(
        "\n✓ {} distinct labels across {} events (showing {})",
        counts.len(),
        table.len(),
        shown
    );

    Ok(())
}
