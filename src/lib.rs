/// storm_impact: public-health and economic impact of US storm events.
///
/// Loads the NOAA storm database export, sums fatalities, injuries and
/// damage per event type and year, summarizes each event type by the mean
/// and standard deviation of those yearly sums, and reports the event
/// types with the largest means as tables and line charts.
///
/// # Module structure
///
/// ```text
/// storm_impact
/// ├── model       - shared data types (StormEvent, EventTable, SummaryStats, ReportError, …)
/// ├── config      - report configuration loader (report.toml)
/// ├── logging     - tracing subscriber setup
/// ├── ingest
/// │   ├── storm_data - export decompression + CSV parsing + year derivation
/// │   └── fixtures (test only) - representative export rows
/// ├── analysis
/// │   ├── magnitude - K/M/B damage code normalization
/// │   ├── groupings - per-(event type, year) sums
/// │   └── summary   - per-event-type mean / standard deviation
/// └── report
///     ├── ranking - stable top-N selection
///     ├── tables  - terminal tables
///     └── charts  - per-year line charts
/// ```

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
