/// Report assembly: ranking, tables and charts.
///
/// Submodules:
/// - `ranking` - stable descending ranking and top-N selection
/// - `tables`  - terminal tables of the selected summary rows
/// - `charts`  - per-year line charts of the selected event types
///
/// `ImpactReport::build` runs every stage after loading, in order:
/// group by (event type, year), summarize per event type, select the top
/// rows. Rendering is separate so tables can be printed without charts.

pub mod charts;
pub mod ranking;
pub mod tables;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::{groupings, summary};
use crate::config::ReportConfig;
use crate::model::{
    EconomicAggregate, EconomicSummary, EventTable, HealthAggregate, HealthSummary, ReportError,
};

/// File stem of the public-health chart.
pub const HEALTH_CHART: &str = "health_impact";
/// File stem of the economic chart.
pub const ECONOMIC_CHART: &str = "economic_impact";

/// Every derived table of one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactReport {
    pub health: Vec<HealthAggregate>,
    pub economic: Vec<EconomicAggregate>,
    pub health_summaries: Vec<HealthSummary>,
    pub economic_summaries: Vec<EconomicSummary>,
    /// Union of the top event types by mean injuries and by mean fatalities.
    pub top_health: Vec<HealthSummary>,
    /// Top event types by mean total damage.
    pub top_economic: Vec<EconomicSummary>,
}

impl ImpactReport {
    pub fn build(table: &EventTable, config: &ReportConfig) -> Self {
        let health = groupings::aggregate_health(table, config.min_year);
        let economic = groupings::aggregate_economic(table, config.min_year);

        let health_summaries = summary::summarize_health(&health);
        let economic_summaries = summary::summarize_economic(&economic);
        info!(
            health_groups = health.len(),
            economic_groups = economic.len(),
            event_types = health_summaries.len().max(economic_summaries.len()),
            "aggregated storm events"
        );

        let ranking = &config.ranking;
        let top_health = ranking::select_health(
            &health_summaries,
            ranking.top_injuries,
            ranking.top_fatalities,
        );
        let top_economic = ranking::select_economic(&economic_summaries, ranking.top_damage);

        Self {
            health,
            economic,
            health_summaries,
            economic_summaries,
            top_health,
            top_economic,
        }
    }

    /// Renders both charts into the configured output directory, creating
    /// it if needed. Returns the paths written; a chart with no selected
    /// event types is skipped.
    pub fn render_charts(&self, config: &ReportConfig) -> Result<Vec<PathBuf>, ReportError> {
        fs::create_dir_all(&config.output_dir).map_err(|source| ReportError::Io {
            path: config.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(2);

        if self.top_health.is_empty() {
            warn!("no event types selected for the health chart; skipping");
        } else {
            let path = config.chart_path(HEALTH_CHART);
            let series = charts::health_series(&self.health, &self.top_health);
            charts::render_health_chart(&path, &config.charts, &series)?;
            info!(path = %path.display(), "wrote health chart");
            written.push(path);
        }

        if self.top_economic.is_empty() {
            warn!("no event types selected for the economic chart; skipping");
        } else {
            let path = config.chart_path(ECONOMIC_CHART);
            let series = charts::economic_series(&self.economic, &self.top_economic);
            charts::render_economic_chart(&path, &config.charts, &series)?;
            info!(path = %path.display(), "wrote economic chart");
            written.push(path);
        }

        Ok(written)
    }
}
