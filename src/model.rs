/// Core data types for the storm impact report.
///
/// This module defines the shared domain model imported by all other modules:
/// the raw storm database row, the columnar table the loader produces, the
/// per-(event type, year) aggregate rows, the per-event-type summary rows,
/// and the crate-wide error type. It contains no I/O.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

/// A single row of the NOAA storm database export.
///
/// Only the columns the report needs are deserialized; the export carries
/// several dozen more (state, county, remarks, ...) which are ignored.
/// Numeric columns are read leniently: a blank or malformed cell becomes
/// `None` instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StormEvent {
    #[serde(rename = "EVTYPE")]
    pub event_type: String,
    #[serde(rename = "BGN_DATE")]
    pub begin_date: String,  // e.g. "4/18/1950 0:00:00"
    #[serde(rename = "FATALITIES", deserialize_with = "lenient_number")]
    pub fatalities: Option<f64>,
    #[serde(rename = "INJURIES", deserialize_with = "lenient_number")]
    pub injuries: Option<f64>,
    #[serde(rename = "PROPDMG", deserialize_with = "lenient_number")]
    pub property_damage: Option<f64>,
    #[serde(rename = "PROPDMGEXP")]
    pub property_damage_exp: String,  // magnitude code: "K", "M", "B", or junk
    #[serde(rename = "CROPDMG", deserialize_with = "lenient_number")]
    pub crop_damage: Option<f64>,
    #[serde(rename = "CROPDMGEXP")]
    pub crop_damage_exp: String,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
}

/// The loaded dataset, stored column by column.
///
/// Every column has the same length; index `i` across all columns is one
/// `StormEvent` plus its derived `year`. Columnar storage lets the
/// normalizer map a whole damage column in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    pub event_type: Vec<String>,
    pub begin_date: Vec<String>,
    /// Calendar year of `begin_date`; `None` when the date did not parse.
    pub year: Vec<Option<i32>>,
    pub fatalities: Vec<Option<f64>>,
    pub injuries: Vec<Option<f64>>,
    pub property_damage: Vec<Option<f64>>,
    pub property_damage_exp: Vec<String>,
    pub crop_damage: Vec<Option<f64>>,
    pub crop_damage_exp: Vec<String>,
}

impl EventTable {
    /// Appends one raw record with its already-derived year.
    pub fn push(&mut self, event: StormEvent, year: Option<i32>) {
        self.event_type.push(event.event_type);
        self.begin_date.push(event.begin_date);
        self.year.push(year);
        self.fatalities.push(event.fatalities);
        self.injuries.push(event.injuries);
        self.property_damage.push(event.property_damage);
        self.property_damage_exp.push(event.property_damage_exp);
        self.crop_damage.push(event.crop_damage);
        self.crop_damage_exp.push(event.crop_damage_exp);
    }

    pub fn len(&self) -> usize {
        self.event_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_type.is_empty()
    }

    /// Number of rows whose begin date could not be parsed.
    pub fn missing_year_count(&self) -> usize {
        self.year.iter().filter(|y| y.is_none()).count()
    }

    /// Earliest and latest derived year, ignoring rows without one.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.year.iter().flatten().copied();
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

// ---------------------------------------------------------------------------
// Aggregate rows (one per event type and year)
// ---------------------------------------------------------------------------

/// Summed public-health impact for one event type in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAggregate {
    pub event_type: String,
    pub year: i32,
    pub fatalities: f64,
    pub injuries: f64,
}

/// Summed economic impact for one event type in one year, in dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicAggregate {
    pub event_type: String,
    pub year: i32,
    pub property_damage: f64,
    pub crop_damage: f64,
    /// `property_damage + crop_damage`; the value the report ranks on.
    pub total_damage: f64,
}

// ---------------------------------------------------------------------------
// Summary rows (one per event type)
// ---------------------------------------------------------------------------

/// Mean and sample standard deviation of one metric across the years
/// present for an event type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    /// Number of yearly aggregate rows the statistics were computed from.
    pub observations: usize,
    pub mean: f64,
    /// `None` when fewer than two observations exist.
    pub std_dev: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthSummary {
    pub event_type: String,
    pub fatalities: SummaryStats,
    pub injuries: SummaryStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EconomicSummary {
    pub event_type: String,
    pub damage: SummaryStats,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort the report. Per-row problems (bad dates, bad numbers,
/// unknown magnitude codes) are never errors; they degrade to missing values.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The storm data file does not exist at the configured path.
    #[error("storm data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file opened but its contents are not a readable storm export
    /// (bad compression stream, unbalanced quotes, ...).
    #[error("corrupt storm data: {0}")]
    Csv(#[from] csv::Error),
    /// The header row lacks columns the report reads. An empty or
    /// undecodable stream has no header at all and lands here too.
    #[error("corrupt storm data: missing column(s) {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str) -> StormEvent {
        StormEvent {
            event_type: event_type.to_string(),
            begin_date: "4/18/1950 0:00:00".to_string(),
            fatalities: Some(0.0),
            injuries: Some(15.0),
            property_damage: Some(25.0),
            property_damage_exp: "K".to_string(),
            crop_damage: Some(0.0),
            crop_damage_exp: String::new(),
        }
    }

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut table = EventTable::default();
        table.push(event("TORNADO"), Some(1950));
        table.push(event("HAIL"), None);

        assert_eq!(table.len(), 2);
        assert_eq!(table.year, vec![Some(1950), None]);
        assert_eq!(table.event_type[1], "HAIL");
        assert_eq!(table.property_damage_exp.len(), 2);
    }

    #[test]
    fn test_year_range_ignores_missing_years() {
        let mut table = EventTable::default();
        table.push(event("TORNADO"), Some(1995));
        table.push(event("TORNADO"), None);
        table.push(event("FLOOD"), Some(1952));
        table.push(event("FLOOD"), Some(2011));

        assert_eq!(table.year_range(), Some((1952, 2011)));
        assert_eq!(table.missing_year_count(), 1);
    }

    #[test]
    fn test_year_range_empty_table() {
        let table = EventTable::default();
        assert!(table.is_empty());
        assert_eq!(table.year_range(), None);
    }

    #[test]
    fn test_report_error_names_missing_file() {
        let err = ReportError::DataFileNotFound(PathBuf::from("data/StormData.csv.bz2"));
        assert!(err.to_string().contains("data/StormData.csv.bz2"));
    }

    #[test]
    fn test_report_error_lists_missing_columns() {
        let err = ReportError::MissingColumns(vec!["PROPDMGEXP", "CROPDMGEXP"]);
        assert_eq!(
            err.to_string(),
            "corrupt storm data: missing column(s) PROPDMGEXP, CROPDMGEXP"
        );
    }
}
