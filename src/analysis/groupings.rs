/// Event grouping: the first aggregation stage.
///
/// Takes the flat `EventTable` produced by the loader and sums each impact
/// metric per (event type, year), giving one `HealthAggregate` or
/// `EconomicAggregate` per key. Event types are compared as exact strings;
/// "TSTM WIND" and "THUNDERSTORM WIND" stay separate groups.
///
/// A row contributes only when it has a year and every metric the
/// aggregate needs. Rows failing that stay in the table but are left out
/// of the sums.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::analysis::magnitude;
use crate::model::{EconomicAggregate, EventTable, HealthAggregate};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Returns the year of row `i` if the row is eligible for yearly grouping.
fn grouping_year(table: &EventTable, i: usize, min_year: Option<i32>) -> Option<i32> {
    let year = table.year[i]?;
    match min_year {
        Some(min) if year < min => None,
        _ => Some(year),
    }
}

/// Sums fatalities and injuries per (event type, year).
///
/// Output is ordered by event type, then year.
pub fn aggregate_health(table: &EventTable, min_year: Option<i32>) -> Vec<HealthAggregate> {
    let mut grouped: BTreeMap<(&str, i32), (f64, f64)> = BTreeMap::new();
    let mut skipped = 0usize;

    for i in 0..table.len() {
        let (Some(year), Some(fatalities), Some(injuries)) = (
            grouping_year(table, i, min_year),
            table.fatalities[i],
            table.injuries[i],
        ) else {
            skipped += 1;
            continue;
        };

        let sums = grouped
            .entry((table.event_type[i].as_str(), year))
            .or_insert((0.0, 0.0));
        sums.0 += fatalities;
        sums.1 += injuries;
    }

    debug!(groups = grouped.len(), skipped, "health aggregation");

    grouped
        .into_iter()
        .map(|((event_type, year), (fatalities, injuries))| HealthAggregate {
            event_type: event_type.to_string(),
            year,
            fatalities,
            injuries,
        })
        .collect()
}

/// Sums normalized property and crop damage per (event type, year).
///
/// Output is ordered by event type, then year.
pub fn aggregate_economic(table: &EventTable, min_year: Option<i32>) -> Vec<EconomicAggregate> {
    let property = magnitude::property_damage(table);
    let crop = magnitude::crop_damage(table);

    let mut grouped: BTreeMap<(&str, i32), (f64, f64)> = BTreeMap::new();
    let mut skipped = 0usize;

    for i in 0..table.len() {
        let (Some(year), Some(property), Some(crop)) =
            (grouping_year(table, i, min_year), property[i], crop[i])
        else {
            skipped += 1;
            continue;
        };

        let sums = grouped
            .entry((table.event_type[i].as_str(), year))
            .or_insert((0.0, 0.0));
        sums.0 += property;
        sums.1 += crop;
    }

    debug!(groups = grouped.len(), skipped, "economic aggregation");

    grouped
        .into_iter()
        .map(|((event_type, year), (property_damage, crop_damage))| EconomicAggregate {
            event_type: event_type.to_string(),
            year,
            property_damage,
            crop_damage,
            total_damage: property_damage + crop_damage,
        })
        .collect()
}

/// Counts rows per distinct event type label, most frequent first.
///
/// Ties are ordered by label so the listing is deterministic.
pub fn event_type_counts(table: &EventTable) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for event_type in &table.event_type {
        *counts.entry(event_type.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
