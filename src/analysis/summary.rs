/// Per-event-type summary statistics: the second aggregation stage.
///
/// Works strictly from the yearly aggregate rows, never from raw events.
/// Each event type gets the arithmetic mean and sample standard deviation
/// of its yearly sums, taken over the years in which it appears.

use std::collections::BTreeMap;

use crate::model::{
    EconomicAggregate, EconomicSummary, HealthAggregate, HealthSummary, SummaryStats,
};

/// Mean and sample standard deviation (n - 1 denominator) of `values`.
///
/// With a single value the standard deviation is undefined and reported
/// as `None`. An empty slice yields a NaN mean; the grouping stage never
/// produces an empty group.
pub fn summarize(values: &[f64]) -> SummaryStats {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        None
    } else {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        Some((sum_sq / (n - 1) as f64).sqrt())
    };

    SummaryStats {
        observations: n,
        mean,
        std_dev,
    }
}

/// Summarizes yearly fatality and injury sums per event type.
///
/// Output is ordered by event type.
pub fn summarize_health(aggregates: &[HealthAggregate]) -> Vec<HealthSummary> {
    let mut by_type: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for row in aggregates {
        let (fatalities, injuries) = by_type.entry(row.event_type.as_str()).or_default();
        fatalities.push(row.fatalities);
        injuries.push(row.injuries);
    }

    by_type
        .into_iter()
        .map(|(event_type, (fatalities, injuries))| HealthSummary {
            event_type: event_type.to_string(),
            fatalities: summarize(&fatalities),
            injuries: summarize(&injuries),
        })
        .collect()
}

/// Summarizes yearly total damage per event type.
///
/// Output is ordered by event type.
pub fn summarize_economic(aggregates: &[EconomicAggregate]) -> Vec<EconomicSummary> {
    let mut by_type: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in aggregates {
        by_type
            .entry(row.event_type.as_str())
            .or_default()
            .push(row.total_damage);
    }

    by_type
        .into_iter()
        .map(|(event_type, damage)| EconomicSummary {
            event_type: event_type.to_string(),
            damage: summarize(&damage),
        })
        .collect()
}
