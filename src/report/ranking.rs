/// Ranking and selection of summary rows.
///
/// Rankings are by mean, largest first. The sort is stable: rows with
/// equal means keep the order they arrived in (event-type order, as the
/// summary stage emits them).

use crate::model::{EconomicSummary, HealthSummary};

/// Sorts `rows` by `key`, descending, keeping input order among equal keys.
pub fn rank_by<T, F>(rows: &[T], key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked
}

/// The first `k` rows of `rank_by`. Fewer are returned if `rows` is shorter.
pub fn top_k<T, F>(rows: &[T], k: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked = rank_by(rows, key);
    ranked.truncate(k);
    ranked
}

/// Event types with the highest mean yearly injuries and fatalities.
///
/// The top `k_injuries` by injuries come first, followed by those of the
/// top `k_fatalities` by fatalities that were not already selected, so an
/// event type appears at most once.
pub fn select_health(
    summaries: &[HealthSummary],
    k_injuries: usize,
    k_fatalities: usize,
) -> Vec<HealthSummary> {
    let by_injuries = top_k(summaries, k_injuries, |s| s.injuries.mean);
    let by_fatalities = top_k(summaries, k_fatalities, |s| s.fatalities.mean);

    let mut selected: Vec<HealthSummary> = Vec::with_capacity(k_injuries + k_fatalities);
    for summary in by_injuries.into_iter().chain(by_fatalities) {
        if !selected.iter().any(|s| s.event_type == summary.event_type) {
            selected.push(summary.clone());
        }
    }
    selected
}

/// Event types with the highest mean yearly total damage.
pub fn select_economic(summaries: &[EconomicSummary], k: usize) -> Vec<EconomicSummary> {
    top_k(summaries, k, |s| s.damage.mean)
        .into_iter()
        .cloned()
        .collect()
}
