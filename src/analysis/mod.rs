/// Data analysis for the storm impact report.
///
/// Submodules:
/// - `magnitude` - K/M/B damage code normalization
/// - `groupings` - per-(event type, year) sums of the raw events
/// - `summary`   - per-event-type mean and standard deviation of those sums

pub mod groupings;
pub mod magnitude;
pub mod summary;
