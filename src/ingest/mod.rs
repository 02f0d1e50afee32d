/// Dataset ingestion.
///
/// Submodules:
/// - `storm_data` - NOAA storm database export: decompression + CSV parsing
/// - `fixtures`   - (test only) representative export rows

pub mod storm_data;

#[cfg(test)]
pub(crate) mod fixtures;
