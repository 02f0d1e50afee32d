/// Damage magnitude normalization.
///
/// The storm export records damage as a base number plus a one-letter
/// magnitude code: `25.0` with `"K"` means $25,000. Only the uppercase codes
/// K, M and B scale the number. Everything else in the code columns (blank,
/// lowercase, "H", digits, "+", "?") leaves the number unscaled, which
/// under-counts some rows. Downstream totals depend on this exact behavior.

use crate::model::EventTable;

/// Multiplier for a magnitude code. Case-sensitive.
pub fn multiplier(code: &str) -> f64 {
    match code {
        "K" => 1e3,
        "M" => 1e6,
        "B" => 1e9,
        _ => 1.0,
    }
}

/// Scales `value` by the multiplier for `code`.
pub fn normalize(value: f64, code: &str) -> f64 {
    value * multiplier(code)
}

/// Normalizes a whole damage column against its code column.
///
/// Missing values stay missing. The two slices must be the same length;
/// `EventTable` guarantees this for its own columns.
pub fn normalize_column(values: &[Option<f64>], codes: &[String]) -> Vec<Option<f64>> {
    debug_assert_eq!(values.len(), codes.len());
    values
        .iter()
        .zip(codes)
        .map(|(value, code)| value.map(|v| normalize(v, code)))
        .collect()
}

/// Property damage column in dollars.
pub fn property_damage(table: &EventTable) -> Vec<Option<f64>> {
    normalize_column(&table.property_damage, &table.property_damage_exp)
}

/// Crop damage column in dollars.
pub fn crop_damage(table: &EventTable) -> Vec<Option<f64>> {
    normalize_column(&table.crop_damage, &table.crop_damage_exp)
}
