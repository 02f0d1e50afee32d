/// Terminal tables for the selected summary rows.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::model::{EconomicSummary, HealthSummary};

/// Placeholder for an undefined standard deviation.
pub const NOT_AVAILABLE: &str = "NA";

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header);
    table
}

fn right_align_from(table: &mut Table, first_numeric: usize) {
    for column in table.column_iter_mut().skip(first_numeric) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

/// Formats a yearly count mean, e.g. `1,234.57`.
pub fn format_count(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Formats a dollar amount with the same K/M/B scale the export uses.
pub fn format_dollars(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${:.2}", value)
    }
}

fn optional(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Mean and standard deviation of yearly fatalities and injuries.
pub fn health_table(rows: &[HealthSummary]) -> Table {
    let mut table = new_table(vec![
        "Event type",
        "Years",
        "Mean fatalities",
        "SD fatalities",
        "Mean injuries",
        "SD injuries",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.event_type),
            Cell::new(row.injuries.observations),
            Cell::new(format_count(row.fatalities.mean)),
            Cell::new(optional(row.fatalities.std_dev, format_count)),
            Cell::new(format_count(row.injuries.mean)),
            Cell::new(optional(row.injuries.std_dev, format_count)),
        ]);
    }

    right_align_from(&mut table, 1);
    table
}

/// Mean and standard deviation of yearly total damage.
pub fn economic_table(rows: &[EconomicSummary]) -> Table {
    let mut table = new_table(vec!["Event type", "Years", "Mean damage", "SD damage"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.event_type),
            Cell::new(row.damage.observations),
            Cell::new(format_dollars(row.damage.mean)),
            Cell::new(optional(row.damage.std_dev, format_dollars)),
        ]);
    }

    right_align_from(&mut table, 1);
    table
}

/// Distinct event type labels with their row counts.
pub fn inventory_table(counts: &[(String, usize)]) -> Table {
    let mut table = new_table(vec!["Event type", "Rows"]);
    for (label, count) in counts {
        // Labels with stray whitespace are distinct groups; quote to show it.
        table.add_row(vec![Cell::new(format!("{:?}", label)), Cell::new(count)]);
    }
    right_align_from(&mut table, 1);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryStats;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0.00");
        assert_eq!(format_count(8.5), "8.50");
        assert_eq!(format_count(1234.567), "1,234.57");
        assert_eq!(format_count(1_000_000.0), "1,000,000.00");
        assert_eq!(format_count(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_dollars_scales() {
        assert_eq!(format_dollars(5.0), "$5.00");
        assert_eq!(format_dollars(2000.0), "$2.00K");
        assert_eq!(format_dollars(1414.2136), "$1.41K");
        assert_eq!(format_dollars(2.5e6), "$2.50M");
        assert_eq!(format_dollars(1.5e9), "$1.50B");
    }

    #[test]
    fn test_health_table_lists_rows_and_missing_std_dev() {
        let rows = vec![HealthSummary {
            event_type: "TSTM WIND".to_string(),
            fatalities: SummaryStats { observations: 1, mean: 1.0, std_dev: None },
            injuries: SummaryStats { observations: 1, mean: 0.0, std_dev: None },
        }];

        let rendered = health_table(&rows).to_string();
        assert!(rendered.contains("TSTM WIND"));
        assert!(rendered.contains("Mean fatalities"));
        assert!(rendered.contains(NOT_AVAILABLE));
    }

    #[test]
    fn test_economic_table_formats_dollars() {
        let rows = vec![EconomicSummary {
            event_type: "FLOOD".to_string(),
            damage: SummaryStats { observations: 2, mean: 2000.0, std_dev: Some(1414.2136) },
        }];

        let table = economic_table(&rows);
        let rendered = table.to_string();
        assert!(rendered.contains("FLOOD"));
        assert!(rendered.contains("$2.00K"));
        assert!(rendered.contains("$1.41K"));
        assert_eq!(table.row_iter().count(), 1);
    }

    #[test]
    fn test_inventory_table_quotes_labels() {
        let counts = vec![(" HIGH SURF".to_string(), 3), ("HAIL".to_string(), 2)];
        let rendered = inventory_table(&counts).to_string();
        assert!(rendered.contains("\" HIGH SURF\""));
    }
}
