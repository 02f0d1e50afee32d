/// Per-year line charts for the selected event types.
///
/// Each selected event type becomes one line: x is the year, y the
/// yearly aggregate value (not the mean). The health chart stacks a
/// fatalities panel over an injuries panel; the economic chart has a
/// single total-damage panel.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::{ChartConfig, ChartFormat};
use crate::model::{
    EconomicAggregate, EconomicSummary, HealthAggregate, HealthSummary, ReportError,
};

/// One event type's yearly values, ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(i32, f64)>,
}

/// Fatality and injury series for the same set of event types.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSeries {
    pub fatalities: Vec<Series>,
    pub injuries: Vec<Series>,
}

fn chart_error<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Chart(e.to_string())
}

// ---------------------------------------------------------------------------
// Series construction
// ---------------------------------------------------------------------------

/// Builds one series per selected event type, in selection order.
pub fn health_series(aggregates: &[HealthAggregate], selected: &[HealthSummary]) -> HealthSeries {
    let mut fatalities = Vec::with_capacity(selected.len());
    let mut injuries = Vec::with_capacity(selected.len());

    for summary in selected {
        let mut rows: Vec<&HealthAggregate> = aggregates
            .iter()
            .filter(|a| a.event_type == summary.event_type)
            .collect();
        rows.sort_by_key(|a| a.year);

        fatalities.push(Series {
            label: summary.event_type.clone(),
            points: rows.iter().map(|a| (a.year, a.fatalities)).collect(),
        });
        injuries.push(Series {
            label: summary.event_type.clone(),
            points: rows.iter().map(|a| (a.year, a.injuries)).collect(),
        });
    }

    HealthSeries { fatalities, injuries }
}

/// Builds one total-damage series per selected event type, in selection order.
pub fn economic_series(aggregates: &[EconomicAggregate], selected: &[EconomicSummary]) -> Vec<Series> {
    selected
        .iter()
        .map(|summary| {
            let mut points: Vec<(i32, f64)> = aggregates
                .iter()
                .filter(|a| a.event_type == summary.event_type)
                .map(|a| (a.year, a.total_damage))
                .collect();
            points.sort_by_key(|(year, _)| *year);
            Series {
                label: summary.event_type.clone(),
                points,
            }
        })
        .collect()
}

/// Axis ranges covering every point of every series.
///
/// The year range is widened to at least one year and the value range
/// always includes zero, so a flat or single-point series still draws.
pub fn axis_bounds(series: &[Series]) -> ((i32, i32), (f64, f64)) {
    let points = || series.iter().flat_map(|s| s.points.iter());

    let (mut first, mut last) = points().fold((i32::MAX, i32::MIN), |(lo, hi), (year, _)| {
        (lo.min(*year), hi.max(*year))
    });
    if first > last {
        (first, last) = (0, 1);
    } else if first == last {
        last += 1;
    }

    let (low, high) = points().fold((0.0f64, 0.0f64), |(lo, hi), (_, v)| (lo.min(*v), hi.max(*v)));
    let high = if high <= low { low + 1.0 } else { high * 1.05 };

    ((first, last), (low, high))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    y_desc: &str,
    series: &[Series],
) -> Result<(), ReportError> {
    let ((first, last), (low, high)) = axis_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(first..last, low..high)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(y_desc)
        .x_label_formatter(&|year| year.to_string())
        .draw()
        .map_err(chart_error)?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))
            .map_err(chart_error)?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    Ok(())
}

fn draw_health<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &HealthSeries,
) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(chart_error)?;
    let panels = root.split_evenly((2, 1));
    draw_panel(&panels[0], "Fatalities per year", "Fatalities", &series.fatalities)?;
    draw_panel(&panels[1], "Injuries per year", "Injuries", &series.injuries)?;
    root.present().map_err(chart_error)
}

fn draw_economic<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &[Series],
) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(chart_error)?;
    draw_panel(&root, "Property and crop damage per year", "Damage (USD)", series)?;
    root.present().map_err(chart_error)
}

/// Writes the two-panel health chart to `path` in the configured format.
pub fn render_health_chart(
    path: &Path,
    config: &ChartConfig,
    series: &HealthSeries,
) -> Result<(), ReportError> {
    let size = (config.width, config.height);
    match config.format {
        ChartFormat::Png => draw_health(BitMapBackend::new(path, size).into_drawing_area(), series),
        ChartFormat::Svg => draw_health(SVGBackend::new(path, size).into_drawing_area(), series),
    }
}

/// Writes the damage chart to `path` in the configured format.
pub fn render_economic_chart(
    path: &Path,
    config: &ChartConfig,
    series: &[Series],
) -> Result<(), ReportError> {
    let size = (config.width, config.height);
    match config.format {
        ChartFormat::Png => draw_economic(BitMapBackend::new(path, size).into_drawing_area(), series),
        ChartFormat::Svg => draw_economic(SVGBackend::new(path, size).into_drawing_area(), series),
    }
}
