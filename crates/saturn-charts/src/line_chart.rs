//! Line chart surface, with an optional secondary y-axis
//!
//! Used for the node-count-and-traffic surface (two independently scaled
//! time series over one x-axis) and the cumulative-distribution surface
//! (numeric x, both traces on the primary axis).

use crate::renderer::{date_points, expect_dates, expect_numbers, finite_range, padded, TRACE_COLORS};
use crate::types::{AxisData, ChartSpec, Trace};
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use saturn_common::{Result, SaturnError};

pub(crate) fn draw(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<()> {
    match spec.traces.first().map(|t| &t.x) {
        Some(AxisData::Dates(_)) => draw_date_lines(root, spec),
        _ => draw_numeric_lines(root, spec),
    }
}

/// Date-indexed traces; a `secondary_axis` trace gets the right-hand y-axis.
fn draw_date_lines(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<()> {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    for trace in &spec.traces {
        let dates = expect_dates(&trace.x, &trace.name)?;
        let y = trace
            .y
            .as_ref()
            .ok_or_else(|| SaturnError::chart(format!("{}: line trace without y", trace.name)))?;
        let points = date_points(dates, expect_numbers(y, &trace.name)?);
        if trace.secondary_axis {
            secondary.push((trace, points));
        } else {
            primary.push((trace, points));
        }
    }

    let (x_lo, x_hi) = date_span(
        primary
            .iter()
            .chain(secondary.iter())
            .flat_map(|(_, pts)| pts.iter().map(|(d, _)| *d)),
    )
    .ok_or_else(|| SaturnError::chart(format!("{}: no drawable data", spec.surface)))?;

    let (y_lo, y_hi) = value_span(&primary)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .caption(&spec.surface, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60);

    if secondary.is_empty() {
        let mut chart = builder.build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
        chart.configure_mesh().draw()?;
        for (i, (trace, points)) in primary.iter().enumerate() {
            let color = TRACE_COLORS[i % TRACE_COLORS.len()];
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))?
                .label(&trace.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
        }
        if primary.len() > 1 {
            chart.configure_series_labels().draw()?;
        }
    } else {
        let (y2_lo, y2_hi) = value_span(&secondary)?;
        let mut chart = builder
            .right_y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?
            .set_secondary_coord(x_lo..x_hi, y2_lo..y2_hi);

        chart.configure_mesh().draw()?;
        chart.configure_secondary_axes().draw()?;

        for (i, (trace, points)) in primary.iter().enumerate() {
            let color = TRACE_COLORS[i % TRACE_COLORS.len()];
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))?
                .label(&trace.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
        }
        for (i, (trace, points)) in secondary.iter().enumerate() {
            let color = TRACE_COLORS[(primary.len() + i) % TRACE_COLORS.len()];
            chart
                .draw_secondary_series(LineSeries::new(points.iter().copied(), &color))?
                .label(&trace.name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
        }
        chart.configure_series_labels().draw()?;
    }

    Ok(())
}

/// Numeric x traces, all on one axis (the distribution surface).
fn draw_numeric_lines(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<()> {
    let mut traces = Vec::new();
    for trace in &spec.traces {
        let x = expect_numbers(&trace.x, &trace.name)?;
        let y = trace
            .y
            .as_ref()
            .ok_or_else(|| SaturnError::chart(format!("{}: line trace without y", trace.name)))?;
        let y = expect_numbers(y, &trace.name)?;
        let points: Vec<(f64, f64)> = x
            .iter()
            .zip(y)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .collect();
        traces.push((trace, points));
    }

    let x_range = finite_range(traces.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.0)));
    let y_range = finite_range(traces.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)));
    let ((x_lo, x_hi), (y_lo, y_hi)) = match (x_range, y_range) {
        (Some(x), Some(y)) => (padded(x.0, x.1), padded(y.0, y.1)),
        _ => {
            return Err(SaturnError::chart(format!(
                "{}: no drawable data",
                spec.surface
            )))
        }
    };

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.surface, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart.configure_mesh().draw()?;

    for (i, (trace, points)) in traces.iter().enumerate() {
        let color = TRACE_COLORS[i % TRACE_COLORS.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(&trace.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
    }
    if traces.len() > 1 {
        chart.configure_series_labels().draw()?;
    }

    Ok(())
}

fn date_span(dates: impl IntoIterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    let mut span: Option<(NaiveDate, NaiveDate)> = None;
    for d in dates {
        span = Some(match span {
            Some((lo, hi)) => (lo.min(d), hi.max(d)),
            None => (d, d),
        });
    }
    // A single-day span still needs a non-empty axis.
    span.map(|(lo, hi)| if lo == hi { (lo, hi + Duration::days(1)) } else { (lo, hi) })
}

fn value_span(traces: &[(&Trace, Vec<(NaiveDate, f64)>)]) -> Result<(f64, f64)> {
    let range = finite_range(traces.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)));
    match range {
        Some((lo, hi)) => Ok(padded(lo.min(0.0), hi)),
        None => Ok((0.0, 1.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_span_single_day_widens() {
        let d = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        let (lo, hi) = date_span([d]).unwrap();
        assert_eq!(lo, d);
        assert!(hi > lo);
    }

    #[test]
    fn test_date_span_empty() {
        assert_eq!(date_span([]), None);
    }
}
