//! Bar chart surfaces
//!
//! Two flavors: the served-countries surface (two side-by-side panes of
//! horizontal bars, most-served and least-served) and the ranked vertical bar
//! that stands in for the choropleth surface, since plotters has no map
//! backend.

use crate::renderer::{expect_categories, expect_numbers, finite_range, TRACE_COLORS};
use crate::types::{ChartSpec, Trace};
use plotters::coord::Shift;
use plotters::prelude::*;
use saturn_common::{Result, SaturnError};

/// Horizontal bars, one pane per axis group.
pub(crate) fn draw_horizontal(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    spec: &ChartSpec,
) -> Result<()> {
    let panes = root.split_evenly((1, 2));

    let left: Vec<&Trace> = spec.traces.iter().filter(|t| !t.secondary_axis).collect();
    let right: Vec<&Trace> = spec.traces.iter().filter(|t| t.secondary_axis).collect();

    if left.is_empty() && right.is_empty() {
        return Err(SaturnError::chart(format!(
            "{}: bar chart without traces",
            spec.surface
        )));
    }

    if let Some(trace) = left.first() {
        draw_bars(&panes[0], trace, TRACE_COLORS[0])?;
    }
    if let Some(trace) = right.first() {
        draw_bars(&panes[1], trace, TRACE_COLORS[1])?;
    }
    Ok(())
}

fn draw_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    trace: &Trace,
    color: RGBColor,
) -> Result<()> {
    let values = expect_numbers(&trace.x, &trace.name)?;
    let y = trace
        .y
        .as_ref()
        .ok_or_else(|| SaturnError::chart(format!("{}: bar trace without labels", trace.name)))?;
    let labels = expect_categories(y, &trace.name)?;

    let Some((_, max)) = finite_range(values.iter().copied()) else {
        return Ok(());
    };
    let n = values.len();
    let x_hi = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(&trace.name, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(120)
        .build_cartesian_2d(0.0..x_hi, 0..n)?;

    chart
        .configure_mesh()
        .y_label_formatter(&|y| labels.get(*y).cloned().unwrap_or_default())
        .y_labels(n.min(25))
        .draw()?;

    chart.draw_series(
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| Rectangle::new([(0.0, i), (v, i + 1)], color.filled())),
    )?;

    Ok(())
}

/// Ranked vertical bar over every category, input order preserved.
pub(crate) fn draw_ranked(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    spec: &ChartSpec,
) -> Result<()> {
    let trace = spec
        .traces
        .first()
        .ok_or_else(|| SaturnError::chart(format!("{}: bar chart without traces", spec.surface)))?;

    let labels = expect_categories(&trace.x, &trace.name)?;
    let y = trace
        .y
        .as_ref()
        .ok_or_else(|| SaturnError::chart(format!("{}: bar trace without values", trace.name)))?;
    let values = expect_numbers(y, &trace.name)?;

    let (_, max) = finite_range(values.iter().copied())
        .ok_or_else(|| SaturnError::chart(format!("{}: no drawable data", spec.surface)))?;
    let n = values.len();
    let y_hi = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.surface, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n, 0.0..y_hi)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .y_desc("active nodes")
        .draw()?;

    chart.draw_series(
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| Rectangle::new([(i, 0.0), (i + 1, v)], TRACE_COLORS[0].filled())),
    )?;

    Ok(())
}
