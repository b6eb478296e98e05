//! Scatter surface with two independent side-by-side panes
//!
//! The age-correlation chart plots (age, earnings) and (age, bandwidth) next
//! to each other without a shared axis; a `secondary_axis` trace goes to the
//! right pane.

use crate::renderer::{expect_numbers, finite_range, padded, TRACE_COLORS};
use crate::types::{ChartSpec, Trace};
use plotters::coord::Shift;
use plotters::prelude::*;
use saturn_common::{Result, SaturnError};

pub(crate) fn draw(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<()> {
    let panes = root.split_evenly((1, 2));

    let left: Vec<&Trace> = spec.traces.iter().filter(|t| !t.secondary_axis).collect();
    let right: Vec<&Trace> = spec.traces.iter().filter(|t| t.secondary_axis).collect();

    if left.is_empty() && right.is_empty() {
        return Err(SaturnError::chart(format!(
            "{}: scatter without traces",
            spec.surface
        )));
    }

    draw_pane(&panes[0], &left, 0)?;
    draw_pane(&panes[1], &right, 1)?;
    Ok(())
}

fn draw_pane(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    traces: &[&Trace],
    color_offset: usize,
) -> Result<()> {
    let mut plotted = Vec::new();
    for trace in traces {
        let x = expect_numbers(&trace.x, &trace.name)?;
        let y = trace
            .y
            .as_ref()
            .ok_or_else(|| SaturnError::chart(format!("{}: scatter trace without y", trace.name)))?;
        let y = expect_numbers(y, &trace.name)?;
        let points: Vec<(f64, f64)> = x
            .iter()
            .zip(y)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .collect();
        plotted.push((*trace, points));
    }

    let x_range = finite_range(plotted.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.0)));
    let y_range = finite_range(plotted.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)));
    let ((x_lo, x_hi), (y_lo, y_hi)) = match (x_range, y_range) {
        (Some(x), Some(y)) => (padded(x.0, x.1), padded(y.0, y.1)),
        // An empty pane stays blank rather than failing the surface.
        _ => return Ok(()),
    };

    let caption = plotted
        .first()
        .map(|(t, _)| t.name.clone())
        .unwrap_or_default();

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart.configure_mesh().draw()?;

    for (i, (_, points)) in plotted.iter().enumerate() {
        let color = TRACE_COLORS[(color_offset + i) % TRACE_COLORS.len()];
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
        )?;
    }

    Ok(())
}
