//! Histogram surface
//!
//! The builders hand over the raw value sequence; binning happens here, in
//! the renderer, where the bucket width is a presentation choice.

use crate::renderer::{expect_numbers, finite_range};
use crate::types::ChartSpec;
use plotters::coord::Shift;
use plotters::prelude::*;
use saturn_common::{Result, SaturnError};

const BIN_COUNT: usize = 20;

pub(crate) fn draw(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<()> {
    let trace = spec
        .traces
        .first()
        .ok_or_else(|| SaturnError::chart(format!("{}: histogram without a trace", spec.surface)))?;
    let values = expect_numbers(&trace.x, &trace.name)?;

    let bins = bin(values, BIN_COUNT)
        .ok_or_else(|| SaturnError::chart(format!("{}: no drawable data", spec.surface)))?;

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let x_lo = bins.first().map(|b| b.lo).unwrap_or(0.0);
    let x_hi = bins.last().map(|b| b.hi).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.surface, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0..max_count * 1.1)?;

    chart
        .configure_mesh()
        .x_desc(trace.name.as_str())
        .y_desc("nodes")
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new(
            [(b.lo, 0.0), (b.hi, b.count as f64)],
            RGBColor(31, 119, 180).filled(),
        )
    }))?;

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
struct Bin {
    lo: f64,
    hi: f64,
    count: usize,
}

/// Equal-width bins over the finite values. Returns `None` when nothing is
/// binnable. NaN values fall out here; by this point that is the renderer's
/// prerogative.
fn bin(values: &[f64], bin_count: usize) -> Option<Vec<Bin>> {
    let (lo, hi) = finite_range(values.iter().copied())?;
    let width = if hi > lo {
        (hi - lo) / bin_count as f64
    } else {
        1.0
    };

    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| Bin {
            lo: lo + width * i as f64,
            hi: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &v in values.iter().filter(|v| v.is_finite()) {
        let index = (((v - lo) / width) as usize).min(bin_count - 1);
        bins[index].count += 1;
    }
    Some(bins)
}
