//! Chart rendering trait and the plotters-backed implementation

use crate::types::{AxisData, ChartKind, ChartSpec};
use async_trait::async_trait;
use chrono::NaiveDate;
use plotters::prelude::*;
use saturn_common::{Result, SaturnError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Collaborator that draws one chart slot from a ready-made spec
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(&self, spec: &ChartSpec) -> Result<()>;
}

/// Renders each surface as a PNG under `out_dir` using the plotters bitmap
/// backend.
///
/// Rows carrying sentinel values (a `None` date, a NaN coordinate) are
/// skipped at draw time; the series builders hand them through on purpose and
/// this is where they stop. Plotters has no map backend, so the choropleth
/// surface degrades to a ranked country bar chart.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

impl PlottersRenderer {
    pub fn new(out_dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            width,
            height,
        }
    }

    /// Output path for a surface identifier
    pub fn surface_path(&self, surface: &str) -> PathBuf {
        self.out_dir.join(format!("{surface}.png"))
    }
}

#[async_trait]
impl ChartRenderer for PlottersRenderer {
    async fn render(&self, spec: &ChartSpec) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.surface_path(&spec.surface);
        draw_to_file(&path, (self.width, self.height), spec)?;
        info!("rendered {} to {}", spec.surface, path.display());
        Ok(())
    }
}

fn draw_to_file(path: &Path, size: (u32, u32), spec: &ChartSpec) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    match spec.kind {
        ChartKind::Line => crate::line_chart::draw(&root, spec)?,
        ChartKind::Histogram => crate::histogram::draw(&root, spec)?,
        ChartKind::Scatter => crate::scatter::draw(&root, spec)?,
        ChartKind::Choropleth => crate::bar_chart::draw_ranked(&root, spec)?,
        ChartKind::HorizontalBar => crate::bar_chart::draw_horizontal(&root, spec)?,
    }

    root.present()?;
    Ok(())
}

/// Colors used for the first and second trace of a surface.
pub(crate) const TRACE_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

/// Minimum and maximum of the finite values, or `None` if there are none.
pub(crate) fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for v in values {
        if v.is_finite() {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    range
}

/// Widen a range by 5% on each side so points don't sit on the frame.
/// A degenerate range gets a unit of slack instead.
pub(crate) fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// Pair dates with values, keeping only rows with a real date and a finite
/// value.
pub(crate) fn date_points(dates: &[Option<NaiveDate>], values: &[f64]) -> Vec<(NaiveDate, f64)> {
    dates
        .iter()
        .zip(values)
        .filter_map(|(date, &value)| match date {
            Some(d) if value.is_finite() => Some((*d, value)),
            _ => None,
        })
        .collect()
}

pub(crate) fn expect_numbers<'a>(axis: &'a AxisData, what: &str) -> Result<&'a [f64]> {
    match axis {
        AxisData::Numbers(v) => Ok(v),
        _ => Err(SaturnError::chart(format!("{what}: expected numeric axis"))),
    }
}

pub(crate) fn expect_dates<'a>(axis: &'a AxisData, what: &str) -> Result<&'a [Option<NaiveDate>]> {
    match axis {
        AxisData::Dates(v) => Ok(v),
        _ => Err(SaturnError::chart(format!("{what}: expected date axis"))),
    }
}

pub(crate) fn expect_categories<'a>(axis: &'a AxisData, what: &str) -> Result<&'a [String]> {
    match axis {
        AxisData::Categories(v) => Ok(v),
        _ => Err(SaturnError::chart(format!(
            "{what}: expected category axis"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_range_skips_sentinels() {
        let range = finite_range([f64::NAN, 3.0, -1.0, f64::INFINITY, 2.0]);
        assert_eq!(range, Some((-1.0, 3.0)));
        assert_eq!(finite_range([f64::NAN]), None);
        assert_eq!(finite_range([]), None);
    }

    #[test]
    fn test_padded_degenerate_range() {
        let (lo, hi) = padded(4.0, 4.0);
        assert!(lo < 4.0 && hi > 4.0);

        let (lo, hi) = padded(0.0, 10.0);
        assert_eq!((lo, hi), (-0.5, 10.5));
    }

    #[test]
    fn test_date_points_filtering() {
        let d1 = NaiveDate::from_ymd_opt(2023, 8, 1);
        let d2 = NaiveDate::from_ymd_opt(2023, 8, 2);
        let points = date_points(&[d1, None, d2], &[1.0, 2.0, f64::NAN]);
        assert_eq!(points, vec![(d1.unwrap(), 1.0)]);
    }

    #[test]
    fn test_surface_path() {
        let renderer = PlottersRenderer::new("/tmp/charts", 800, 600);
        assert_eq!(
            renderer.surface_path("saturn-traffic"),
            PathBuf::from("/tmp/charts/saturn-traffic.png")
        );
    }
}
