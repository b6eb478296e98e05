//! Chart vocabulary shared between the pipeline and renderers

use chrono::NaiveDate;

/// Chart-type hint for a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Histogram,
    Scatter,
    Choropleth,
    HorizontalBar,
}

/// Values along one axis of a trace
#[derive(Debug, Clone, PartialEq)]
pub enum AxisData {
    /// Calendar dates; `None` marks a row whose source date was unparseable
    Dates(Vec<Option<NaiveDate>>),
    /// Numeric values; NaN marks a malformed source field
    Numbers(Vec<f64>),
    /// Category labels (country names)
    Categories(Vec<String>),
}

impl AxisData {
    pub fn len(&self) -> usize {
        match self {
            AxisData::Dates(v) => v.len(),
            AxisData::Numbers(v) => v.len(),
            AxisData::Categories(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named series of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub x: AxisData,
    /// Histogram traces carry x values only
    pub y: Option<AxisData>,
    /// Draw against the secondary y-axis, or in the second pane of a
    /// two-pane surface
    pub secondary_axis: bool,
}

impl Trace {
    pub fn new(name: impl Into<String>, x: AxisData, y: AxisData) -> Self {
        Self {
            name: name.into(),
            x,
            y: Some(y),
            secondary_axis: false,
        }
    }

    /// A trace with x values only, for histograms
    pub fn x_only(name: impl Into<String>, x: AxisData) -> Self {
        Self {
            name: name.into(),
            x,
            y: None,
            secondary_axis: false,
        }
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }
}

/// Everything a renderer needs to draw one chart slot
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Target display-surface identifier (becomes the output file stem)
    pub surface: String,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, surface: impl Into<String>, traces: Vec<Trace>) -> Self {
        Self {
            kind,
            surface: surface.into(),
            traces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_len() {
        assert_eq!(AxisData::Numbers(vec![1.0, 2.0]).len(), 2);
        assert!(AxisData::Categories(vec![]).is_empty());
        assert_eq!(AxisData::Dates(vec![None]).len(), 1);
    }

    #[test]
    fn test_trace_builders() {
        let t = Trace::new(
            "earnings",
            AxisData::Numbers(vec![1.0]),
            AxisData::Numbers(vec![2.0]),
        )
        .on_secondary_axis();
        assert!(t.secondary_axis);
        assert!(t.y.is_some());

        let h = Trace::x_only("ages", AxisData::Numbers(vec![3.0]));
        assert!(h.y.is_none());
        assert!(!h.secondary_axis);
    }
}
