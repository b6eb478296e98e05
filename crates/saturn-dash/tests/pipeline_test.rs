//! Integration tests for the dashboard pipeline

use async_trait::async_trait;
use saturn_charts::{ChartKind, ChartRenderer, ChartSpec};
use saturn_common::{CsvSource, DatasetFile, Result, SaturnError};
use saturn_dash::run_pipeline;
use std::sync::Mutex;

/// Source serving canned CSV text for every dataset.
struct CannedSource {
    /// Dataset whose fetch should fail, if any
    fail: Option<DatasetFile>,
}

impl CannedSource {
    fn new() -> Self {
        Self { fail: None }
    }

    fn failing(file: DatasetFile) -> Self {
        Self { fail: Some(file) }
    }
}

#[async_trait]
impl CsvSource for CannedSource {
    async fn fetch_csv(&self, file: DatasetFile) -> Result<String> {
        if self.fail == Some(file) {
            return Err(SaturnError::fetch(format!(
                "{} unavailable",
                file.file_name()
            )));
        }
        let text = match file {
            DatasetFile::ActiveNode => "2023-08-01,100\n2023-08-02,120\n2023-08-03,115\n",
            DatasetFile::ActiveNodeStats => {
                "node-a,10,4.0,4000\nnode-b,20,1.0,1000\nnode-c,5,3.0,3000\n"
            }
            DatasetFile::CountryStats => "Germany,42,10.0,9000\nBrazil,17,4.0,3000\nJapan,55,20.0,12000\n",
            DatasetFile::Traffic => "2023-08-01,1.0e9\n2023-08-02,1.5e9\n",
        };
        Ok(text.to_string())
    }
}

/// Renderer that records every spec it is handed.
#[derive(Default)]
struct RecordingRenderer {
    rendered: Mutex<Vec<ChartSpec>>,
}

impl RecordingRenderer {
    fn specs(&self) -> Vec<ChartSpec> {
        self.rendered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChartRenderer for RecordingRenderer {
    async fn render(&self, spec: &ChartSpec) -> Result<()> {
        self.rendered.lock().unwrap().push(spec.clone());
        Ok(())
    }
}

/// Renderer that fails on a chosen surface.
struct FailingRenderer {
    fail_surface: &'static str,
    rendered: Mutex<Vec<String>>,
}

#[async_trait]
impl ChartRenderer for FailingRenderer {
    async fn render(&self, spec: &ChartSpec) -> Result<()> {
        if spec.surface == self.fail_surface {
            return Err(SaturnError::chart("backend exploded"));
        }
        self.rendered.lock().unwrap().push(spec.surface.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_pipeline_renders_six_charts_in_order() {
    let source = CannedSource::new();
    let renderer = RecordingRenderer::default();

    run_pipeline(&source, &renderer).await.unwrap();

    let specs = renderer.specs();
    let surfaces: Vec<&str> = specs.iter().map(|s| s.surface.as_str()).collect();
    assert_eq!(
        surfaces,
        vec![
            "saturn-active-node",
            "saturn-active-node-age",
            "saturn-node-age-correlation",
            "saturn-active-node-by-country",
            "saturn-served-countries",
            "saturn-active-node-distribution",
        ]
    );
}

#[tokio::test]
async fn test_pipeline_series_contents() {
    let source = CannedSource::new();
    let renderer = RecordingRenderer::default();

    run_pipeline(&source, &renderer).await.unwrap();
    let specs = renderer.specs();

    // Activity chart: 3 node rows on the primary axis, 2 traffic rows on the
    // secondary.
    let activity = &specs[0];
    assert_eq!(activity.kind, ChartKind::Line);
    assert_eq!(activity.traces[0].x.len(), 3);
    assert_eq!(activity.traces[1].x.len(), 2);
    assert!(activity.traces[1].secondary_axis);

    // Histogram: one age per node.
    assert_eq!(specs[1].traces[0].x.len(), 3);
    assert!(specs[1].traces[0].y.is_none());

    // Served countries: sorted desc is Japan(55), Germany(42), Brazil(17);
    // top is reversed, bottom is not.
    let served = &specs[4];
    match (&served.traces[0].y, &served.traces[1].y) {
        (
            Some(saturn_charts::AxisData::Categories(top)),
            Some(saturn_charts::AxisData::Categories(bottom)),
        ) => {
            assert_eq!(top, &vec!["Brazil", "Germany", "Japan"]);
            assert_eq!(bottom, &vec!["Japan", "Germany", "Brazil"]);
        }
        other => panic!("unexpected served-countries axes: {other:?}"),
    }

    // Distribution: earnings 4+1+3 sorted desc over total 8 gives 50%, 87.5%,
    // 100%.
    let distribution = &specs[5];
    match &distribution.traces[0].y {
        Some(saturn_charts::AxisData::Numbers(cumulative)) => {
            assert_eq!(cumulative, &vec![50.0, 87.5, 100.0]);
        }
        other => panic!("unexpected distribution axis: {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_fetch_aborts_before_rendering() {
    let source = CannedSource::failing(DatasetFile::CountryStats);
    let renderer = RecordingRenderer::default();

    let err = run_pipeline(&source, &renderer).await.unwrap_err();
    assert!(matches!(err, SaturnError::Fetch { .. }));
    assert!(renderer.specs().is_empty());
}

#[tokio::test]
async fn test_failed_render_aborts_remaining_charts() {
    let source = CannedSource::new();
    let renderer = FailingRenderer {
        fail_surface: "saturn-node-age-correlation",
        rendered: Mutex::new(Vec::new()),
    };

    let err = run_pipeline(&source, &renderer).await.unwrap_err();
    assert!(matches!(err, SaturnError::Chart { .. }));
    assert_eq!(
        *renderer.rendered.lock().unwrap(),
        vec!["saturn-active-node", "saturn-active-node-age"]
    );
}
