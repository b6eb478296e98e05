//! Library surface of the dashboard binary, exposed for integration tests

pub mod pipeline;

pub use pipeline::{build_chart_specs, run_pipeline};
