//! Chart vocabulary and rendering for the Saturn dashboard
//!
//! The pipeline describes each chart slot as a [`ChartSpec`] and hands it to
//! a [`ChartRenderer`]; [`PlottersRenderer`] is the bundled implementation,
//! writing one PNG per surface.

mod bar_chart;
mod histogram;
mod line_chart;
mod scatter;

pub mod renderer;
pub mod types;

pub use renderer::{ChartRenderer, PlottersRenderer};
pub use types::{AxisData, ChartKind, ChartSpec, Trace};
