//! Series builders for the six dashboard charts
//!
//! Each builder is a pure function from parsed records to the numeric or
//! categorical series one chart slot consumes. Sentinel values (`f64::NAN`,
//! `None` dates) pass through untouched; whether to skip them is the
//! renderer's call. All sorts use `f64::total_cmp`, so ordering stays
//! deterministic even with NaN in the input.

use crate::types::{CountryStat, NodeActivityPoint, NodeStat, TrafficPoint};
use chrono::NaiveDate;

/// Number of entries in each half of the served-countries chart.
const SERVED_COUNTRIES_LIMIT: usize = 20;

/// A date-indexed series, parallel arrays of x and y
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSeries {
    pub dates: Vec<Option<NaiveDate>>,
    pub values: Vec<f64>,
}

/// A numeric x/y series for scatter plots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A labelled series, parallel arrays of category and value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Percent-of-population vs percent-of-total series (a Lorenz-curve view)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionSeries {
    pub node_percent: Vec<f64>,
    pub cumulative_percent: Vec<f64>,
}

/// The two halves of the served-countries chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServedCountries {
    /// The 20 most served countries, largest last (ascending horizontal bars)
    pub top: CategorySeries,
    /// The 20 least served countries, largest first
    pub bottom: CategorySeries,
}

/// Active node count and network traffic over time, as two independently
/// scaled series sharing an x-axis. Dates need not align between the two.
pub fn node_and_traffic(
    nodes: &[NodeActivityPoint],
    traffic: &[TrafficPoint],
) -> (DateSeries, DateSeries) {
    let node_series = DateSeries {
        dates: nodes.iter().map(|p| p.date).collect(),
        values: nodes.iter().map(|p| p.count).collect(),
    };
    let traffic_series = DateSeries {
        dates: traffic.iter().map(|p| p.date).collect(),
        values: traffic.iter().map(|p| p.traffic).collect(),
    };
    (node_series, traffic_series)
}

/// Node ages for the age histogram. Binning is the renderer's concern.
pub fn node_age(stats: &[NodeStat]) -> Vec<f64> {
    stats.iter().map(|s| s.age_days).collect()
}

/// Node age against earnings and against bandwidth, as two independent
/// scatter series for side-by-side plots.
pub fn age_correlation(stats: &[NodeStat]) -> (ScatterSeries, ScatterSeries) {
    let ages: Vec<f64> = stats.iter().map(|s| s.age_days).collect();

    let earnings = ScatterSeries {
        x: ages.clone(),
        y: stats.iter().map(|s| s.estimated_earnings_fil).collect(),
    };
    let bandwidth = ScatterSeries {
        x: ages,
        y: stats.iter().map(|s| s.bandwidth_served_bytes).collect(),
    };
    (earnings, bandwidth)
}

/// Active node count per country, input order preserved, for the world map.
pub fn node_count_by_country(stats: &[CountryStat]) -> CategorySeries {
    CategorySeries {
        labels: stats.iter().map(|s| s.country.clone()).collect(),
        values: stats.iter().map(|s| s.active_node_count).collect(),
    }
}

/// The most and least served countries by active node count.
///
/// Entries are sorted descending by count, then split into the first 20
/// (reversed, so the largest bar ends up on top of an ascending horizontal
/// bar chart) and the last 20. With fewer than 40 countries the two slices
/// overlap; that matches the source data's behavior and is not an error.
pub fn served_countries(stats: &[CountryStat]) -> ServedCountries {
    let mut sorted: Vec<&CountryStat> = stats.iter().collect();
    sorted.sort_by(|a, b| b.active_node_count.total_cmp(&a.active_node_count));

    let take = SERVED_COUNTRIES_LIMIT.min(sorted.len());

    let top_slice = &sorted[..take];
    let top = CategorySeries {
        labels: top_slice.iter().rev().map(|s| s.country.clone()).collect(),
        values: top_slice.iter().rev().map(|s| s.active_node_count).collect(),
    };

    let bottom_slice = &sorted[sorted.len() - take..];
    let bottom = CategorySeries {
        labels: bottom_slice.iter().map(|s| s.country.clone()).collect(),
        values: bottom_slice.iter().map(|s| s.active_node_count).collect(),
    };

    ServedCountries { top, bottom }
}

/// Earnings and bandwidth concentration across the node population.
///
/// For each metric: sort the per-node values descending and emit, for the
/// i-th node (0-indexed), the point (i / n x 100, cumulative share through i
/// as a percent of the total). The result is non-decreasing and reaches 100%
/// at the last node whenever the total is positive. A zero total yields NaN
/// throughout; the source data never has one, so it is not special-cased.
pub fn earnings_and_bandwidth_distribution(
    stats: &[NodeStat],
) -> (DistributionSeries, DistributionSeries) {
    let earnings: Vec<f64> = stats.iter().map(|s| s.estimated_earnings_fil).collect();
    let bandwidth: Vec<f64> = stats.iter().map(|s| s.bandwidth_served_bytes).collect();
    (cumulative_share(earnings), cumulative_share(bandwidth))
}

fn cumulative_share(mut values: Vec<f64>) -> DistributionSeries {
    let total: f64 = values.iter().sum();
    values.sort_by(|a, b| b.total_cmp(a));

    let n = values.len();
    let mut series = DistributionSeries {
        node_percent: Vec::with_capacity(n),
        cumulative_percent: Vec::with_capacity(n),
    };

    let mut running = 0.0;
    for (i, value) in values.iter().enumerate() {
        running += value;
        series.node_percent.push(i as f64 / n as f64 * 100.0);
        series.cumulative_percent.push(running / total * 100.0);
    }
    series
}
