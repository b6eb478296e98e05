//! Row parsers and chart series builders for Saturn network data
//!
//! This crate is the transformation layer of the dashboard: it turns the raw
//! rows of the four Saturn dataset files into typed records, and the records
//! into the exact numeric series each of the six charts consumes. Everything
//! here is pure and synchronous; fetching and rendering live elsewhere.

pub mod parse;
pub mod series;
pub mod types;

pub use parse::{parse_active_node, parse_active_node_stats, parse_country_stats, parse_traffic};
pub use series::{
    age_correlation, earnings_and_bandwidth_distribution, node_age, node_and_traffic,
    node_count_by_country, served_countries, CategorySeries, DateSeries, DistributionSeries,
    ScatterSeries, ServedCountries,
};
pub use types::{CountryStat, NodeActivityPoint, NodeStat, TrafficPoint};
