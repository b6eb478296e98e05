//! Typed records for the four Saturn dataset files
//!
//! Records are created by a parser from one input row and never mutated
//! afterwards. Numeric fields hold `f64::NAN` when the source field was not a
//! well-formed number; date fields hold `None` when the source field was not a
//! well-formed date. Builders propagate these sentinels rather than dropping
//! the row.

use chrono::NaiveDate;

/// One day of the active node count time series
#[derive(Debug, Clone, PartialEq)]
pub struct NodeActivityPoint {
    pub date: Option<NaiveDate>,
    pub count: f64,
}

/// Per-node statistics for one active node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStat {
    pub id: String,
    pub age_days: f64,
    pub estimated_earnings_fil: f64,
    pub bandwidth_served_bytes: f64,
}

/// Per-country aggregates; country names are unique within a dataset and
/// match the geographic-name vocabulary used by map renderers
#[derive(Debug, Clone, PartialEq)]
pub struct CountryStat {
    pub country: String,
    pub active_node_count: f64,
    pub estimated_earnings_fil: f64,
    pub bandwidth_served_bytes: f64,
}

/// One day of the network traffic time series
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPoint {
    pub date: Option<NaiveDate>,
    pub traffic: f64,
}
