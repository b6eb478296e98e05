//! Row parsers for the four Saturn dataset files
//!
//! Each parser maps fixed column positions of a header-less CSV file to the
//! fields of its record type, one record per input row, input order preserved.
//! This is a best-effort, silent-degradation contract: missing columns read as
//! empty fields, malformed numbers become `f64::NAN`, malformed dates become
//! `None`, and no error is ever raised for a malformed row.

use crate::types::{CountryStat, NodeActivityPoint, NodeStat, TrafficPoint};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

/// Parse the active node count time series (`saturn_active_node.csv`)
pub fn parse_active_node(text: &str) -> Vec<NodeActivityPoint> {
    map_rows(text, "saturn_active_node", |row| NodeActivityPoint {
        date: field_as_date(row, 0),
        count: field_as_number(row, 1),
    })
}

/// Parse the per-node statistics (`saturn_active_node_stats.csv`)
pub fn parse_active_node_stats(text: &str) -> Vec<NodeStat> {
    map_rows(text, "saturn_active_node_stats", |row| NodeStat {
        id: field(row, 0).to_string(),
        age_days: field_as_number(row, 1),
        estimated_earnings_fil: field_as_number(row, 2),
        bandwidth_served_bytes: field_as_number(row, 3),
    })
}

/// Parse the per-country statistics (`saturn_country_stats.csv`)
pub fn parse_country_stats(text: &str) -> Vec<CountryStat> {
    map_rows(text, "saturn_country_stats", |row| CountryStat {
        country: field(row, 0).to_string(),
        active_node_count: field_as_number(row, 1),
        estimated_earnings_fil: field_as_number(row, 2),
        bandwidth_served_bytes: field_as_number(row, 3),
    })
}

/// Parse the network traffic time series (`saturn_traffic.csv`)
pub fn parse_traffic(text: &str) -> Vec<TrafficPoint> {
    map_rows(text, "saturn_traffic", |row| TrafficPoint {
        date: field_as_date(row, 0),
        traffic: field_as_number(row, 1),
    })
}

/// Run `make_record` over every readable row of a header-less CSV text.
fn map_rows<T>(text: &str, dataset: &str, make_record: impl Fn(&StringRecord) -> T) -> Vec<T> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let records: Vec<T> = reader
        .records()
        .filter_map(|row| row.ok())
        .map(|row| make_record(&row))
        .collect();

    debug!("parsed {} rows from {}", records.len(), dataset);
    records
}

fn field<'r>(row: &'r StringRecord, index: usize) -> &'r str {
    row.get(index).unwrap_or("")
}

/// Numeric cast with the NaN sentinel for anything that is not a number.
fn field_as_number(row: &StringRecord, index: usize) -> f64 {
    field(row, index).trim().parse().unwrap_or(f64::NAN)
}

/// Calendar-date cast with the `None` sentinel for anything unparseable.
fn field_as_date(row: &StringRecord, index: usize) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(field(row, index).trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_node_rows_in_order() {
        let text = "2023-08-01,100\n2023-08-02,105\n2023-08-03,99\n";
        let points = parse_active_node(text);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2023, 8, 1));
        assert_eq!(points[0].count, 100.0);
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2023, 8, 2));
        assert_eq!(points[2].count, 99.0);
    }

    #[test]
    fn test_active_node_stats_columns() {
        let text = "node-a,12.5,3.25,1024\nnode-b,1,0.5,2048\n";
        let stats = parse_active_node_stats(text);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].id, "node-a");
        assert_eq!(stats[0].age_days, 12.5);
        assert_eq!(stats[0].estimated_earnings_fil, 3.25);
        assert_eq!(stats[0].bandwidth_served_bytes, 1024.0);
        assert_eq!(stats[1].id, "node-b");
    }

    #[test]
    fn test_country_stats_columns() {
        let text = "Germany,42,10.5,5000\nBrazil,17,3.5,1200\n";
        let stats = parse_country_stats(text);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].country, "Germany");
        assert_eq!(stats[0].active_node_count, 42.0);
        assert_eq!(stats[1].country, "Brazil");
        assert_eq!(stats[1].bandwidth_served_bytes, 1200.0);
    }

    #[test]
    fn test_traffic_rows() {
        let text = "2023-08-01,1.5e9\n2023-08-02,2.5e9\n";
        let points = parse_traffic(text);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].traffic, 1.5e9);
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2023, 8, 2));
    }

    #[test]
    fn test_malformed_number_becomes_nan() {
        let points = parse_active_node("2023-08-01,\n2023-08-02,abc\n");
        assert_eq!(points.len(), 2);
        assert!(points[0].count.is_nan());
        assert!(points[1].count.is_nan());

        let stats = parse_active_node_stats("node-a,,x,\n");
        assert!(stats[0].age_days.is_nan());
        assert!(stats[0].estimated_earnings_fil.is_nan());
        assert!(stats[0].bandwidth_served_bytes.is_nan());
    }

    #[test]
    fn test_malformed_date_becomes_none() {
        let points = parse_active_node("not-a-date,5\n,7\n");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, None);
        assert_eq!(points[0].count, 5.0);
        assert_eq!(points[1].date, None);
    }

    #[test]
    fn test_short_rows_degrade_to_sentinels() {
        let points = parse_active_node("2023-08-01\n");
        assert_eq!(points.len(), 1);
        assert!(points[0].count.is_nan());

        let stats = parse_country_stats("Peru\n");
        assert_eq!(stats[0].country, "Peru");
        assert!(stats[0].active_node_count.is_nan());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_active_node("").is_empty());
        assert!(parse_active_node_stats("").is_empty());
        assert!(parse_country_stats("").is_empty());
        assert!(parse_traffic("").is_empty());
    }
}
