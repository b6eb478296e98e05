//! Fetch, parse, build, render: the run of the whole dashboard
//!
//! The four dataset fetches run concurrently and join; the first failure
//! aborts the run before anything is parsed or rendered. Builders and
//! renders then run in a fixed order. There is no retry and no partial-result
//! mode.

use saturn_charts::{AxisData, ChartKind, ChartRenderer, ChartSpec, Trace};
use saturn_common::{CsvSource, DatasetFile, Result};
use saturn_data::{
    age_correlation, earnings_and_bandwidth_distribution, node_age, node_and_traffic,
    node_count_by_country, parse_active_node, parse_active_node_stats, parse_country_stats,
    parse_traffic, served_countries, CountryStat, NodeActivityPoint, NodeStat, TrafficPoint,
};
use tracing::{debug, info};

/// Fetch all four datasets, build the six chart specs, and render each in
/// order.
pub async fn run_pipeline<S, R>(source: &S, renderer: &R) -> Result<()>
where
    S: CsvSource,
    R: ChartRenderer,
{
    let (active_node_text, node_stats_text, country_stats_text, traffic_text) = tokio::try_join!(
        source.fetch_csv(DatasetFile::ActiveNode),
        source.fetch_csv(DatasetFile::ActiveNodeStats),
        source.fetch_csv(DatasetFile::CountryStats),
        source.fetch_csv(DatasetFile::Traffic),
    )?;

    let active_node = parse_active_node(&active_node_text);
    let node_stats = parse_active_node_stats(&node_stats_text);
    let country_stats = parse_country_stats(&country_stats_text);
    let traffic = parse_traffic(&traffic_text);
    debug!(
        "parsed {} activity rows, {} node stats, {} country stats, {} traffic rows",
        active_node.len(),
        node_stats.len(),
        country_stats.len(),
        traffic.len()
    );

    for spec in build_chart_specs(&active_node, &node_stats, &country_stats, &traffic) {
        renderer.render(&spec).await?;
    }

    info!("all charts rendered");
    Ok(())
}

/// The six chart slots, in the order the dashboard lays them out.
pub fn build_chart_specs(
    active_node: &[NodeActivityPoint],
    node_stats: &[NodeStat],
    country_stats: &[CountryStat],
    traffic: &[TrafficPoint],
) -> Vec<ChartSpec> {
    let (node_series, traffic_series) = node_and_traffic(active_node, traffic);
    let ages = node_age(node_stats);
    let (age_earnings, age_bandwidth) = age_correlation(node_stats);
    let by_country = node_count_by_country(country_stats);
    let served = served_countries(country_stats);
    let (earnings_dist, bandwidth_dist) = earnings_and_bandwidth_distribution(node_stats);

    vec![
        ChartSpec::new(
            ChartKind::Line,
            "saturn-active-node",
            vec![
                Trace::new(
                    "active nodes",
                    AxisData::Dates(node_series.dates),
                    AxisData::Numbers(node_series.values),
                ),
                Trace::new(
                    "traffic",
                    AxisData::Dates(traffic_series.dates),
                    AxisData::Numbers(traffic_series.values),
                )
                .on_secondary_axis(),
            ],
        ),
        ChartSpec::new(
            ChartKind::Histogram,
            "saturn-active-node-age",
            vec![Trace::x_only("age (days)", AxisData::Numbers(ages))],
        ),
        ChartSpec::new(
            ChartKind::Scatter,
            "saturn-node-age-correlation",
            vec![
                Trace::new(
                    "age vs earnings",
                    AxisData::Numbers(age_earnings.x),
                    AxisData::Numbers(age_earnings.y),
                ),
                Trace::new(
                    "age vs bandwidth",
                    AxisData::Numbers(age_bandwidth.x),
                    AxisData::Numbers(age_bandwidth.y),
                )
                .on_secondary_axis(),
            ],
        ),
        ChartSpec::new(
            ChartKind::Choropleth,
            "saturn-active-node-by-country",
            vec![Trace::new(
                "active nodes by country",
                AxisData::Categories(by_country.labels),
                AxisData::Numbers(by_country.values),
            )],
        ),
        ChartSpec::new(
            ChartKind::HorizontalBar,
            "saturn-served-countries",
            vec![
                Trace::new(
                    "most served",
                    AxisData::Numbers(served.top.values),
                    AxisData::Categories(served.top.labels),
                ),
                Trace::new(
                    "least served",
                    AxisData::Numbers(served.bottom.values),
                    AxisData::Categories(served.bottom.labels),
                )
                .on_secondary_axis(),
            ],
        ),
        ChartSpec::new(
            ChartKind::Line,
            "saturn-active-node-distribution",
            vec![
                Trace::new(
                    "earnings share",
                    AxisData::Numbers(earnings_dist.node_percent),
                    AxisData::Numbers(earnings_dist.cumulative_percent),
                ),
                Trace::new(
                    "bandwidth share",
                    AxisData::Numbers(bandwidth_dist.node_percent),
                    AxisData::Numbers(bandwidth_dist.cumulative_percent),
                ),
            ],
        ),
    ]
}
