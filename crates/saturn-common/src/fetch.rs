//! HTTP source for the four Saturn dataset files
//!
//! The pipeline only depends on the [`CsvSource`] trait so tests can feed it
//! canned text; [`HttpCsvSource`] is the real reqwest-backed implementation.
//! One GET per file, no retries, no caching: a failed fetch is fatal to the
//! whole run.

use crate::config::DataConfig;
use crate::error::{Result, SaturnError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// The four dataset files published in each Saturn snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFile {
    /// Daily active node counts
    ActiveNode,
    /// Per-node age, earnings, and bandwidth stats
    ActiveNodeStats,
    /// Per-country node counts, earnings, and bandwidth
    CountryStats,
    /// Daily network traffic
    Traffic,
}

impl DatasetFile {
    /// File name of this dataset within the snapshot directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetFile::ActiveNode => "saturn_active_node.csv",
            DatasetFile::ActiveNodeStats => "saturn_active_node_stats.csv",
            DatasetFile::CountryStats => "saturn_country_stats.csv",
            DatasetFile::Traffic => "saturn_traffic.csv",
        }
    }
}

/// Capability to fetch the raw text of a dataset file
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Fetch the full textual content of `file`
    async fn fetch_csv(&self, file: DatasetFile) -> Result<String>;
}

/// HTTP-backed dataset source
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    client: Client,
    base_url: String,
}

impl HttpCsvSource {
    /// Create a new source for the snapshot at `config.base_url`
    pub fn new(config: &DataConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SaturnError::fetch_with_source("failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn file_url(&self, file: DatasetFile) -> String {
        format!("{}/{}", self.base_url, file.file_name())
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch_csv(&self, file: DatasetFile) -> Result<String> {
        let url = self.file_url(file);
        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SaturnError::fetch_with_source(format!("request to {} failed", url), e))?;

        if !response.status().is_success() {
            return Err(SaturnError::fetch(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let text = response.text().await.map_err(|e| {
            SaturnError::fetch_with_source(format!("failed to read body of {}", url), e)
        })?;

        debug!("fetched {} ({} bytes)", file.file_name(), text.len());
        Ok(text)
    }
}
