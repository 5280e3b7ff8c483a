//! Dataset retrieval: the [`DatasetSource`] seam and its reqwest-backed implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{DatasetError, Result};
use crate::record::{decode_dataset, Dataset};

/// Taiwan EPA open-data AQI feed.
pub const DEFAULT_DATA_URL: &str = "http://opendata2.epa.gov.tw/AQI.json";

/// Produces a fresh dataset snapshot. Tests substitute fixtures.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset>;
}

/// Fetches the whole feed with one GET per call. No caching, no retries, no timeout
/// beyond the client default.
#[derive(Clone)]
pub struct HttpDatasetFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetFetcher {
    /// Fetcher for [`DEFAULT_DATA_URL`].
    pub fn new() -> Self {
        Self::with_url(DEFAULT_DATA_URL)
    }

    /// Fetcher for a custom feed URL (mirrors, test servers).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpDatasetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DatasetError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Fetch(format!("data source returned {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DatasetError::Fetch(e.to_string()))?;
        let dataset = decode_dataset(&body)?;
        debug!(records = dataset.len(), "dataset fetched");
        Ok(dataset)
    }
}
