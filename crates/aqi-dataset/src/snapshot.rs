//! The current dataset, replaced wholesale on each successful refresh.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::fetcher::DatasetSource;
use crate::record::Dataset;

/// Holds the latest good dataset. Readers get an `Arc` to a complete snapshot and never see a
/// partially replaced one. Starts empty.
#[derive(Debug, Default)]
pub struct DatasetSnapshot {
    records: RwLock<Arc<Dataset>>,
}

impl DatasetSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot pre-seeded with `records` (fixtures, warm start).
    pub fn with_records(records: Dataset) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    /// The dataset currently in place.
    pub async fn current(&self) -> Arc<Dataset> {
        self.records.read().await.clone()
    }

    /// Replaces the whole dataset.
    pub async fn replace(&self, records: Dataset) -> Arc<Dataset> {
        let records = Arc::new(records);
        *self.records.write().await = records.clone();
        records
    }

    /// Fetches from `source` and replaces the dataset on success. On fetch or decode failure the
    /// error is logged and the previous dataset (possibly empty) is returned unchanged.
    pub async fn refresh(&self, source: &dyn DatasetSource) -> Arc<Dataset> {
        match source.fetch().await {
            Ok(records) => {
                info!(records = records.len(), "dataset snapshot replaced");
                self.replace(records).await
            }
            Err(e) => {
                let current = self.current().await;
                warn!(error = %e, records = current.len(), "dataset refresh failed, keeping previous snapshot");
                current
            }
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
