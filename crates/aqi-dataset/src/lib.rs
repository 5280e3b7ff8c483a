//! # aqi-dataset
//!
//! The air-quality snapshot: [`AirQualityRecord`] (one monitoring site, all fields as text),
//! [`DatasetSource`] with its HTTP implementation [`HttpDatasetFetcher`], and
//! [`DatasetSnapshot`], which keeps the last good dataset when a refresh fails.

mod error;
mod fetcher;
mod record;
mod snapshot;

pub use error::{DatasetError, Result};
pub use fetcher::{DatasetSource, HttpDatasetFetcher, DEFAULT_DATA_URL};
pub use record::{decode_dataset, AirQualityRecord, Dataset};
pub use snapshot::DatasetSnapshot;
