use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// The data source could not be reached or answered with a non-success status.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The response body is not a JSON array of records.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
