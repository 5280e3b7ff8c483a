use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    /// Signature header missing or not matching the body.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Body is not a webhook payload.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WebhookError>;
