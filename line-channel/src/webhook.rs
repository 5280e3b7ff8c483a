//! Webhook delivery payload as sent to the callback URL.

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WebhookError};
use crate::signature::verify_signature;

/// One delivery: zero or more events for one bot.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// `message`, `follow`, `unfollow`, `postback`, ...
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<WebhookSource>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub message: Option<WebhookMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Message object of a `message` event. Only the fields of text and sticker messages are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub sticker_id: Option<String>,
}

/// Verifies `signature` against the raw `body`, then decodes the events.
/// A missing signature counts as invalid.
pub fn parse_webhook_request(
    channel_secret: &str,
    signature: Option<&str>,
    body: &[u8],
) -> Result<Vec<WebhookEvent>> {
    let signature = signature.ok_or(WebhookError::InvalidSignature)?;
    if !verify_signature(channel_secret, body, signature) {
        return Err(WebhookError::InvalidSignature);
    }
    let payload: WebhookBody = serde_json::from_slice(body)?;
    debug!(
        destination = ?payload.destination,
        events = payload.events.len(),
        "webhook decoded"
    );
    Ok(payload.events)
}
