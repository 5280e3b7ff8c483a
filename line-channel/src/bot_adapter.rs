//! Implements [`aqbot_core::Bot`] over the LINE reply API. Production code replies via LINE; tests can substitute another Bot impl.

use aqbot_core::{Bot, BotError, HandlerError, Message, OutboundMessage, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::mask_token;

pub const DEFAULT_LINE_API_URL: &str = "https://api.line.me";

const REPLY_PATH: &str = "/v2/bot/message/reply";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<LineMessage<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LineMessage<'a> {
    Text {
        text: &'a str,
    },
    Sticker {
        #[serde(rename = "packageId")]
        package_id: &'a str,
        #[serde(rename = "stickerId")]
        sticker_id: &'a str,
    },
}

impl<'a> From<&'a OutboundMessage> for LineMessage<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        match message {
            OutboundMessage::Text(text) => LineMessage::Text { text },
            OutboundMessage::Sticker {
                package_id,
                sticker_id,
            } => LineMessage::Sticker {
                package_id,
                sticker_id,
            },
        }
    }
}

/// Reply-API client holding the channel access token.
pub struct LineBotAdapter {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl LineBotAdapter {
    /// Adapter against the public LINE API.
    pub fn new(access_token: String) -> Self {
        Self::with_api_base(access_token, DEFAULT_LINE_API_URL.to_string())
    }

    /// Adapter against a custom API base (e.g. a mock server).
    pub fn with_api_base(access_token: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl std::fmt::Debug for LineBotAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBotAdapter")
            .field("api_base", &self.api_base)
            .field("access_token", &mask_token(&self.access_token))
            .finish()
    }
}

#[async_trait]
impl Bot for LineBotAdapter {
    #[instrument(skip(self, message, messages), fields(message_id = %message.id, parts = messages.len()))]
    async fn reply(&self, message: &Message, messages: &[OutboundMessage]) -> Result<()> {
        if message.reply_token.is_empty() {
            return Err(HandlerError::NoReplyToken(message.id.clone()).into());
        }
        if messages.is_empty() {
            return Err(HandlerError::EmptyReply(message.id.clone()).into());
        }

        let request = ReplyRequest {
            reply_token: &message.reply_token,
            messages: messages.iter().map(LineMessage::from).collect(),
        };

        let response = self
            .client
            .post(format!("{}{}", self.api_base, REPLY_PATH))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Bot(format!(
                "LINE reply API returned {}: {}",
                status, body
            )));
        }
        debug!(status = %status, "reply sent");
        Ok(())
    }
}
