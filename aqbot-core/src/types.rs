//! Core types: event source, inbound message and its content, outbound messages, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an event came from (user, group or room), as reported by the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub source_type: String,
    pub user_id: Option<String>,
}

/// Kind-specific payload of an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text typed by the user.
    Text(String),
    /// A sticker from the channel's sticker catalogue.
    Sticker {
        package_id: String,
        sticker_id: String,
    },
    /// Any other kind (image, video, location, ...); carries the channel's kind name.
    Other(String),
}

impl MessageContent {
    /// Short kind name for logging.
    pub fn kind(&self) -> &str {
        match self {
            MessageContent::Text(_) => "text",
            MessageContent::Sticker { .. } => "sticker",
            MessageContent::Other(kind) => kind,
        }
    }

    /// Text body when this is a text message.
    pub fn text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A single inbound message with its channel id, reply token and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Channel-assigned message id; echoed back in text replies.
    pub id: String,
    /// Opaque handle addressing the reply to this message's conversation. Single use.
    pub reply_token: String,
    pub source: Source,
    pub content: MessageContent,
    pub created_at: DateTime<Utc>,
}

/// One message part sent back on the reply channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundMessage {
    Text(String),
    Sticker {
        package_id: String,
        sticker_id: String,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text(text.into())
    }

    pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
        OutboundMessage::Sticker {
            package_id: package_id.into(),
            sticker_id: sticker_id.into(),
        }
    }
}

/// Handler result for the chain. `Reply(messages)` carries the ordered parts of one reply call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing is sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send these messages, in order, as a single reply.
    Reply(Vec<OutboundMessage>),
}

/// Converts a transport-specific event into a core [`Message`]. `None` when the event carries no message.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Option<Message>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
