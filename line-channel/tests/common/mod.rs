//! Mock implementation of [`aqbot_core::Bot`] for integration tests.
//!
//! Records every `reply` call so tests can assert on the reply token and the ordered parts
//! without hitting LINE.

use std::sync::Arc;

use aqbot_core::{Bot, Message, OutboundMessage, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// One recorded call to `reply(message, messages)`.
#[derive(Debug, Clone)]
pub struct ReplyRecord {
    pub message_id: String,
    pub reply_token: String,
    pub messages: Vec<OutboundMessage>,
}

/// Mock Bot that forwards each reply to a channel held by the test.
pub struct MockBot {
    reply_tx: mpsc::UnboundedSender<ReplyRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for reply records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<ReplyRecord>) {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { reply_tx }), reply_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply(&self, message: &Message, messages: &[OutboundMessage]) -> Result<()> {
        let _ = self.reply_tx.send(ReplyRecord {
            message_id: message.id.clone(),
            reply_token: message.reply_token.clone(),
            messages: messages.to_vec(),
        });
        Ok(())
    }
}
