//! Handler for traffic logging.

use aqbot_core::{Handler, HandlerResponse, Message, OutboundMessage, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            message_id = %message.id,
            user_id = %message.source.user_id.as_deref().unwrap_or("unknown"),
            kind = %message.content.kind(),
            message_content = %message.content.text().unwrap_or(""),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(parts) => {
                for (index, part) in parts.iter().enumerate() {
                    match part {
                        OutboundMessage::Text(text) => {
                            info!(message_id = %message.id, index, reply = %text, "Reply part")
                        }
                        OutboundMessage::Sticker {
                            package_id,
                            sticker_id,
                        } => info!(
                            message_id = %message.id,
                            index,
                            package_id = %package_id,
                            sticker_id = %sticker_id,
                            "Reply part (sticker)"
                        ),
                    }
                }
            }
            other => debug!(message_id = %message.id, response = ?other, "No reply"),
        }
        Ok(())
    }
}
