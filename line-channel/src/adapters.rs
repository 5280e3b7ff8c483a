//! Adapters from LINE webhook types to aqbot_core types.
//! Depends only on the webhook payload and aqbot_core type definitions.

use aqbot_core::{Message, MessageContent, Source, ToCoreMessage};
use chrono::{DateTime, Utc};

use crate::webhook::{WebhookEvent, WebhookMessage};

/// Wraps a webhook event for conversion to core [`Message`]. Only `message` events with a reply
/// token convert; every other event type yields `None`.
pub struct LineEventWrapper<'a>(pub &'a WebhookEvent);

impl<'a> ToCoreMessage for LineEventWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let event = self.0;
        if event.event_type != "message" {
            return None;
        }
        let message = event.message.as_ref()?;
        let reply_token = event.reply_token.clone()?;

        Some(Message {
            id: message.id.clone(),
            reply_token,
            source: event
                .source
                .as_ref()
                .map(|s| Source {
                    source_type: s.source_type.clone(),
                    user_id: s.user_id.clone(),
                })
                .unwrap_or_default(),
            content: content_of(message),
            created_at: DateTime::from_timestamp_millis(event.timestamp).unwrap_or_else(Utc::now),
        })
    }
}

fn content_of(message: &WebhookMessage) -> MessageContent {
    match message.kind.as_str() {
        "text" => MessageContent::Text(message.text.clone().unwrap_or_default()),
        "sticker" => MessageContent::Sticker {
            package_id: message.package_id.clone().unwrap_or_default(),
            sticker_id: message.sticker_id.clone().unwrap_or_default(),
        },
        other => MessageContent::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::WebhookSource;

    fn event(event_type: &str, message: Option<WebhookMessage>) -> WebhookEvent {
        WebhookEvent {
            event_type: event_type.to_string(),
            reply_token: Some("reply-token".to_string()),
            source: Some(WebhookSource {
                source_type: "user".to_string(),
                user_id: Some("U4af4980629".to_string()),
            }),
            timestamp: 1462629479859,
            message,
        }
    }

    fn webhook_message(kind: &str) -> WebhookMessage {
        WebhookMessage {
            kind: kind.to_string(),
            id: "325708".to_string(),
            text: None,
            package_id: None,
            sticker_id: None,
        }
    }

    /// **Test: A text message event converts with id, reply token, source, text and timestamp.**
    #[test]
    fn test_text_event_to_core() {
        let mut message = webhook_message("text");
        message.text = Some("台北".to_string());
        let event = event("message", Some(message));

        let core = LineEventWrapper(&event).to_core().unwrap();

        assert_eq!(core.id, "325708");
        assert_eq!(core.reply_token, "reply-token");
        assert_eq!(core.source.user_id.as_deref(), Some("U4af4980629"));
        assert_eq!(core.content, MessageContent::Text("台北".to_string()));
        assert_eq!(core.created_at.timestamp_millis(), 1462629479859);
    }

    #[test]
    fn test_sticker_and_other_kinds() {
        let mut sticker = webhook_message("sticker");
        sticker.package_id = Some("446".to_string());
        sticker.sticker_id = Some("1988".to_string());
        let core = LineEventWrapper(&event("message", Some(sticker)))
            .to_core()
            .unwrap();
        assert_eq!(
            core.content,
            MessageContent::Sticker {
                package_id: "446".to_string(),
                sticker_id: "1988".to_string(),
            }
        );

        let image = LineEventWrapper(&event("message", Some(webhook_message("image"))))
            .to_core()
            .unwrap();
        assert_eq!(image.content, MessageContent::Other("image".to_string()));
    }

    #[test]
    fn test_non_message_events_do_not_convert() {
        assert!(LineEventWrapper(&event("follow", None)).to_core().is_none());
        assert!(LineEventWrapper(&event("postback", Some(webhook_message("text"))))
            .to_core()
            .is_none());

        let mut no_token = event("message", Some(webhook_message("text")));
        no_token.reply_token = None;
        assert!(LineEventWrapper(&no_token).to_core().is_none());
    }
}
