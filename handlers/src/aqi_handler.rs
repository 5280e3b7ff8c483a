//! Dispatch handler: text → parse → refresh → resolve → two-part reply; sticker → fixed acknowledgement.

use std::sync::Arc;

use aqbot_core::{Handler, HandlerResponse, Message, MessageContent, OutboundMessage, Result};
use aqi_dataset::{DatasetSnapshot, DatasetSource};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::query::parse_query;
use crate::reply::{
    format_text_reply, FORMAT_ERROR_REPLY, STICKER_ACK_TEXT, STICKER_ID, STICKER_PACKAGE_ID,
};
use crate::resolver::resolve;

/// Owns the dataset snapshot and the status note, and answers every message kind it knows.
///
/// The dataset is refreshed from `source` on every parsed query; a failed refresh answers from
/// the previous snapshot.
pub struct AqiHandler {
    source: Arc<dyn DatasetSource>,
    snapshot: Arc<DatasetSnapshot>,
    status_note: String,
}

impl AqiHandler {
    /// Handler with an empty (cold-start) snapshot.
    pub fn new(source: Arc<dyn DatasetSource>, status_note: impl Into<String>) -> Self {
        Self::with_snapshot(source, Arc::new(DatasetSnapshot::new()), status_note)
    }

    /// Handler sharing an existing snapshot.
    pub fn with_snapshot(
        source: Arc<dyn DatasetSource>,
        snapshot: Arc<DatasetSnapshot>,
        status_note: impl Into<String>,
    ) -> Self {
        Self {
            source,
            snapshot,
            status_note: status_note.into(),
        }
    }

    pub fn snapshot(&self) -> &Arc<DatasetSnapshot> {
        &self.snapshot
    }

    pub fn status_note(&self) -> &str {
        &self.status_note
    }

    /// Reply text for one text command. A command that does not parse never touches the dataset.
    #[instrument(skip(self))]
    pub async fn reply_text(&self, text: &str) -> String {
        let Some(query) = parse_query(text) else {
            info!(ok = false, reply = FORMAT_ERROR_REPLY, "command rejected");
            return FORMAT_ERROR_REPLY.to_string();
        };
        info!(ok = true, metric = %query.metric, site_name = %query.site_name, "command parsed");

        let records = self.snapshot.refresh(self.source.as_ref()).await;
        let reply = resolve(query.metric, &query.site_name, &records);
        info!(records = records.len(), reply = %reply, "query resolved");
        reply
    }

    /// Reply parts for a text message: id-prefixed answer, then the status note when it is not empty.
    async fn text_reply(&self, message: &Message, text: &str) -> Vec<OutboundMessage> {
        let reply = self.reply_text(text).await;
        let mut parts = vec![OutboundMessage::text(format_text_reply(&message.id, &reply))];
        if !self.status_note.is_empty() {
            parts.push(OutboundMessage::text(self.status_note.clone()));
        }
        parts
    }
}

#[async_trait]
impl Handler for AqiHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let response = match &message.content {
            MessageContent::Text(text) => HandlerResponse::Reply(self.text_reply(message, text).await),
            MessageContent::Sticker { .. } => HandlerResponse::Reply(vec![
                OutboundMessage::text(STICKER_ACK_TEXT),
                OutboundMessage::sticker(STICKER_PACKAGE_ID, STICKER_ID),
            ]),
            MessageContent::Other(kind) => {
                debug!(message_id = %message.id, kind = %kind, "message kind not handled");
                HandlerResponse::Ignore
            }
        };
        Ok(response)
    }
}
