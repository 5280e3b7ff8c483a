//! Callback endpoint: verify and decode the delivery, run each message event through the chain,
//! send the chain's reply through the [`Bot`].

use std::sync::Arc;

use aqbot_core::{Bot, HandlerResponse, ToCoreMessage};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use handler_chain::HandlerChain;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::adapters::LineEventWrapper;
use crate::error::WebhookError;
use crate::signature::SIGNATURE_HEADER;
use crate::webhook::{parse_webhook_request, WebhookEvent};

pub const CALLBACK_PATH: &str = "/callback";

/// Application state shared across request handlers. Nothing in it is mutated per request.
pub struct AppState {
    pub channel_secret: String,
    pub chain: HandlerChain,
    pub bot: Arc<dyn Bot>,
}

impl AppState {
    pub fn new(channel_secret: String, chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self {
            channel_secret,
            chain,
            bot,
        }
    }
}

/// Router with the callback route and HTTP tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CALLBACK_PATH, post(callback))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// 400 on missing/invalid signature, 500 on an undecodable body, 200 once every event was handled.
async fn callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let events = match parse_webhook_request(&state.channel_secret, signature, &body) {
        Ok(events) => events,
        Err(WebhookError::InvalidSignature) => {
            warn!(has_signature = signature.is_some(), "webhook rejected: invalid signature");
            return StatusCode::BAD_REQUEST;
        }
        Err(e) => {
            error!(error = %e, "webhook rejected: undecodable body");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    info!(events = events.len(), "webhook accepted");
    for event in &events {
        dispatch_event(&state, event).await;
    }
    StatusCode::OK
}

/// Runs one event through the chain and sends the reply, if any. Failures are logged only.
pub async fn dispatch_event(state: &AppState, event: &WebhookEvent) {
    let Some(message) = LineEventWrapper(event).to_core() else {
        debug!(event_type = %event.event_type, "event skipped: no message");
        return;
    };

    match state.chain.handle(&message).await {
        Ok(HandlerResponse::Reply(parts)) => {
            if let Err(e) = state.bot.reply(&message, &parts).await {
                error!(error = %e, message_id = %message.id, "Failed to send reply");
            } else {
                info!(message_id = %message.id, parts = parts.len(), "Sent reply");
            }
        }
        Ok(response) => {
            debug!(message_id = %message.id, response = ?response, "no reply for message");
        }
        Err(e) => {
            error!(error = %e, message_id = %message.id, "Handler chain failed");
        }
    }
}
