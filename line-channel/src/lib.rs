//! # line-channel
//!
//! LINE Messaging API layer: webhook body decoding with signature verification, adapters from
//! webhook events to [`aqbot_core::Message`], the [`aqbot_core::Bot`] implementation over the
//! reply API, minimal config, and the `/callback` server that feeds the handler chain.
//! No air-quality logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod error;
mod runner;
mod server;
mod signature;
mod webhook;

pub use adapters::LineEventWrapper;
pub use bot_adapter::{LineBotAdapter, DEFAULT_LINE_API_URL};
pub use config::{mask_token, LineConfig};
pub use error::{Result, WebhookError};
pub use runner::{run_server, LISTEN_ADDR};
pub use server::{dispatch_event, router, AppState, CALLBACK_PATH};
pub use signature::{sign, verify_signature, SIGNATURE_HEADER};
pub use webhook::{
    parse_webhook_request, WebhookBody, WebhookEvent, WebhookMessage, WebhookSource,
};
