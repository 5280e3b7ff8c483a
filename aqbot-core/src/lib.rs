//! # aqbot-core
//!
//! Core types and traits for the air-quality bot: [`Bot`], [`Handler`], inbound [`Message`] and
//! outbound [`OutboundMessage`] types, and tracing initialization. Transport-agnostic; used by
//! line-channel, handler-chain and the handlers crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Handler, HandlerResponse, Message, MessageContent, OutboundMessage, Source, ToCoreMessage,
};
