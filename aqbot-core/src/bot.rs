//! Bot abstraction for sending replies.
//!
//! [`Bot`] trait is transport-agnostic; line-channel's `LineBotAdapter` implements it via the LINE reply API.

use crate::error::Result;
use crate::types::{Message, OutboundMessage};
use async_trait::async_trait;

/// Abstraction for answering an inbound message. Implementations map to a transport (e.g. LINE).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Replies to `message` with `messages`, in order, as one reply call addressed by its reply token.
    async fn reply(&self, message: &Message, messages: &[OutboundMessage]) -> Result<()>;
}
