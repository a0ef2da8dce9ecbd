//! Outbound side of a transport.
//!
//! [`Bot`] is transport-agnostic; `dbot-telegram` implements it via teloxide and the menu bot's
//! console mode implements it over stdout.

use crate::error::{DbotError, Result};
use crate::types::Chat;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}

/// [`Bot::send_message`] bounded by `timeout`. Elapsed sends fail with [`DbotError::Timeout`].
pub async fn send_with_timeout(
    bot: &dyn Bot,
    chat: &Chat,
    text: &str,
    timeout: Duration,
) -> Result<()> {
    match tokio::time::timeout(timeout, bot.send_message(chat, text)).await {
        Ok(sent) => sent,
        Err(_) => {
            warn!(chat_id = chat.id, timeout_ms = timeout.as_millis() as u64, "Send timed out");
            Err(DbotError::Timeout(timeout))
        }
    }
}
