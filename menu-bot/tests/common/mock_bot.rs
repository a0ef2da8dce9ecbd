//! Mock implementations of [`dbot_core::Bot`] for integration tests.
//!
//! [`MockBot`] records each `send_message` so tests can assert on reply text without hitting
//! Telegram. [`FailingBot`] and [`StalledBot`] model a broken or hung transport.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone)]
pub struct SendRecord {
    pub chat_id: i64,
    pub text: String,
}

pub struct MockBot {
    send_tx: mpsc::UnboundedSender<SendRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for send records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { send_tx }), send_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.send_tx.send(SendRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

pub struct FailingBot;

#[async_trait]
impl Bot for FailingBot {
    async fn send_message(&self, _chat: &Chat, _text: &str) -> Result<()> {
        Err(DbotError::Bot("network unreachable".to_string()))
    }
}

/// Never finishes a send within any test timeout.
pub struct StalledBot;

#[async_trait]
impl Bot for StalledBot {
    async fn send_message(&self, _chat: &Chat, _text: &str) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}
