//! # Handler chain
//!
//! Runs a sequence of handlers for each message. All `before` run in order (any `false` stops the
//! chain); then `handle` runs until one returns Stop or Reply; then all `after` run in reverse
//! with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases and returns the first Stop or Reply, or Continue if none stopped.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, "step: handler_chain started");

        for handler in &self.handlers {
            let name = handler.name();
            if !handler.before(message).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let name = handler.name();
            let response = handler.handle(message).await?;
            debug!(handler = %name, response = ?response, "step: handler done");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        debug!(message_id = %message.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
