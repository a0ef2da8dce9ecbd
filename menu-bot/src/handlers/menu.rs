//! Menu handler: resolves each text message against the user's menu position and sends the reply.
//!
//! The session transition is committed before the reply is sent. A failed or timed-out send is
//! logged and nothing else: the user's position stays where the resolution put it.

use async_trait::async_trait;
use dbot_core::{send_with_timeout, Bot, Handler, HandlerResponse, Message, Result};
use menu_core::{session_key, MenuNavigator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub struct MenuHandler {
    navigator: MenuNavigator,
    bot: Arc<dyn Bot>,
    send_timeout: Duration,
}

impl MenuHandler {
    pub fn new(navigator: MenuNavigator, bot: Arc<dyn Bot>, send_timeout: Duration) -> Self {
        Self {
            navigator,
            bot,
            send_timeout,
        }
    }

    pub fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }
}

#[async_trait]
impl Handler for MenuHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_from_bot() {
            debug!("Skipping message sent by a bot");
            return Ok(HandlerResponse::Ignore);
        }
        if message.content.is_empty() {
            debug!("Skipping non-text message");
            return Ok(HandlerResponse::Ignore);
        }

        let user_key = session_key(&message.user.identity());
        let resolution = self.navigator.handle_input(&user_key, &message.content);

        if resolution.outcome.is_definition_fault() {
            warn!(
                user_key = %user_key,
                next_id = %resolution.next_id,
                outcome = %resolution.outcome,
                "Menu definition could not resolve the request"
            );
        } else {
            info!(
                user_key = %user_key,
                next_id = %resolution.next_id,
                outcome = %resolution.outcome,
                "Menu resolved"
            );
        }

        if let Err(e) = send_with_timeout(
            self.bot.as_ref(),
            &message.chat,
            &resolution.reply,
            self.send_timeout,
        )
        .await
        {
            error!(
                error = %e,
                chat_id = message.chat.id,
                "Failed to send menu reply"
            );
        }

        Ok(HandlerResponse::Reply(resolution.reply))
    }
}
