//! REPL runner: converts teloxide messages to core messages and passes them to the handler chain.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Runs the teloxide long-polling REPL until shutdown (Ctrl+C).
///
/// The dispatcher serializes updates per chat and runs different chats concurrently, so one
/// user's messages reach the chain in order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => error!(error = %e, "get_me failed; continuing with polling"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                has_text = !core_msg.content.is_empty(),
                "Received update"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    info!("Telegram REPL stopped");
    Ok(())
}
