//! # dbot-telegram
//!
//! Telegram transport: adapters to core types, [`dbot_core::Bot`] implementation, connection
//! config, and the REPL runner feeding a [`handler_chain::HandlerChain`]. No menu logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
