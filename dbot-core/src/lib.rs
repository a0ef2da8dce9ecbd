//! # dbot-core
//!
//! Core types and traits shared by the bot crates: [`Bot`], [`Handler`], message and user types,
//! errors, and tracing initialization. Transport-agnostic; used by handler-chain, dbot-telegram
//! and menu-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{send_with_timeout, Bot};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
