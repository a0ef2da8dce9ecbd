//! # menu-bot
//!
//! Wires menu-core into the bot framework: config from env, handler chain (logging + menu),
//! Telegram runner, console chat, and the definition check. The binary in `main.rs` dispatches
//! the CLI to these.

pub mod check;
pub mod cli;
pub mod config;
pub mod console;
pub mod handlers;
pub mod runner;

pub use check::{check_definition, CheckReport};
pub use cli::{Cli, Commands};
pub use config::{
    resolve_menu_file, send_timeout_from_secs, send_timeout_secs_from_env, MenuBotConfig,
};
pub use console::{run_chat_loop, ConsoleBot, ConsoleSession};
pub use handlers::{LoggingHandler, MenuHandler};
pub use runner::{build_handler_chain, load_menu_tree, run_bot};
