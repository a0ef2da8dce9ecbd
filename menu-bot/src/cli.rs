//! CLI parser for the `menu-bot` binary; see `main.rs` for dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-bot")]
#[command(about = "Conversational menu bot: run on Telegram, chat locally, or check a menu file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; flags override BOT_TOKEN and MENU_FILE).
    Run {
        #[arg(short, long)]
        token: Option<String>,

        /// Menu definition (JSON). Defaults to MENU_FILE or menu/menus.json.
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },

    /// Load a menu definition and list problems (dangling options, duplicate ids, ...).
    Check {
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },

    /// Walk a menu from the terminal as a single user. Exit with /exit or Ctrl+D.
    Chat {
        #[arg(short, long)]
        menu: Option<PathBuf>,

        /// User id the console session is stored under.
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Enable debug logging on stderr.
        #[arg(short, long)]
        verbose: bool,
    },
}
