//! Assembly and main entry: load the menu, build the handler chain, run the Telegram REPL.

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use menu_core::{MenuNavigator, MenuTree};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::MenuBotConfig;
use crate::handlers::{LoggingHandler, MenuHandler};

/// Chain used by every transport: logging first, then the menu.
pub fn build_handler_chain(
    navigator: MenuNavigator,
    bot: Arc<dyn Bot>,
    send_timeout: Duration,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(MenuHandler::new(navigator, bot, send_timeout)))
}

/// Loads the definition (fatal on failure) and logs every definition issue as a warning.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_menu_tree(path: &Path) -> Result<Arc<MenuTree>> {
    let tree = MenuTree::load(path)
        .with_context(|| format!("Failed to load menu definition {}", path.display()))?;

    for issue in tree.lint() {
        warn!(issue = %issue, "Menu definition issue");
    }
    info!(nodes = tree.len(), root = %tree.root().id, "Menu loaded");

    Ok(Arc::new(tree))
}

/// Main entry: validate config, init logging, load the menu, then poll Telegram until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: MenuBotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let tree = load_menu_tree(&config.menu_file)?;
    let navigator = MenuNavigator::with_in_memory_sessions(tree);

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(navigator, bot, config.send_timeout());

    info!(
        menu_file = %config.menu_file.display(),
        send_timeout_secs = config.send_timeout_secs,
        "Menu bot started"
    );

    run_repl(teloxide_bot, handler_chain).await
}
