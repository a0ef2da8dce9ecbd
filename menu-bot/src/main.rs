//! menu-bot binary: run on Telegram, chat on the console, or check a menu definition.

use anyhow::Result;
use clap::Parser;
use menu_bot::{
    check_definition, load_menu_tree, resolve_menu_file, run_bot, run_chat_loop,
    send_timeout_from_secs, send_timeout_secs_from_env, Cli, Commands, MenuBotConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, menu } => {
            let config = MenuBotConfig::load(token, menu)?;
            run_bot(config).await
        }
        Commands::Check { menu } => {
            let report = check_definition(&resolve_menu_file(menu))?;
            print!("{}", report.render());
            if !report.is_clean() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Chat {
            menu,
            user,
            verbose,
        } => {
            let send_timeout = send_timeout_from_secs(send_timeout_secs_from_env())?;
            init_console_tracing(verbose);
            let tree = load_menu_tree(&resolve_menu_file(menu))?;
            run_chat_loop(tree, user, send_timeout).await
        }
    }
}

/// Console logging goes to stderr so it does not interleave with menu replies on stdout.
fn init_console_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
