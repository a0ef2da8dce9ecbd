//! Console transport for trying a menu locally: stdin lines in, replies on stdout.
//!
//! Used by the `chat` subcommand. Lines go through the same handler chain as Telegram updates,
//! as one fixed user in one private chat.

use anyhow::Result;
use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, HandlerResponse, Message, User};
use handler_chain::HandlerChain;
use menu_core::{MenuNavigator, MenuTree, RESET_KEYWORD};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::runner::build_handler_chain;

/// [`Bot`] that writes each reply, followed by a blank line, to `out`.
pub struct ConsoleBot<W> {
    out: Mutex<W>,
}

impl<W> ConsoleBot<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ConsoleBot<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send + 'static> Bot for ConsoleBot<W> {
    async fn send_message(&self, _chat: &Chat, text: &str) -> dbot_core::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DbotError::Bot("console writer poisoned".to_string()))?;
        writeln!(out, "{}\n", text)?;
        out.flush()?;
        Ok(())
    }
}

/// One console user talking to a handler chain.
pub struct ConsoleSession {
    chain: HandlerChain,
    user: User,
    chat: Chat,
    next_message_id: AtomicU64,
}

impl ConsoleSession {
    pub fn new(chain: HandlerChain, user_id: i64) -> Self {
        Self {
            chain,
            user: User {
                id: user_id,
                username: Some("console".to_string()),
                first_name: None,
                is_bot: false,
            },
            chat: Chat {
                id: user_id,
                chat_type: "private".to_string(),
            },
            next_message_id: AtomicU64::new(1),
        }
    }

    /// Sends one line as an incoming message and returns the chain's response.
    pub async fn send(&self, text: &str) -> dbot_core::Result<HandlerResponse> {
        let id = self.next_message_id.fetch_add(1, Ordering::Relaxed);
        let message = Message::incoming(id.to_string(), self.user.clone(), self.chat.clone(), text);
        self.chain.handle(&message).await
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  /help    - Show this help message");
    println!("  /exit    - Exit the chat");
    println!("  /quit    - Exit the chat");
    println!("  '{}'   - Back to the main menu", RESET_KEYWORD);
    println!("  Anything else is sent to the menu (option number or value).");
}

/// Interactive loop: shows the root menu, then reads stdin until EOF, /exit or /quit.
pub async fn run_chat_loop(tree: Arc<MenuTree>, user_id: i64, send_timeout: Duration) -> Result<()> {
    let bot: Arc<dyn Bot> = Arc::new(ConsoleBot::stdout());
    let chain = build_handler_chain(MenuNavigator::with_in_memory_sessions(tree), bot, send_timeout);
    let session = ConsoleSession::new(chain, user_id);

    println!("Menu chat (type /help for commands, /exit to quit)");
    println!();
    session.send(RESET_KEYWORD).await?;

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/help" => {
                print_help();
                continue;
            }
            "/exit" | "/quit" => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }

        session.send(line).await?;
    }
    Ok(())
}
