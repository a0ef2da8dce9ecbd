//! # menu-core
//!
//! Conversational menu engine: a loaded [`MenuTree`], the [`MenuResolver`] that turns free-text
//! input into a reply and a next position, and the per-user [`SessionStore`] that remembers that
//! position. [`MenuNavigator`] ties them together for one inbound message.
//!
//! Transport-agnostic; the bot crates feed it `(user key, text)` and send back the reply.

pub mod error;
pub mod model;
pub mod navigator;
pub mod resolver;
pub mod session;
pub mod tree;

pub use error::{LoadError, Result};
pub use model::{MenuDefinition, MenuKind, MenuNode, MenuOption};
pub use navigator::MenuNavigator;
pub use resolver::{
    render_menu, MenuResolver, Resolution, ResolveOutcome, MSG_INVALID_CHOICE,
    MSG_MENU_NOT_FOUND, MSG_SUBMENU_NOT_FOUND, RESET_KEYWORD,
};
pub use session::{session_key, InMemorySessionStore, SessionStore};
pub use tree::{DefinitionIssue, MenuTree};
