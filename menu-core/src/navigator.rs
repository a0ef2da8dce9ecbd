//! Navigator: one inbound message = read session, resolve, store next id, atomically per user.

use crate::resolver::{MenuResolver, Resolution};
use crate::session::{InMemorySessionStore, SessionStore};
use crate::tree::MenuTree;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct MenuNavigator {
    resolver: MenuResolver,
    sessions: Arc<dyn SessionStore>,
}

impl MenuNavigator {
    pub fn new(tree: Arc<MenuTree>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            resolver: MenuResolver::new(tree),
            sessions,
        }
    }

    /// Navigator backed by a fresh [`InMemorySessionStore`].
    pub fn with_in_memory_sessions(tree: Arc<MenuTree>) -> Self {
        Self::new(tree, Arc::new(InMemorySessionStore::new()))
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Resolves `input` for `user_key` and commits the transition before returning the reply.
    pub fn handle_input(&self, user_key: &str, input: &str) -> Resolution {
        let mut previous = String::new();
        let resolution = self.sessions.transition(user_key, &mut |current| {
            previous = current.to_string();
            self.resolver.resolve(input, current)
        });

        debug!(
            user_key = %user_key,
            previous_id = %previous,
            next_id = %resolution.next_id,
            outcome = %resolution.outcome,
            "Menu transition"
        );
        resolution
    }
}
