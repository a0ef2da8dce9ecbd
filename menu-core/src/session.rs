//! Session state table: the current node id of every user, keyed by user identity.
//!
//! A user without an entry reads as the empty id, which the resolver treats as "show root".

use crate::resolver::Resolution;
use dashmap::DashMap;

/// Storage for per-user menu positions.
///
/// Implementations must make [`SessionStore::transition`] atomic per key: two messages from the
/// same user never observe the same previous id.
pub trait SessionStore: Send + Sync {
    /// Current node id for `user_key`; empty when the user has no session.
    fn get(&self, user_key: &str) -> String;

    fn set(&self, user_key: &str, node_id: &str);

    /// Runs `step` with the current id and stores the `next_id` it returns, as one critical
    /// section for `user_key`. `step` must not block.
    fn transition(
        &self,
        user_key: &str,
        step: &mut dyn FnMut(&str) -> Resolution,
    ) -> Resolution;
}

/// Process-lifetime session table over a sharded concurrent map.
///
/// Only users hashing to the same shard contend; the shard lock is held for the duration of a
/// single synchronous resolution.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_key: &str) -> String {
        self.sessions
            .get(user_key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn set(&self, user_key: &str, node_id: &str) {
        self.sessions
            .insert(user_key.to_string(), node_id.to_string());
    }

    fn transition(
        &self,
        user_key: &str,
        step: &mut dyn FnMut(&str) -> Resolution,
    ) -> Resolution {
        let mut entry = self.sessions.entry(user_key.to_string()).or_default();
        let resolution = step(entry.as_str());
        *entry = resolution.next_id.clone();
        resolution
    }
}

/// Derives the session key from a messaging identity so that every device of one user shares a
/// session.
///
/// Identities of the form `user.agent:device@server` become `user@server`. Anything without a
/// device part is returned unchanged.
pub fn session_key(identity: &str) -> String {
    let (local, server) = match identity.split_once('@') {
        Some((local, server)) => (local, Some(server)),
        None => (identity, None),
    };

    let local = match local.split_once(':') {
        Some((user, _device)) => match user.rsplit_once('.') {
            Some((bare, agent)) if !agent.is_empty() && agent.bytes().all(|b| b.is_ascii_digit()) => {
                bare
            }
            _ => user,
        },
        None => local,
    };

    match server {
        Some(server) => format!("{}@{}", local, server),
        None => local.to_string(),
    }
}
