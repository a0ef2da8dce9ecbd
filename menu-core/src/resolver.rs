//! Menu resolver: maps (user input, current node id) to (reply text, next node id).
//!
//! Resolution is total. Every condition that cannot advance the user (unknown session id,
//! missing option target, unmatched input) is answered with a fixed guidance message and a
//! node id the user can continue from, so a conversation can never get stuck.

use crate::model::MenuNode;
use crate::tree::MenuTree;
use std::fmt;
use std::sync::Arc;

/// Input that always returns the user to the root node. Case-sensitive.
pub const RESET_KEYWORD: &str = "menu";

pub const MSG_MENU_NOT_FOUND: &str = "Menu not found. Type 'menu' to start over.";
pub const MSG_SUBMENU_NOT_FOUND: &str = "Submenu not found.";
pub const MSG_INVALID_CHOICE: &str =
    "Invalid choice. Please try again or type 'menu' to return to the start.";

/// Which branch of the resolution produced the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Reset keyword or first contact; root rendered.
    Root,
    /// Session pointed at an id the tree does not have; user sent back to root.
    NodeNotFound,
    /// Current node is a text leaf; its message is repeated.
    Text,
    /// An option matched and its target was found.
    Advanced,
    /// An option matched but its target id is missing; user stays put.
    SubmenuNotFound,
    /// No option matched; user stays put.
    InvalidChoice,
}

impl ResolveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveOutcome::Root => "root",
            ResolveOutcome::NodeNotFound => "node_not_found",
            ResolveOutcome::Text => "text",
            ResolveOutcome::Advanced => "advanced",
            ResolveOutcome::SubmenuNotFound => "submenu_not_found",
            ResolveOutcome::InvalidChoice => "invalid_choice",
        }
    }

    /// True for the outcomes caused by a broken definition or stale session rather than user input.
    pub fn is_definition_fault(&self) -> bool {
        matches!(
            self,
            ResolveOutcome::NodeNotFound | ResolveOutcome::SubmenuNotFound
        )
    }
}

impl fmt::Display for ResolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply to send and the node id to remember for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub next_id: String,
    pub outcome: ResolveOutcome,
}

impl Resolution {
    fn new(reply: impl Into<String>, next_id: impl Into<String>, outcome: ResolveOutcome) -> Self {
        Self {
            reply: reply.into(),
            next_id: next_id.into(),
            outcome,
        }
    }
}

/// Stateless resolver over a shared, loaded tree.
#[derive(Debug, Clone)]
pub struct MenuResolver {
    tree: Arc<MenuTree>,
}

impl MenuResolver {
    pub fn new(tree: Arc<MenuTree>) -> Self {
        Self { tree }
    }

    /// Computes the reply for `input` given the user's current node id (empty for a new user).
    pub fn resolve(&self, input: &str, current_id: &str) -> Resolution {
        let root = self.tree.root();
        if input == RESET_KEYWORD || current_id.is_empty() {
            return Resolution::new(render_menu(root), &root.id, ResolveOutcome::Root);
        }

        let Some(current) = self.tree.find_node_by_id(current_id) else {
            return Resolution::new(MSG_MENU_NOT_FOUND, &root.id, ResolveOutcome::NodeNotFound);
        };

        if current.is_text() {
            return Resolution::new(&current.message, &current.id, ResolveOutcome::Text);
        }

        let Some(option) = current
            .options
            .iter()
            .enumerate()
            .find(|(i, option)| input == option.value || input == (i + 1).to_string())
            .map(|(_, option)| option)
        else {
            return Resolution::new(MSG_INVALID_CHOICE, &current.id, ResolveOutcome::InvalidChoice);
        };

        match self.tree.find_node_by_id(&option.next) {
            None => Resolution::new(
                MSG_SUBMENU_NOT_FOUND,
                &current.id,
                ResolveOutcome::SubmenuNotFound,
            ),
            Some(next) if next.is_text() => {
                Resolution::new(&next.message, &next.id, ResolveOutcome::Advanced)
            }
            Some(next) => Resolution::new(render_menu(next), &next.id, ResolveOutcome::Advanced),
        }
    }
}

/// Renders `node.message` followed by one `"{n}. {label}"` line per option, numbered from 1.
///
/// Numbering comes from position only, never from the option's `value`.
pub fn render_menu(node: &MenuNode) -> String {
    let mut rendered = node.message.clone();
    for (i, option) in node.options.iter().enumerate() {
        rendered.push_str(&format!("\n{}. {}", i + 1, option.label));
    }
    rendered
}
