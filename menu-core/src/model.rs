//! Menu definition types: the document shape ([`MenuDefinition`]) and the flattened node stored in the tree ([`MenuNode`]).

use serde::Deserialize;
use std::collections::BTreeMap;

/// Node kind. `text` nodes are terminal replies; `options` nodes present a numbered choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    #[default]
    Options,
    Text,
}

/// One selectable choice inside an options node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuOption {
    /// Text shown in the rendered list.
    pub label: String,
    /// Canonical matching token (e.g. a short code). May equal the positional number.
    pub value: String,
    /// Id of the node this option leads to. Resolved lazily.
    pub next: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            next: next.into(),
        }
    }
}

/// A node as written in the definition document. Descendants live under `children`, keyed by id.
///
/// Unknown fields are ignored, so documents carrying extra presentation hints still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuDefinition {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: MenuKind,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub options: Vec<MenuOption>,
    #[serde(default)]
    pub children: BTreeMap<String, MenuDefinition>,
}

impl MenuDefinition {
    /// Options node with the given choices and no children.
    pub fn options(id: impl Into<String>, message: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: MenuKind::Options,
            message: message.into(),
            options,
            children: BTreeMap::new(),
        }
    }

    /// Leaf node replying with `message`.
    pub fn text(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: MenuKind::Text,
            message: message.into(),
            options: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Adds `child` under its own id as key.
    pub fn with_child(mut self, child: MenuDefinition) -> Self {
        self.children.insert(child.id.clone(), child);
        self
    }

    /// Splits the definition into its node and its children (ascending key order).
    pub(crate) fn into_parts(self) -> (MenuNode, BTreeMap<String, MenuDefinition>) {
        let node = MenuNode {
            id: self.id,
            name: self.name,
            kind: self.kind,
            message: self.message,
            options: self.options,
        };
        (node, self.children)
    }
}

/// A node stored in the [`MenuTree`](crate::MenuTree) arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub id: String,
    pub name: Option<String>,
    pub kind: MenuKind,
    pub message: String,
    pub options: Vec<MenuOption>,
}

impl MenuNode {
    pub fn is_text(&self) -> bool {
        self.kind == MenuKind::Text
    }
}
