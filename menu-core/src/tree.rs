//! Menu definition store.
//!
//! [`MenuTree`] owns every node of a loaded definition in an arena, indexed by id. The arena is
//! filled by a depth-first pre-order walk from the root (children in ascending key order), so
//! when a document repeats an id, the first node met in that walk owns it. The tree is not
//! validated on load; [`MenuTree::lint`] reports suspicious shapes without rejecting them.

use crate::error::{LoadError, Result};
use crate::model::{MenuDefinition, MenuKind, MenuNode};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Immutable, loaded menu tree. Index 0 of the arena is the root.
#[derive(Debug, Clone)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    index: HashMap<String, usize>,
}

impl MenuTree {
    /// Reads and decodes the JSON definition at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            origin: path.display().to_string(),
            source,
        })?;
        let root: MenuDefinition = serde_json::from_slice(&bytes)?;
        let tree = Self::from_root(root);
        debug!(nodes = tree.len(), root = %tree.root().id, "Menu definition loaded");
        Ok(tree)
    }

    /// Reads a JSON definition from any byte source. Failed reads are `Io`; bytes that are not
    /// UTF-8 JSON of the right shape are `Malformed`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let root: MenuDefinition = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                LoadError::Io {
                    origin: "reader".to_string(),
                    source: e.into(),
                }
            } else {
                LoadError::Malformed(e)
            }
        })?;
        Ok(Self::from_root(root))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let root: MenuDefinition = serde_json::from_str(text)?;
        Ok(Self::from_root(root))
    }

    /// Flattens a decoded definition into the arena.
    pub fn from_root(root: MenuDefinition) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let mut stack = vec![root];

        while let Some(definition) = stack.pop() {
            let (node, children) = definition.into_parts();
            // Reversed so the smallest key is popped first.
            stack.extend(children.into_values().rev());
            index.entry(node.id.clone()).or_insert(nodes.len());
            nodes.push(node);
        }

        Self { nodes, index }
    }

    pub fn root(&self) -> &MenuNode {
        &self.nodes[0]
    }

    /// Looks up a node by id anywhere in the tree.
    pub fn find_node_by_id(&self, id: &str) -> Option<&MenuNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in traversal order, shadowed duplicates included.
    pub fn nodes(&self) -> impl Iterator<Item = &MenuNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reports shapes that load fine but will misbehave at resolution time.
    pub fn lint(&self) -> Vec<DefinitionIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for node in &self.nodes {
            if node.id.is_empty() {
                issues.push(DefinitionIssue::EmptyId {
                    message: node.message.clone(),
                });
            }
            if !seen.insert(node.id.as_str()) {
                issues.push(DefinitionIssue::DuplicateId {
                    id: node.id.clone(),
                });
            }

            match node.kind {
                MenuKind::Text if !node.options.is_empty() => {
                    issues.push(DefinitionIssue::TextNodeWithOptions {
                        node: node.id.clone(),
                    });
                }
                MenuKind::Options if node.options.is_empty() => {
                    issues.push(DefinitionIssue::EmptyOptions {
                        node: node.id.clone(),
                    });
                }
                _ => {}
            }

            if node.kind == MenuKind::Options {
                for option in &node.options {
                    if !self.index.contains_key(&option.next) {
                        issues.push(DefinitionIssue::DanglingNext {
                            node: node.id.clone(),
                            option: option.label.clone(),
                            next: option.next.clone(),
                        });
                    }
                }
            }
        }

        issues
    }
}

/// A problem found by [`MenuTree::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionIssue {
    /// A node without an id. Sessions pointing at it read as "no session", so it can never be
    /// left except through the root listing.
    EmptyId { message: String },
    /// A later node repeats an id; it can never be reached.
    DuplicateId { id: String },
    /// An option points to an id that no node has.
    DanglingNext {
        node: String,
        option: String,
        next: String,
    },
    /// Options on a text node are never offered.
    TextNodeWithOptions { node: String },
    /// An options node with nothing to choose.
    EmptyOptions { node: String },
}

impl fmt::Display for DefinitionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionIssue::EmptyId { message } => {
                write!(f, "node with message '{}' has an empty id", message)
            }
            DefinitionIssue::DuplicateId { id } => {
                write!(f, "duplicate id '{}' (only the first occurrence is reachable)", id)
            }
            DefinitionIssue::DanglingNext { node, option, next } => write!(
                f,
                "option '{}' of '{}' points to missing node '{}'",
                option, node, next
            ),
            DefinitionIssue::TextNodeWithOptions { node } => {
                write!(f, "text node '{}' has options that are never shown", node)
            }
            DefinitionIssue::EmptyOptions { node } => {
                write!(f, "options node '{}' has no options", node)
            }
        }
    }
}
