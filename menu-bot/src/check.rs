//! `check` subcommand: load a definition and report what the bot would warn about.

use menu_core::{DefinitionIssue, LoadError, MenuTree};
use std::fmt::Write;
use std::path::Path;

#[derive(Debug)]
pub struct CheckReport {
    pub path: String,
    pub nodes: usize,
    pub root_id: String,
    pub issues: Vec<DefinitionIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {} node(s), root '{}'", self.path, self.nodes, self.root_id);
        if self.is_clean() {
            let _ = writeln!(out, "No issues found.");
        } else {
            let _ = writeln!(out, "{} issue(s):", self.issues.len());
            for issue in &self.issues {
                let _ = writeln!(out, "  - {}", issue);
            }
        }
        out
    }
}

pub fn check_definition(path: &Path) -> Result<CheckReport, LoadError> {
    let tree = MenuTree::load(path)?;
    Ok(CheckReport {
        path: path.display().to_string(),
        nodes: tree.len(),
        root_id: tree.root().id.clone(),
        issues: tree.lint(),
    })
}
