use crate::tree::{child_path, TreeNode};
use std::collections::BTreeSet;

/// What happens to collapse state when a new archive replaces the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Start every new tree fully expanded
    #[default]
    Reset,
    /// Carry collapsed paths over to the new tree
    Keep,
}

/// Directory paths whose descendants are hidden. Absent means expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    hidden: BTreeSet<String>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a path; returns whether it is now collapsed
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.hidden.remove(path) {
            false
        } else {
            self.hidden.insert(path.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, path: &str) -> bool {
        self.hidden.contains(path)
    }

    pub fn collapse(&mut self, path: impl Into<String>) {
        self.hidden.insert(path.into());
    }

    pub fn expand(&mut self, path: &str) {
        self.hidden.remove(path);
    }

    pub fn clear(&mut self) {
        self.hidden.clear();
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    /// Collapse every directory below the root, leaving the root open
    pub fn collapse_all(&mut self, root: &TreeNode) {
        for path in directory_paths(root) {
            if !path.is_empty() {
                self.hidden.insert(path);
            }
        }
    }

    /// Apply a reset policy before a new tree is shown
    pub fn on_new_tree(&mut self, policy: ResetPolicy) {
        if policy == ResetPolicy::Reset {
            self.clear();
        }
    }
}

/// Render paths of every directory in the tree, root (`""`) first, depth-first
pub fn directory_paths(root: &TreeNode) -> Vec<String> {
    fn walk(node: &TreeNode, path: String, out: &mut Vec<String>) {
        if !node.is_dir() {
            return;
        }
        out.push(path.clone());
        for child in node.children() {
            walk(child, child_path(&path, &child.name), out);
        }
    }

    let mut out = Vec::new();
    walk(root, String::new(), &mut out);
    out
}
