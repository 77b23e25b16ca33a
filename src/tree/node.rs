/// A node of the reconstructed hierarchy.
///
/// `children == None` marks a file; `Some` (possibly empty) marks a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.children.is_some()
    }

    /// Children in insertion order; empty for files
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Number of file nodes in this subtree
    pub fn count_files(&self) -> usize {
        if self.is_dir() {
            self.children().iter().map(TreeNode::count_files).sum()
        } else {
            1
        }
    }

    /// Number of nodes below this one (the node itself excluded)
    #[cfg(test)]
    pub fn count_descendants(&self) -> usize {
        self.children()
            .iter()
            .map(|c| 1 + c.count_descendants())
            .sum()
    }

    /// Find a node by its render path (`""` is this node, `a/b` walks children by name)
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut current = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children().iter().find(|c| c.name == segment)?;
        }
        Some(current)
    }
}

/// Path of a child given its parent's path; the root's path is `""`
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Canonical render path: empty segments dropped, so `/src//util/` becomes `src/util`
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
