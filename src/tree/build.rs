use super::exclude::ExclusionSet;
use super::node::TreeNode;
use crate::archive::ArchiveEntry;
use std::collections::HashMap;

/// Name of the synthetic wrapper returned when no single top-level folder can be promoted
pub const ROOT_NAME: &str = "root";

/// Flat storage used while the tree is assembled; indices stand in for parent links
struct ArenaNode {
    name: String,
    children: Option<Vec<usize>>,
}

/// Lookup from running sub-path to arena slot, seeded with the root at `""`
pub struct PathIndex {
    arena: Vec<ArenaNode>,
    by_path: HashMap<String, usize>,
    excluded: usize,
}

impl PathIndex {
    pub fn new() -> Self {
        let mut by_path = HashMap::new();
        by_path.insert(String::new(), 0);
        Self {
            arena: vec![ArenaNode {
                name: String::new(),
                children: Some(Vec::new()),
            }],
            by_path,
            excluded: 0,
        }
    }

    /// Insert one entry. Existing nodes for a sub-path are never replaced.
    pub fn insert(&mut self, entry: &ArchiveEntry, exclusions: &ExclusionSet) {
        let segments = entry.segments();
        if exclusions.excludes(segments.iter().copied()) {
            self.excluded += 1;
            return;
        }

        let mut parent = 0;
        let mut running = String::new();

        for (index, segment) in segments.iter().enumerate() {
            if !running.is_empty() {
                running.push('/');
            }
            running.push_str(segment);

            if let Some(&existing) = self.by_path.get(&running) {
                parent = existing;
                continue;
            }

            let is_leaf_file = index == segments.len() - 1 && !entry.is_dir;
            let id = self.arena.len();
            self.arena.push(ArenaNode {
                name: segment.to_string(),
                children: if is_leaf_file { None } else { Some(Vec::new()) },
            });

            // A file that later shows up as a prefix keeps its file slot; its
            // would-be children have nowhere to hang and are dropped.
            if let Some(children) = self.arena[parent].children.as_mut() {
                children.push(id);
            }

            self.by_path.insert(running.clone(), id);
            parent = id;
        }
    }

    /// Number of entries skipped by the exclusion filter so far
    pub fn excluded_count(&self) -> usize {
        self.excluded
    }

    /// Finish construction and apply the single-directory promotion rule
    pub fn into_tree(self) -> TreeNode {
        let mut top: Vec<TreeNode> = self.arena[0]
            .children
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|&id| self.materialize(id))
            .collect();

        // A lone file is still wrapped
        if top.len() == 1 && top[0].is_dir() {
            tracing::debug!(root = %top[0].name, "promoting single top-level folder");
            return top.remove(0);
        }

        TreeNode::dir(ROOT_NAME, top)
    }

    fn materialize(&self, id: usize) -> TreeNode {
        let node = &self.arena[id];
        TreeNode {
            name: node.name.clone(),
            children: node
                .children
                .as_ref()
                .map(|ids| ids.iter().map(|&c| self.materialize(c)).collect()),
        }
    }
}

impl Default for PathIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the hierarchy for a sequence of archive entries
pub fn build_tree<'a, I>(entries: I, exclusions: &ExclusionSet) -> TreeNode
where
    I: IntoIterator<Item = &'a ArchiveEntry>,
{
    let mut index = PathIndex::new();
    let mut consumed = 0usize;
    for entry in entries {
        index.insert(entry, exclusions);
        consumed += 1;
    }

    tracing::debug!(
        entries = consumed,
        excluded = index.excluded_count(),
        "built path index"
    );

    index.into_tree()
}
