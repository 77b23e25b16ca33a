use crate::archive::{read_entries, ArchiveEntry};
use crate::cli::Settings;
use crate::collapse::CollapseState;
use crate::errors::{AppError, Result};
use crate::export::{self, ExportTarget, Theme};
use crate::render::{render_all, IndentRenderer, Views};
use crate::tree::{build_tree, normalize_path, TreeNode};
use std::path::{Path, PathBuf};

/// Outcome of a toggle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The directory at `path` (canonical form) changed state; all views were re-rendered
    Changed {
        path: String,
        collapsed: bool,
        views: Views,
    },
    /// The path is not a directory of the current tree; nothing changed
    Ignored,
}

/// One loaded tree plus the collapse state every view shares
pub struct Session {
    settings: Settings,
    tree: Option<TreeNode>,
    collapse: CollapseState,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tree: None,
            collapse: CollapseState::new(),
        }
    }

    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    pub fn collapse_state(&self) -> &CollapseState {
        &self.collapse
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read an archive and replace the tree. On error the previous tree is kept.
    pub fn load(&mut self, path: &Path) -> Result<&TreeNode> {
        let entries = read_entries(path)?;
        tracing::info!(archive = %path.display(), entries = entries.len(), "loaded archive");
        Ok(self.load_entries(&entries))
    }

    /// Replace the tree from already-decoded entries
    pub fn load_entries(&mut self, entries: &[ArchiveEntry]) -> &TreeNode {
        let tree = build_tree(entries, &self.settings.exclusions);
        self.collapse.on_new_tree(self.settings.reset);
        self.tree.insert(tree)
    }

    fn require_tree(&self) -> Result<&TreeNode> {
        self.tree.as_ref().ok_or(AppError::NoTree)
    }

    /// Render all three views from the current state
    pub fn views(&self) -> Result<Views> {
        let tree = self.require_tree()?;
        Ok(render_all(tree, &self.collapse, self.settings.charset))
    }

    fn is_directory(&self, path: &str) -> Result<bool> {
        Ok(self
            .require_tree()?
            .find(path)
            .map(TreeNode::is_dir)
            .unwrap_or(false))
    }

    /// Flip a directory between collapsed and expanded and re-render every view
    pub fn toggle(&mut self, path: &str) -> Result<Toggle> {
        let path = normalize_path(path);
        if !self.is_directory(&path)? {
            tracing::warn!(path = path.as_str(), "toggle ignored: not a directory");
            return Ok(Toggle::Ignored);
        }

        let collapsed = self.collapse.toggle(&path);
        tracing::debug!(path = path.as_str(), collapsed, "toggled");
        Ok(Toggle::Changed {
            views: self.views()?,
            path,
            collapsed,
        })
    }

    /// Toggle the directory on row `row` of the indent view; row 0 is the root
    pub fn toggle_row(&mut self, row: usize) -> Result<Toggle> {
        let tree = self.require_tree()?;
        let lines = IndentRenderer::new(self.settings.charset).lines(tree, &self.collapse);

        match lines.get(row).and_then(|line| line.toggle.clone()) {
            Some(path) => self.toggle(&path),
            None => {
                tracing::warn!(row, rows = lines.len(), "toggle ignored: not a directory row");
                Ok(Toggle::Ignored)
            }
        }
    }

    /// Collapse a directory; collapsing it twice keeps it collapsed
    pub fn collapse(&mut self, path: &str) -> Result<Toggle> {
        self.set_collapsed(path, true)
    }

    /// Expand a directory; expanding an open one is a no-op
    pub fn expand(&mut self, path: &str) -> Result<Toggle> {
        self.set_collapsed(path, false)
    }

    fn set_collapsed(&mut self, path: &str, collapsed: bool) -> Result<Toggle> {
        let path = normalize_path(path);
        if !self.is_directory(&path)? {
            tracing::warn!(path = path.as_str(), collapsed, "ignored: not a directory");
            return Ok(Toggle::Ignored);
        }

        if collapsed {
            self.collapse.collapse(path.clone());
        } else {
            self.collapse.expand(&path);
        }
        Ok(Toggle::Changed {
            views: self.views()?,
            path,
            collapsed,
        })
    }

    pub fn expand_all(&mut self) -> Result<Views> {
        self.collapse.clear();
        self.views()
    }

    pub fn collapse_all(&mut self) -> Result<Views> {
        let tree = self.tree.as_ref().ok_or(AppError::NoTree)?;
        self.collapse.collapse_all(tree);
        self.views()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    /// Serialize and write one view. Takes `&mut self` so exports never interleave.
    pub fn export(&mut self, target: ExportTarget) -> Result<PathBuf> {
        let tree = self.require_tree()?;
        let name = target.file_name(self.settings.modal);

        let result = export::to_svg(
            target,
            tree,
            &self.collapse,
            self.settings.charset,
            self.settings.theme,
        )
        .and_then(|svg| export::write_atomic(&self.settings.out_dir, &name, &svg));

        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "exported");
                Ok(path)
            }
            Err(e) => {
                tracing::error!(file = name.as_str(), error = %e, "export failed");
                Err(e.into())
            }
        }
    }
}
