use super::chars::{Charset, Markers};
use super::renderer::Renderer;
use crate::collapse::CollapseState;
use crate::tree::{child_path, TreeNode};

const INDENT: &str = "  ";

/// Kind of an indented row, which decides its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    File,
    Dir { collapsed: bool },
}

/// One row of the indented list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentLine {
    pub depth: usize,
    pub name: String,
    pub kind: LineKind,
    /// Path handed to `CollapseState::toggle` when the row is activated; files have none
    pub toggle: Option<String>,
}

/// Indented list view; unlike the ASCII view the root gets its own row
pub struct IndentRenderer {
    markers: Markers,
}

impl IndentRenderer {
    pub fn new(charset: Charset) -> Self {
        Self {
            markers: charset.markers(),
        }
    }

    pub fn lines(&self, root: &TreeNode, collapse: &CollapseState) -> Vec<IndentLine> {
        let mut lines = Vec::new();
        collect(root, 0, collapse, String::new(), &mut lines);
        lines
    }

    pub fn format_line(&self, line: &IndentLine) -> String {
        let marker = match line.kind {
            LineKind::File => self.markers.file,
            LineKind::Dir { collapsed: true } => self.markers.collapsed,
            LineKind::Dir { collapsed: false } => self.markers.expanded,
        };
        format!("{}{}{}", INDENT.repeat(line.depth), marker, line.name)
    }
}

fn collect(
    node: &TreeNode,
    depth: usize,
    collapse: &CollapseState,
    path: String,
    lines: &mut Vec<IndentLine>,
) {
    if !node.is_dir() {
        lines.push(IndentLine {
            depth,
            name: node.name.clone(),
            kind: LineKind::File,
            toggle: None,
        });
        return;
    }

    let collapsed = collapse.is_collapsed(&path);
    lines.push(IndentLine {
        depth,
        name: node.name.clone(),
        kind: LineKind::Dir { collapsed },
        toggle: Some(path.clone()),
    });

    if collapsed {
        return;
    }

    for child in node.children() {
        let full_path = child_path(&path, &child.name);
        collect(child, depth + 1, collapse, full_path, lines);
    }
}

impl Default for IndentRenderer {
    fn default() -> Self {
        Self::new(Charset::Unicode)
    }
}

impl Renderer for IndentRenderer {
    fn render(&self, root: &TreeNode, collapse: &CollapseState) -> String {
        self.lines(root, collapse)
            .iter()
            .map(|l| self.format_line(l))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
