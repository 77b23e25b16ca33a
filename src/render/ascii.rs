use super::chars::{Charset, TreeChars};
use super::renderer::Renderer;
use crate::collapse::CollapseState;
use crate::tree::{child_path, TreeNode};

/// Plain-text tree art: `├── `/`└── ` connectors, no line for the root itself
pub struct AsciiRenderer {
    chars: TreeChars,
}

impl AsciiRenderer {
    pub fn new(charset: Charset) -> Self {
        Self {
            chars: charset.tree_chars(),
        }
    }

    /// Lines of the rendering, without the root
    pub fn lines(&self, root: &TreeNode, collapse: &CollapseState) -> Vec<String> {
        let mut lines = Vec::new();
        if !collapse.is_collapsed("") {
            self.render_children(root, collapse, "", "", &mut lines);
        }
        lines
    }

    fn render_children(
        &self,
        node: &TreeNode,
        collapse: &CollapseState,
        prefix: &str,
        path: &str,
        lines: &mut Vec<String>,
    ) {
        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last {
                self.chars.last_branch
            } else {
                self.chars.branch
            };
            lines.push(format!("{}{}{}", prefix, connector, child.name));

            let full_path = child_path(path, &child.name);
            if child.is_dir() && !collapse.is_collapsed(&full_path) {
                let next_prefix = format!(
                    "{}{}",
                    prefix,
                    if is_last {
                        self.chars.empty
                    } else {
                        self.chars.vertical
                    }
                );
                self.render_children(child, collapse, &next_prefix, &full_path, lines);
            }
        }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(Charset::Unicode)
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, root: &TreeNode, collapse: &CollapseState) -> String {
        self.lines(root, collapse).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::dir(
            "root",
            vec![
                TreeNode::dir("src", vec![TreeNode::file("a.ts"), TreeNode::file("b.ts")]),
                TreeNode::file("README.md"),
            ],
        )
    }

    fn nested() -> TreeNode {
        TreeNode::dir(
            "proj",
            vec![
                TreeNode::dir(
                    "a",
                    vec![
                        TreeNode::dir("b", vec![TreeNode::file("c.txt")]),
                        TreeNode::file("d.txt"),
                    ],
                ),
                TreeNode::dir("e", vec![TreeNode::file("f.txt")]),
            ],
        )
    }

    #[test]
    fn test_basic_scenario() {
        let output = AsciiRenderer::default().render(&sample(), &CollapseState::new());
        assert_eq!(
            output,
            "├── src\n│   ├── a.ts\n│   └── b.ts\n└── README.md"
        );
    }

    #[test]
    fn test_collapsed_directory_keeps_own_line() {
        let mut collapse = CollapseState::new();
        collapse.toggle("src");
        let output = AsciiRenderer::default().render(&sample(), &collapse);
        assert_eq!(output, "├── src\n└── README.md");
    }

    #[test]
    fn test_reexpand_restores_identical_output() {
        let renderer = AsciiRenderer::default();
        let mut collapse = CollapseState::new();
        let before = renderer.render(&nested(), &collapse);

        collapse.toggle("a/b");
        let collapsed = renderer.render(&nested(), &collapse);
        assert_ne!(before, collapsed);

        collapse.toggle("a/b");
        assert_eq!(renderer.render(&nested(), &collapse), before);
    }

    #[test]
    fn test_nested_prefixes() {
        let output = AsciiRenderer::default().render(&nested(), &CollapseState::new());
        let expected = [
            "├── a",
            "│   ├── b",
            "│   │   └── c.txt",
            "│   └── d.txt",
            "└── e",
            "    └── f.txt",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_line_count_matches_visible_nodes() {
        let tree = nested();
        let renderer = AsciiRenderer::default();
        let mut collapse = CollapseState::new();

        let full = renderer.lines(&tree, &collapse).len();
        assert_eq!(full, tree.count_descendants());

        // `a` hides b, c.txt and d.txt
        collapse.toggle("a");
        let reduced = renderer.lines(&tree, &collapse).len();
        let hidden = tree.find("a").map(TreeNode::count_descendants).unwrap_or(0);
        assert_eq!(full - reduced, hidden);
        assert_eq!(hidden, 3);
    }

    #[test]
    fn test_collapsed_root_renders_nothing() {
        let mut collapse = CollapseState::new();
        collapse.toggle("");
        assert_eq!(AsciiRenderer::default().render(&sample(), &collapse), "");
    }

    #[test]
    fn test_file_paths_are_ignored() {
        let mut collapse = CollapseState::new();
        collapse.toggle("README.md");
        let renderer = AsciiRenderer::default();
        assert_eq!(
            renderer.render(&sample(), &collapse),
            renderer.render(&sample(), &CollapseState::new())
        );
    }

    #[test]
    fn test_ascii_charset() {
        let output = AsciiRenderer::new(Charset::Ascii).render(&sample(), &CollapseState::new());
        assert_eq!(output, "|-- src\n|   |-- a.ts\n|   `-- b.ts\n`-- README.md");
    }

    #[test]
    fn test_empty_tree() {
        let tree = TreeNode::dir("root", vec![]);
        assert_eq!(AsciiRenderer::default().render(&tree, &CollapseState::new()), "");
    }
}
