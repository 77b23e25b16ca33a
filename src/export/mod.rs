pub mod svg;
pub mod theme;

pub use theme::{Palette, Theme};

use crate::collapse::CollapseState;
use crate::errors::ExportError;
use crate::render::{AsciiRenderer, BoxLayout, Charset, IndentRenderer};
use crate::tree::TreeNode;
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Which view is written out, and under which fixed file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Indented list view
    Visual,
    /// ASCII-art view
    Ascii,
    /// Vertical box diagram
    Vertical,
}

impl ExportTarget {
    pub fn stem(self) -> &'static str {
        match self {
            ExportTarget::Visual => "visual-tree",
            ExportTarget::Ascii => "ascii-tree",
            ExportTarget::Vertical => "vertical-tree",
        }
    }

    pub fn file_name(self, modal: bool) -> String {
        if modal {
            format!("{}-modal.svg", self.stem())
        } else {
            format!("{}.svg", self.stem())
        }
    }
}

/// Serialize one view of the tree to an SVG document
pub fn to_svg(
    target: ExportTarget,
    root: &TreeNode,
    collapse: &CollapseState,
    charset: Charset,
    theme: Theme,
) -> Result<String, ExportError> {
    let palette = theme.palette();

    let document = match target {
        ExportTarget::Visual => {
            let renderer = IndentRenderer::new(charset);
            let lines: Vec<String> = renderer
                .lines(root, collapse)
                .iter()
                .map(|l| renderer.format_line(l))
                .collect();
            text_or_empty(target, &lines, &palette)?
        }
        ExportTarget::Ascii => {
            let lines = AsciiRenderer::new(charset).lines(root, collapse);
            text_or_empty(target, &lines, &palette)?
        }
        ExportTarget::Vertical => {
            let layout = BoxLayout::build(root, collapse);
            if layout.is_empty() {
                return Err(ExportError::EmptyTarget(target.stem()));
            }
            svg::box_document(&layout, &palette)
        }
    };

    if !svg::looks_like_svg(&document) {
        return Err(ExportError::Malformed);
    }
    Ok(document)
}

fn text_or_empty(
    target: ExportTarget,
    lines: &[String],
    palette: &Palette,
) -> Result<String, ExportError> {
    if lines.is_empty() {
        return Err(ExportError::EmptyTarget(target.stem()));
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    Ok(svg::text_document(&refs, palette))
}

/// Write a document atomically: nothing appears at `dir/name` unless the whole write succeeds
pub fn write_atomic(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    let dest = dir.join(name);
    let io_err = |source| ExportError::Io {
        path: dest.clone(),
        source,
    };

    let mut builder = Builder::new();
    // Temp files default to 0600; ask for 0666 so the umask decides, as with a plain write
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    // The temp file is removed when dropped on any early return
    let mut tmp = builder.tempfile_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(&dest).map_err(|e| io_err(e.error))?;

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> TreeNode {
        TreeNode::dir(
            "root",
            vec![
                TreeNode::dir("src", vec![TreeNode::file("a.ts")]),
                TreeNode::file("README.md"),
            ],
        )
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportTarget::Visual.file_name(false), "visual-tree.svg");
        assert_eq!(ExportTarget::Ascii.file_name(false), "ascii-tree.svg");
        assert_eq!(ExportTarget::Vertical.file_name(false), "vertical-tree.svg");
        assert_eq!(ExportTarget::Ascii.file_name(true), "ascii-tree-modal.svg");
    }

    #[test]
    fn test_every_target_serializes() {
        let collapse = CollapseState::new();
        for target in [ExportTarget::Visual, ExportTarget::Ascii, ExportTarget::Vertical] {
            let svg = to_svg(target, &sample(), &collapse, Charset::Unicode, Theme::Light).unwrap();
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains("README.md"));
        }
    }

    #[test]
    fn test_empty_ascii_target() {
        let tree = TreeNode::dir("root", vec![]);
        let result = to_svg(
            ExportTarget::Ascii,
            &tree,
            &CollapseState::new(),
            Charset::Unicode,
            Theme::Terminal,
        );
        assert!(matches!(result, Err(ExportError::EmptyTarget("ascii-tree"))));
    }

    #[test]
    fn test_collapse_is_honoured_in_export() {
        let mut collapse = CollapseState::new();
        collapse.toggle("src");
        let svg = to_svg(
            ExportTarget::Vertical,
            &sample(),
            &collapse,
            Charset::Unicode,
            Theme::Dark,
        )
        .unwrap();
        assert!(svg.contains("[src]"));
        assert!(!svg.contains("a.ts"));
    }

    #[test]
    fn test_write_atomic() {
        let temp = TempDir::new().unwrap();
        let path = write_atomic(temp.path(), "ascii-tree.svg", "<svg></svg>").unwrap();

        assert_eq!(path, temp.path().join("ascii-tree.svg"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>");
        // Only the final file remains
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_uses_normal_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain.svg");
        std::fs::write(&plain, "<svg></svg>").unwrap();
        let exported = write_atomic(temp.path(), "ascii-tree.svg", "<svg></svg>").unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&exported), mode(&plain));
    }

    #[test]
    fn test_write_atomic_missing_dir_leaves_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let result = write_atomic(&missing, "ascii-tree.svg", "<svg></svg>");

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!missing.join("ascii-tree.svg").exists());
    }
}
