use super::chars::{BoxChars, Charset};
use super::renderer::Renderer;
use crate::collapse::CollapseState;
use crate::tree::{child_path, TreeNode};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Blank columns between neighbouring sibling subtrees
pub const SIBLING_GAP: usize = 2;

// box, parent stem, branch line, child stems
const ROWS_PER_LEVEL: usize = 4;

/// A labelled box placed on the character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBox {
    pub label: String,
    pub path: String,
    pub is_dir: bool,
    pub collapsed: bool,
    pub row: usize,
    /// Leftmost column of the label
    pub col: usize,
    /// Display width of the label
    pub width: usize,
    /// Column the stems attach to
    pub center: usize,
    /// Columns reserved for this box and everything drawn under it
    pub subtree_width: usize,
}

/// One vertical connector cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stem {
    pub row: usize,
    pub col: usize,
}

/// Horizontal line joining a parent stem to its children's stems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub row: usize,
    pub from: usize,
    pub to: usize,
    pub parent: usize,
    pub drops: Vec<usize>,
}

/// Which boxes and connectors appear, and where, for one (tree, collapse state)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxLayout {
    pub boxes: Vec<PlacedBox>,
    pub stems: Vec<Stem>,
    pub branches: Vec<Branch>,
    pub width: usize,
    pub height: usize,
}

struct Measured {
    label: String,
    label_width: usize,
    path: String,
    is_dir: bool,
    collapsed: bool,
    width: usize,
    children: Vec<Measured>,
}

impl Measured {
    fn children_width(&self) -> usize {
        if self.children.is_empty() {
            return 0;
        }
        self.children.iter().map(|c| c.width).sum::<usize>()
            + SIBLING_GAP * (self.children.len() - 1)
    }
}

fn measure(node: &TreeNode, path: String, collapse: &CollapseState) -> Measured {
    let label = format!("[{}]", node.name);
    let label_width = UnicodeWidthStr::width(label.as_str());
    let collapsed = node.is_dir() && collapse.is_collapsed(&path);

    let children: Vec<Measured> = if node.has_children() && !collapsed {
        node.children()
            .iter()
            .map(|c| measure(c, child_path(&path, &c.name), collapse))
            .collect()
    } else {
        Vec::new()
    };

    let mut measured = Measured {
        label,
        label_width,
        path,
        is_dir: node.is_dir(),
        collapsed,
        width: label_width,
        children,
    };
    measured.width = label_width.max(measured.children_width());
    measured
}

impl BoxLayout {
    pub fn build(root: &TreeNode, collapse: &CollapseState) -> Self {
        let measured = measure(root, String::new(), collapse);
        let mut layout = BoxLayout {
            width: measured.width,
            ..Default::default()
        };
        layout.place(measured, 0, 0);
        layout
    }

    fn place(&mut self, node: Measured, left: usize, row: usize) {
        let center = left + node.width / 2;
        let children_width = node.children_width();

        self.height = self.height.max(row + 1);
        self.boxes.push(PlacedBox {
            label: node.label,
            path: node.path,
            is_dir: node.is_dir,
            collapsed: node.collapsed,
            row,
            col: center - node.label_width / 2,
            width: node.label_width,
            center,
            subtree_width: node.width,
        });

        if node.children.is_empty() {
            return;
        }

        self.stems.push(Stem {
            row: row + 1,
            col: center,
        });

        let mut x = left + (node.width - children_width) / 2;
        let mut drops = Vec::with_capacity(node.children.len());
        for child in node.children {
            let child_center = x + child.width / 2;
            let child_width = child.width;
            drops.push(child_center);
            self.stems.push(Stem {
                row: row + 3,
                col: child_center,
            });
            self.place(child, x, row + ROWS_PER_LEVEL);
            x += child_width + SIBLING_GAP;
        }

        let first = drops.first().copied().unwrap_or(center);
        let last = drops.last().copied().unwrap_or(center);
        self.branches.push(Branch {
            row: row + 2,
            from: first.min(center),
            to: last.max(center),
            parent: center,
            drops,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Draw the layout onto a character grid, one string per row, trailing blanks trimmed
    pub fn draw(&self, chars: &BoxChars) -> Vec<String> {
        let mut canvas = Canvas::new(self.width, self.height);

        for placed in &self.boxes {
            canvas.put_str(placed.row, placed.col, &placed.label);
        }
        for stem in &self.stems {
            canvas.put(stem.row, stem.col, chars.vertical);
        }
        for branch in &self.branches {
            for col in branch.from..=branch.to {
                let glyph = chars.junction(
                    col == branch.parent,
                    branch.drops.contains(&col),
                    col > branch.from,
                    col < branch.to,
                );
                canvas.put(branch.row, col, glyph);
            }
        }

        canvas.into_lines()
    }
}

#[derive(Clone)]
enum Cell {
    Blank,
    Glyph(String),
    /// Right half of a double-width glyph
    Covered,
}

struct Canvas {
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Blank; width]; height],
        }
    }

    fn put(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Cell::Glyph(ch.to_string());
        }
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        let mut x = col;
        let mut last = None;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                // Combining marks join the previous glyph
                if let Some(Cell::Glyph(s)) = last.and_then(|i: usize| cells.get_mut(i)) {
                    s.push(ch);
                }
                continue;
            }
            if x + w > cells.len() {
                break;
            }
            cells[x] = Cell::Glyph(ch.to_string());
            for covered in cells.iter_mut().skip(x + 1).take(w - 1) {
                *covered = Cell::Covered;
            }
            last = Some(x);
            x += w;
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.rows
            .into_iter()
            .map(|cells| {
                let mut line = String::new();
                for cell in cells {
                    match cell {
                        Cell::Blank => line.push(' '),
                        Cell::Glyph(s) => line.push_str(&s),
                        Cell::Covered => {}
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }
}

/// Vertical box diagram: `[name]` boxes joined by stems and branch lines
pub struct BoxTreeRenderer {
    chars: BoxChars,
}

impl BoxTreeRenderer {
    pub fn new(charset: Charset) -> Self {
        Self {
            chars: charset.box_chars(),
        }
    }

    pub fn layout(&self, root: &TreeNode, collapse: &CollapseState) -> BoxLayout {
        BoxLayout::build(root, collapse)
    }
}

impl Default for BoxTreeRenderer {
    fn default() -> Self {
        Self::new(Charset::Unicode)
    }
}

impl Renderer for BoxTreeRenderer {
    fn render(&self, root: &TreeNode, collapse: &CollapseState) -> String {
        self.layout(root, collapse).draw(&self.chars).join("\n")
    }
}
