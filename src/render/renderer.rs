use crate::collapse::CollapseState;
use crate::tree::TreeNode;
use clap::ValueEnum;

/// The three ways a tree can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Indented list with expand/collapse markers
    Indent,
    /// Connector-annotated plain text
    Ascii,
    /// Vertical box diagram
    Box,
}

impl View {
    pub const ALL: [View; 3] = [View::Indent, View::Ascii, View::Box];

    pub fn label(self) -> &'static str {
        match self {
            View::Indent => "indent",
            View::Ascii => "ascii",
            View::Box => "box",
        }
    }
}

/// Trait for rendering a tree under a collapse state.
///
/// Implementations are pure: the same tree and state always give the same text.
pub trait Renderer {
    fn render(&self, root: &TreeNode, collapse: &CollapseState) -> String;
}

/// Every view rendered from one (tree, collapse state) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    pub indent: String,
    pub ascii: String,
    pub boxed: String,
}

impl Views {
    pub fn get(&self, view: View) -> &str {
        match view {
            View::Indent => &self.indent,
            View::Ascii => &self.ascii,
            View::Box => &self.boxed,
        }
    }
}
