pub mod ascii;
pub mod boxtree;
pub mod chars;
pub mod indent;
pub mod renderer;

pub use ascii::AsciiRenderer;
pub use boxtree::{BoxLayout, BoxTreeRenderer};
pub use chars::Charset;
pub use indent::IndentRenderer;
pub use renderer::{Renderer, View, Views};

use crate::collapse::CollapseState;
use crate::tree::TreeNode;

/// Create the renderer for a view
pub fn create_renderer(view: View, charset: Charset) -> Box<dyn Renderer> {
    match view {
        View::Indent => Box::new(IndentRenderer::new(charset)),
        View::Ascii => Box::new(AsciiRenderer::new(charset)),
        View::Box => Box::new(BoxTreeRenderer::new(charset)),
    }
}

/// Render every view from the same tree and collapse state
pub fn render_all(root: &TreeNode, collapse: &CollapseState, charset: Charset) -> Views {
    let render = |view| create_renderer(view, charset).render(root, collapse);
    Views {
        indent: render(View::Indent),
        ascii: render(View::Ascii),
        boxed: render(View::Box),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_renderer_agrees_with_render_all() {
        let tree = TreeNode::dir("root", vec![TreeNode::file("a")]);
        let collapse = CollapseState::new();
        let views = render_all(&tree, &collapse, Charset::Unicode);
        for view in View::ALL {
            let rendered = create_renderer(view, Charset::Unicode).render(&tree, &collapse);
            assert_eq!(rendered, views.get(view));
        }
        assert_eq!(views.ascii, "└── a");
    }

    #[test]
    fn test_render_all_reflects_collapse_in_every_view() {
        let tree = TreeNode::dir(
            "root",
            vec![
                TreeNode::dir("src", vec![TreeNode::file("main.rs")]),
                TreeNode::file("Cargo.toml"),
            ],
        );
        let mut collapse = CollapseState::new();
        let open = render_all(&tree, &collapse, Charset::Unicode);
        assert!(open.indent.contains("main.rs"));
        assert!(open.ascii.contains("main.rs"));
        assert!(open.boxed.contains("[main.rs]"));

        collapse.toggle("src");
        let closed = render_all(&tree, &collapse, Charset::Unicode);
        for view in View::ALL {
            assert!(!closed.get(view).contains("main.rs"), "{:?}", view);
            assert!(closed.get(view).contains("src"), "{:?}", view);
        }
    }
}
