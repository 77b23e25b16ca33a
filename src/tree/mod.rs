pub mod build;
pub mod exclude;
pub mod node;

pub use build::build_tree;
pub use exclude::{parse_name_list, ExclusionSet};
pub use node::{child_path, normalize_path, TreeNode};
