use serde::{Deserialize, Serialize};
use vinci_core::{Node, Props, Style};

/// Name of the path segment that addresses the tree root.
///
/// Any other root name works with [`diff`](crate::diff) and
/// [`parse_path`] as long as it contains no `/`.
pub const ROOT_PATH: &str = "root";

/// A single mutation of a retained tree, addressed by path.
///
/// Paths are the root name followed by `/`-separated child indices, so
/// `root/0/2` is the third child of the root's first child.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    /// Creates the subtree at `path`. For a child path the node is inserted
    /// at that index of its parent.
    Insert { path: String, node: Node },
    /// Swaps the whole subtree at `path`.
    Replace { path: String, node: Node },
    /// Sets and removes props on the node at `path`.
    Update {
        path: String,
        #[serde(default, skip_serializing_if = "Props::is_empty")]
        set: Props,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        remove: Vec<String>,
    },
    /// Replaces the style of the node at `path` as a whole.
    UpdateStyle { path: String, style: Option<Style> },
    /// Removes the child at `index` of the node at `path`.
    Remove { path: String, index: usize },
}

impl Patch {
    pub fn path(&self) -> &str {
        match self {
            Patch::Insert { path, .. }
            | Patch::Replace { path, .. }
            | Patch::Update { path, .. }
            | Patch::UpdateStyle { path, .. }
            | Patch::Remove { path, .. } => path,
        }
    }
}

pub fn child_path(parent: &str, index: usize) -> String {
    format!("{parent}/{index}")
}

/// Splits `path` into its root name and child indices. Returns `None` when a
/// segment after the root is not an index, which is also what a root name
/// containing `/` produces.
pub fn parse_path(path: &str) -> Option<(&str, Vec<usize>)> {
    let mut segments = path.split('/');
    let root = segments.next()?;
    let indices = segments
        .map(|segment| segment.parse().ok())
        .collect::<Option<Vec<usize>>>()?;
    Some((root, indices))
}
