use thiserror::Error;
use vinci_core::Node;

use crate::patch::{parse_path, Patch};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("malformed patch path `{path}`")]
    BadPath { path: String },
    #[error("no node at `{path}`")]
    Missing { path: String },
    #[error("index {index} out of range at `{path}` ({len} children)")]
    OutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

/// Applies `patches` in order to a retained tree.
///
/// This is the reference consumer of the patch stream: a native surface is
/// expected to perform the same steps on its own element tree. On error the
/// tree is left with every patch before the failing one applied.
pub fn apply_patches(tree: &mut Option<Node>, patches: &[Patch]) -> Result<(), ApplyError> {
    patches.iter().try_for_each(|patch| apply_patch(tree, patch))
}

fn apply_patch(tree: &mut Option<Node>, patch: &Patch) -> Result<(), ApplyError> {
    let path = patch.path();
    let (_, indices) = parse_path(path).ok_or_else(|| ApplyError::BadPath {
        path: path.to_owned(),
    })?;

    match patch {
        Patch::Insert { node, .. } => match indices.split_last() {
            None => {
                *tree = Some(node.clone());
                Ok(())
            }
            Some((&index, parent)) => {
                let parent = node_at(tree, parent, path)?;
                let len = parent.children.len();
                if index > len {
                    return Err(ApplyError::OutOfRange {
                        path: path.to_owned(),
                        index,
                        len,
                    });
                }
                parent.children.insert(index, node.clone());
                Ok(())
            }
        },
        Patch::Replace { node, .. } => {
            *node_at(tree, &indices, path)? = node.clone();
            Ok(())
        }
        Patch::Update { set, remove, .. } => {
            let target = node_at(tree, &indices, path)?;
            for (key, value) in set {
                target.props.insert(key.clone(), value.clone());
            }
            for key in remove {
                target.props.shift_remove(key);
            }
            Ok(())
        }
        Patch::UpdateStyle { style, .. } => {
            node_at(tree, &indices, path)?.style = style.clone();
            Ok(())
        }
        Patch::Remove { index, .. } => {
            let parent = node_at(tree, &indices, path)?;
            let len = parent.children.len();
            if *index >= len {
                return Err(ApplyError::OutOfRange {
                    path: path.to_owned(),
                    index: *index,
                    len,
                });
            }
            parent.children.remove(*index);
            Ok(())
        }
    }
}

fn node_at<'a>(
    tree: &'a mut Option<Node>,
    indices: &[usize],
    path: &str,
) -> Result<&'a mut Node, ApplyError> {
    let missing = || ApplyError::Missing {
        path: path.to_owned(),
    };
    let mut node = tree.as_mut().ok_or_else(missing)?;
    for &index in indices {
        node = node.children.get_mut(index).ok_or_else(missing)?;
    }
    Ok(node)
}

#[cfg(test)]
#[path = "tests/apply_tests.rs"]
mod tests;
