use vinci_core::{Node, Props};

use crate::patch::{child_path, Patch};

/// Computes the patches that turn `previous` into `next`.
///
/// Patches come out in pre-order: a node's own insert, replace, prop and
/// style patches precede anything addressed below it. Children are matched by
/// position only, so a reordered list shows up as updates on the shared
/// prefix plus inserts or removes on the tail. Trailing removes are emitted
/// from the highest index down so that applying them in order never shifts
/// an index that is still to be removed.
pub fn diff(previous: Option<&Node>, next: &Node, path: &str) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_node(previous, next, path, &mut patches);
    log::trace!("diff at `{path}` produced {} patches", patches.len());
    patches
}

fn diff_node(previous: Option<&Node>, next: &Node, path: &str, out: &mut Vec<Patch>) {
    let Some(previous) = previous else {
        out.push(Patch::Insert {
            path: path.to_owned(),
            node: next.clone(),
        });
        return;
    };

    // positional identity below a type change means nothing
    if previous.kind != next.kind {
        out.push(Patch::Replace {
            path: path.to_owned(),
            node: next.clone(),
        });
        return;
    }

    diff_props(previous, next, path, out);

    if previous.style != next.style {
        out.push(Patch::UpdateStyle {
            path: path.to_owned(),
            style: next.style.clone(),
        });
    }

    diff_children(previous, next, path, out);
}

fn diff_props(previous: &Node, next: &Node, path: &str, out: &mut Vec<Patch>) {
    let mut set = Props::new();
    for (key, value) in &next.props {
        if previous.props.get(key) != Some(value) {
            set.insert(key.clone(), value.clone());
        }
    }

    let remove: Vec<String> = previous
        .props
        .keys()
        .filter(|key| !next.props.contains_key(key.as_str()))
        .cloned()
        .collect();

    if !set.is_empty() || !remove.is_empty() {
        out.push(Patch::Update {
            path: path.to_owned(),
            set,
            remove,
        });
    }
}

fn diff_children(previous: &Node, next: &Node, path: &str, out: &mut Vec<Patch>) {
    let shared = previous.children.len().min(next.children.len());

    for (index, (old, new)) in previous.children.iter().zip(&next.children).enumerate() {
        diff_node(Some(old), new, &child_path(path, index), out);
    }

    for (index, child) in next.children.iter().enumerate().skip(shared) {
        out.push(Patch::Insert {
            path: child_path(path, index),
            node: child.clone(),
        });
    }

    for index in (shared..previous.children.len()).rev() {
        out.push(Patch::Remove {
            path: path.to_owned(),
            index,
        });
    }
}

#[cfg(test)]
#[path = "tests/diff_tests.rs"]
mod tests;
