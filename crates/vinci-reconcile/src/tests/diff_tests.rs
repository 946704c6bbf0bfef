use super::*;
use crate::patch::ROOT_PATH;
use crate::patch::parse_path;
use vinci_core::{Color, PropValue, Style, StyleProp};

fn image(src: &str) -> Node {
    Node::new("Image").with_prop("src", src)
}

fn sample_tree() -> Node {
    Node::new("Column")
        .with_style(Style::new().refined([&StyleProp::gap(4.0)]))
        .with_child(Node::new("Row").with_child(image("a.png")).with_child(image("b.png")))
        .with_child(Node::new("Spacer").with_prop("size", 12))
        .with_child(Node::new("Card").with_child(Node::new("Text").with_prop("text", "hi")))
}

#[test]
fn identical_trees_produce_no_patches() {
    let tree = sample_tree();
    assert!(diff(Some(&tree), &tree.clone(), ROOT_PATH).is_empty());
}

#[test]
fn nan_props_do_not_produce_patches() {
    let tree = Node::new("Gauge").with_prop("value", PropValue::Float(f64::NAN));
    assert!(diff(Some(&tree), &tree.clone(), ROOT_PATH).is_empty());
}

#[test]
fn missing_previous_tree_inserts_the_whole_tree() {
    let tree = sample_tree();

    let patches = diff(None, &tree, ROOT_PATH);

    assert_eq!(
        patches,
        vec![Patch::Insert {
            path: "root".into(),
            node: tree
        }]
    );
}

#[test]
fn type_change_replaces_without_descending() {
    let children = vec![image("a.png"), image("b.png")];
    let previous = Node::new("Row").with_children(children.clone());
    let next = Node::new("Column").with_children(children);

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert_eq!(
        patches,
        vec![Patch::Replace {
            path: "root".into(),
            node: next
        }]
    );
}

#[test]
fn changed_prop_yields_a_single_update() {
    let patches = diff(Some(&image("a.png")), &image("b.png"), ROOT_PATH);

    assert_eq!(patches.len(), 1);
    match &patches[0] {
        Patch::Update { path, set, remove } => {
            assert_eq!(path, "root");
            assert_eq!(set.get("src").and_then(|v| v.as_str()), Some("b.png"));
            assert_eq!(set.len(), 1);
            assert!(remove.is_empty());
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn dropped_and_added_props_share_one_update() {
    let previous = Node::new("Text")
        .with_prop("text", "a")
        .with_prop("selectable", true);
    let next = Node::new("Text").with_prop("text", "a").with_prop("lines", 2);

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert_eq!(patches.len(), 1);
    match &patches[0] {
        Patch::Update { set, remove, .. } => {
            assert_eq!(set.keys().collect::<Vec<_>>(), vec!["lines"]);
            assert_eq!(remove, &vec!["selectable".to_string()]);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn style_change_carries_the_full_new_style() {
    let base = Style::new().refined([&StyleProp::padding(4.0), &StyleProp::gap(2.0)]);
    let changed = base.clone().refined([&StyleProp::background(Color::BLACK)]);
    let previous = Node::new("Card").with_style(base);
    let next = Node::new("Card").with_style(changed.clone());

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert_eq!(
        patches,
        vec![Patch::UpdateStyle {
            path: "root".into(),
            style: Some(changed)
        }]
    );
}

#[test]
fn removed_style_is_sent_as_none() {
    let previous = Node::new("Card").with_style(Style::new().refined([&StyleProp::gap(1.0)]));
    let next = Node::new("Card");

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert_eq!(
        patches,
        vec![Patch::UpdateStyle {
            path: "root".into(),
            style: None
        }]
    );
}

#[test]
fn shrinking_children_removes_from_the_end() {
    let previous = Node::new("Column")
        .with_child(image("a.png"))
        .with_child(image("b.png"))
        .with_child(image("c.png"));
    let next = Node::new("Column").with_child(image("a.png"));

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert_eq!(
        patches,
        vec![
            Patch::Remove {
                path: "root".into(),
                index: 2
            },
            Patch::Remove {
                path: "root".into(),
                index: 1
            },
        ]
    );
}

#[test]
fn growing_children_inserts_at_new_indices() {
    let previous = Node::new("Row").with_child(image("a.png"));
    let next = Node::new("Row")
        .with_child(image("a.png"))
        .with_child(image("b.png"))
        .with_child(image("c.png"));

    let paths: Vec<String> = diff(Some(&previous), &next, ROOT_PATH)
        .iter()
        .map(|patch| match patch {
            Patch::Insert { path, .. } => path.clone(),
            other => panic!("expected insert, got {other:?}"),
        })
        .collect();

    assert_eq!(paths, vec!["root/1", "root/2"]);
}

#[test]
fn nested_changes_are_addressed_by_index_path_in_pre_order() {
    let previous = sample_tree();
    let mut next = sample_tree();
    next.props.insert("id".into(), "main".into());
    next.children[0].children[1] = image("z.png");
    next.children[2].children[0] = Node::new("Text").with_prop("text", "bye");

    let patches = diff(Some(&previous), &next, ROOT_PATH);
    let paths: Vec<&str> = patches.iter().map(Patch::path).collect();

    assert_eq!(paths, vec!["root", "root/0/1", "root/2/0"]);
}

#[test]
fn reordering_is_seen_positionally() {
    let previous = Node::new("Column")
        .with_child(Node::new("Text").with_prop("text", "a"))
        .with_child(image("x.png"));
    let next = Node::new("Column")
        .with_child(image("x.png"))
        .with_child(Node::new("Text").with_prop("text", "a"));

    let patches = diff(Some(&previous), &next, ROOT_PATH);

    assert!(matches!(&patches[0], Patch::Replace { path, .. } if path == "root/0"));
    assert!(matches!(&patches[1], Patch::Replace { path, .. } if path == "root/1"));
    assert_eq!(patches.len(), 2);
}

#[test]
fn diff_is_deterministic() {
    let previous = sample_tree();
    let mut next = sample_tree();
    for key in ["z", "a", "m", "b"] {
        next.props.insert(key.into(), key.into());
    }
    next.children.truncate(1);

    let first = diff(Some(&previous), &next, ROOT_PATH);
    for _ in 0..10 {
        assert_eq!(diff(Some(&previous), &next, ROOT_PATH), first);
    }
    match &first[0] {
        Patch::Update { set, .. } => {
            assert_eq!(set.keys().collect::<Vec<_>>(), vec!["z", "a", "m", "b"]);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn custom_root_name_prefixes_every_path() {
    let previous = Node::new("Row").with_child(image("a.png"));
    let next = Node::new("Row").with_child(image("b.png"));

    let patches = diff(Some(&previous), &next, "screen");

    assert_eq!(patches[0].path(), "screen/0");
}

#[test]
fn patches_encode_with_an_op_tag() {
    let patches = vec![
        Patch::Remove {
            path: "root".into(),
            index: 3,
        },
        Patch::Update {
            path: "root/0".into(),
            set: [("src".to_string(), "b.png".into())].into_iter().collect(),
            remove: Vec::new(),
        },
    ];

    let encoded = serde_json::to_value(&patches).expect("patches encode");

    assert_eq!(
        encoded,
        serde_json::json!([
            { "op": "remove", "path": "root", "index": 3 },
            { "op": "update", "path": "root/0", "set": { "src": "b.png" } }
        ])
    );
}

#[test]
fn encoded_patches_decode_to_the_same_list() {
    let previous = sample_tree();
    let mut next = sample_tree();
    next.style = None;
    next.children[0].children.pop();
    next.children[1] = Node::new("Spacer").with_prop("size", 16);
    next.children.push(image("c.png"));

    let patches = diff(Some(&previous), &next, ROOT_PATH);
    let encoded = serde_json::to_string(&patches).expect("patches encode");
    let decoded: Vec<Patch> = serde_json::from_str(&encoded).expect("patches decode");

    assert_eq!(decoded, patches);
}

#[test]
fn root_names_parse_back_unless_they_contain_a_slash() {
    let patches = diff(None, &image("a.png"), "screen");
    let child = crate::patch::child_path(patches[0].path(), 2);
    assert_eq!(parse_path(&child), Some(("screen", vec![2])));

    assert_eq!(parse_path("main/screen/2"), None);
}
