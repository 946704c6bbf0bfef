use super::*;
use serde_json::json;

#[test]
fn node_serializes_with_type_tag_and_omits_empty_fields() {
    let node = Node::new("Column").with_child(Node::new("Image").with_prop("src", "a.png"));

    let encoded = serde_json::to_value(&node).expect("node encodes");

    assert_eq!(
        encoded,
        json!({
            "type": "Column",
            "children": [{ "type": "Image", "props": { "src": "a.png" } }]
        })
    );
}

#[test]
fn node_round_trips_through_json() {
    let node = Node::new("Card")
        .with_prop("elevation", 2)
        .with_prop("ratio", 1.5)
        .with_prop("visible", true)
        .with_style(Style::new().refined([&StyleProp::padding(4.0)]))
        .with_child(Node::new("Spacer").with_prop("size", 8));

    let text = serde_json::to_string(&node).expect("node encodes");
    let decoded: Node = serde_json::from_str(&text).expect("node decodes");

    assert_eq!(decoded, node);
}

#[test]
fn nan_props_equal_themselves() {
    let value = PropValue::Float(f64::NAN);
    assert_eq!(value, value.clone());
    assert_ne!(PropValue::Float(1.0), PropValue::Int(1));
}

#[test]
fn non_finite_floats_survive_json() {
    let node = Node::new("Image")
        .with_prop("opacity", f64::NAN)
        .with_prop("scale", f32::INFINITY)
        .with_prop("offset", f64::NEG_INFINITY)
        .with_prop("ratio", 0.5);
    assert_eq!(node.prop("opacity"), Some(&PropValue::Text("NaN".into())));

    let encoded = serde_json::to_string(&node).expect("encode");
    assert_eq!(
        encoded,
        r#"{"type":"Image","props":{"opacity":"NaN","scale":"inf","offset":"-inf","ratio":0.5}}"#
    );
    let decoded: Node = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(decoded, node);

    let raw = PropValue::Float(f64::NAN);
    let decoded: PropValue =
        serde_json::from_str(&serde_json::to_string(&raw).expect("encode")).expect("decode");
    assert_eq!(decoded, PropValue::Text("NaN".into()));
}

#[test]
fn record_equality_ignores_key_order() {
    let mut a = indexmap::IndexMap::new();
    a.insert("x".to_string(), PropValue::from(1));
    a.insert("y".to_string(), PropValue::from(2));
    let mut b = indexmap::IndexMap::new();
    b.insert("y".to_string(), PropValue::from(2));
    b.insert("x".to_string(), PropValue::from(1));

    assert_eq!(PropValue::Record(a), PropValue::Record(b));
}

#[test]
fn later_style_directives_win() {
    let base = Style {
        gap: Some(Dp(8.0)),
        background: Some(Color::WHITE),
        ..Style::default()
    };
    let items = vec![
        Item::from(StyleProp::background(Color::BLACK)),
        Item::from(StyleProp::padding(4.0)),
        Item::from(StyleProp::background(Color::rgb(0xff, 0, 0))),
    ];

    let style = resolve_style(&base, &items);

    assert_eq!(style.gap, Some(Dp(8.0)));
    assert_eq!(style.padding, Some(EdgeInsets::uniform(4.0)));
    assert_eq!(style.background, Some(Color::rgb(0xff, 0, 0)));
}

#[test]
fn items_partition_into_styles_and_children() {
    let mut ctx = RenderContext::new();
    let items = vec![
        Item::from(Node::new("A")),
        Item::from(StyleProp::gap(2.0)),
        Item::when(false, Node::new("Hidden")),
        Item::optional(Some(Node::new("B"))),
        Item::optional(None::<Node>),
    ];

    let children = render_items(&mut ctx, &items);

    let kinds: Vec<&str> = children.iter().map(|node| node.kind.as_str()).collect();
    assert_eq!(kinds, vec!["A", "B"]);
}

#[test]
fn color_hex_forms() {
    assert_eq!(Color::from_hex("#fff"), Ok(Color::WHITE));
    assert_eq!(Color::from_hex("102030"), Ok(Color::rgb(0x10, 0x20, 0x30)));
    assert_eq!(
        Color::from_hex("#10203080"),
        Ok(Color::rgba(0x10, 0x20, 0x30, 0x80))
    );
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn color_hex_rejects_signs_and_non_ascii() {
    assert!(Color::from_hex("#+1+2+3").is_err());
    assert!(Color::from_hex("+ff").is_err());
    assert!(Color::from_hex("#-10203").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn color_hex_formats() {

    assert_eq!(Color::rgb(0x10, 0x20, 0x30).to_string(), "#102030");
    assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    assert_eq!(
        serde_json::to_value(Color::rgb(1, 2, 3)).expect("color encodes"),
        json!("#010203")
    );
}

#[test]
fn style_serializes_only_set_fields_in_camel_case() {
    let style = Style::new().refined([
        &StyleProp::corner_radius(6.0),
        &StyleProp::font_weight(FontWeight::Bold),
    ]);

    assert_eq!(
        serde_json::to_value(&style).expect("style encodes"),
        json!({ "cornerRadius": 6.0, "fontWeight": "bold" })
    );
}

#[test]
fn app_config_parses_partial_toml() {
    let config = AppConfig::from_toml_str(
        r#"
        name = "Gallery"
        version = "0.3.0"

        [meta]
        channel = "beta"
        "#,
    )
    .expect("valid config");

    assert_eq!(config.name, "Gallery");
    assert_eq!(config.locale, "");
    assert_eq!(config.meta("channel"), Some("beta"));
}

#[test]
fn app_config_reports_parse_errors() {
    let err = AppConfig::from_toml_str("name = [").expect_err("invalid toml");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn app_config_reports_missing_files() {
    let err = AppConfig::load("/definitely/not/here.toml").expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn theme_parses_from_toml() {
    let theme = Theme::from_toml_str(
        r##"
        name = "custom"

        [palette]
        primary = "#ff0000"
        onPrimary = "#ffffff"
        background = "#000000"
        surface = "#111111"
        text = "#eeeeee"
        muted = "#888888"

        [components.card]
        cornerRadius = 4.0
        "##,
    )
    .expect("valid theme");

    assert_eq!(theme.name, "custom");
    assert_eq!(theme.palette.primary, Color::rgb(0xff, 0, 0));
    assert_eq!(theme.components.card.corner_radius, Some(Dp(4.0)));
    assert_eq!(theme.components.row, Style::default());
}

#[test]
fn presets_are_found_by_name() {
    assert_eq!(Theme::preset("dark").map(|theme| theme.name), Some("dark".into()));
    assert!(Theme::preset("neon").is_none());
    assert_eq!(Theme::default(), Theme::light());
}
