use std::rc::Rc;

use vinci_core::{
    component, AppConfig, Color, FontWeight, Node, PropValue, RenderContext, StyleProp, Theme,
    View,
};
use vinci_render::{RenderManager, StdTrigger};
use vinci_ui::{card, column, row, Button, Image, Item, SafeArea, Spacer, Text};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).unwrap_or_else(|err| {
            log::warn!("{err}, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    let theme = config
        .meta("theme")
        .and_then(Theme::preset)
        .unwrap_or_default();

    println!("=== Vinci Counter Example ===");
    println!("Renders once, clicks the buttons, and prints the patches each click produces.");

    let trigger = Rc::new(StdTrigger::new());
    let context = RenderContext::builder()
        .default_theme(theme)
        .config(config)
        .build();
    context.set_render_trigger(trigger.clone());

    let mut manager = RenderManager::new(context, counter_app());
    println!("\ninitial tree:\n{}", manager.initial_render());

    for label in ["Increment", "Increment", "Decrement", "Decrement"] {
        let Some(id) = manager.current_tree().and_then(|tree| callback_for(tree, label)) else {
            log::error!("no button labelled {label}");
            return;
        };
        if let Err(err) = manager.dispatch(&id, None) {
            log::error!("{err}");
            return;
        }
        if !trigger.take_render_request() {
            continue;
        }
        match manager.re_render() {
            Ok(patches) => println!("\n{label} ->\n{patches}"),
            Err(err) => log::error!("{err}"),
        }
    }
}

fn counter_app() -> impl View {
    component(|ctx: &mut RenderContext| {
        let title = match ctx.config().name.as_str() {
            "" => String::from("Counter"),
            name => name.to_owned(),
        };
        let count = ctx.use_state(0i32);
        let increment = count.clone();
        let decrement = count.clone();
        let value = count.get();

        SafeArea(column![
            StyleProp::padding(24.0),
            row![
                Image("logo.png").style(StyleProp::size(32.0, 32.0)),
                Text(title).style(StyleProp::font_weight(FontWeight::Bold)),
            ],
            Spacer(16),
            card![
                Text(format!("Count: {value}")).style(StyleProp::font_size(32.0)),
                Item::when(
                    value > 0,
                    Text("above zero").style(StyleProp::color(Color::rgb(0x16, 0xa3, 0x4a))),
                ),
            ],
            row![
                Button("Decrement", move || decrement.update(|n| *n -= 1)),
                Button("Increment", move || increment.update(|n| *n += 1)),
            ],
        ])
    })
}

fn callback_for(tree: &Node, label: &str) -> Option<String> {
    if tree.prop("label").and_then(PropValue::as_str) == Some(label) {
        return tree
            .prop("onClick")
            .and_then(PropValue::as_str)
            .map(str::to_owned);
    }
    tree.children
        .iter()
        .find_map(|child| callback_for(child, label))
}
