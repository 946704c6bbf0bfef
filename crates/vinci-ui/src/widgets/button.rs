//! Button widget implementation

#![allow(non_snake_case)]

use std::rc::Rc;

use vinci_core::{Node, RenderContext, StyleProp, View};

/// A labelled button. Each render registers the click handler through
/// [`RenderContext::use_callback`] and publishes its id as the `onClick`
/// prop, so the id stays the same while the button keeps its position.
pub struct ButtonView {
    label: String,
    on_click: Rc<dyn Fn()>,
    styles: Vec<StyleProp>,
}

impl ButtonView {
    pub fn style(mut self, style: StyleProp) -> Self {
        self.styles.push(style);
        self
    }
}

impl View for ButtonView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let on_click = Rc::clone(&self.on_click);
        let id = ctx.use_callback(move |_| on_click());
        let style = ctx.theme().components.button.clone().refined(&self.styles);
        Node::new("Button")
            .with_prop("label", self.label.as_str())
            .with_prop("onClick", id)
            .with_style(style)
    }
}

pub fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> ButtonView {
    ButtonView {
        label: label.into(),
        on_click: Rc::new(on_click),
        styles: Vec::new(),
    }
}
