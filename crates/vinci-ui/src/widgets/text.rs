//! Text widget implementation

#![allow(non_snake_case)]

use vinci_core::{Node, RenderContext, StyleProp, View};

pub struct TextView {
    value: String,
    styles: Vec<StyleProp>,
}

impl TextView {
    pub fn style(mut self, style: StyleProp) -> Self {
        self.styles.push(style);
        self
    }
}

impl View for TextView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let style = ctx.theme().components.text.clone().refined(&self.styles);
        Node::new("Text")
            .with_prop("text", self.value.as_str())
            .with_style(style)
    }
}

pub fn Text(value: impl Into<String>) -> TextView {
    TextView {
        value: value.into(),
        styles: Vec::new(),
    }
}
