//! Image widget implementation

#![allow(non_snake_case)]

use vinci_core::{Node, RenderContext, Style, StyleProp, View};

pub struct ImageView {
    src: String,
    styles: Vec<StyleProp>,
}

impl ImageView {
    pub fn style(mut self, style: StyleProp) -> Self {
        self.styles.push(style);
        self
    }
}

impl View for ImageView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let style: Style = ctx.theme().components.image.clone().refined(&self.styles);
        Node::new("Image")
            .with_prop("src", self.src.as_str())
            .with_style(style)
    }
}

pub fn Image(src: impl Into<String>) -> ImageView {
    ImageView {
        src: src.into(),
        styles: Vec::new(),
    }
}
