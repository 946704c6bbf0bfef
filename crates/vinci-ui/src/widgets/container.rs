//! Row, Column and Card containers

#![allow(non_snake_case)]

use vinci_core::{
    render_items, resolve_style, ComponentStyles, Item, Node, Props, RenderContext, Style,
    StyleProp, View,
};

/// A styled container. Its style starts from the theme default for `kind`
/// and then takes the style directives of its item list in order; the child
/// views of the list render in order against the same context.
pub struct ContainerView {
    kind: &'static str,
    theme_style: fn(&ComponentStyles) -> &Style,
    items: Vec<Item>,
}

impl ContainerView {
    fn new(
        kind: &'static str,
        theme_style: fn(&ComponentStyles) -> &Style,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            kind,
            theme_style,
            items: items.into_iter().collect(),
        }
    }

    pub fn style(mut self, style: StyleProp) -> Self {
        self.items.push(Item::Style(style));
        self
    }

    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.items.push(Item::Child(Box::new(view)));
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl View for ContainerView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let style = resolve_style((self.theme_style)(&ctx.theme().components), &self.items);
        let children = render_items(ctx, &self.items);
        Node {
            kind: self.kind.to_owned(),
            props: Props::new(),
            style: Some(style),
            children,
        }
    }
}

fn row_style(styles: &ComponentStyles) -> &Style {
    &styles.row
}

fn column_style(styles: &ComponentStyles) -> &Style {
    &styles.column
}

fn card_style(styles: &ComponentStyles) -> &Style {
    &styles.card
}

pub fn Row(items: impl IntoIterator<Item = Item>) -> ContainerView {
    ContainerView::new("Row", row_style, items)
}

pub fn Column(items: impl IntoIterator<Item = Item>) -> ContainerView {
    ContainerView::new("Column", column_style, items)
}

pub fn Card(items: impl IntoIterator<Item = Item>) -> ContainerView {
    ContainerView::new("Card", card_style, items)
}
