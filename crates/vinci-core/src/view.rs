//! The [`View`] trait and the mixed style/child item lists that container
//! builders accept.

use std::fmt;

use crate::context::RenderContext;
use crate::node::Node;
use crate::style::{Style, StyleProp};

/// Anything that can produce a [`Node`] from a render context.
///
/// For a fixed context state, rendering must be deterministic and must
/// produce exactly one node.
pub trait View {
    fn render(&self, ctx: &mut RenderContext) -> Node;
}

pub type BoxedView = Box<dyn View>;

impl<F> View for F
where
    F: Fn(&mut RenderContext) -> Node,
{
    fn render(&self, ctx: &mut RenderContext) -> Node {
        self(ctx)
    }
}

impl View for Box<dyn View> {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        (**self).render(ctx)
    }
}

impl View for Node {
    fn render(&self, _ctx: &mut RenderContext) -> Node {
        self.clone()
    }
}

pub fn boxed(view: impl View + 'static) -> BoxedView {
    Box::new(view)
}

/// Wraps a function that builds a view from the context into a view.
///
/// The function runs on every render pass, which is where components make
/// their `use_*` calls.
pub fn component<V, F>(build: F) -> impl View
where
    V: View,
    F: Fn(&mut RenderContext) -> V,
{
    move |ctx: &mut RenderContext| build(ctx).render(ctx)
}

/// One entry of a container's argument list: either a style directive or a
/// child view. `Empty` entries are skipped, which is how conditional
/// children are expressed.
pub enum Item {
    Style(StyleProp),
    Child(BoxedView),
    Empty,
}

impl Item {
    pub fn optional(view: Option<impl View + 'static>) -> Self {
        match view {
            Some(view) => Item::Child(Box::new(view)),
            None => Item::Empty,
        }
    }

    pub fn when(condition: bool, view: impl View + 'static) -> Self {
        if condition {
            Item::Child(Box::new(view))
        } else {
            Item::Empty
        }
    }
}

impl From<StyleProp> for Item {
    fn from(style: StyleProp) -> Self {
        Item::Style(style)
    }
}

impl<V: View + 'static> From<V> for Item {
    fn from(view: V) -> Self {
        Item::Child(Box::new(view))
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Style(style) => f.debug_tuple("Style").field(style).finish(),
            Item::Child(_) => f.write_str("Child(..)"),
            Item::Empty => f.write_str("Empty"),
        }
    }
}

/// Applies the style directives of `items` in order on top of `base`.
pub fn resolve_style(base: &Style, items: &[Item]) -> Style {
    base.clone().refined(items.iter().filter_map(|item| match item {
        Item::Style(style) => Some(style),
        _ => None,
    }))
}

/// Renders the child views of `items` in order against `ctx`.
pub fn render_items(ctx: &mut RenderContext, items: &[Item]) -> Vec<Node> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Child(view) => Some(view.render(ctx)),
            _ => None,
        })
        .collect()
}

pub fn render_all(ctx: &mut RenderContext, views: &[BoxedView]) -> Vec<Node> {
    views.iter().map(|view| view.render(ctx)).collect()
}
