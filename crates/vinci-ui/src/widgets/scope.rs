//! Views that render their content in a child context.

#![allow(non_snake_case)]

use std::rc::Rc;

use vinci_core::{Node, RenderContext, Theme, View};

use super::structure::collapse_fragment;

/// Renders `view` with its own hook slots, so its state does not shift when
/// siblings add or drop hook calls.
pub struct IsolatedView<V> {
    view: V,
}

impl<V: View> View for IsolatedView<V> {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        self.view.render(ctx.use_child_context())
    }
}

pub fn Isolated<V: View>(view: V) -> IsolatedView<V> {
    IsolatedView { view }
}

/// Renders `view` in a child context whose theme is replaced.
pub struct ThemedView<V> {
    theme: Rc<Theme>,
    view: V,
}

impl<V: View> View for ThemedView<V> {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let child = ctx.use_child_context();
        child.set_theme(Some(Rc::clone(&self.theme)));
        self.view.render(child)
    }
}

pub fn Themed<V: View>(theme: Theme, view: V) -> ThemedView<V> {
    ThemedView {
        theme: Rc::new(theme),
        view,
    }
}

/// One child context per item, matched by position. The result collapses
/// like a [`Fragment`](super::Fragment).
pub struct ForEachView<T, F> {
    items: Vec<T>,
    build: F,
}

impl<T, V, F> View for ForEachView<T, F>
where
    V: View,
    F: Fn(&T) -> V,
{
    fn render(&self, ctx: &mut RenderContext) -> Node {
        let nodes = self
            .items
            .iter()
            .map(|item| (self.build)(item).render(ctx.use_child_context()))
            .collect();
        collapse_fragment(nodes)
    }
}

pub fn ForEach<T, V, F>(items: impl IntoIterator<Item = T>, build: F) -> ForEachView<T, F>
where
    V: View,
    F: Fn(&T) -> V,
{
    ForEachView {
        items: items.into_iter().collect(),
        build,
    }
}
