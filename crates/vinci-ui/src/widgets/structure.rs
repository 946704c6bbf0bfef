//! Scroll, SafeArea and Fragment: structural wrappers without theme styling

#![allow(non_snake_case)]

use vinci_core::{render_all, BoxedView, Node, RenderContext, View};

pub struct ScrollView {
    children: Vec<BoxedView>,
}

impl View for ScrollView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        Node::new("Scroll").with_children(render_all(ctx, &self.children))
    }
}

pub fn Scroll(children: Vec<BoxedView>) -> ScrollView {
    ScrollView { children }
}

pub struct SafeAreaView {
    child: BoxedView,
}

impl View for SafeAreaView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        Node::new("SafeArea").with_child(self.child.render(ctx))
    }
}

pub fn SafeArea(child: impl View + 'static) -> SafeAreaView {
    SafeAreaView {
        child: Box::new(child),
    }
}

/// Groups views without adding structure when there is only one of them.
pub struct FragmentView {
    children: Vec<BoxedView>,
}

impl View for FragmentView {
    fn render(&self, ctx: &mut RenderContext) -> Node {
        collapse_fragment(render_all(ctx, &self.children))
    }
}

pub fn Fragment(children: Vec<BoxedView>) -> FragmentView {
    FragmentView { children }
}

/// A single node stands for itself; zero or several get a `Fragment` wrapper.
pub(crate) fn collapse_fragment(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        if let Some(node) = nodes.pop() {
            return node;
        }
    }
    Node::new("Fragment").with_children(nodes)
}
