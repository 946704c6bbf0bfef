//! Spacer widget implementation

#![allow(non_snake_case)]

use vinci_core::{Node, RenderContext, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpacerView {
    size: u32,
}

impl View for SpacerView {
    fn render(&self, _ctx: &mut RenderContext) -> Node {
        Node::new("Spacer").with_prop("size", self.size)
    }
}

pub fn Spacer(size: u32) -> SpacerView {
    SpacerView { size }
}
