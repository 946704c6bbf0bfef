//! Widget builders that compose [`View`]s into node trees.
//!
//! Containers (`Row`, `Column`, `Card`) take a mixed list of style
//! directives and child views; see the [`row!`], [`column!`] and [`card!`]
//! macros for the usual way to write them.

mod macros;
pub mod widgets;

pub use vinci_core::{
    boxed, component, BoxedView, Color, Item, Node, RenderContext, StyleProp, Theme, View,
};
pub use widgets::*;

#[cfg(test)]
#[path = "tests/widgets_tests.rs"]
mod tests;
