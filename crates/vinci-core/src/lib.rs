#![doc = r"Core pieces of the Vinci UI description framework: the node model, hook-style render contexts and the view trait."]

mod callback;
mod collections;
mod color;
mod config;
mod context;
mod error;
mod node;
mod slots;
mod style;
mod theme;
mod trigger;
mod value;
mod view;

pub use callback::{Callback, CallbackId, CallbackRegistry};
pub use color::{Color, ColorParseError};
pub use config::{AppConfig, ConfigError};
pub use context::{RenderContext, RenderContextBuilder, State};
pub use error::{CallbackError, SlotError};
pub use node::Node;
pub use style::{Alignment, Dp, EdgeInsets, FontWeight, Justify, Style, StyleProp};
pub use theme::{ComponentStyles, Palette, Theme};
pub use trigger::{NoopTrigger, RenderTrigger, STATE_CHANGED};
pub use value::{non_finite_label, PropValue, Props};
pub use view::{boxed, component, render_all, render_items, resolve_style, BoxedView, Item, View};

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod model_tests;
