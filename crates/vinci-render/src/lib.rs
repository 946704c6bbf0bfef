//! Drives render passes over a root view and encodes their output.
//!
//! [`RenderManager`] owns the root [`RenderContext`](vinci_core::RenderContext)
//! and the retained tree. The first pass yields the whole tree, later passes
//! yield the patches that bring a consumer from the retained tree to the new
//! one.

mod encode;
mod error;
mod manager;
mod trigger;

pub use encode::{encode, try_encode, ENCODE_FAILURE};
pub use error::{EncodeError, RenderError};
pub use manager::{PassOutput, RenderManager};
pub use trigger::StdTrigger;
