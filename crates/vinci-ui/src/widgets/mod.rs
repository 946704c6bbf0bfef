//! UI widget builders

pub mod button;
pub mod container;
pub mod image;
pub mod scope;
pub mod spacer;
pub mod structure;
pub mod text;

pub use button::*;
pub use container::*;
pub use image::*;
pub use scope::*;
pub use spacer::*;
pub use structure::*;
pub use text::*;
