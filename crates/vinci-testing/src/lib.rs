//! Testing utilities and harness for Vinci

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
