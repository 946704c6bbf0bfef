//! Reconciliation between two node snapshots.
//!
//! [`diff`] turns a previous and a new tree into the ordered patch list that
//! brings a retained copy of the previous tree in line with the new one.
//! [`apply_patches`] is the reference consumer of that list.

mod apply;
mod diff;
mod patch;

pub use apply::{apply_patches, ApplyError};
pub use diff::diff;
pub use patch::{child_path, parse_path, Patch, ROOT_PATH};
