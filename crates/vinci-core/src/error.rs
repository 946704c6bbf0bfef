use thiserror::Error;

/// A hook slot was read back with a different type than it was created with.
///
/// This almost always means the number or order of `use_*` calls changed
/// between two render passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("hook slot {index} holds `{found}` but `{expected}` was requested; hook call order changed between passes")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    #[error("no callback registered under id `{id}`")]
    Unknown { id: String },
}
