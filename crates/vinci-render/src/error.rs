use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("re-render requested before the initial render")]
    NotInitialized,
}

#[derive(Debug, Error)]
#[error("failed to encode render output: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);
