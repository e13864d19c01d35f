use thiserror::Error;

use crate::engine::scene::framing::FramingError;

/// Failures while bringing the model on screen. None of them are retried:
/// they are logged and reported to the host page.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to load model '{path}': {reason}")]
    ModelLoad { path: String, reason: String },
    #[error("model '{0}' contains no scenes")]
    EmptyModel(String),
    #[error("cannot frame model: {0}")]
    Framing(#[from] FramingError),
}
