use thiserror::Error;

/// Errors raised by the permutation engine.
///
/// Every variant is detected before any buffer is allocated, so a failed call
/// never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TesseraError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TesseraError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TesseraError::InvalidArgument(msg.into())
    }
}
