use thiserror::Error;

/// Errors from the outer surfaces: reading input, loading config, writing
/// output. Tokenizing itself never fails.
#[derive(Error, Debug)]
pub enum RustlexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type RustlexResult<T> = Result<T, RustlexError>;

impl RustlexError {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        RustlexError::Internal(message.into())
    }
}
