use std::io;

use thiserror::Error;

/// Error type for ddoc-document operations
#[derive(Debug, Error)]
pub enum DocumentError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("Store error: {0}")]
  Store(String),

  #[error("Unknown toolbar action: '{0}'")]
  UnknownAction(String),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
