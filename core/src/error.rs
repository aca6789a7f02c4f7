// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
  #[error("User store I/O failed for '{path}'. Source: {source}")]
  StoreIo {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Serialization failed: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Password hashing failed: {0}")]
  PasswordHash(String),

  #[error("Internal ticketapp error: {0}")]
  Internal(String),
}

impl CoreError {
  pub(crate) fn store_io(path: &std::path::Path, source: std::io::Error) -> Self {
    CoreError::StoreIo {
      path: path.display().to_string(),
      source,
    }
  }
}

pub type CoreResult<T, E = CoreError> = std::result::Result<T, E>;
