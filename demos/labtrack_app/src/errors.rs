// labtrack_app/src/errors.rs

use labtrack::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {source}")]
  Store {
    #[from] // Allows conversion from labtrack::StoreError
    source: StoreError,
  },

  #[error("Internal Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in code using `?` on functions returning anyhow::Result
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<StoreError>() {
      // We already have `From<StoreError>`, but this handles if it was wrapped in anyhow
      match err.downcast::<StoreError>() {
        Ok(store_err) => return AppError::Store { source: store_err },
        Err(other) => return AppError::Internal(other.to_string()),
      }
    }
    AppError::Internal(err.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
