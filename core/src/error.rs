// core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

/// Failure modes of the in-memory stores.
///
/// A failed operation leaves the store unchanged; nothing is retried and
/// nothing is fatal. Callers decide whether and how a failure is surfaced.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: Uuid },

  #[error("Duplicate {0}")]
  Duplicate(String),

  #[error("Session backend error. Source: {source}")]
  Session {
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  /// Shorthand for the not-found case, used by every id-addressed mutation.
  pub(crate) fn not_found(entity: &'static str, id: Uuid) -> Self {
    StoreError::NotFound { entity, id }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
