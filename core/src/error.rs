// cartflow_core/src/error.rs
use crate::cart::ProductId;
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Validation failed for '{field}': {message}")]
  Validation { field: String, message: String },

  #[error("Your cart is empty!")]
  EmptyCart,

  #[error("Product not found: {id}")]
  ProductNotFound { id: ProductId },

  #[error("Mount point missing for surface '{surface}'")]
  MountNotFound { surface: String },

  #[error("A checkout submission is already in flight")]
  SubmissionInFlight,

  #[error("Catalog lookup failed. Source: {source}")]
  Catalog {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal cartflow error: {0}")]
  Internal(String),
}

impl CartError {
  /// Shorthand for a field-level validation failure with a user-visible message.
  pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
    CartError::Validation {
      field: field.into(),
      message: message.into(),
    }
  }

  pub fn storage(source: impl Into<AnyhowError>) -> Self {
    CartError::Storage { source: source.into() }
  }

  /// True for the errors that block progress (the user must act);
  /// everything else in the taxonomy degrades gracefully.
  pub fn is_blocking(&self) -> bool {
    matches!(
      self,
      CartError::Validation { .. } | CartError::EmptyCart | CartError::SubmissionInFlight
    )
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
