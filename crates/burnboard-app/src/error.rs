//! Service error type. The `Display` strings double as the messages shown to
//! the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("all fields are required")]
  AllFieldsRequired,

  #[error("please enter email and password")]
  CredentialsRequired,

  #[error("passwords do not match")]
  PasswordMismatch,

  #[error("invalid credentials")]
  InvalidCredentials,

  #[error(transparent)]
  Validation(#[from] burnboard_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
