//! Error types for `burnboard-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required input field was empty or whitespace only.
  #[error("{0} must not be blank")]
  BlankField(&'static str),

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("password hashing failed: {0}")]
  PasswordHash(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fail with [`Error::BlankField`] when `value` is empty after trimming.
pub fn require(field: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::BlankField(field));
  }
  Ok(())
}
