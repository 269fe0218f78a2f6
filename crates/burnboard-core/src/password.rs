//! Argon2 password hashing for stored credentials.
//!
//! Only the PHC string (`$argon2id$v=19$…`) is ever persisted. Comparison
//! happens through [`PasswordHash::verify`], never on plaintext.

use argon2::{
  Argon2, PasswordHasher, PasswordVerifier,
  password_hash::{self, SaltString},
};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An argon2 PHC string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Hash `password` with a fresh random salt.
  pub fn new(password: &str) -> Result<Self> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| Error::PasswordHash(e.to_string()))?
      .to_string();
    Ok(Self(hash))
  }

  /// Wrap a PHC string read back from storage.
  pub fn from_phc(phc: impl Into<String>) -> Self { Self(phc.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  /// `true` when `password` hashes to this value. A malformed stored hash
  /// never verifies.
  pub fn verify(&self, password: &str) -> bool {
    let Ok(parsed) = password_hash::PasswordHash::new(&self.0) else {
      return false;
    };
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed)
      .is_ok()
  }
}

impl std::fmt::Debug for PasswordHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("PasswordHash(..)")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verifies_the_hashed_password() {
    let hash = PasswordHash::new("hunter2").unwrap();
    assert!(hash.as_str().starts_with("$argon2"));
    assert!(hash.verify("hunter2"));
    assert!(!hash.verify("hunter3"));
  }

  #[test]
  fn same_password_gets_distinct_salts() {
    let a = PasswordHash::new("secret").unwrap();
    let b = PasswordHash::new("secret").unwrap();
    assert_ne!(a, b);
    assert!(a.verify("secret") && b.verify("secret"));
  }

  #[test]
  fn malformed_hash_never_verifies() {
    let hash = PasswordHash::from_phc("plaintext");
    assert!(!hash.verify("plaintext"));
  }

  #[test]
  fn debug_hides_hash() {
    let hash = PasswordHash::new("secret").unwrap();
    assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
  }
}
