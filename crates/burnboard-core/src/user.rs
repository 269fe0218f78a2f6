//! Credential records for the auth store.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, password::PasswordHash};

/// Access level chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  User,
  Admin,
}

impl Role {
  pub fn as_str(self) -> &'static str {
    match self {
      Role::User => "user",
      Role::Admin => "admin",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "user" => Ok(Role::User),
      "admin" => Ok(Role::Admin),
      other => Err(Error::UnknownRole(other.to_owned())),
    }
  }
}

/// A registered user as returned by the auth store. The password hash stays
/// inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub user_id:  i64,
  pub username: String,
  pub email:    String,
  pub role:     Role,
}

/// Input to [`crate::store::UserStore::register`].
#[derive(Debug, Clone)]
pub struct NewUser {
  pub username: String,
  pub email:    String,
  pub role:     Role,
  pub password: PasswordHash,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_parses_and_displays() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!(Role::User.to_string(), "user");
    assert!(matches!("root".parse::<Role>(), Err(Error::UnknownRole(r)) if r == "root"));
  }

  #[test]
  fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
  }
}
