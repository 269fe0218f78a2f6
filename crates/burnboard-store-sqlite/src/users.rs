//! [`SqliteUserStore`]: the credential table.

use std::path::Path;

use burnboard_core::{
  store::UserStore,
  user::{NewUser, User},
};

use crate::{
  Result,
  connect::{Location, connect},
  encode::{RawUser, encode_role},
  schema,
};

/// Registered users, backed by `users.db`.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteUserStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteUserStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connect(Location::File(path.as_ref()), schema::USERS).await?;
    Ok(Self { conn })
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = connect(Location::Memory, schema::USERS).await?;
    Ok(Self { conn })
  }
}

impl UserStore for SqliteUserStore {
  type Error = crate::Error;

  async fn register(&self, input: NewUser) -> Result<User> {
    let role_str  = encode_role(input.role).to_owned();
    let hash_str  = input.password.as_str().to_owned();
    let username  = input.username.clone();
    let email     = input.email.clone();

    let user_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (username, email, role, password_hash)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![username, email, role_str, hash_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(user_id, "registered user");

    Ok(User {
      user_id,
      username: input.username,
      email:    input.email,
      role:     input.role,
    })
  }

  async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
    let email    = email.to_owned();
    let password = password.to_owned();

    // Hash verification is CPU-bound, so it runs on the connection thread
    // alongside the scan rather than on the async runtime.
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT user_id, username, email, role, password_hash
           FROM users WHERE email = ?1 ORDER BY user_id",
        )?;
        let candidates = stmt
          .query_map(rusqlite::params![email], RawUser::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(
          candidates
            .into_iter()
            .find(|raw| raw.password_hash().verify(&password)),
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}
