//! Registration and login on top of a [`UserStore`].

use std::sync::Arc;

use burnboard_core::{
  password::PasswordHash,
  store::UserStore,
  user::{NewUser, Role, User},
};

use crate::{Error, Result};

/// Everything the registration form collects.
#[derive(Debug, Clone, Default)]
pub struct Registration {
  pub username:         String,
  pub email:            String,
  pub password:         String,
  pub confirm_password: String,
  pub role:             Role,
}

impl Registration {
  fn validate(&self) -> Result<()> {
    let fields = [
      &self.username,
      &self.email,
      &self.password,
      &self.confirm_password,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
      return Err(Error::AllFieldsRequired);
    }
    if self.password != self.confirm_password {
      return Err(Error::PasswordMismatch);
    }
    Ok(())
  }
}

pub struct AuthService<S> {
  store: Arc<S>,
}

impl<S: UserStore> AuthService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Validate the form, hash the password and register the user. An email
  /// that is already registered is accepted again.
  pub async fn register(&self, form: Registration) -> Result<User> {
    form.validate()?;

    let input = NewUser {
      username: form.username,
      email:    form.email,
      role:     form.role,
      password: PasswordHash::new(&form.password)?,
    };

    let user = self.store.register(input).await.map_err(Error::store)?;
    tracing::info!(user_id = user.user_id, role = %user.role, "user registered");
    Ok(user)
  }

  pub async fn login(&self, email: &str, password: &str) -> Result<User> {
    if email.trim().is_empty() || password.trim().is_empty() {
      return Err(Error::CredentialsRequired);
    }

    match self.store.login(email, password).await.map_err(Error::store)? {
      Some(user) => {
        tracing::info!(user_id = user.user_id, "login succeeded");
        Ok(user)
      }
      None => {
        tracing::debug!("login rejected");
        Err(Error::InvalidCredentials)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use burnboard_store_sqlite::SqliteUserStore;

  async fn service() -> AuthService<SqliteUserStore> {
    let store = SqliteUserStore::open_in_memory().await.expect("in-memory store");
    AuthService::new(Arc::new(store))
  }

  fn form(email: &str, password: &str) -> Registration {
    Registration {
      username:         "samantha".into(),
      email:            email.into(),
      password:         password.into(),
      confirm_password: password.into(),
      role:             Role::User,
    }
  }

  #[tokio::test]
  async fn registered_user_can_log_in() {
    let auth = service().await;
    let user = auth.register(form("sam@example.com", "s3cret")).await.unwrap();

    let logged_in = auth.login("sam@example.com", "s3cret").await.unwrap();
    assert_eq!(logged_in, user);
  }

  #[tokio::test]
  async fn every_registration_round_trips() {
    let auth = service().await;
    let mut users = Vec::new();
    for (i, role) in [Role::User, Role::Admin, Role::User].into_iter().enumerate() {
      let mut f = form(&format!("user{i}@example.com"), &format!("pw-{i}"));
      f.role = role;
      users.push(auth.register(f).await.unwrap());
    }

    for (i, user) in users.iter().enumerate() {
      let found = auth
        .login(&format!("user{i}@example.com"), &format!("pw-{i}"))
        .await
        .unwrap();
      assert_eq!(&found, user);
    }
  }

  #[tokio::test]
  async fn wrong_password_is_invalid_credentials() {
    let auth = service().await;
    auth.register(form("sam@example.com", "s3cret")).await.unwrap();

    let err = auth.login("sam@example.com", "nope").await.unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert_eq!(err.to_string(), "invalid credentials");
  }

  #[tokio::test]
  async fn blank_login_fields_are_rejected_before_lookup() {
    let auth = service().await;
    assert!(matches!(
      auth.login("", "pw").await,
      Err(Error::CredentialsRequired)
    ));
    assert!(matches!(
      auth.login("sam@example.com", "  ").await,
      Err(Error::CredentialsRequired)
    ));
  }

  #[tokio::test]
  async fn registration_requires_every_field() {
    let auth = service().await;
    let mut f = form("sam@example.com", "pw");
    f.username = " ".into();
    assert!(matches!(auth.register(f).await, Err(Error::AllFieldsRequired)));
  }

  #[tokio::test]
  async fn registration_requires_matching_passwords() {
    let auth = service().await;
    let mut f = form("sam@example.com", "pw");
    f.confirm_password = "pw2".into();
    let err = auth.register(f).await.unwrap_err();
    assert!(matches!(err, Error::PasswordMismatch));

    // Nothing was stored.
    assert!(matches!(
      auth.login("sam@example.com", "pw").await,
      Err(Error::InvalidCredentials)
    ));
  }
}
