// labtrack_app/src/services/auth.rs

//! Demo authentication: a fixed credential table, argon2 verification, and a
//! simulated network round-trip. The login future is cancellable by the
//! caller (drop it, or race it with `tokio::time::timeout`).

use crate::errors::{AppError, Result};
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,   // The main trait for hashing
    PasswordVerifier, // The main trait for verifying
    SaltString,
  },
  Argon2, // The Argon2 algorithm instance
};
use chrono::Utc;
use labtrack::session::{clear_session_user, load_session_user, save_session_user};
use labtrack::{SessionStore, SessionUser, UserRole, UserStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// The pre-defined demo accounts. Passwords are hashed at service
/// construction; nothing plain-text survives past `new`.
const DEMO_ACCOUNTS: [(&str, &str, UserRole, &str); 3] = [
  ("clinic@test.com", "test123", UserRole::Clinic, "Clinic User"),
  ("lab@test.com", "test123", UserRole::Lab, "Lab User"),
  ("admin@test.com", "test123", UserRole::Admin, "Admin User"),
];

struct Credential {
  id: Uuid,
  email: String,
  password_hash: String,
  role: UserRole,
  name: String,
}

pub struct AuthService {
  credentials: Vec<Credential>,
  sessions: Arc<dyn SessionStore>,
  users: UserStore,
  latency: Duration,
}

impl AuthService {
  /// Builds the service, hashing the demo passwords.
  pub fn new(
    sessions: Arc<dyn SessionStore>,
    users: UserStore,
    latency: Duration,
  ) -> Result<Self> {
    let credentials = DEMO_ACCOUNTS
      .iter()
      .map(|(email, password, role, name)| {
        Ok(Credential {
          id: Uuid::new_v4(),
          email: email.to_string(),
          password_hash: hash_password(password)?,
          role: *role,
          name: name.to_string(),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(AuthService {
      credentials,
      sessions,
      users,
      latency,
    })
  }

  /// Authenticates against the demo credential table.
  ///
  /// Sleeps the configured simulated latency first, standing in for a network
  /// round-trip; dropping the returned future cancels the whole operation
  /// before any state changes.
  #[instrument(name = "auth::login", skip(self, password), fields(email = %email))]
  pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser> {
    tokio::time::sleep(self.latency).await; // Simulate network latency

    let credential = self
      .credentials
      .iter()
      .find(|c| c.email.eq_ignore_ascii_case(email));
    let verified = match credential {
      Some(c) => verify_password(&c.password_hash, password)?,
      None => false,
    };
    if !verified {
      warn!("Rejected login attempt.");
      return Err(AppError::Auth("Invalid email or password".to_string()));
    }

    // `verified` is only true when the lookup succeeded.
    let credential = credential.ok_or_else(|| {
      AppError::Internal("credential vanished between lookup and use".to_string())
    })?;
    let session_user = SessionUser {
      id: credential.id,
      email: credential.email.clone(),
      name: credential.name.clone(),
      role: credential.role,
    };
    save_session_user(self.sessions.as_ref(), &session_user).await?;

    // Stamp last_login on the matching managed account, when there is one.
    if let Some(account) = self.users.find_by_email(&session_user.email) {
      self.users.record_login(account.id, Utc::now())?;
    }

    info!(role = %session_user.role, "Login succeeded.");
    Ok(session_user)
  }

  /// Clears the persisted session.
  pub async fn logout(&self) -> Result<()> {
    clear_session_user(self.sessions.as_ref()).await?;
    info!("Logged out.");
    Ok(())
  }

  /// The user restored from the session store, if a session exists.
  pub async fn current_user(&self) -> Result<Option<SessionUser>> {
    Ok(load_session_user(self.sessions.as_ref()).await?)
  }
}

/// Dashboard route for a role, mirroring the demo front-end's redirects.
pub fn dashboard_path(role: UserRole) -> &'static str {
  match role {
    UserRole::Clinic => "/clinic/dashboard",
    UserRole::Lab => "/lab/dashboard",
    UserRole::Admin => "/admin/dashboard",
  }
}

/// Hashes a plain-text password using Argon2 with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation(
      "Password cannot be empty for hashing.".to_string(),
    ));
  }

  let salt = SaltString::generate(&mut OsRng);
  let argon2_hasher = Argon2::default(); // Default Argon2 parameters (recommended)

  match argon2_hasher.hash_password(password.as_bytes(), &salt) {
    Ok(password_hash_obj) => Ok(password_hash_obj.to_string()),
    Err(argon_err) => Err(AppError::Internal(format!(
      "Password hashing process failed: {}",
      argon_err
    ))),
  }
}

/// Verifies a plain-text password against a stored Argon2 hash. `Ok(false)`
/// means a well-formed hash that simply does not match.
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool> {
  if provided_password.is_empty() {
    debug!("Empty password provided; rejecting without hashing.");
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(hashed_password_str).map_err(|parse_err| {
    AppError::Internal(format!("Invalid stored password hash format: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other_argon_err) => Err(AppError::Internal(format!(
      "Password verification process failed: {}",
      other_argon_err
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use labtrack::MemorySessionStore;

  fn service() -> AuthService {
    AuthService::new(
      Arc::new(MemorySessionStore::new()),
      UserStore::new(),
      Duration::from_millis(1),
    )
    .unwrap()
  }

  #[test]
  fn password_round_trip() {
    let hash = hash_password("test123").unwrap();
    assert!(verify_password(&hash, "test123").unwrap());
    assert!(!verify_password(&hash, "wrong").unwrap());
    assert!(!verify_password(&hash, "").unwrap());
  }

  #[tokio::test]
  async fn login_persists_the_session_and_logout_clears_it() {
    let auth = service();
    let user = auth.login("admin@test.com", "test123").await.unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(auth.current_user().await.unwrap(), Some(user));

    auth.logout().await.unwrap();
    assert_eq!(auth.current_user().await.unwrap(), None);
  }

  #[tokio::test]
  async fn bad_credentials_are_rejected() {
    let auth = service();
    for (email, password) in [
      ("admin@test.com", "nope"),
      ("nobody@test.com", "test123"),
      ("admin@test.com", ""),
    ] {
      let result = auth.login(email, password).await;
      assert!(matches!(result, Err(AppError::Auth(_))), "{email}/{password}");
    }
    assert_eq!(auth.current_user().await.unwrap(), None);
  }

  #[tokio::test]
  async fn a_caller_can_cancel_a_slow_login() {
    let auth = AuthService::new(
      Arc::new(MemorySessionStore::new()),
      UserStore::new(),
      Duration::from_secs(30),
    )
    .unwrap();

    let raced = tokio::time::timeout(
      Duration::from_millis(20),
      auth.login("admin@test.com", "test123"),
    )
    .await;
    assert!(raced.is_err()); // Timed out, login dropped mid-delay.
    assert_eq!(auth.current_user().await.unwrap(), None);
  }

  #[test]
  fn dashboard_paths_cover_every_role() {
    assert_eq!(dashboard_path(UserRole::Clinic), "/clinic/dashboard");
    assert_eq!(dashboard_path(UserRole::Lab), "/lab/dashboard");
    assert_eq!(dashboard_path(UserRole::Admin), "/admin/dashboard");
  }
}
