// core/src/session.rs

//! Session persistence: a single well-known key holding the serialized
//! current-user record. The backend is an injectable seam so a real store can
//! replace the in-memory one without touching callers.

use crate::error::{StoreError, StoreResult};
use crate::model::user::{User, UserRole};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Key under which the current user is persisted.
pub const SESSION_USER_KEY: &str = "labtrack_user";

/// The slice of a user that follows the session around. Never carries
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
  pub id: Uuid,
  pub email: String,
  pub name: String,
  pub role: UserRole,
}

impl From<&User> for SessionUser {
  fn from(user: &User) -> Self {
    SessionUser {
      id: user.id,
      email: user.email.clone(),
      name: user.name.clone(),
      role: user.role,
    }
  }
}

/// Session-scoped key-value backend.
#[async_trait]
pub trait SessionStore: Send + Sync {
  async fn get(&self, key: &str) -> StoreResult<Option<String>>;
  async fn put(&self, key: &str, value: String) -> StoreResult<()>;
  async fn clear(&self, key: &str) -> StoreResult<()>;
}

/// The default backend: a process-local map. Everything resets when the
/// process exits, matching the session-scoped lifetime.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
  entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
  async fn get(&self, key: &str) -> StoreResult<Option<String>> {
    Ok(self.entries.lock().get(key).cloned())
  }

  async fn put(&self, key: &str, value: String) -> StoreResult<()> {
    self.entries.lock().insert(key.to_string(), value);
    Ok(())
  }

  async fn clear(&self, key: &str) -> StoreResult<()> {
    self.entries.lock().remove(key);
    Ok(())
  }
}

/// Persists `user` under [`SESSION_USER_KEY`].
pub async fn save_session_user(
  store: &dyn SessionStore,
  user: &SessionUser,
) -> StoreResult<()> {
  let encoded = serde_json::to_string(user).map_err(|e| StoreError::Session {
    source: anyhow::Error::new(e),
  })?;
  store.put(SESSION_USER_KEY, encoded).await?;
  debug!(user_id = %user.id, "Session user saved.");
  Ok(())
}

/// Reads back the persisted user, if any.
pub async fn load_session_user(store: &dyn SessionStore) -> StoreResult<Option<SessionUser>> {
  match store.get(SESSION_USER_KEY).await? {
    None => Ok(None),
    Some(raw) => {
      let user = serde_json::from_str(&raw).map_err(|e| StoreError::Session {
        source: anyhow::Error::new(e),
      })?;
      Ok(Some(user))
    }
  }
}

/// Drops the persisted user (logout).
pub async fn clear_session_user(store: &dyn SessionStore) -> StoreResult<()> {
  store.clear(SESSION_USER_KEY).await?;
  debug!("Session user cleared.");
  Ok(())
}
