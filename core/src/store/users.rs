// core/src/store/users.rs

//! The admin-managed user store. Users are the only deletable records in the
//! system.

use crate::error::{StoreError, StoreResult};
use crate::model::user::{ContactInfo, Permission, User, UserRole};
use crate::store::shared::Shared;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Payload for [`UserStore::create`]; id and `created_at` are assigned by
/// the store, `last_login` starts unset.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email: String,
  pub name: String,
  pub role: UserRole,
  pub organization_name: String,
  pub is_active: bool,
  pub permissions: Vec<Permission>,
  pub contact_info: Option<ContactInfo>,
}

/// Explicit optional-field patch for [`UserStore::update`]. Absent fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
  pub email: Option<String>,
  pub name: Option<String>,
  pub role: Option<UserRole>,
  pub organization_name: Option<String>,
  pub is_active: Option<bool>,
  pub permissions: Option<Vec<Permission>>,
  pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default)]
pub struct UserStore {
  inner: Shared<Vec<User>>,
}

impl UserStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_users(users: Vec<User>) -> Self {
    UserStore {
      inner: Shared::new(users),
    }
  }

  pub fn create(&self, data: NewUser) -> StoreResult<User> {
    if data.email.trim().is_empty() {
      return Err(StoreError::Validation("email is required".into()));
    }
    if data.name.trim().is_empty() {
      return Err(StoreError::Validation("name is required".into()));
    }

    let mut users = self.inner.write();
    if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
      return Err(StoreError::Duplicate(format!("user email {}", data.email)));
    }

    let user = User {
      id: Uuid::new_v4(),
      email: data.email,
      name: data.name,
      role: data.role,
      organization_name: data.organization_name,
      is_active: data.is_active,
      created_at: Utc::now(),
      last_login: None,
      permissions: data.permissions,
      contact_info: data.contact_info,
    };

    debug!(user_id = %user.id, email = %user.email, role = %user.role, "User created.");
    users.push(user.clone());
    Ok(user)
  }

  pub fn update(&self, id: Uuid, patch: UserPatch) -> StoreResult<User> {
    let mut users = self.inner.write();
    let user = users
      .iter_mut()
      .find(|u| u.id == id)
      .ok_or_else(|| StoreError::not_found("user", id))?;

    if let Some(v) = patch.email {
      user.email = v;
    }
    if let Some(v) = patch.name {
      user.name = v;
    }
    if let Some(v) = patch.role {
      user.role = v;
    }
    if let Some(v) = patch.organization_name {
      user.organization_name = v;
    }
    if let Some(v) = patch.is_active {
      user.is_active = v;
    }
    if let Some(v) = patch.permissions {
      user.permissions = v;
    }
    if let Some(v) = patch.contact_info {
      user.contact_info = Some(v);
    }

    Ok(user.clone())
  }

  /// Removes the user and returns the deleted record.
  pub fn delete(&self, id: Uuid) -> StoreResult<User> {
    let mut users = self.inner.write();
    let idx = users
      .iter()
      .position(|u| u.id == id)
      .ok_or_else(|| StoreError::not_found("user", id))?;
    let removed = users.remove(idx);
    debug!(user_id = %id, email = %removed.email, "User deleted.");
    Ok(removed)
  }

  pub fn record_login(&self, id: Uuid, when: DateTime<Utc>) -> StoreResult<User> {
    let mut users = self.inner.write();
    let user = users
      .iter_mut()
      .find(|u| u.id == id)
      .ok_or_else(|| StoreError::not_found("user", id))?;
    user.last_login = Some(when);
    Ok(user.clone())
  }

  pub fn get(&self, id: Uuid) -> StoreResult<User> {
    self
      .inner
      .read()
      .iter()
      .find(|u| u.id == id)
      .cloned()
      .ok_or_else(|| StoreError::not_found("user", id))
  }

  pub fn find_by_email(&self, email: &str) -> Option<User> {
    self
      .inner
      .read()
      .iter()
      .find(|u| u.email.eq_ignore_ascii_case(email))
      .cloned()
  }

  pub fn all(&self) -> Vec<User> {
    self.inner.read().clone()
  }

  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }
}
