// core/src/model/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The three actor roles in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Admin,
  Clinic,
  Lab,
}

impl UserRole {
  pub fn as_str(self) -> &'static str {
    match self {
      UserRole::Admin => "admin",
      UserRole::Clinic => "clinic",
      UserRole::Lab => "lab",
    }
  }
}

impl fmt::Display for UserRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Capabilities an admin can grant to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
  ViewOrders,
  CreateOrders,
  EditOrders,
  DeleteOrders,
  ManageUsers,
  ViewAnalytics,
  SystemAdmin,
}

/// Optional postal/phone details attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
  pub phone: Option<String>,
  pub address: Option<String>,
  pub city: Option<String>,
  pub state: Option<String>,
  pub zip_code: Option<String>,
}

/// An admin-managed account.
///
/// Users relate to orders only by name matching on `organization_name`
/// against `clinic_name` / `assigned_lab`; nothing is enforced referentially.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: Uuid,
  pub email: String,
  pub name: String,
  pub role: UserRole,
  pub organization_name: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub last_login: Option<DateTime<Utc>>,
  pub permissions: Vec<Permission>,
  pub contact_info: Option<ContactInfo>,
}
