// core/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The six production/shipping stages an order moves through.
///
/// The declaration order is the canonical progression order, so the derived
/// `Ord` ranks `Preparation` lowest and `Delivered` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
  Preparation,
  #[serde(rename = "In Production")]
  InProduction,
  #[serde(rename = "Post-Production Processing")]
  PostProductionProcessing,
  #[serde(rename = "Ready for Shipping")]
  ReadyForShipping,
  Shipped,
  Delivered,
}

impl OrderStatus {
  /// `Delivered` is the single terminal stage; everything else counts as active.
  pub fn is_active(self) -> bool {
    !matches!(self, OrderStatus::Delivered)
  }

  /// Human-readable stage name, as shown on dashboards and in history notes.
  pub fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Preparation => "Preparation",
      OrderStatus::InProduction => "In Production",
      OrderStatus::PostProductionProcessing => "Post-Production Processing",
      OrderStatus::ReadyForShipping => "Ready for Shipping",
      OrderStatus::Shipped => "Shipped",
      OrderStatus::Delivered => "Delivered",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Urgency classification. Influences dashboard sort order, not scheduling.
///
/// Declaration order is urgency order, so the derived `Ord` gives
/// `Urgent > High > Normal > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderPriority {
  Low,
  Normal,
  High,
  Urgent,
}

impl OrderPriority {
  pub fn as_str(self) -> &'static str {
    match self {
      OrderPriority::Low => "Low",
      OrderPriority::Normal => "Normal",
      OrderPriority::High => "High",
      OrderPriority::Urgent => "Urgent",
    }
  }
}

impl fmt::Display for OrderPriority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The kinds of prosthetic work a clinic can order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProstheticType {
  Dentures,
  Crown,
  Bridge,
  Veneer,
  Implant,
  #[serde(rename = "Partial Denture")]
  PartialDenture,
  #[serde(rename = "Night Guard")]
  NightGuard,
}

impl ProstheticType {
  pub fn as_str(self) -> &'static str {
    match self {
      ProstheticType::Dentures => "Dentures",
      ProstheticType::Crown => "Crown",
      ProstheticType::Bridge => "Bridge",
      ProstheticType::Veneer => "Veneer",
      ProstheticType::Implant => "Implant",
      ProstheticType::PartialDenture => "Partial Denture",
      ProstheticType::NightGuard => "Night Guard",
    }
  }
}

impl fmt::Display for ProstheticType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Shipping carriers supported for the delivery leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
  #[serde(rename = "UPS")]
  Ups,
  FedEx,
  #[serde(rename = "DHL")]
  Dhl,
  #[serde(rename = "USPS")]
  Usps,
  #[serde(rename = "Local Delivery")]
  LocalDelivery,
}

impl Carrier {
  pub fn as_str(self) -> &'static str {
    match self {
      Carrier::Ups => "UPS",
      Carrier::FedEx => "FedEx",
      Carrier::Dhl => "DHL",
      Carrier::Usps => "USPS",
      Carrier::LocalDelivery => "Local Delivery",
    }
  }
}

impl fmt::Display for Carrier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One entry in an order's append-only status audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
  pub status: OrderStatus,
  pub timestamp: DateTime<Utc>,
  pub notes: Option<String>,
  pub updated_by: Option<String>,
}

/// A photo attached by the lab while an order is in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPhoto {
  pub id: Uuid,
  pub stage: OrderStatus,
  pub url: String,
  pub caption: Option<String>,
  pub uploaded_at: DateTime<Utc>,
}

/// One prosthetic-fabrication job, tracked from intake to delivery.
///
/// `status_history` is seeded with one entry at creation and grows by exactly
/// one entry per status change; its last entry always matches `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  /// Human-readable number, sequential per calendar year: `ORD-<year>-<NNN>`.
  pub order_number: String,
  pub patient_name: String,
  pub prosthetic_type: ProstheticType,
  pub special_instructions: String,
  pub status: OrderStatus,
  pub clinic_name: String,
  pub assigned_lab: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub due_date: DateTime<Utc>,
  pub tracking_number: Option<String>,
  pub carrier: Option<Carrier>,
  pub status_history: Vec<StatusUpdate>,
  pub priority: OrderPriority,
  pub estimated_completion_time: Option<DateTime<Utc>>,
  pub production_photos: Vec<ProductionPhoto>,
  pub lab_notes: Option<String>,
  pub admin_notes: Option<String>,
  pub last_modified_by: Option<String>,
}
