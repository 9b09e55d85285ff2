// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, Duration, TimeZone, Utc};
use labtrack::{NewOrder, Order, OrderPriority, OrderStatus, ProstheticType, StatusUpdate};
use tracing::Level;
use uuid::Uuid;

// --- Common Fixtures ---

/// Minimal valid creation payload; tweak fields per test.
pub fn new_order(patient: &str, clinic: &str) -> NewOrder {
  NewOrder {
    patient_name: patient.to_string(),
    prosthetic_type: ProstheticType::Crown,
    special_instructions: String::new(),
    status: OrderStatus::Preparation,
    clinic_name: clinic.to_string(),
    due_date: Utc::now() + Duration::days(30),
    priority: None,
    assigned_lab: None,
  }
}

/// Controllable lifecycle fields for tests that bypass the store's create
/// path (analytics, queries, progression).
pub struct OrderFixture {
  pub order_number: String,
  pub status: OrderStatus,
  pub priority: OrderPriority,
  pub clinic_name: String,
  pub assigned_lab: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub due_date: DateTime<Utc>,
}

impl Default for OrderFixture {
  fn default() -> Self {
    let created = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    OrderFixture {
      order_number: "ORD-2025-001".to_string(),
      status: OrderStatus::Preparation,
      priority: OrderPriority::Normal,
      clinic_name: "Downtown Dental".to_string(),
      assigned_lab: None,
      created_at: created,
      updated_at: created,
      due_date: created + Duration::days(30),
    }
  }
}

pub fn order_from(fixture: OrderFixture) -> Order {
  Order {
    id: Uuid::new_v4(),
    order_number: fixture.order_number,
    patient_name: "Test Patient".to_string(),
    prosthetic_type: ProstheticType::Crown,
    special_instructions: String::new(),
    status: fixture.status,
    clinic_name: fixture.clinic_name,
    assigned_lab: fixture.assigned_lab,
    created_at: fixture.created_at,
    updated_at: fixture.updated_at,
    due_date: fixture.due_date,
    tracking_number: None,
    carrier: None,
    status_history: vec![StatusUpdate {
      status: fixture.status,
      timestamp: fixture.created_at,
      notes: Some("Order created".to_string()),
      updated_by: None,
    }],
    priority: fixture.priority,
    estimated_completion_time: None,
    production_photos: Vec::new(),
    lab_notes: None,
    admin_notes: None,
    last_modified_by: None,
  }
}

pub fn order_with_status(status: OrderStatus) -> Order {
  order_from(OrderFixture {
    status,
    ..OrderFixture::default()
  })
}

pub fn order_with_priority(priority: OrderPriority, due: DateTime<Utc>) -> Order {
  order_from(OrderFixture {
    priority,
    due_date: due,
    ..OrderFixture::default()
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
