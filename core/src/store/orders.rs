// core/src/store/orders.rs

//! The order store: creation, tagged mutations, and the append-only status
//! audit log.

use crate::error::{StoreError, StoreResult};
use crate::model::order::{
  Carrier, Order, OrderPriority, OrderStatus, ProductionPhoto, ProstheticType, StatusUpdate,
};
use crate::store::shared::Shared;
use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Payload for [`OrderStore::create`]. Everything the clinic intake form
/// captures; ids, numbering, timestamps, and history are assigned by the
/// store.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub patient_name: String,
  pub prosthetic_type: ProstheticType,
  pub special_instructions: String,
  pub status: OrderStatus,
  pub clinic_name: String,
  pub due_date: DateTime<Utc>,
  /// Defaults to `Normal` when not given.
  pub priority: Option<OrderPriority>,
  pub assigned_lab: Option<String>,
}

/// Payload for [`OrderStore::attach_photo`]. The photo id and upload
/// timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
  pub stage: OrderStatus,
  pub url: String,
  pub caption: Option<String>,
}

/// The admin-editable field subset, each field optional. Absent fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct AdminOrderPatch {
  pub patient_name: Option<String>,
  pub prosthetic_type: Option<ProstheticType>,
  pub special_instructions: Option<String>,
  pub due_date: Option<DateTime<Utc>>,
  pub priority: Option<OrderPriority>,
  pub assigned_lab: Option<String>,
  pub lab_notes: Option<String>,
  pub admin_notes: Option<String>,
}

/// Every mutation the store accepts, one variant per allowed operation.
///
/// There is deliberately no "set arbitrary fields" variant: what each actor
/// may touch is fixed by this enum.
#[derive(Debug, Clone)]
pub enum OrderMutation {
  /// Set the status and append a history entry. Any of the six statuses is
  /// accepted from any current status, including backward moves.
  Status {
    status: OrderStatus,
    notes: Option<String>,
  },
  Tracking {
    tracking_number: String,
    carrier: Option<Carrier>,
  },
  Priority(OrderPriority),
  EstimatedCompletion(DateTime<Utc>),
  AssignLab(String),
  AttachPhoto(PhotoUpload),
  /// Status change with an admin audit trail: the history entry carries
  /// `updated_by: "Admin"` and the note `Admin override: <notes>`.
  AdminOverrideStatus {
    status: OrderStatus,
    admin_notes: String,
  },
  AdminPatch(AdminOrderPatch),
}

const ACTOR_ADMIN: &str = "Admin";

/// The single source of truth for all orders.
///
/// Cloning the store clones the handle, not the collection; all clones see
/// the same state. Orders are never deleted.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
  inner: Shared<Vec<Order>>,
}

impl OrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store over an existing collection, e.g. demo seed data.
  pub fn with_orders(orders: Vec<Order>) -> Self {
    OrderStore {
      inner: Shared::new(orders),
    }
  }

  // --- Creation ---

  /// Creates an order: validates required fields, assigns the next sequential
  /// order number for the current year, and seeds the status history.
  pub fn create(&self, data: NewOrder) -> StoreResult<Order> {
    if data.patient_name.trim().is_empty() {
      return Err(StoreError::Validation("patient_name is required".into()));
    }
    if data.clinic_name.trim().is_empty() {
      return Err(StoreError::Validation("clinic_name is required".into()));
    }

    let now = Utc::now();
    let mut orders = self.inner.write();
    let order_number = next_order_number(&orders, now.year());

    let order = Order {
      id: Uuid::new_v4(),
      order_number: order_number.clone(),
      patient_name: data.patient_name,
      prosthetic_type: data.prosthetic_type,
      special_instructions: data.special_instructions,
      status: data.status,
      clinic_name: data.clinic_name,
      assigned_lab: data.assigned_lab,
      created_at: now,
      updated_at: now,
      due_date: data.due_date,
      tracking_number: None,
      carrier: None,
      status_history: vec![StatusUpdate {
        status: data.status,
        timestamp: now,
        notes: Some("Order created".to_string()),
        updated_by: None,
      }],
      priority: data.priority.unwrap_or(OrderPriority::Normal),
      estimated_completion_time: None,
      production_photos: Vec::new(),
      lab_notes: None,
      admin_notes: None,
      last_modified_by: None,
    };

    debug!(order_id = %order.id, %order_number, clinic = %order.clinic_name, "Order created.");
    orders.push(order.clone());
    Ok(order)
  }

  // --- Mutation ---

  /// Applies one tagged mutation to the order with the given id, bumping
  /// `updated_at`. Returns the updated record, or `NotFound` for an unknown
  /// id (the store is left unchanged).
  pub fn apply(&self, id: Uuid, mutation: OrderMutation) -> StoreResult<Order> {
    let now = Utc::now();
    let mut orders = self.inner.write();
    let order = orders
      .iter_mut()
      .find(|o| o.id == id)
      .ok_or_else(|| {
        warn!(order_id = %id, "Mutation addressed to unknown order.");
        StoreError::not_found("order", id)
      })?;

    match mutation {
      OrderMutation::Status { status, notes } => {
        order.status = status;
        order.status_history.push(StatusUpdate {
          status,
          timestamp: now,
          notes: Some(notes.unwrap_or_else(|| format!("Status updated to {status}"))),
          updated_by: None,
        });
        debug!(order_id = %id, new_status = %status, "Order status updated.");
      }
      OrderMutation::Tracking {
        tracking_number,
        carrier,
      } => {
        order.tracking_number = Some(tracking_number);
        order.carrier = carrier;
      }
      OrderMutation::Priority(priority) => {
        order.priority = priority;
      }
      OrderMutation::EstimatedCompletion(date) => {
        order.estimated_completion_time = Some(date);
      }
      OrderMutation::AssignLab(lab_name) => {
        order.assigned_lab = Some(lab_name);
        order.last_modified_by = Some(ACTOR_ADMIN.to_string());
      }
      OrderMutation::AttachPhoto(upload) => {
        order.production_photos.push(ProductionPhoto {
          id: Uuid::new_v4(),
          stage: upload.stage,
          url: upload.url,
          caption: upload.caption,
          uploaded_at: now,
        });
      }
      OrderMutation::AdminOverrideStatus {
        status,
        admin_notes,
      } => {
        order.status = status;
        order.status_history.push(StatusUpdate {
          status,
          timestamp: now,
          notes: Some(format!("Admin override: {admin_notes}")),
          updated_by: Some(ACTOR_ADMIN.to_string()),
        });
        order.admin_notes = Some(admin_notes);
        order.last_modified_by = Some(ACTOR_ADMIN.to_string());
        debug!(order_id = %id, new_status = %status, "Order status overridden by admin.");
      }
      OrderMutation::AdminPatch(patch) => {
        apply_admin_patch(order, patch);
        order.last_modified_by = Some(ACTOR_ADMIN.to_string());
      }
    }

    order.updated_at = now;
    Ok(order.clone())
  }

  // --- Named operations (the API surface the portals use) ---

  pub fn update_status(
    &self,
    id: Uuid,
    status: OrderStatus,
    notes: Option<String>,
  ) -> StoreResult<Order> {
    self.apply(id, OrderMutation::Status { status, notes })
  }

  pub fn update_tracking(
    &self,
    id: Uuid,
    tracking_number: String,
    carrier: Option<Carrier>,
  ) -> StoreResult<Order> {
    self.apply(
      id,
      OrderMutation::Tracking {
        tracking_number,
        carrier,
      },
    )
  }

  pub fn update_priority(&self, id: Uuid, priority: OrderPriority) -> StoreResult<Order> {
    self.apply(id, OrderMutation::Priority(priority))
  }

  pub fn update_estimated_completion(
    &self,
    id: Uuid,
    date: DateTime<Utc>,
  ) -> StoreResult<Order> {
    self.apply(id, OrderMutation::EstimatedCompletion(date))
  }

  pub fn assign_to_lab(&self, id: Uuid, lab_name: String) -> StoreResult<Order> {
    self.apply(id, OrderMutation::AssignLab(lab_name))
  }

  pub fn attach_photo(&self, id: Uuid, upload: PhotoUpload) -> StoreResult<Order> {
    self.apply(id, OrderMutation::AttachPhoto(upload))
  }

  pub fn admin_override_status(
    &self,
    id: Uuid,
    status: OrderStatus,
    admin_notes: String,
  ) -> StoreResult<Order> {
    self.apply(
      id,
      OrderMutation::AdminOverrideStatus {
        status,
        admin_notes,
      },
    )
  }

  pub fn admin_update(&self, id: Uuid, patch: AdminOrderPatch) -> StoreResult<Order> {
    self.apply(id, OrderMutation::AdminPatch(patch))
  }

  // --- Queries ---

  pub fn get(&self, id: Uuid) -> StoreResult<Order> {
    self
      .inner
      .read()
      .iter()
      .find(|o| o.id == id)
      .cloned()
      .ok_or_else(|| StoreError::not_found("order", id))
  }

  /// All orders in the given status, preserving store (insertion) order.
  pub fn orders_by_status(&self, status: OrderStatus) -> Vec<Order> {
    self
      .inner
      .read()
      .iter()
      .filter(|o| o.status == status)
      .cloned()
      .collect()
  }

  /// A snapshot of the whole collection in store order.
  pub fn all(&self) -> Vec<Order> {
    self.inner.read().clone()
  }

  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().is_empty()
  }
}

fn apply_admin_patch(order: &mut Order, patch: AdminOrderPatch) {
  if let Some(v) = patch.patient_name {
    order.patient_name = v;
  }
  if let Some(v) = patch.prosthetic_type {
    order.prosthetic_type = v;
  }
  if let Some(v) = patch.special_instructions {
    order.special_instructions = v;
  }
  if let Some(v) = patch.due_date {
    order.due_date = v;
  }
  if let Some(v) = patch.priority {
    order.priority = v;
  }
  if let Some(v) = patch.assigned_lab {
    order.assigned_lab = Some(v);
  }
  if let Some(v) = patch.lab_notes {
    order.lab_notes = Some(v);
  }
  if let Some(v) = patch.admin_notes {
    order.admin_notes = Some(v);
  }
}

/// Next `ORD-<year>-<NNN>` number: one past the year's highest existing
/// suffix, so numbers stay unique and strictly increasing within a year.
fn next_order_number(orders: &[Order], year: i32) -> String {
  let prefix = format!("ORD-{year}-");
  let max_suffix = orders
    .iter()
    .filter_map(|o| o.order_number.strip_prefix(&prefix))
    .filter_map(|suffix| suffix.parse::<u32>().ok())
    .max()
    .unwrap_or(0);
  format!("{prefix}{:03}", max_suffix + 1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn order_numbers_restart_per_year() {
    let store = OrderStore::new();
    let order = store
      .create(NewOrder {
        patient_name: "A".into(),
        prosthetic_type: ProstheticType::Crown,
        special_instructions: String::new(),
        status: OrderStatus::Preparation,
        clinic_name: "Clinic".into(),
        due_date: Utc::now(),
        priority: None,
        assigned_lab: None,
      })
      .unwrap();

    let year = Utc::now().year();
    assert_eq!(order.order_number, format!("ORD-{year}-001"));
    // Numbers from other years do not influence the current year's sequence.
    assert_eq!(next_order_number(&store.all(), year + 1), format!("ORD-{}-001", year + 1));
  }

  #[test]
  fn next_number_skips_past_the_highest_suffix() {
    let store = OrderStore::new();
    for _ in 0..3 {
      store
        .create(NewOrder {
          patient_name: "A".into(),
          prosthetic_type: ProstheticType::Veneer,
          special_instructions: String::new(),
          status: OrderStatus::Preparation,
          clinic_name: "Clinic".into(),
          due_date: Utc::now(),
          priority: None,
          assigned_lab: None,
        })
        .unwrap();
    }
    let year = Utc::now().year();
    assert_eq!(next_order_number(&store.all(), year), format!("ORD-{year}-004"));
  }
}
