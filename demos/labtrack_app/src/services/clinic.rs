// labtrack_app/src/services/clinic.rs

//! The clinic portal: place orders and watch them move. A clinic only ever
//! sees its own orders.

use crate::errors::Result;
use chrono::{DateTime, Utc};
use labtrack::{Carrier, NewOrder, Order, OrderPriority, OrderStatus, OrderStore, ProstheticType};
use tracing::instrument;
use uuid::Uuid;

/// What the clinic intake form captures.
#[derive(Debug, Clone)]
pub struct OrderIntake {
  pub patient_name: String,
  pub prosthetic_type: ProstheticType,
  pub special_instructions: String,
  pub due_date: DateTime<Utc>,
  pub priority: Option<OrderPriority>,
}

pub struct ClinicPortal {
  orders: OrderStore,
  clinic_name: String,
}

impl ClinicPortal {
  pub fn new(orders: OrderStore, clinic_name: impl Into<String>) -> Self {
    ClinicPortal {
      orders,
      clinic_name: clinic_name.into(),
    }
  }

  /// Submits a new order for this clinic. New orders always start in
  /// `Preparation`.
  #[instrument(name = "clinic::place_order", skip(self, intake), fields(clinic = %self.clinic_name))]
  pub fn place_order(&self, intake: OrderIntake) -> Result<Order> {
    let order = self.orders.create(NewOrder {
      patient_name: intake.patient_name,
      prosthetic_type: intake.prosthetic_type,
      special_instructions: intake.special_instructions,
      status: OrderStatus::Preparation,
      clinic_name: self.clinic_name.clone(),
      due_date: intake.due_date,
      priority: intake.priority,
      assigned_lab: None,
    })?;
    Ok(order)
  }

  pub fn update_tracking(
    &self,
    order_id: Uuid,
    tracking_number: String,
    carrier: Option<Carrier>,
  ) -> Result<Order> {
    Ok(self.orders.update_tracking(order_id, tracking_number, carrier)?)
  }

  /// This clinic's orders, in store order.
  pub fn my_orders(&self) -> Vec<Order> {
    self
      .orders
      .all()
      .into_iter()
      .filter(|o| o.clinic_name == self.clinic_name)
      .collect()
  }
}
