// labtrack_app/src/services/lab.rs

//! The lab portal: the production worklist and every mutation a lab operator
//! performs while fabricating an order.

use crate::errors::Result;
use chrono::{DateTime, Utc};
use labtrack::query::{self, OrderFilter, StatusCounts};
use labtrack::{Carrier, Order, OrderPriority, OrderStatus, OrderStore, PhotoUpload};
use tracing::instrument;
use uuid::Uuid;

pub struct LabPortal {
  orders: OrderStore,
}

impl LabPortal {
  pub fn new(orders: OrderStore) -> Self {
    LabPortal { orders }
  }

  /// The filtered worklist: priority first, earliest due date next.
  pub fn worklist(&self, filter: &OrderFilter) -> Vec<Order> {
    query::filter_and_sort(&self.orders.all(), filter)
  }

  /// Headline counts across the six stages.
  pub fn status_counts(&self) -> StatusCounts {
    query::status_counts(&self.orders.all())
  }

  #[instrument(name = "lab::update_status", skip(self, notes))]
  pub fn update_status(
    &self,
    order_id: Uuid,
    status: OrderStatus,
    notes: Option<String>,
  ) -> Result<Order> {
    Ok(self.orders.update_status(order_id, status, notes)?)
  }

  pub fn update_tracking(
    &self,
    order_id: Uuid,
    tracking_number: String,
    carrier: Option<Carrier>,
  ) -> Result<Order> {
    Ok(self.orders.update_tracking(order_id, tracking_number, carrier)?)
  }

  pub fn update_priority(&self, order_id: Uuid, priority: OrderPriority) -> Result<Order> {
    Ok(self.orders.update_priority(order_id, priority)?)
  }

  pub fn update_estimated_completion(
    &self,
    order_id: Uuid,
    date: DateTime<Utc>,
  ) -> Result<Order> {
    Ok(self.orders.update_estimated_completion(order_id, date)?)
  }

  pub fn upload_photo(&self, order_id: Uuid, upload: PhotoUpload) -> Result<Order> {
    Ok(self.orders.attach_photo(order_id, upload)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed::sample_orders;
  use labtrack::OrderStore;

  #[test]
  fn the_worklist_leads_with_the_urgent_order() {
    let portal = LabPortal::new(OrderStore::with_orders(sample_orders()));
    let worklist = portal.worklist(&OrderFilter::default());
    assert_eq!(worklist.len(), 6);
    assert_eq!(worklist[0].priority, OrderPriority::Urgent);
  }

  #[test]
  fn status_counts_match_the_seeded_book() {
    let portal = LabPortal::new(OrderStore::with_orders(sample_orders()));
    let counts = portal.status_counts();
    assert_eq!(counts.preparation, 1);
    assert_eq!(counts.in_production, 1);
    assert_eq!(counts.post_production, 1);
    assert_eq!(counts.ready_for_shipping, 1);
    assert_eq!(counts.shipped, 1);
    assert_eq!(counts.delivered, 1);
  }
}
