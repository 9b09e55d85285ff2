// labtrack_app/src/services/admin.rs

//! The admin portal: full oversight of the order book, lab assignment, status
//! overrides, user management, and the analytics report.

use crate::errors::Result;
use chrono::Utc;
use labtrack::query::{self, OrderFilter};
use labtrack::{
  AdminOrderPatch, Analytics, NewUser, Order, OrderStatus, OrderStore, User, UserPatch,
  UserStore,
};
use tracing::instrument;
use uuid::Uuid;

pub struct AdminPortal {
  orders: OrderStore,
  users: UserStore,
  revenue_per_order: u64,
}

impl AdminPortal {
  pub fn new(orders: OrderStore, users: UserStore, revenue_per_order: u64) -> Self {
    AdminPortal {
      orders,
      users,
      revenue_per_order,
    }
  }

  // --- Order oversight ---

  /// The management table: filtered, searched, and in worklist order.
  pub fn order_table(&self, filter: &OrderFilter) -> Vec<Order> {
    query::filter_and_sort(&self.orders.all(), filter)
  }

  pub fn overdue_count(&self) -> usize {
    let now = Utc::now();
    self
      .orders
      .all()
      .iter()
      .filter(|o| query::is_overdue(o, now))
      .count()
  }

  pub fn update_order(&self, order_id: Uuid, patch: AdminOrderPatch) -> Result<Order> {
    Ok(self.orders.admin_update(order_id, patch)?)
  }

  #[instrument(name = "admin::override_status", skip(self, admin_notes))]
  pub fn override_status(
    &self,
    order_id: Uuid,
    status: OrderStatus,
    admin_notes: String,
  ) -> Result<Order> {
    Ok(self.orders.admin_override_status(order_id, status, admin_notes)?)
  }

  pub fn assign_to_lab(&self, order_id: Uuid, lab_name: String) -> Result<Order> {
    Ok(self.orders.assign_to_lab(order_id, lab_name)?)
  }

  // --- User management ---

  pub fn create_user(&self, data: NewUser) -> Result<User> {
    Ok(self.users.create(data)?)
  }

  pub fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<User> {
    Ok(self.users.update(user_id, patch)?)
  }

  pub fn delete_user(&self, user_id: Uuid) -> Result<User> {
    Ok(self.users.delete(user_id)?)
  }

  pub fn users(&self) -> Vec<User> {
    self.users.all()
  }

  // --- Reporting ---

  /// Recomputes the analytics report over the current order book.
  pub fn analytics(&self) -> Analytics {
    Analytics::generate(&self.orders.all(), Utc::now(), self.revenue_per_order)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed::{sample_orders, sample_users};
  use labtrack::DEFAULT_REVENUE_PER_ORDER;

  fn portal() -> AdminPortal {
    AdminPortal::new(
      OrderStore::with_orders(sample_orders()),
      UserStore::with_users(sample_users()),
      DEFAULT_REVENUE_PER_ORDER,
    )
  }

  #[test]
  fn the_report_partitions_the_seeded_book() {
    let report = portal().analytics();
    assert_eq!(report.total_orders, 6);
    assert_eq!(report.completed_orders, 1);
    assert_eq!(report.active_orders, 5);
  }

  #[test]
  fn search_narrows_the_order_table() {
    let admin = portal();
    let matched = admin.order_table(&OrderFilter {
      search: Some("downtown".to_string()),
      ..OrderFilter::default()
    });
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|o| o.clinic_name == "Downtown Dental"));
  }
}
