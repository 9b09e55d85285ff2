// core/src/query.rs

//! Dashboard query helpers: filtering, searching, the shared worklist
//! ordering, and per-status counts. The role-scoped portals have no ordering
//! or matching logic of their own; it all lives here.

use crate::model::order::{Order, OrderPriority, OrderStatus};
use crate::progress::STATUS_SEQUENCE;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Optional criteria combined with AND. An unset field matches everything
/// (the dashboards' "All" selection).
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
  pub status: Option<OrderStatus>,
  pub priority: Option<OrderPriority>,
  pub assigned_lab: Option<String>,
  /// Case-insensitive substring over order number, clinic name, patient
  /// name, and assigned lab.
  pub search: Option<String>,
}

impl OrderFilter {
  pub fn matches(&self, order: &Order) -> bool {
    let matches_search = match &self.search {
      None => true,
      Some(term) if term.is_empty() => true,
      Some(term) => {
        let term = term.to_lowercase();
        order.order_number.to_lowercase().contains(&term)
          || order.clinic_name.to_lowercase().contains(&term)
          || order.patient_name.to_lowercase().contains(&term)
          || order
            .assigned_lab
            .as_ref()
            .is_some_and(|lab| lab.to_lowercase().contains(&term))
      }
    };

    matches_search
      && self.status.map_or(true, |s| order.status == s)
      && self.priority.map_or(true, |p| order.priority == p)
      && self
        .assigned_lab
        .as_ref()
        .map_or(true, |lab| order.assigned_lab.as_deref() == Some(lab.as_str()))
  }
}

/// The worklist ordering shared by the lab and admin tables: priority
/// descending (`Urgent` first), then due date ascending.
pub fn worklist_order(a: &Order, b: &Order) -> Ordering {
  b.priority
    .cmp(&a.priority)
    .then_with(|| a.due_date.cmp(&b.due_date))
}

/// Applies a filter and the worklist ordering in one pass. The underlying
/// sort is stable, so fully-tied orders keep their store order.
pub fn filter_and_sort(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
  let mut matched: Vec<Order> = orders.iter().filter(|o| filter.matches(o)).cloned().collect();
  matched.sort_by(worklist_order);
  matched
}

/// Past its due date and not yet delivered.
pub fn is_overdue(order: &Order, now: DateTime<Utc>) -> bool {
  order.due_date < now && order.status != OrderStatus::Delivered
}

/// The six headline counts on the lab dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
  pub preparation: usize,
  pub in_production: usize,
  pub post_production: usize,
  pub ready_for_shipping: usize,
  pub shipped: usize,
  pub delivered: usize,
}

impl StatusCounts {
  pub fn get(&self, status: OrderStatus) -> usize {
    match status {
      OrderStatus::Preparation => self.preparation,
      OrderStatus::InProduction => self.in_production,
      OrderStatus::PostProductionProcessing => self.post_production,
      OrderStatus::ReadyForShipping => self.ready_for_shipping,
      OrderStatus::Shipped => self.shipped,
      OrderStatus::Delivered => self.delivered,
    }
  }

  pub fn total(&self) -> usize {
    STATUS_SEQUENCE.iter().map(|s| self.get(*s)).sum()
  }
}

pub fn status_counts(orders: &[Order]) -> StatusCounts {
  let mut counts = StatusCounts::default();
  for order in orders {
    match order.status {
      OrderStatus::Preparation => counts.preparation += 1,
      OrderStatus::InProduction => counts.in_production += 1,
      OrderStatus::PostProductionProcessing => counts.post_production += 1,
      OrderStatus::ReadyForShipping => counts.ready_for_shipping += 1,
      OrderStatus::Shipped => counts.shipped += 1,
      OrderStatus::Delivered => counts.delivered += 1,
    }
  }
  counts
}
