// core/src/analytics.rs

//! The analytics aggregator: a pure reduction over the full order collection,
//! recomputed from scratch on demand. At the data volumes this system holds
//! there is nothing to gain from incremental aggregation.

use crate::model::order::{Order, OrderPriority, OrderStatus};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Simulated per-order revenue used when no rate is configured. Real pricing
/// lives outside this system.
pub const DEFAULT_REVENUE_PER_ORDER: u64 = 450;

const SECONDS_PER_DAY: f64 = 86_400.0;

const MONTH_ABBREV: [&str; 12] = [
  "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Order count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
  /// Display label, e.g. `"Jun 2025"`.
  pub month: String,
  pub count: usize,
}

/// Simulated revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
  pub month: String,
  pub revenue: u64,
}

/// Derived aggregate counts and sums over the order collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
  pub total_orders: usize,
  /// Orders in any of the five non-`Delivered` stages.
  pub active_orders: usize,
  /// Orders in `Delivered`.
  pub completed_orders: usize,
  pub total_revenue: u64,
  /// Mean of `updated_at - created_at` in days over completed orders;
  /// `0.0` when none are completed.
  pub average_completion_time_days: f64,
  pub orders_by_status: BTreeMap<OrderStatus, usize>,
  pub orders_by_priority: BTreeMap<OrderPriority, usize>,
  /// Keyed by assigned lab; orders without one are excluded.
  pub orders_by_lab: BTreeMap<String, usize>,
  pub orders_by_clinic: BTreeMap<String, usize>,
  /// Trailing 12 calendar months, oldest to newest, current month included.
  pub monthly_order_volume: Vec<MonthlyVolume>,
  pub revenue_by_month: Vec<MonthlyRevenue>,
}

impl Analytics {
  /// Runs the reduction. `now` anchors the trailing-12-month window;
  /// `revenue_per_order` is the simulated flat rate.
  pub fn generate(orders: &[Order], now: DateTime<Utc>, revenue_per_order: u64) -> Analytics {
    let completed: Vec<&Order> = orders.iter().filter(|o| !o.status.is_active()).collect();
    let active_orders = orders.len() - completed.len();

    let average_completion_time_days = if completed.is_empty() {
      0.0
    } else {
      let total_days: f64 = completed
        .iter()
        .map(|o| (o.updated_at - o.created_at).num_seconds() as f64 / SECONDS_PER_DAY)
        .sum();
      total_days / completed.len() as f64
    };

    let mut orders_by_status: BTreeMap<OrderStatus, usize> = BTreeMap::new();
    let mut orders_by_priority: BTreeMap<OrderPriority, usize> = BTreeMap::new();
    let mut orders_by_lab: BTreeMap<String, usize> = BTreeMap::new();
    let mut orders_by_clinic: BTreeMap<String, usize> = BTreeMap::new();
    for order in orders {
      *orders_by_status.entry(order.status).or_default() += 1;
      *orders_by_priority.entry(order.priority).or_default() += 1;
      if let Some(lab) = &order.assigned_lab {
        *orders_by_lab.entry(lab.clone()).or_default() += 1;
      }
      *orders_by_clinic.entry(order.clinic_name.clone()).or_default() += 1;
    }

    let mut monthly_order_volume = Vec::with_capacity(12);
    let mut revenue_by_month = Vec::with_capacity(12);
    for back in (0..12).rev() {
      let (year, month) = month_back_from(now, back);
      let label = month_label(year, month);
      let count = orders
        .iter()
        .filter(|o| o.created_at.year() == year && o.created_at.month() == month)
        .count();
      monthly_order_volume.push(MonthlyVolume {
        month: label.clone(),
        count,
      });
      revenue_by_month.push(MonthlyRevenue {
        month: label,
        revenue: count as u64 * revenue_per_order,
      });
    }

    let total_revenue = revenue_by_month.iter().map(|m| m.revenue).sum();

    Analytics {
      total_orders: orders.len(),
      active_orders,
      completed_orders: completed.len(),
      total_revenue,
      average_completion_time_days,
      orders_by_status,
      orders_by_priority,
      orders_by_lab,
      orders_by_clinic,
      monthly_order_volume,
      revenue_by_month,
    }
  }
}

/// Calendar month `back` months before `now`, as `(year, month)` with month
/// in `1..=12`.
fn month_back_from(now: DateTime<Utc>, back: u32) -> (i32, u32) {
  let total = now.year() * 12 + now.month0() as i32 - back as i32;
  (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_label(year: i32, month: u32) -> String {
  format!("{} {year}", MONTH_ABBREV[(month - 1) as usize])
}
