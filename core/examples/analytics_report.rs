// labtrack/examples/analytics_report.rs

use labtrack::{
  Analytics, NewOrder, OrderPriority, OrderStatus, OrderStore, ProstheticType,
  DEFAULT_REVENUE_PER_ORDER,
};
use chrono::{Duration, Utc};
use tracing::info;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Analytics Report Example ---");

  let store = OrderStore::new();
  let intake = [
    ("John Smith", ProstheticType::Crown, OrderPriority::Normal),
    ("Sarah Johnson", ProstheticType::Dentures, OrderPriority::High),
    ("Michael Brown", ProstheticType::Bridge, OrderPriority::Normal),
    ("Emily Davis", ProstheticType::Veneer, OrderPriority::Urgent),
  ];
  for (patient, prosthetic, priority) in intake {
    let order = store.create(NewOrder {
      patient_name: patient.to_string(),
      prosthetic_type: prosthetic,
      special_instructions: String::new(),
      status: OrderStatus::Preparation,
      clinic_name: "Downtown Dental".to_string(),
      due_date: Utc::now() + Duration::days(45),
      priority: Some(priority),
      assigned_lab: None,
    })?;
    store.assign_to_lab(order.id, "Premium Dental Lab".to_string())?;
  }

  // Deliver one so the completion-time average has something to chew on.
  let snapshot = store.all();
  store.update_status(snapshot[0].id, OrderStatus::Delivered, None)?;

  let report = Analytics::generate(&store.all(), Utc::now(), DEFAULT_REVENUE_PER_ORDER);
  info!(
    total = report.total_orders,
    active = report.active_orders,
    completed = report.completed_orders,
    "Order totals"
  );
  info!(revenue = report.total_revenue, "Simulated trailing-year revenue");
  for (priority, count) in &report.orders_by_priority {
    info!("  {priority}: {count}");
  }

  // The full report serializes cleanly for dashboards.
  let json = serde_json::to_string_pretty(&report)?;
  println!("{json}");

  Ok(())
}
