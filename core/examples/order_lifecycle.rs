// labtrack/examples/order_lifecycle.rs

use labtrack::progress::{self, StepState};
use labtrack::{NewOrder, OrderStatus, OrderStore, PhotoUpload, ProstheticType, StoreError};
use chrono::{Duration, Utc};
use tracing::info;

fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Order Lifecycle Example ---");

  let store = OrderStore::new();

  // A clinic submits a new crown order.
  let order = store.create(NewOrder {
    patient_name: "John Smith".to_string(),
    prosthetic_type: ProstheticType::Crown,
    special_instructions: "Natural shade A2, high bite strength required".to_string(),
    status: OrderStatus::Preparation,
    clinic_name: "Downtown Dental".to_string(),
    due_date: Utc::now() + Duration::days(30),
    priority: None,
    assigned_lab: None,
  })?;
  info!(order_number = %order.order_number, "Order placed.");

  // The lab walks it through production, attaching one progress photo.
  store.update_status(order.id, OrderStatus::InProduction, Some("Crown fabrication in progress".into()))?;
  store.attach_photo(
    order.id,
    PhotoUpload {
      stage: OrderStatus::InProduction,
      url: "/photos/crown-progress.jpg".to_string(),
      caption: Some("Milling complete".to_string()),
    },
  )?;
  store.update_status(order.id, OrderStatus::PostProductionProcessing, None)?;
  store.update_status(order.id, OrderStatus::ReadyForShipping, None)?;
  store.update_status(order.id, OrderStatus::Shipped, Some("Package shipped via UPS".into()))?;
  store.update_status(order.id, OrderStatus::Delivered, Some("Package delivered successfully".into()))?;

  // Render the progression and the audit trail.
  let current = store.get(order.id)?;
  let summary = progress::summary(current.status);
  info!("Progress: step {} of {}", summary.step, summary.total);
  for (idx, state) in summary.steps.iter().enumerate() {
    let marker = match state {
      StepState::Completed => "[x]",
      StepState::Current => "[>]",
      StepState::Upcoming => "[ ]",
    };
    info!("  {marker} {}", progress::short_label(progress::STATUS_SEQUENCE[idx]));
  }
  for entry in &current.status_history {
    info!(
      "  {} -> {} ({})",
      entry.timestamp.format("%Y-%m-%d %H:%M"),
      entry.status,
      entry.notes.as_deref().unwrap_or("-")
    );
  }

  Ok(())
}
