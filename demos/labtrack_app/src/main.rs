// labtrack_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod seed;
mod services;
mod state;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::auth::dashboard_path;
use crate::services::{AdminPortal, AuthService, ClinicPortal, LabPortal};
use crate::state::AppState;

use chrono::{Duration as ChronoDuration, Utc};
use labtrack::query::OrderFilter;
use labtrack::{
  AdminOrderPatch, Carrier, MemorySessionStore, NewUser, OrderPriority, OrderStatus, OrderStore,
  Permission, PhotoUpload, ProstheticType, UserPatch, UserRole, UserStore,
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[tokio::main]
async fn main() -> Result<(), AppError> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting labtrack demo walkthrough...");

  // Load application configuration
  let app_config = Arc::new(AppConfig::from_env()?);

  // Build the stores, seeded with the demo book when configured
  let (orders, users) = if app_config.seed_demo_data {
    info!("Seeding demo orders and users.");
    (
      OrderStore::with_orders(seed::sample_orders()),
      UserStore::with_users(seed::sample_users()),
    )
  } else {
    (OrderStore::new(), UserStore::new())
  };

  let app_state = AppState {
    orders: orders.clone(),
    users: users.clone(),
    sessions: Arc::new(MemorySessionStore::new()),
    config: app_config.clone(),
  };

  let auth = AuthService::new(
    app_state.sessions.clone(),
    app_state.users.clone(),
    app_config.simulated_latency,
  )?;

  // A caller can abandon a simulated call mid-flight; nothing is persisted.
  if app_config.simulated_latency.as_millis() >= 20 {
    let raced = tokio::time::timeout(
      app_config.simulated_latency / 2,
      auth.login("clinic@test.com", "test123"),
    )
    .await;
    if raced.is_err() {
      warn!("Login cancelled before the simulated round-trip finished.");
    }
  }

  // --- Clinic: place an order ---
  let clinic_user = auth.login("clinic@test.com", "test123").await?;
  info!(path = dashboard_path(clinic_user.role), "Clinic signed in.");

  let clinic = ClinicPortal::new(app_state.orders.clone(), "Downtown Dental");
  let placed = clinic.place_order(services::clinic::OrderIntake {
    patient_name: "Maria Garcia".to_string(),
    prosthetic_type: ProstheticType::NightGuard,
    special_instructions: "Thin profile, upper arch".to_string(),
    due_date: Utc::now() + ChronoDuration::days(21),
    priority: Some(OrderPriority::High),
  })?;
  info!(order_number = %placed.order_number, "Clinic placed a new order.");
  info!(count = clinic.my_orders().len(), "Orders visible to this clinic.");
  auth.logout().await?;

  // --- Lab: work the order ---
  let lab_user = auth.login("lab@test.com", "test123").await?;
  info!(path = dashboard_path(lab_user.role), "Lab signed in.");

  let lab = LabPortal::new(app_state.orders.clone());
  let counts = lab.status_counts();
  info!(
    preparation = counts.preparation,
    in_production = counts.in_production,
    shipped = counts.shipped,
    "Production pipeline."
  );

  lab.update_status(
    placed.id,
    OrderStatus::InProduction,
    Some("Night guard thermoforming started".to_string()),
  )?;
  lab.upload_photo(
    placed.id,
    PhotoUpload {
      stage: OrderStatus::InProduction,
      url: "/photos/night-guard-forming.jpg".to_string(),
      caption: Some("Thermoforming complete".to_string()),
    },
  )?;
  lab.update_estimated_completion(placed.id, Utc::now() + ChronoDuration::days(10))?;
  lab.update_status(placed.id, OrderStatus::PostProductionProcessing, None)?;
  lab.update_status(placed.id, OrderStatus::ReadyForShipping, None)?;
  lab.update_tracking(placed.id, "1Z999AA5550001111".to_string(), Some(Carrier::Ups))?;
  lab.update_status(
    placed.id,
    OrderStatus::Shipped,
    Some("Package shipped via UPS".to_string()),
  )?;

  let urgent_first = lab.worklist(&OrderFilter::default());
  info!(
    top_of_worklist = %urgent_first[0].order_number,
    priority = %urgent_first[0].priority,
    "Worklist after updates."
  );
  auth.logout().await?;

  // --- Admin: oversight ---
  let admin_user = auth.login("admin@test.com", "test123").await?;
  info!(path = dashboard_path(admin_user.role), "Admin signed in.");

  let admin = AdminPortal::new(
    app_state.orders.clone(),
    app_state.users.clone(),
    app_config.revenue_per_order,
  );

  admin.assign_to_lab(placed.id, "Premium Dental Lab".to_string())?;
  admin.update_order(
    placed.id,
    AdminOrderPatch {
      lab_notes: Some("Fit confirmed against the articulator scan".to_string()),
      ..AdminOrderPatch::default()
    },
  )?;
  admin.override_status(
    placed.id,
    OrderStatus::Delivered,
    "Courier portal confirmed hand-off".to_string(),
  )?;

  let delivered = app_state.orders.get(placed.id)?;
  info!(
    history_entries = delivered.status_history.len(),
    last_modified_by = delivered.last_modified_by.as_deref().unwrap_or("-"),
    "Order audit trail after override."
  );

  // User management round-trip
  let new_account = admin.create_user(NewUser {
    email: "reception@lakeside-dental.com".to_string(),
    name: "Lakeside Dental".to_string(),
    role: UserRole::Clinic,
    organization_name: "Lakeside Dental".to_string(),
    is_active: true,
    permissions: vec![Permission::ViewOrders, Permission::CreateOrders],
    contact_info: None,
  })?;
  admin.update_user(
    new_account.id,
    UserPatch {
      is_active: Some(false),
      ..UserPatch::default()
    },
  )?;
  admin.delete_user(new_account.id)?;
  info!(managed_accounts = admin.users().len(), "User management complete.");

  // Filtered table and the analytics report
  let shipped_downtown = admin.order_table(&OrderFilter {
    search: Some("downtown".to_string()),
    ..OrderFilter::default()
  });
  info!(
    matches = shipped_downtown.len(),
    overdue = admin.overdue_count(),
    "Management table."
  );

  let report = admin.analytics();
  info!(
    total = report.total_orders,
    active = report.active_orders,
    completed = report.completed_orders,
    avg_completion_days = report.average_completion_time_days,
    revenue = report.total_revenue,
    "Analytics report."
  );
  let report_json = serde_json::to_string_pretty(&report)
    .map_err(|e| AppError::Internal(format!("Failed to render report: {}", e)))?;
  println!("{report_json}");

  auth.logout().await?;
  info!("Walkthrough complete.");
  Ok(())
}
