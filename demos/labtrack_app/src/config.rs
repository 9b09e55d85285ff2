// labtrack_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Artificial delay applied to the simulated network calls (login).
  pub simulated_latency: Duration,

  /// Flat simulated revenue per order used by the analytics report.
  pub revenue_per_order: u64,

  /// Seed the stores with the demo orders/users on startup.
  pub seed_demo_data: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let simulated_latency_ms = env::var("SIMULATED_LATENCY_MS")
      .unwrap_or_else(|_| "750".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid SIMULATED_LATENCY_MS: {}", e)))?;

    let revenue_per_order = env::var("REVENUE_PER_ORDER")
      .unwrap_or_else(|_| labtrack::DEFAULT_REVENUE_PER_ORDER.to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid REVENUE_PER_ORDER: {}", e)))?;

    let seed_demo_data = env::var("SEED_DEMO_DATA")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEMO_DATA value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      simulated_latency: Duration::from_millis(simulated_latency_ms),
      revenue_per_order,
      seed_demo_data,
    })
  }
}
