// labtrack_app/src/state.rs
use crate::config::AppConfig;
use labtrack::{OrderStore, SessionStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub orders: OrderStore,
  pub users: UserStore,
  pub sessions: Arc<dyn SessionStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
