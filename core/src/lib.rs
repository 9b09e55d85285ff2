// src/lib.rs

//! Labtrack: an in-memory order-lifecycle engine for dental prosthetic
//! fabrication.
//!
//! Labtrack tracks prosthetic orders from intake to delivery:
//!  - An order store with tagged mutation variants and an append-only status
//!    audit log.
//!  - A status progression tracker over the fixed six-stage sequence.
//!  - An analytics aggregator producing counts, frequency tables, and
//!    trailing-12-month volume/revenue buckets on demand.
//!  - Dashboard query helpers: filtering, searching, and the shared
//!    priority-then-due-date worklist ordering.
//!  - An admin-managed user store and an injectable session-persistence seam.
//!
//! Stores are handles: cloning one shares the underlying collection. All
//! mutations are synchronous, last write wins, and a failed operation leaves
//! the store unchanged.

// Declare modules according to the planned structure
pub mod analytics;
pub mod error;
pub mod model;
pub mod progress;
pub mod query;
pub mod session;
pub mod store;

// --- Re-exports for the Public API ---

// Model types users of the crate touch constantly
pub use crate::model::order::{
  Carrier, Order, OrderPriority, OrderStatus, ProductionPhoto, ProstheticType, StatusUpdate,
};
pub use crate::model::user::{ContactInfo, Permission, User, UserRole};

// The stores and their operation payloads
pub use crate::store::orders::{AdminOrderPatch, NewOrder, OrderMutation, OrderStore, PhotoUpload};
pub use crate::store::users::{NewUser, UserPatch, UserStore};

// Derived views
pub use crate::analytics::{Analytics, MonthlyRevenue, MonthlyVolume, DEFAULT_REVENUE_PER_ORDER};
pub use crate::progress::{ProgressSummary, StepState, STATUS_SEQUENCE};
pub use crate::query::{OrderFilter, StatusCounts};

// Session persistence
pub use crate::session::{MemorySessionStore, SessionStore, SessionUser, SESSION_USER_KEY};

pub use crate::error::{StoreError, StoreResult};

/*
    Core workflow:
    1. Build an `OrderStore` (empty or from seed data) and hand clones of the
       handle to each role-scoped view.
    2. Clinics call `create`; labs advance `update_status` and attach
       tracking, priority, estimates, and photos; admins patch, override, and
       assign labs. Every status change appends to the order's history.
    3. Render progression with `progress::summary`, worklists with
       `query::filter_and_sort`, and reports with `Analytics::generate`.
*/
