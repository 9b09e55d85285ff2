// core/src/model/mod.rs

//! Data structures for the order-management domain: orders with their audited
//! status history, and the admin-managed user accounts.

pub mod order;
pub mod user;

pub use order::{
  Carrier, Order, OrderPriority, OrderStatus, ProductionPhoto, ProstheticType, StatusUpdate,
};
pub use user::{ContactInfo, Permission, User, UserRole};
