// labtrack_app/src/services/mod.rs

//! The role-scoped portals and the simulated authentication service. Each
//! portal is a thin facade over the shared store handles; what a role may do
//! is exactly the set of methods its portal exposes.

pub mod admin;
pub mod auth;
pub mod clinic;
pub mod lab;

pub use admin::AdminPortal;
pub use auth::AuthService;
pub use clinic::ClinicPortal;
pub use lab::LabPortal;
