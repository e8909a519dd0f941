//! Application services (use cases).
//!
//! These services orchestrate domain logic and drive outbound ports
//! to implement the application's use cases.

pub mod reconcile;
