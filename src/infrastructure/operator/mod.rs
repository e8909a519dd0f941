//! Operator implementations for inbound adapters.

pub mod deploy;
pub mod diagnostic;
pub mod entry;

mod shared;
