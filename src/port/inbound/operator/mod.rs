//! Operator-facing inbound ports consumed by CLI adapters.

pub mod deploy;
pub mod diagnostic;
pub mod port;
