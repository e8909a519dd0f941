//! Outbound adapters (driven side).

pub mod marathon;
