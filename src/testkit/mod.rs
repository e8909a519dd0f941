//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`orchestrator`] - `RecordingOrchestrator`, a scripted in-memory
//!   [`Orchestrator`](crate::port::outbound::orchestrator::Orchestrator).
//! - [`domain`] - Builders for applications and group trees.

pub mod domain;
pub mod orchestrator;
