//! Marathon orchestrator adapter.
//!
//! Provides the HTTP implementation of the
//! [`Orchestrator`](crate::port::outbound::orchestrator::Orchestrator) port.

pub mod client;
pub mod transport;
