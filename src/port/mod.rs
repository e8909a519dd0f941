//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   CLI ────────▶ │ inbound::operator        │
//!                 │   Domain + Reconciler    │
//!                 │ outbound::orchestrator   ├────────▶ Marathon
//!                 └──────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::orchestrator::Orchestrator`] - Remote cluster orchestrator (apps and groups)
//! - [`inbound::operator::port::OperatorPort`] - Deployment and diagnostic use cases for the CLI

pub mod inbound;
pub mod outbound;
