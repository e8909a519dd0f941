//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! decision logic: configuration loading, logging setup, and wiring of the
//! orchestrator client and reconciler for a deployment run.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - CLI operator interface

pub mod bootstrap;
pub mod config;
pub mod operator;
