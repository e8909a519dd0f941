//! Orchestrator-agnostic domain types.

pub mod error;
pub mod id;
pub mod outcome;
pub mod policy;
pub mod resource;
