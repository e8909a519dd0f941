//! Reconciliation engine: existence classification and the reconciler.

pub mod existence;
pub mod reconciler;
