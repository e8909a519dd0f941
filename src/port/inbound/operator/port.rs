//! Unified operator capability surface for inbound adapters.

use super::deploy::DeployOperator;
use super::diagnostic::DiagnosticOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: DeployOperator + DiagnosticOperator {}

impl<T> OperatorPort for T where T: DeployOperator + DiagnosticOperator {}
