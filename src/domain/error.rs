//! Domain validation errors for resource descriptors.
//!
//! These errors are returned when a decoded application or group violates
//! an invariant the reconciler relies on.
//!
//! # Examples
//!
//! ```
//! use marathon_deploy::domain::error::DomainError;
//! use marathon_deploy::domain::resource::Application;
//!
//! let app: Application = serde_json::from_str(r#"{"id": ""}"#).unwrap();
//! assert!(matches!(app.validate(), Err(DomainError::EmptyId { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when resource invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every application and group needs a non-empty id.
    #[error("{kind} id cannot be empty")]
    EmptyId {
        /// Either `"application"` or `"group"`.
        kind: &'static str,
    },

    /// Group nesting exceeded the supported depth.
    #[error("group {id} is nested deeper than {max} levels")]
    NestingTooDeep {
        /// The group at which the limit was crossed.
        id: String,
        /// The configured maximum depth.
        max: usize,
    },
}
