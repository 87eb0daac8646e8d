//! Domain error types.
//!
//! These errors represent construction failures in the domain layer. They
//! are distinct from planning outcomes: a missing route is not an error.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route must contain at least one node
    #[error("route must have at least one node")]
    EmptyRoute,
}
