//! Contract error types for warehouse service
//!
//! These errors are transport-agnostic and used for inter-module communication.
//! The storage layer is the only place that produces `Conflict`, `NotFound`
//! and `Internal` from database outcomes; callers above it pass them through.

use thiserror::Error;

/// Warehouse service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarehouseError {
    /// Malformed or missing input, raised at the transport boundary
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A uniqueness constraint was violated
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// The referenced warehouse does not exist
    #[error("warehouse not found: {id}")]
    NotFound { id: i64 },

    /// The unit of work was cancelled or ran out of time
    #[error("operation cancelled")]
    Cancelled,

    /// Any other store or connectivity failure
    #[error("Internal error")]
    Internal,
}

impl WarehouseError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn duplicate_code(code: &str) -> Self {
        Self::Conflict {
            reason: format!("warehouse code already exists: {code}"),
        }
    }
}
