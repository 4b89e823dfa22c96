//! Error types for state invocation and context dispatch.
//!
//! Every variant here is recoverable: callers report it and keep going.

use thiserror::Error;

/// Errors raised by a single state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Undefined method: {operation} (state '{state}')")]
    UnsupportedOperation { state: String, operation: String },
}

/// Errors raised by a context.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContextError {
    #[error("Undefined state: {name}")]
    UnknownState { name: String },

    #[error("No current state selected")]
    NoCurrentState,

    #[error(transparent)]
    UnsupportedOperation(#[from] StateError),
}

/// Error returned when parsing an unknown operation name.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown operation: {0}")]
pub struct ParseOperationError(pub String);
