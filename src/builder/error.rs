//! Build errors for the context builder.

use crate::core::ContextError;
use thiserror::Error;

/// A single problem found while validating a context setup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SetupViolation {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Initial state '{name}' is not registered")]
    UnknownInitialState { name: String },

    #[error("No named states registered. Add at least one state")]
    NoStates,
}

/// Errors that can occur when building a context.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every violation found during validation, not just the first.
    #[error("Invalid context setup: {}", join_violations(.0))]
    Invalid(Vec<SetupViolation>),

    #[error(transparent)]
    Context(#[from] ContextError),
}

impl BuildError {
    /// Violations carried by this error, empty for non-validation errors.
    pub fn violations(&self) -> &[SetupViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Context(_) => &[],
        }
    }
}

fn join_violations(violations: &[SetupViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
