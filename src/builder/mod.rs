//! Builder API for ergonomic context construction.
//!
//! This module provides a fluent builder and a macro for declaring
//! operation vocabularies with minimal boilerplate.

pub mod context;
pub mod error;
pub mod macros;

pub use context::ContextBuilder;
pub use error::{BuildError, SetupViolation};
