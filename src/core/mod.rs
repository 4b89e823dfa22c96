//! Core state/context types and logic.
//!
//! This module contains the generic dispatch core:
//! - Operations and states via the `Operation` and `State` traits
//! - The `Context` registry that routes operations to the active state
//! - Immutable transition history
//!
//! Nothing in here knows about orders; the order lifecycle is one
//! instance built on top of it.

mod context;
mod error;
mod history;
mod state;

pub use context::{Context, Registration};
pub use error::{ContextError, ParseOperationError, StateError};
pub use history::{StateHistory, StateTransition};
pub use state::{Operation, Outcome, State};
