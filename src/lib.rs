//! Order Sim: an order lifecycle simulator on a small state/context core.
//!
//! The core is the State pattern made explicit: a [`Context`] owns a
//! registry of named [`State`]s, keeps one of them active, and routes
//! operations to it. A state answers each operation with an [`Outcome`]
//! that may name the next state; the context applies it and records the
//! transition.
//!
//! # Core Concepts
//!
//! - **Operation**: a finite enum of actions, see [`operation_enum!`]
//! - **State**: a named mode with a closed set of supported operations
//! - **Context**: the registry plus the active state
//! - **History**: immutable log of applied transitions
//!
//! # Example
//!
//! ```rust
//! use order_sim::order::{new_order, OrderEvent, OrderOperation};
//!
//! let mut order = new_order();
//!
//! let paid = order.dispatch(&OrderOperation::Pay, &[]).unwrap();
//! assert_eq!(paid.event, OrderEvent::PaymentAccepted);
//!
//! let again = order.dispatch(&OrderOperation::Pay, &[]).unwrap();
//! assert_eq!(again.event, OrderEvent::AlreadyPaid);
//! assert_eq!(order.get_current_state().unwrap(), "pay");
//! ```

pub mod builder;
pub mod cli;
pub mod core;
pub mod order;

// Re-export commonly used types
pub use crate::builder::{BuildError, ContextBuilder};
pub use crate::core::{Context, ContextError, Operation, Outcome, State, StateError, StateHistory};
