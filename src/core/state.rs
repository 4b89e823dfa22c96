//! Core State trait for context-dispatched states.
//!
//! A state is one named mode of behavior. It declares a closed set of
//! operations and decides, per operation, what happens and whether the
//! owning context should switch to another state.

use super::error::StateError;
use std::fmt::{Debug, Display};

/// Trait for operation vocabularies dispatched to states.
///
/// Operations are finite enums rather than strings, so every
/// `(state, operation)` pair can be matched exhaustively. Use the
/// [`operation_enum!`](crate::operation_enum) macro to generate one.
pub trait Operation: Clone + PartialEq + Debug + Display + Send + Sync {
    /// Wire name of the operation, e.g. `"order_pay"`.
    fn name(&self) -> &'static str;
}

/// Result of a successful invocation.
///
/// `event` is the domain category of what happened (what tests and callers
/// match on), `message` is the human-readable text, and `next` names the
/// state the owning context should switch to, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<E> {
    pub event: E,
    pub message: String,
    pub next: Option<String>,
}

impl<E> Outcome<E> {
    /// Outcome that leaves the current state active.
    pub fn stay(event: E, message: impl Into<String>) -> Self {
        Self {
            event,
            message: message.into(),
            next: None,
        }
    }

    /// Outcome that asks the context to switch to `next`.
    pub fn transition(event: E, message: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            event,
            message: message.into(),
            next: Some(next.into()),
        }
    }

    /// Check if this outcome requests a state change.
    pub fn is_transition(&self) -> bool {
        self.next.is_some()
    }
}

/// Trait for states registered in a [`Context`](super::Context).
///
/// States never hold a reference to their context. Transition authority
/// still lives in the state: [`handle`](State::handle) names the next state
/// in its [`Outcome`] and the context applies it.
///
/// # Example
///
/// ```rust
/// use order_sim::core::{Outcome, State};
/// use order_sim::operation_enum;
///
/// operation_enum! {
///     pub enum Switch {
///         Flip => "flip",
///     }
/// }
///
/// #[derive(Debug)]
/// struct Off;
///
/// impl State<Switch, &'static str> for Off {
///     fn name(&self) -> Option<&str> {
///         Some("off")
///     }
///
///     fn operations(&self) -> &[Switch] {
///         Switch::ALL
///     }
///
///     fn handle(&self, _op: &Switch, _args: &[String]) -> Outcome<&'static str> {
///         Outcome::transition("flipped", "OFF: switching on", "on")
///     }
/// }
///
/// let outcome = Off.invoke(&Switch::Flip, &[]).unwrap();
/// assert_eq!(outcome.next.as_deref(), Some("on"));
/// ```
pub trait State<O: Operation, E>: Debug + Send + Sync {
    /// The state's identity. `None` models a state whose name was never set;
    /// such states are skipped at registration.
    fn name(&self) -> Option<&str>;

    /// The closed set of operations this state accepts.
    fn operations(&self) -> &[O];

    /// Run the domain logic bound to a supported operation.
    ///
    /// Only called through [`invoke`](State::invoke), after `supports` holds.
    fn handle(&self, op: &O, args: &[String]) -> Outcome<E>;

    /// Check if the operation is in this state's declared set.
    fn supports(&self, op: &O) -> bool {
        self.operations().contains(op)
    }

    /// Invoke an operation on this state.
    ///
    /// Returns [`StateError::UnsupportedOperation`] for operations outside
    /// the declared set. That condition is recoverable.
    fn invoke(&self, op: &O, args: &[String]) -> Result<Outcome<E>, StateError> {
        if !self.supports(op) {
            return Err(StateError::UnsupportedOperation {
                state: self.name().unwrap_or_default().to_string(),
                operation: op.name().to_string(),
            });
        }
        Ok(self.handle(op, args))
    }
}
