//! Context: registry of states plus the currently active one.

use super::error::ContextError;
use super::history::{StateHistory, StateTransition};
use super::state::{Operation, Outcome, State};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Result of [`Context::add_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The state was registered under a new name
    Registered,
    /// An existing state with the same name was replaced
    Replaced,
    /// The state had no name and was ignored
    Skipped,
}

/// Owner of all registered states and of the active state selection.
///
/// The context owns every state through its registry. The active state is
/// held by name only, and always names a registered entry once set.
///
/// # Example
///
/// ```rust
/// use order_sim::core::Context;
/// use order_sim::order::{OrderEvent, OrderOperation, OrderState};
///
/// let mut order: Context<OrderOperation, OrderEvent> = Context::new();
/// for state in OrderState::ALL {
///     order.add_state(Box::new(*state));
/// }
/// order.set_state("create").unwrap();
///
/// let outcome = order.dispatch(&OrderOperation::Pay, &[]).unwrap();
/// assert_eq!(outcome.event, OrderEvent::PaymentAccepted);
/// assert_eq!(order.get_current_state().unwrap(), "pay");
/// ```
#[derive(Debug)]
pub struct Context<O: Operation, E> {
    id: Uuid,
    states: BTreeMap<String, Box<dyn State<O, E>>>,
    current: Option<String>,
    history: StateHistory,
}

impl<O: Operation, E> Default for Context<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Operation, E> Context<O, E> {
    /// Create an empty context with a fresh random id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Create an empty context with a fixed id.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            states: BTreeMap::new(),
            current: None,
            history: StateHistory::new(),
        }
    }

    /// Identifier of the simulated entity this context tracks.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register a state under its name.
    ///
    /// States without a name are skipped without an error; the registry is
    /// left unchanged and [`Registration::Skipped`] is returned.
    pub fn add_state(&mut self, state: Box<dyn State<O, E>>) -> Registration {
        let Some(name) = state.name().map(str::to_string) else {
            debug!(context = %self.id, "skipping state without a name");
            return Registration::Skipped;
        };

        debug!(context = %self.id, state = %name, "registering state");
        match self.states.insert(name, state) {
            Some(_) => Registration::Replaced,
            None => Registration::Registered,
        }
    }

    /// Make the named state current.
    ///
    /// Unknown names leave both the registry and the current state unchanged.
    pub fn set_state(&mut self, name: &str) -> Result<(), ContextError> {
        if !self.states.contains_key(name) {
            warn!(context = %self.id, state = name, "unknown state requested");
            return Err(ContextError::UnknownState {
                name: name.to_string(),
            });
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Names of all registered states, sorted.
    pub fn get_all_states(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Name of the active state.
    pub fn get_current_state(&self) -> Result<&str, ContextError> {
        self.current.as_deref().ok_or(ContextError::NoCurrentState)
    }

    /// Check if a state with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Transitions applied so far.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Forward an operation to the active state.
    ///
    /// When the returned outcome names a next state, the context switches
    /// to it and records the transition. A next state that is not
    /// registered is reported as [`ContextError::UnknownState`] and the
    /// current state stays as it was.
    pub fn dispatch(&mut self, op: &O, args: &[String]) -> Result<Outcome<E>, ContextError> {
        let from = self.current.clone().ok_or(ContextError::NoCurrentState)?;
        let state = self
            .states
            .get(&from)
            .ok_or(ContextError::NoCurrentState)?;

        let outcome = state.invoke(op, args).map_err(|err| {
            warn!(context = %self.id, error = %err, "operation rejected");
            ContextError::from(err)
        })?;

        if let Some(next) = outcome.next.as_deref() {
            self.set_state(next)?;
            debug!(
                context = %self.id,
                from = %from,
                to = next,
                operation = op.name(),
                "state transition"
            );
            self.history.push(StateTransition {
                from,
                to: next.to_string(),
                operation: op.name().to_string(),
                timestamp: Utc::now(),
            });
        }

        Ok(outcome)
    }
}
