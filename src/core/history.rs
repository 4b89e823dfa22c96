//! State transition history tracking.
//!
//! Keeps an immutable log of the transitions a context applied, in the
//! order they happened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use order_sim::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "create".to_string(),
///     to: "pay".to_string(),
///     operation: "order_pay".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "pay");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// Wire name of the operation that triggered the transition
    pub operation: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended. The owning
/// context appends in place with `push`.
///
/// # Example
///
/// ```rust
/// use order_sim::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: "create".to_string(),
///     to: "pay".to_string(),
///     operation: "order_pay".to_string(),
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: "pay".to_string(),
///     to: "ship".to_string(),
///     operation: "order_ship".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec!["create", "pay", "ship"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Get the path of state names traversed.
    ///
    /// The first entry is the `from` of the first transition, followed by
    /// the `to` of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Calculate total duration from first to last transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
