//! Builder for constructing contexts.

use crate::builder::error::{BuildError, SetupViolation};
use crate::core::{Context, Operation, Registration, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;
use uuid::Uuid;

/// Builder for registering states and selecting the initial one.
///
/// Validation runs once in [`build`](ContextBuilder::build) and reports every
/// problem at once instead of stopping at the first.
///
/// # Example
///
/// ```rust
/// use order_sim::builder::ContextBuilder;
/// use order_sim::order::{OrderEvent, OrderOperation, OrderState};
///
/// let order = ContextBuilder::<OrderOperation, OrderEvent>::new()
///     .state(OrderState::Create)
///     .state(OrderState::Pay)
///     .initial("create")
///     .build()
///     .unwrap();
///
/// assert_eq!(order.get_current_state().unwrap(), "create");
/// ```
pub struct ContextBuilder<O: Operation, E> {
    id: Option<Uuid>,
    states: Vec<Box<dyn State<O, E>>>,
    initial: Option<String>,
}

impl<O: Operation, E> ContextBuilder<O, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: None,
            states: Vec::new(),
            initial: None,
        }
    }

    /// Use a fixed identifier instead of a random one.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<O, E> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add an already boxed state.
    pub fn boxed_state(mut self, state: Box<dyn State<O, E>>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: State<O, E> + 'static,
    {
        self.states
            .extend(states.into_iter().map(|s| Box::new(s) as Box<dyn State<O, E>>));
        self
    }

    /// Set the initial state by name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the context.
    ///
    /// Registers every state (unnamed ones are skipped), then validates the
    /// setup and selects the initial state.
    pub fn build(self) -> Result<Context<O, E>, BuildError> {
        let mut context = match self.id {
            Some(id) => Context::with_id(id),
            None => Context::new(),
        };

        for state in self.states {
            if context.add_state(state) == Registration::Replaced {
                debug!(context = %context.id(), "state registered twice, keeping the last one");
            }
        }

        if let Validation::Failure(violations) = validate_setup(&context, self.initial.as_deref())
        {
            return Err(BuildError::Invalid(violations.iter().cloned().collect()));
        }

        if let Some(initial) = self.initial.as_deref() {
            context.set_state(initial)?;
        }

        Ok(context)
    }
}

impl<O: Operation, E> Default for ContextBuilder<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a registered context against its requested initial state,
/// accumulating every violation.
fn validate_setup<O: Operation, E>(
    context: &Context<O, E>,
    initial: Option<&str>,
) -> Validation<(), NonEmptyVec<SetupViolation>> {
    let has_states = if context.state_count() > 0 {
        Validation::success(())
    } else {
        Validation::fail(SetupViolation::NoStates)
    };

    let initial_known = match initial {
        None => Validation::fail(SetupViolation::MissingInitialState),
        Some(name) if !context.contains(name) => {
            Validation::fail(SetupViolation::UnknownInitialState {
                name: name.to_string(),
            })
        }
        Some(_) => Validation::success(()),
    };

    Validation::all_vec(vec![has_states, initial_known]).map(|_| ())
}
