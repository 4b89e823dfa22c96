//! Order lifecycle built on the generic context.
//!
//! An order moves between `create`, `pay`, `cancel` and `ship`. Every state
//! accepts all four operations; the transition table in
//! [`OrderState::react`] decides what each one does.

mod operation;
mod simulator;
mod state;

pub use operation::{OrderEvent, OrderOperation};
pub use simulator::OrderSimulator;
pub use state::OrderState;

use crate::builder::{BuildError, ContextBuilder};
use crate::core::Context;

/// Context specialised to orders.
pub type OrderContext = Context<OrderOperation, OrderEvent>;

/// Build an order context with all four states, starting in `create`.
pub fn new_order() -> OrderContext {
    new_order_with_initial(OrderState::Create.as_str())
        .expect("standard order states should always build")
}

/// Build an order context with all four states, starting in `initial`.
///
/// Fails when `initial` is not one of the registered state names.
pub fn new_order_with_initial(initial: &str) -> Result<OrderContext, BuildError> {
    ContextBuilder::new()
        .states(OrderState::ALL.iter().copied())
        .initial(initial)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SetupViolation;

    #[test]
    fn standard_registration_lists_four_states() {
        let order = new_order();

        let mut states = order.get_all_states();
        states.sort_unstable();
        assert_eq!(states, vec!["cancel", "create", "pay", "ship"]);
        assert_eq!(order.get_current_state().unwrap(), "create");
    }

    #[test]
    fn unknown_initial_state_is_reported() {
        let err = new_order_with_initial("draft").unwrap_err();

        assert_eq!(
            err.violations(),
            &[SetupViolation::UnknownInitialState {
                name: "draft".to_string()
            }]
        );
    }
}
