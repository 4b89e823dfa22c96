//! Typed façade over an order context.

use super::operation::{OrderEvent, OrderOperation};
use super::state::OrderState;
use super::{new_order_with_initial, OrderContext};
use crate::builder::BuildError;
use crate::core::{ContextError, Outcome};

/// One simulated order with a method per operation.
///
/// # Example
///
/// ```rust
/// use order_sim::order::{OrderEvent, OrderSimulator, OrderState};
///
/// let mut order = OrderSimulator::new();
/// order.pay().unwrap();
/// let outcome = order.ship().unwrap();
///
/// assert_eq!(outcome.event, OrderEvent::Shipped);
/// assert_eq!(order.state().unwrap(), OrderState::Ship);
/// ```
#[derive(Debug)]
pub struct OrderSimulator {
    context: OrderContext,
}

impl Default for OrderSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSimulator {
    /// A fresh order in the `create` state.
    pub fn new() -> Self {
        Self {
            context: super::new_order(),
        }
    }

    /// A fresh order starting in the named state.
    pub fn with_initial(name: &str) -> Result<Self, BuildError> {
        Ok(Self {
            context: new_order_with_initial(name)?,
        })
    }

    pub fn create(&mut self) -> Result<Outcome<OrderEvent>, ContextError> {
        self.run(OrderOperation::Create)
    }

    pub fn pay(&mut self) -> Result<Outcome<OrderEvent>, ContextError> {
        self.run(OrderOperation::Pay)
    }

    pub fn cancel(&mut self) -> Result<Outcome<OrderEvent>, ContextError> {
        self.run(OrderOperation::Cancel)
    }

    pub fn ship(&mut self) -> Result<Outcome<OrderEvent>, ContextError> {
        self.run(OrderOperation::Ship)
    }

    /// Dispatch any order operation to the active state.
    pub fn run(&mut self, op: OrderOperation) -> Result<Outcome<OrderEvent>, ContextError> {
        self.context.dispatch(&op, &[])
    }

    /// The active state.
    pub fn state(&self) -> Result<OrderState, ContextError> {
        self.context.get_current_state()?.parse()
    }

    pub fn context(&self) -> &OrderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut OrderContext {
        &mut self.context
    }
}
