//! The four order states and their transition table.

use super::operation::{OrderEvent, OrderOperation};
use crate::core::{ContextError, Outcome, State};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a simulated order.
///
/// The graph is cyclic: both `Cancel` and `Ship` lead back to `Create`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Create,
    Pay,
    Cancel,
    Ship,
}

impl OrderState {
    /// Every order state, in lifecycle order.
    pub const ALL: &'static [OrderState] = &[Self::Create, Self::Pay, Self::Cancel, Self::Ship];

    /// Registry name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Pay => "pay",
            Self::Cancel => "cancel",
            Self::Ship => "ship",
        }
    }

    /// Message prefix, e.g. `PAY`.
    fn label(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Pay => "PAY",
            Self::Cancel => "CANCEL",
            Self::Ship => "SHIP",
        }
    }

    /// Look up the transition table.
    ///
    /// Returns the outcome category and the next state, `None` when the
    /// order stays where it is.
    pub fn react(&self, op: OrderOperation) -> (OrderEvent, Option<OrderState>) {
        use OrderEvent as E;
        use OrderOperation as Op;

        match (self, op) {
            (Self::Create, Op::Create) => (E::AlreadyCreated, None),
            (Self::Create, Op::Pay) => (E::PaymentAccepted, Some(Self::Pay)),
            (Self::Create, Op::Cancel) => (E::Canceled, Some(Self::Cancel)),
            (Self::Create, Op::Ship) => (E::AwaitingPayment, None),

            (Self::Pay, Op::Create) => (E::AlreadyReceived, None),
            (Self::Pay, Op::Pay) => (E::AlreadyPaid, None),
            (Self::Pay, Op::Cancel) => (E::Refunded, Some(Self::Cancel)),
            (Self::Pay, Op::Ship) => (E::Shipped, Some(Self::Ship)),

            (Self::Cancel, Op::Create) => (E::Created, Some(Self::Create)),
            (Self::Cancel, Op::Pay) => (E::CannotPay, None),
            (Self::Cancel, Op::Cancel) => (E::CannotCancel, None),
            (Self::Cancel, Op::Ship) => (E::CannotShip, None),

            (Self::Ship, Op::Create) => (E::Created, Some(Self::Create)),
            (Self::Ship, Op::Pay) => (E::AlreadyShipped, None),
            (Self::Ship, Op::Cancel) => (E::CannotCancel, None),
            (Self::Ship, Op::Ship) => (E::AlreadyShipped, None),
        }
    }

    fn describe(&self, op: OrderOperation) -> &'static str {
        use OrderOperation as Op;

        match (self, op) {
            (Self::Create, Op::Create) => "Order already created, waiting for payment",
            (Self::Create, Op::Pay) => "Order was successfully paid",
            (Self::Create, Op::Cancel) => "Order was canceled",
            (Self::Create, Op::Ship) => "Cannot ship, waiting for payment",

            (Self::Pay, Op::Create) => "Order already received, waiting for shipping",
            (Self::Pay, Op::Pay) => "Payment already accepted",
            (Self::Pay, Op::Cancel) => "Order canceled, your money was refunded",
            (Self::Pay, Op::Ship) => "Order was successfully shipped",

            (Self::Cancel, Op::Create) => "Your order was created",
            (Self::Cancel, Op::Pay) => "Cannot pay, order does not exist",
            (Self::Cancel, Op::Cancel) => "Cannot cancel, order does not exist",
            (Self::Cancel, Op::Ship) => "Cannot ship, order does not exist",

            (Self::Ship, Op::Create) => "Creating new order",
            (Self::Ship, Op::Pay) => "Payment already accepted and order was shipped",
            (Self::Ship, Op::Cancel) => "Cannot cancel, order was already shipped",
            (Self::Ship, Op::Ship) => "Cannot ship, order was already shipped",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ContextError::UnknownState {
                name: s.to_string(),
            })
    }
}

impl State<OrderOperation, OrderEvent> for OrderState {
    fn name(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn operations(&self) -> &[OrderOperation] {
        OrderOperation::ALL
    }

    fn handle(&self, op: &OrderOperation, _args: &[String]) -> Outcome<OrderEvent> {
        let (event, next) = self.react(*op);
        let message = format!("{}: {}", self.label(), self.describe(*op));

        match next {
            Some(next) => Outcome::transition(event, message, next.as_str()),
            None => Outcome::stay(event, message),
        }
    }
}
