//! Order operations and the outcome categories they produce.

use serde::{Deserialize, Serialize};

crate::operation_enum! {
    /// Operations a user can run against an order.
    pub enum OrderOperation {
        Create => "order_create",
        Pay => "order_pay",
        Cancel => "order_cancel",
        Ship => "order_ship",
    }
}

/// Category of what an order operation did.
///
/// Message wording may change; the category is what callers match on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderEvent {
    /// A new order was opened after a cancel or a shipment
    Created,
    AlreadyCreated,
    /// Payment was taken for a freshly created order
    PaymentAccepted,
    AlreadyPaid,
    AlreadyReceived,
    /// The order was cancelled before payment
    Canceled,
    /// The order was cancelled after payment and the money returned
    Refunded,
    Shipped,
    AlreadyShipped,
    /// Shipping was refused because the order is not paid yet
    AwaitingPayment,
    CannotPay,
    CannotCancel,
    CannotShip,
}

impl OrderEvent {
    /// Check if the operation was refused outright.
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            Self::AwaitingPayment | Self::CannotPay | Self::CannotCancel | Self::CannotShip
        )
    }
}
