//! Property-based tests for order dispatch.
//!
//! These tests use proptest to check that the order context follows its
//! transition table for arbitrary operation sequences.

use order_sim::core::{Context, ContextError, Outcome, State};
use order_sim::order::{new_order, OrderEvent, OrderOperation, OrderState};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operation()(variant in 0..4u8) -> OrderOperation {
        match variant {
            0 => OrderOperation::Create,
            1 => OrderOperation::Pay,
            2 => OrderOperation::Cancel,
            _ => OrderOperation::Ship,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> OrderState {
        match variant {
            0 => OrderState::Create,
            1 => OrderState::Pay,
            2 => OrderState::Cancel,
            _ => OrderState::Ship,
        }
    }
}

#[derive(Debug)]
struct Unnamed;

impl State<OrderOperation, OrderEvent> for Unnamed {
    fn name(&self) -> Option<&str> {
        None
    }

    fn operations(&self) -> &[OrderOperation] {
        OrderOperation::ALL
    }

    fn handle(&self, _op: &OrderOperation, _args: &[String]) -> Outcome<OrderEvent> {
        Outcome::stay(OrderEvent::AlreadyCreated, "never registered")
    }
}

/// The transition table, spelled out independently of `OrderState::react`.
fn expected(state: OrderState, op: OrderOperation) -> (OrderEvent, Option<OrderState>) {
    use OrderEvent as E;
    use OrderOperation as Op;
    use OrderState as S;

    const TABLE: [(S, Op, E, Option<S>); 16] = [
        (S::Create, Op::Create, E::AlreadyCreated, None),
        (S::Create, Op::Pay, E::PaymentAccepted, Some(S::Pay)),
        (S::Create, Op::Cancel, E::Canceled, Some(S::Cancel)),
        (S::Create, Op::Ship, E::AwaitingPayment, None),
        (S::Pay, Op::Create, E::AlreadyReceived, None),
        (S::Pay, Op::Pay, E::AlreadyPaid, None),
        (S::Pay, Op::Cancel, E::Refunded, Some(S::Cancel)),
        (S::Pay, Op::Ship, E::Shipped, Some(S::Ship)),
        (S::Cancel, Op::Create, E::Created, Some(S::Create)),
        (S::Cancel, Op::Pay, E::CannotPay, None),
        (S::Cancel, Op::Cancel, E::CannotCancel, None),
        (S::Cancel, Op::Ship, E::CannotShip, None),
        (S::Ship, Op::Create, E::Created, Some(S::Create)),
        (S::Ship, Op::Pay, E::AlreadyShipped, None),
        (S::Ship, Op::Cancel, E::CannotCancel, None),
        (S::Ship, Op::Ship, E::AlreadyShipped, None),
    ];

    TABLE
        .iter()
        .find(|(s, o, _, _)| *s == state && *o == op)
        .map(|(_, _, event, next)| (*event, *next))
        .unwrap()
}

fn current(order: &Context<OrderOperation, OrderEvent>) -> OrderState {
    order.get_current_state().unwrap().parse().unwrap()
}

proptest! {
    #[test]
    fn dispatch_follows_transition_table(
        ops in prop::collection::vec(arbitrary_operation(), 1..40)
    ) {
        let mut order = new_order();

        for op in ops {
            let before = current(&order);
            let (expected_event, expected_next) = expected(before, op);

            let outcome = order.dispatch(&op, &[]).unwrap();

            prop_assert_eq!(outcome.event, expected_event);
            prop_assert_eq!(current(&order), expected_next.unwrap_or(before));
        }
    }

    #[test]
    fn next_state_depends_only_on_current_state(
        prefix in prop::collection::vec(arbitrary_operation(), 0..20),
        start in arbitrary_state(),
        op in arbitrary_operation(),
    ) {
        let mut walked = new_order();
        for step in &prefix {
            walked.dispatch(step, &[]).unwrap();
        }
        walked.set_state(start.as_str()).unwrap();

        let mut fresh = new_order();
        fresh.set_state(start.as_str()).unwrap();

        let walked_outcome = walked.dispatch(&op, &[]).unwrap();
        let fresh_outcome = fresh.dispatch(&op, &[]).unwrap();

        prop_assert_eq!(walked_outcome, fresh_outcome);
        prop_assert_eq!(current(&walked), current(&fresh));
    }

    #[test]
    fn no_op_dispatch_is_idempotent(
        start in arbitrary_state(),
        op in arbitrary_operation(),
        repeats in 1..10usize,
    ) {
        prop_assume!(expected(start, op).1.is_none());

        let mut order = new_order();
        order.set_state(start.as_str()).unwrap();

        for _ in 0..repeats {
            order.dispatch(&op, &[]).unwrap();
            prop_assert_eq!(current(&order), start);
        }
        prop_assert!(order.history().is_empty());
    }

    #[test]
    fn unknown_state_name_changes_nothing(
        ops in prop::collection::vec(arbitrary_operation(), 0..10),
        name in "[a-z]{1,12}",
    ) {
        prop_assume!(name.parse::<OrderState>().is_err());

        let mut order = new_order();
        for op in &ops {
            order.dispatch(op, &[]).unwrap();
        }
        let before = current(&order);

        let result = order.set_state(&name);

        prop_assert_eq!(result, Err(ContextError::UnknownState { name: name.clone() }));
        prop_assert_eq!(current(&order), before);
        prop_assert_eq!(order.get_all_states(), vec!["cancel", "create", "pay", "ship"]);
    }

    #[test]
    fn history_path_ends_at_current_state(
        ops in prop::collection::vec(arbitrary_operation(), 1..30)
    ) {
        let mut order = new_order();
        for op in &ops {
            order.dispatch(op, &[]).unwrap();
        }

        let path = order.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(*last, order.get_current_state().unwrap());
            prop_assert_eq!(path[0], "create");
        }
    }
}

#[test]
fn unnamed_state_does_not_grow_registry() {
    let mut order = new_order();

    order.add_state(Box::new(Unnamed));

    assert_eq!(order.state_count(), 4);
}

#[test]
fn pay_cancel_create_returns_to_create() {
    let mut order = new_order();

    for op in [OrderOperation::Pay, OrderOperation::Cancel, OrderOperation::Create] {
        order.dispatch(&op, &[]).unwrap();
    }

    assert_eq!(current(&order), OrderState::Create);
    assert_eq!(
        order.history().get_path(),
        vec!["create", "pay", "cancel", "create"]
    );
}

#[test]
fn pay_ship_ship_create_scenario() {
    let mut order = new_order();

    let paid = order.dispatch(&OrderOperation::Pay, &[]).unwrap();
    assert_eq!(paid.event, OrderEvent::PaymentAccepted);
    assert_eq!(current(&order), OrderState::Pay);

    order.dispatch(&OrderOperation::Ship, &[]).unwrap();
    assert_eq!(current(&order), OrderState::Ship);

    let again = order.dispatch(&OrderOperation::Ship, &[]).unwrap();
    assert_eq!(again.event, OrderEvent::AlreadyShipped);
    assert_eq!(current(&order), OrderState::Ship);

    let reopened = order.dispatch(&OrderOperation::Create, &[]).unwrap();
    assert_eq!(reopened.event, OrderEvent::Created);
    assert_eq!(current(&order), OrderState::Create);
}

#[test]
fn cancel_then_pay_is_blocked() {
    let mut order = new_order();

    order.dispatch(&OrderOperation::Cancel, &[]).unwrap();
    assert_eq!(current(&order), OrderState::Cancel);

    let blocked = order.dispatch(&OrderOperation::Pay, &[]).unwrap();
    assert_eq!(blocked.event, OrderEvent::CannotPay);
    assert_eq!(current(&order), OrderState::Cancel);
}
