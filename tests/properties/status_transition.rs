//! Property tests for the status transition function.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use paintshop::domain::policies::{is_quick_action, quick_actions};
use paintshop::{next_work_order_state, EntityId, NewWorkOrder, Status, WorkOrder};

fn status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..100_000).prop_map(|m| Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap() + Duration::minutes(m))
}

fn order() -> impl Strategy<Value = WorkOrder> {
    (
        status(),
        instant(),
        prop::option::of(instant()),
        prop::option::of(instant()),
    )
        .prop_map(|(status, created, started, completed)| {
            let mut order = NewWorkOrder::new("Cliente", "Item", "1")
                .into_work_order(EntityId::new("wo-1"), created);
            order.status = status;
            order.started_at = started;
            order.completed_at = completed;
            order
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the target status is always applied; identity fields never change.
    #[test]
    fn property_target_applied(order in order(), target in status(), now in instant()) {
        let next = next_work_order_state(&order, target, now);
        prop_assert_eq!(next.status, target);
        prop_assert_eq!(&next.id, &order.id);
        prop_assert_eq!(next.created_at, order.created_at);
        prop_assert_eq!(&next.client_name, &order.client_name);
    }

    /// PROPERTY: starting keeps the first start time.
    #[test]
    fn property_start_is_sticky(order in order(), t1 in instant(), t2 in instant()) {
        let once = next_work_order_state(&order, Status::InProgress, t1);
        let twice = next_work_order_state(&once, Status::InProgress, t2);
        prop_assert_eq!(once.started_at, Some(order.started_at.unwrap_or(t1)));
        prop_assert_eq!(twice.started_at, once.started_at);
    }

    /// PROPERTY: completing always stamps now and leaves the start alone.
    #[test]
    fn property_complete_stamps_now(order in order(), now in instant()) {
        let next = next_work_order_state(&order, Status::Completed, now);
        prop_assert_eq!(next.completed_at, Some(now));
        prop_assert_eq!(next.started_at, order.started_at);
    }

    /// PROPERTY: canceling and reverting stamp nothing.
    #[test]
    fn property_cancel_and_pending_stamp_nothing(
        order in order(),
        target in prop::sample::select(vec![Status::Canceled, Status::Pending]),
        now in instant(),
    ) {
        let next = next_work_order_state(&order, target, now);
        prop_assert_eq!(next.started_at, order.started_at);
        prop_assert_eq!(next.completed_at, order.completed_at);
    }

    /// PROPERTY: terminal statuses offer no quick action, and none leads to Pending.
    #[test]
    fn property_quick_actions(from in status(), target in status()) {
        if from.is_terminal() {
            prop_assert!(quick_actions(from).is_empty());
        }
        if target == Status::Pending {
            prop_assert!(!is_quick_action(from, target));
        }
    }
}
