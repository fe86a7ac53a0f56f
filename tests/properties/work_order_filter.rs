//! Property tests for work-order filtering and ordering.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use paintshop::{
    filter_and_sort, CalendarZone, EntityId, FilterCriteria, NewWorkOrder, Status, WorkOrder,
};

fn status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn order() -> impl Strategy<Value = WorkOrder> {
    (
        "[A-Za-zÀ-ú ]{1,12}",
        prop::option::of("[A-Za-z ]{0,10}"),
        status(),
        0i64..(60 * 24 * 30),
    )
        .prop_map(|(client, color, status, minutes)| {
            let created = Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes);
            let mut draft = NewWorkOrder::new(client, "Item", "1");
            draft.paint_color = color;
            let mut order = draft.into_work_order(EntityId::new("x"), created);
            order.status = status;
            order
        })
}

fn orders() -> impl Strategy<Value = Vec<WorkOrder>> {
    prop::collection::vec(order(), 0..24).prop_map(|mut orders| {
        for (i, o) in orders.iter_mut().enumerate() {
            o.id = EntityId::new(format!("wo-{}", i + 1));
        }
        orders
    })
}

fn day() -> impl Strategy<Value = NaiveDate> {
    (1u32..=30).prop_map(|d| NaiveDate::from_ymd_opt(2023, 11, d).unwrap())
}

fn zone() -> impl Strategy<Value = CalendarZone> {
    (-12i32..=14).prop_map(|hours| {
        FixedOffset::east_opt(hours * 3600)
            .map(CalendarZone::Fixed)
            .unwrap_or_else(CalendarZone::utc)
    })
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of("[a-zà-ú]{0,3}"),
        prop::option::of("[a-z]{0,2}"),
        prop::option::of(status()),
        prop::option::of(day()),
        prop::option::of(day()),
        zone(),
    )
        .prop_map(|(client_name, paint_color, status, created_from, created_to, zone)| {
            FilterCriteria {
                client_name,
                paint_color,
                status,
                created_from,
                created_to,
                zone,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every survivor satisfies every active predicate.
    #[test]
    fn property_results_satisfy_criteria(orders in orders(), criteria in criteria()) {
        for order in filter_and_sort(&orders, &criteria) {
            prop_assert!(criteria.matches(order));
            if let Some(status) = criteria.status {
                prop_assert_eq!(order.status, status);
            }
            if let Some(from) = criteria.created_from {
                prop_assert!(criteria.zone.day(order.created_at) >= from);
            }
            if let Some(to) = criteria.created_to {
                prop_assert!(criteria.zone.day(order.created_at) <= to);
            }
        }
    }

    /// PROPERTY: nothing that matches is dropped.
    #[test]
    fn property_no_matching_order_is_dropped(orders in orders(), criteria in criteria()) {
        let expected = orders.iter().filter(|o| criteria.matches(o)).count();
        prop_assert_eq!(filter_and_sort(&orders, &criteria).len(), expected);
    }

    /// PROPERTY: results are newest first.
    #[test]
    fn property_sorted_by_creation_descending(orders in orders(), criteria in criteria()) {
        let result = filter_and_sort(&orders, &criteria);
        for pair in result.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    /// PROPERTY: empty criteria return every order.
    #[test]
    fn property_no_criteria_returns_all(orders in orders()) {
        let result = filter_and_sort(&orders, &FilterCriteria::default());
        prop_assert_eq!(result.len(), orders.len());
    }

    /// PROPERTY: the input collection is never reordered or modified.
    #[test]
    fn property_input_untouched(orders in orders(), criteria in criteria()) {
        let before = orders.clone();
        let _ = filter_and_sort(&orders, &criteria);
        prop_assert_eq!(orders, before);
    }
}
