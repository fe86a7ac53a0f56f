//! Scenario: a work order from intake to delivery
//!
//! Journey: the shop registers a service, opens an order for a client,
//! starts the work and delivers it. Meanwhile the order list is filtered
//! by creation date.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Duration;
use paintshop::domain::ports::StoreEvent;
use paintshop::{filter_and_sort, CalendarZone, FilterCriteria, NewService, NewWorkOrder, Status};

use crate::common::*;

/// SCENARIO: Pending -> InProgress -> Completed stamps each timestamp once
#[test]
fn scenario_order_lifecycle() {
    let (mut store, clock) = fixed_store();
    let s1 = store.add_service(NewService::new("Aplicação de Primer", "Fundo", 2));

    let order = store.add_work_order(NewWorkOrder::new("Ana Costa", "Mesa", s1.id.clone()));
    assert_eq!(order.status, Status::Pending);
    assert_eq!(order.created_at, at(1, 8));

    clock.advance(Duration::hours(1));
    let started = store
        .transition_work_order(&order.id, Status::InProgress)
        .unwrap();
    assert_eq!(started.started_at, Some(at(1, 9)));

    clock.advance(Duration::hours(5));
    let done = store
        .transition_work_order(&order.id, Status::Completed)
        .unwrap();
    assert_eq!(done.completed_at, Some(at(1, 14)));
    assert_eq!(done.started_at, Some(at(1, 9)));
    assert_eq!(store.work_order(&order.id), Some(&done));
}

/// SCENARIO: orders from day 1 and day 3, filter from day 2
#[test]
fn scenario_filter_by_creation_date() {
    let (mut store, clock) = fixed_store();
    let early = store.add_work_order(NewWorkOrder::new("Ana", "Mesa", "1"));
    clock.set(at(3, 8));
    let late = store.add_work_order(NewWorkOrder::new("Bia", "Porta", "1"));

    let criteria = FilterCriteria::new()
        .created_from(date(2))
        .in_zone(CalendarZone::utc());
    let visible = filter_and_sort(store.work_orders(), &criteria);

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, late.id);
    assert_ne!(visible[0].id, early.id);
}

/// SCENARIO: the list view re-derives after every notified mutation
#[test]
fn scenario_subscriber_rederives_view() {
    let (mut store, _clock) = fixed_store();
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    store.subscribe(Box::new(move |event: &StoreEvent| {
        sink.borrow_mut().push(event.name())
    }));

    let order = store.add_work_order(NewWorkOrder::new("Ana", "Mesa", "1"));
    let pending = FilterCriteria::new().status(Status::Pending);
    assert_eq!(filter_and_sort(store.work_orders(), &pending).len(), 1);

    store.transition_work_order(&order.id, Status::Canceled);
    assert!(filter_and_sort(store.work_orders(), &pending).is_empty());

    assert_eq!(
        *notified.borrow(),
        vec!["work_order_added", "work_order_updated"]
    );
}

/// SCENARIO: editing an order keeps its lifecycle
#[test]
fn scenario_edit_keeps_status_and_timestamps() {
    let mut store = seeded_store();
    let original = store
        .work_order(&paintshop::EntityId::new("wo-1"))
        .cloned()
        .unwrap();

    let draft = NewWorkOrder::from(&original).paint_color("Azul Petróleo");
    draft.validate().unwrap();
    assert!(store.update_work_order(original.with_draft(draft)));

    let edited = store
        .work_order(&paintshop::EntityId::new("wo-1"))
        .unwrap();
    assert_eq!(edited.paint_color.as_deref(), Some("Azul Petróleo"));
    assert_eq!(edited.status, Status::Completed);
    assert_eq!(edited.started_at, original.started_at);
    assert_eq!(edited.completed_at, original.completed_at);
}

/// SCENARIO: deleting a service leaves its orders listed as "N/A"
#[test]
fn scenario_deleted_service_dangles() {
    let mut store = seeded_store();
    assert!(store.delete_service(&paintshop::EntityId::new("2")));

    let orphans: Vec<_> = store
        .work_orders()
        .iter()
        .filter(|o| store.service_name_for(o).is_none())
        .map(|o| o.id.to_string())
        .collect();

    assert_eq!(orphans, vec!["wo-1", "wo-5"]);
}
