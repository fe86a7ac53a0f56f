//! CONTRACT: the store never fails and ignores unknown ids.

use paintshop::{EntityId, NewService, NewWorkOrder, Status};

use crate::common::*;

#[test]
fn contract_unknown_ids_are_no_ops() {
    let mut store = seeded_store();
    let services = store.services().to_vec();
    let orders = store.work_orders().to_vec();
    let ghost = EntityId::new("ghost");

    let mut service = services[0].clone();
    service.id = ghost.clone();
    let mut order = orders[0].clone();
    order.id = ghost.clone();

    assert!(!store.update_service(service));
    assert!(!store.update_work_order(order));
    assert!(!store.delete_service(&ghost));
    assert!(store.transition_work_order(&ghost, Status::Completed).is_none());

    assert_eq!(store.services(), services.as_slice());
    assert_eq!(store.work_orders(), orders.as_slice());
}

#[test]
fn contract_new_orders_ignore_incoming_lifecycle() {
    let (mut store, clock) = fixed_store();
    let order = store.add_work_order(NewWorkOrder::new("Ana", "Mesa", "1"));
    assert_eq!(order.status, Status::Pending);
    assert_eq!(order.created_at, clock_now(&clock));
    assert_eq!(order.started_at, None);
    assert_eq!(order.completed_at, None);
}

#[test]
fn contract_fresh_ids_never_collide_with_seed() {
    let mut store = seeded_store();
    let added = store.add_service(NewService::new("Lixamento", "Preparo", 1));
    let existing: Vec<&EntityId> = store
        .services()
        .iter()
        .filter(|s| s.id != added.id)
        .map(|s| &s.id)
        .collect();
    assert!(!existing.contains(&&added.id));
}

fn clock_now(clock: &paintshop::infrastructure::FixedClock) -> chrono::DateTime<chrono::Utc> {
    use paintshop::domain::ports::Clock;
    clock.now()
}
