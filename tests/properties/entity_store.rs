//! Property tests for the entity store.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use paintshop::infrastructure::{FixedClock, SequentialIdGenerator};
use paintshop::{EntityId, EntityStore, NewService, NewWorkOrder, Status};

#[derive(Debug, Clone)]
enum Op {
    AddService,
    AddOrder,
    DeleteService(usize),
    Transition(usize, Status),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddService),
        Just(Op::AddOrder),
        (0usize..8).prop_map(Op::DeleteService),
        (0usize..8, prop::sample::select(Status::ALL.to_vec()))
            .prop_map(|(i, s)| Op::Transition(i, s)),
    ]
}

fn store() -> EntityStore<FixedClock, SequentialIdGenerator> {
    EntityStore::new(
        FixedClock::new(Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap()),
        SequentialIdGenerator::new(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ids stay unique under any sequence of mutations.
    #[test]
    fn property_ids_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = store();
        for op in ops {
            match op {
                Op::AddService => {
                    let added = store.add_service(NewService::new("S", "D", 1));
                    prop_assert_eq!(store.service(&added.id), Some(&added));
                }
                Op::AddOrder => {
                    let added = store.add_work_order(NewWorkOrder::new("C", "I", "1"));
                    prop_assert_eq!(added.status, Status::Pending);
                    prop_assert_eq!(store.work_order(&added.id), Some(&added));
                }
                Op::DeleteService(i) => {
                    let id = store
                        .services()
                        .get(i)
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| EntityId::new("missing"));
                    store.delete_service(&id);
                }
                Op::Transition(i, target) => {
                    if let Some(id) = store.work_orders().get(i).map(|o| o.id.clone()) {
                        store.transition_work_order(&id, target);
                    }
                }
            }

            let service_ids: HashSet<&EntityId> = store.services().iter().map(|s| &s.id).collect();
            prop_assert_eq!(service_ids.len(), store.services().len());
            let order_ids: HashSet<&EntityId> = store.work_orders().iter().map(|o| &o.id).collect();
            prop_assert_eq!(order_ids.len(), store.work_orders().len());
        }
    }
}
