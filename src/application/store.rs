//! Entity Store
//!
//! In-memory collections of services and work orders for one session.
//! The store is the only place these collections are mutated; every
//! effective mutation is announced to the subscribed event sinks.

use log::debug;

use crate::domain::entities::{NewService, NewWorkOrder, Service, WorkOrder};
use crate::domain::policies::next_work_order_state;
use crate::domain::ports::{Clock, EntityKind, IdGenerator, StoreEvent, StoreEventSink};
use crate::domain::services::service_name;
use crate::domain::value_objects::{EntityId, Status};

/// Session-owned store of services and work orders
pub struct EntityStore<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    services: Vec<Service>,
    work_orders: Vec<WorkOrder>,
    clock: C,
    ids: G,
    sinks: Vec<Box<dyn StoreEventSink>>,
}

impl<C, G> EntityStore<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    /// Create an empty store
    pub fn new(clock: C, ids: G) -> Self {
        Self {
            services: Vec::new(),
            work_orders: Vec::new(),
            clock,
            ids,
            sinks: Vec::new(),
        }
    }

    /// Create a store holding existing records, e.g. the session seed
    ///
    /// Records are taken as-is; no events are emitted.
    pub fn with_records(
        clock: C,
        ids: G,
        services: Vec<Service>,
        work_orders: Vec<WorkOrder>,
    ) -> Self {
        Self {
            services,
            work_orders,
            ..Self::new(clock, ids)
        }
    }

    /// Register a sink notified after every effective mutation
    pub fn subscribe(&mut self, sink: Box<dyn StoreEventSink>) {
        self.sinks.push(sink);
    }

    /// Current time according to the store's clock
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    pub fn service(&self, id: &EntityId) -> Option<&Service> {
        self.services.iter().find(|s| &s.id == id)
    }

    pub fn work_order(&self, id: &EntityId) -> Option<&WorkOrder> {
        self.work_orders.iter().find(|o| &o.id == id)
    }

    /// Name of the service `order` refers to; `None` if it was deleted
    pub fn service_name_for(&self, order: &WorkOrder) -> Option<&str> {
        service_name(&self.services, &order.service_id)
    }

    /// Append a new service under a fresh id
    pub fn add_service(&mut self, data: NewService) -> Service {
        let id = self.fresh_id(EntityKind::Service);
        let service = data.into_service(id.clone());
        self.services.push(service.clone());
        debug!("added service {} ({})", id, service.name);
        self.emit(StoreEvent::ServiceAdded { id });
        service
    }

    /// Replace the service with the same id, in place
    ///
    /// Returns false (and changes nothing) if no such service exists.
    pub fn update_service(&mut self, service: Service) -> bool {
        let Some(slot) = self.services.iter_mut().find(|s| s.id == service.id) else {
            debug!("update_service: no service {}, ignoring", service.id);
            return false;
        };
        let id = service.id.clone();
        *slot = service;
        debug!("updated service {}", id);
        self.emit(StoreEvent::ServiceUpdated { id });
        true
    }

    /// Remove the service with `id`
    ///
    /// Work orders referencing it keep the now dangling id.
    pub fn delete_service(&mut self, id: &EntityId) -> bool {
        let len_before = self.services.len();
        self.services.retain(|s| &s.id != id);
        if self.services.len() == len_before {
            debug!("delete_service: no service {}, ignoring", id);
            return false;
        }

        let dangling = self
            .work_orders
            .iter()
            .filter(|o| &o.service_id == id)
            .count();
        if dangling > 0 {
            debug!(
                "deleted service {}; {} work order(s) still reference it",
                id, dangling
            );
        } else {
            debug!("deleted service {}", id);
        }
        self.emit(StoreEvent::ServiceDeleted { id: id.clone() });
        true
    }

    /// Append a new work order: fresh id, status Pending, created now
    pub fn add_work_order(&mut self, data: NewWorkOrder) -> WorkOrder {
        let id = self.fresh_id(EntityKind::WorkOrder);
        let order = data.into_work_order(id.clone(), self.clock.now());
        self.work_orders.push(order.clone());
        debug!("added work order {} for {}", id, order.client_name);
        self.emit(StoreEvent::WorkOrderAdded { id });
        order
    }

    /// Replace the work order with the same id, in place
    ///
    /// Full replacement: status and timestamps are taken from `order` as given.
    pub fn update_work_order(&mut self, order: WorkOrder) -> bool {
        let Some(slot) = self.work_orders.iter_mut().find(|o| o.id == order.id) else {
            debug!("update_work_order: no work order {}, ignoring", order.id);
            return false;
        };
        let id = order.id.clone();
        *slot = order;
        debug!("updated work order {}", id);
        self.emit(StoreEvent::WorkOrderUpdated { id });
        true
    }

    /// Move a work order to `target` through the transition policy
    ///
    /// Returns the updated order, or `None` if the id is unknown.
    pub fn transition_work_order(&mut self, id: &EntityId, target: Status) -> Option<WorkOrder> {
        let current = self.work_order(id)?;
        let next = next_work_order_state(current, target, self.clock.now());
        debug!("work order {}: {:?} -> {:?}", id, current.status, target);
        self.update_work_order(next.clone());
        Some(next)
    }

    /// Draw ids until one is unused in the target collection
    fn fresh_id(&mut self, kind: EntityKind) -> EntityId {
        loop {
            let candidate = self.ids.next_id(kind);
            let taken = match kind {
                EntityKind::Service => self.services.iter().any(|s| s.id == candidate),
                EntityKind::WorkOrder => self.work_orders.iter().any(|o| o.id == candidate),
            };
            if !taken {
                return candidate;
            }
            debug!("id {} already in use, drawing another", candidate);
        }
    }

    fn emit(&self, event: StoreEvent) {
        for sink in &self.sinks {
            sink.on_event(&event);
        }
    }
}
