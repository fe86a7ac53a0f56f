//! Analytics reports
//!
//! The tabular data behind the dashboard charts, plus the work-order list
//! export. Each report knows its column headers and download file name.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{Service, WorkOrder};
use crate::domain::value_objects::{CalendarZone, EntityId, Status};
use crate::error::PaintshopResult;

use super::csv_export::{HeaderMapping, Record};

/// Shown for work orders whose service no longer exists
pub const UNKNOWN_SERVICE: &str = "N/A";

/// Number of work orders per catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCount {
    pub name: String,
    pub count: usize,
}

/// Number of work orders per status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    #[serde(skip)]
    pub status: Status,
    pub name: String,
    pub value: usize,
}

/// Exportable report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ReportKind {
    /// The service catalog itself
    Catalog,
    /// Work orders per catalog service
    Services,
    /// Work orders per status
    Status,
    /// The (filtered) work-order list
    Orders,
}

impl ReportKind {
    /// Download file name
    pub fn filename(&self) -> &'static str {
        match self {
            ReportKind::Catalog => "lista_de_servicos.csv",
            ReportKind::Services => "distribuicao_servicos.csv",
            ReportKind::Status => "status_ordens_servico.csv",
            ReportKind::Orders => "ordens_servico.csv",
        }
    }

    /// Report title
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Catalog => "Lista de Serviços",
            ReportKind::Services => "Distribuição de Serviços",
            ReportKind::Status => "Status das Ordens de Serviço",
            ReportKind::Orders => "Ordens de Serviço",
        }
    }

    /// Column selection and labels
    pub fn headers(&self) -> HeaderMapping {
        match self {
            ReportKind::Catalog => HeaderMapping::new()
                .column("name", "Nome")
                .column("description", "Descrição")
                .column("estimatedDurationHours", "Duração Estimada (h)"),
            ReportKind::Services => HeaderMapping::new()
                .column("name", "Serviço")
                .column("count", "Quantidade"),
            ReportKind::Status => HeaderMapping::new()
                .column("name", "Status")
                .column("value", "Quantidade"),
            ReportKind::Orders => HeaderMapping::new()
                .column("id", "ID")
                .column("clientName", "Cliente")
                .column("itemDescription", "Item")
                .column("service", "Serviço")
                .column("paintColor", "Cor da Tinta")
                .column("price", "Preço (R$)")
                .column("status", "Status")
                .column("createdAt", "Criado")
                .column("scheduledStartDate", "Agendado")
                .column("startedAt", "Iniciado")
                .column("completedAt", "Concluído"),
        }
    }
}

/// One row per catalog service, in catalog order
///
/// Orders pointing at deleted services are not counted anywhere.
pub fn service_distribution<'a>(
    services: &[Service],
    orders: impl IntoIterator<Item = &'a WorkOrder>,
) -> Vec<ServiceCount> {
    let mut counts: HashMap<&EntityId, usize> = HashMap::new();
    for order in orders {
        *counts.entry(&order.service_id).or_insert(0) += 1;
    }

    services
        .iter()
        .map(|service| ServiceCount {
            name: service.name.clone(),
            count: counts.get(&service.id).copied().unwrap_or(0),
        })
        .collect()
}

/// One row per status, in lifecycle order, zero counts included
pub fn status_distribution<'a>(orders: impl IntoIterator<Item = &'a WorkOrder>) -> Vec<StatusCount> {
    let mut counts: HashMap<Status, usize> = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }

    Status::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            name: status.label().to_string(),
            value: counts.get(&status).copied().unwrap_or(0),
        })
        .collect()
}

/// Name of the service an order refers to, if it still exists
pub fn service_name<'a>(services: &'a [Service], id: &EntityId) -> Option<&'a str> {
    services
        .iter()
        .find(|s| &s.id == id)
        .map(|s| s.name.as_str())
}

/// Flatten a work order into an export row; instants become days of `zone`
pub fn work_order_record(order: &WorkOrder, services: &[Service], zone: CalendarZone) -> Record {
    let day = |d: chrono::DateTime<chrono::Utc>| zone.day(d).format("%Y-%m-%d").to_string();
    Record::new()
        .with("id", order.id.to_string())
        .with("clientName", order.client_name.as_str())
        .with("itemDescription", order.item_description.as_str())
        .with(
            "service",
            service_name(services, &order.service_id).unwrap_or(UNKNOWN_SERVICE),
        )
        .with("paintColor", order.paint_color.clone())
        .with("price", order.price)
        .with("status", order.status.label())
        .with("createdAt", day(order.created_at))
        .with(
            "scheduledStartDate",
            order
                .scheduled_start_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        )
        .with("startedAt", order.started_at.map(day))
        .with("completedAt", order.completed_at.map(day))
}

/// Rows of `kind` ready for CSV export
///
/// `orders` is used as given; for `ReportKind::Orders` pass the filtered view.
/// `ReportKind::Catalog` ignores `orders`.
pub fn report_records(
    kind: ReportKind,
    services: &[Service],
    orders: &[&WorkOrder],
    zone: CalendarZone,
) -> PaintshopResult<Vec<Record>> {
    match kind {
        ReportKind::Catalog => Ok(services
            .iter()
            .map(|s| {
                Record::new()
                    .with("name", s.name.as_str())
                    .with("description", s.description.as_str())
                    .with("estimatedDurationHours", s.estimated_duration_hours)
            })
            .collect()),
        ReportKind::Services => service_distribution(services, orders.iter().copied())
            .iter()
            .map(Record::from_serialize)
            .collect(),
        ReportKind::Status => status_distribution(orders.iter().copied())
            .iter()
            .map(Record::from_serialize)
            .collect(),
        ReportKind::Orders => Ok(orders
            .iter()
            .map(|o| work_order_record(o, services, zone))
            .collect()),
    }
}
