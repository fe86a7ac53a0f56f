//! Demo catalog and work orders a session starts with

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::entities::{NewService, Service, WorkOrder};
use crate::domain::value_objects::{EntityId, Status};

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 11, d)
}

fn at(d: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, d, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The four catalog services, ids "1".."4"
pub fn services() -> Vec<Service> {
    [
        (
            "1",
            "Aplicação de Primer",
            "Preparação da superfície com fundo primer.",
            2,
        ),
        (
            "2",
            "Pintura Base (Laca)",
            "Aplicação da camada de cor base em laca.",
            4,
        ),
        (
            "3",
            "Aplicação de Verniz",
            "Camada de verniz para brilho e proteção.",
            3,
        ),
        (
            "4",
            "Polimento Técnico",
            "Polimento para remoção de imperfeições e brilho intenso.",
            5,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, hours)| {
        NewService::new(name, description, hours).into_service(EntityId::new(id))
    })
    .collect()
}

/// Five work orders, one or more per status
pub fn work_orders() -> Vec<WorkOrder> {
    let order = |id: &str, client: &str, item: &str, service: &str, created: u32| WorkOrder {
        id: EntityId::new(id),
        client_name: client.to_string(),
        item_description: item.to_string(),
        service_id: EntityId::new(service),
        paint_color: None,
        price: None,
        photos: Vec::new(),
        status: Status::Pending,
        created_at: at(created, 0),
        scheduled_start_date: None,
        started_at: None,
        completed_at: None,
    };

    vec![
        WorkOrder {
            paint_color: Some("Preto Ninja".into()),
            status: Status::Completed,
            scheduled_start_date: day(1),
            started_at: Some(at(1, 9)),
            completed_at: Some(at(1, 14)),
            price: Some(1200.0),
            ..order("wo-1", "João Silva", "Gabinete Cozinha (5 portas)", "2", 1)
        },
        WorkOrder {
            paint_color: Some("Branco Banchisa".into()),
            status: Status::InProgress,
            scheduled_start_date: day(2),
            started_at: Some(at(2, 10)),
            price: Some(850.0),
            ..order("wo-2", "Maria Oliveira", "Portas de Guarda-roupas (2)", "3", 2)
        },
        WorkOrder {
            scheduled_start_date: day(10),
            price: Some(400.0),
            ..order("wo-3", "Carlos Pereira", "Balcão de Banheiro", "1", 3)
        },
        WorkOrder {
            paint_color: Some("Vermelho Arpoador".into()),
            price: Some(1800.0),
            ..order("wo-4", "Ana Costa", "Mesa de Jantar e 4 cadeiras", "4", 4)
        },
        WorkOrder {
            paint_color: Some("Cinza Silk".into()),
            status: Status::Canceled,
            scheduled_start_date: day(7),
            price: Some(650.0),
            ..order("wo-5", "Pedro Martins", "Gabinete Pia (3 portas)", "2", 5)
        },
    ]
}
