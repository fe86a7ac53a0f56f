//! Scripted work-order lifecycle
//!
//! Adds a service and two orders, then walks one order to Completed and
//! cancels the other. Runs against the session store, so store events are
//! logged (and streamed in JSON mode) like any other mutation.

use anyhow::{anyhow, Result};
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::{EntityId, EntityStore, NewService, NewWorkOrder, Status, WorkOrder};
use serde::Serialize;

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::theme::{status_color, status_icon};
use crate::ui::views::orders::OrderDetailView;

#[derive(Debug, Clone, Serialize)]
pub struct DemoStep {
    pub step: &'static str,
    pub id: EntityId,
    pub status: Status,
}

impl DemoStep {
    fn of(step: &'static str, order: &WorkOrder) -> Self {
        Self {
            step,
            id: order.id.clone(),
            status: order.status,
        }
    }
}

fn transition<C, G>(store: &mut EntityStore<C, G>, id: &EntityId, target: Status) -> Result<WorkOrder>
where
    C: Clock,
    G: IdGenerator,
{
    store
        .transition_work_order(id, target)
        .ok_or_else(|| anyhow!("work order {} disappeared during the demo", id))
}

/// Run the scripted lifecycle; returns the steps and the completed order
pub fn run_demo<C, G>(store: &mut EntityStore<C, G>) -> Result<(Vec<DemoStep>, WorkOrder)>
where
    C: Clock,
    G: IdGenerator,
{
    let mut steps = Vec::new();

    let service = NewService::new(
        "Aplicação de Verniz Fosco",
        "Camada final de verniz fosco para proteção sem brilho.",
        3,
    );
    service.validate()?;
    let service = store.add_service(service);

    let draft = NewWorkOrder::new("Mariana Costa", "Cômoda Antiga (4 gavetas)", service.id.clone())
        .paint_color("Verde Sálvia")
        .price(950.0);
    draft.validate()?;
    let order = store.add_work_order(draft);
    steps.push(DemoStep::of("Ordem criada", &order));

    let order = transition(store, &order.id, Status::InProgress)?;
    steps.push(DemoStep::of("Serviço iniciado", &order));

    let completed = transition(store, &order.id, Status::Completed)?;
    steps.push(DemoStep::of("Serviço concluído", &completed));

    let draft = NewWorkOrder::new("Rafael Souza", "Porta de Entrada", service.id.clone());
    draft.validate()?;
    let other = store.add_work_order(draft);
    steps.push(DemoStep::of("Ordem criada", &other));

    let canceled = transition(store, &other.id, Status::Canceled)?;
    steps.push(DemoStep::of("Serviço cancelado", &canceled));

    Ok((steps, completed))
}

pub fn cmd_demo<C, G>(store: &mut EntityStore<C, G>, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let (steps, completed) = run_demo(store)?;

    if ui.json() {
        crate::ui::json::emit(&serde_json::json!({
            "event": "data",
            "command": "demo",
            "steps": steps,
        }))?;
        return Ok(());
    }

    for step in &steps {
        println!(
            "{} {} ({})",
            ColoredText::colored(status_icon(step.status, ui.unicode), status_color(step.status))
                .render(ui.color),
            step.step,
            step.id
        );
    }
    println!();
    print!(
        "{}",
        OrderDetailView::new(&completed, store.services()).render(ui.color, ui.unicode)
    );
    Ok(())
}
