use anyhow::{bail, Result};
use paintshop::domain::policies::{quick_action_label, quick_actions};
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::presentation::FilterArgs;
use paintshop::{filter_and_sort, EntityId, EntityStore};

use crate::ui::context::UiContext;
use crate::ui::views::orders::{OrderDetailView, OrdersView};
use crate::ui::views::services::ServicesView;

pub fn cmd_orders<C, G>(store: &EntityStore<C, G>, ui: &UiContext, filter: &FilterArgs) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let criteria = filter.criteria();
    let visible = filter_and_sort(store.work_orders(), &criteria);

    if ui.json() {
        crate::ui::json::emit(&serde_json::json!({
            "event": "data",
            "command": "orders",
            "total": store.work_orders().len(),
            "shown": visible.len(),
            "orders": visible,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        OrdersView::new(&visible, store.services(), &criteria).render(ui.color, ui.unicode)
    );
    Ok(())
}

/// Show a work order, or a service when no order has that id
pub fn cmd_show<C, G>(store: &EntityStore<C, G>, ui: &UiContext, id: &str) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let id = EntityId::new(id.trim());

    if let Some(order) = store.work_order(&id) {
        if ui.json() {
            let actions: Vec<&str> = quick_actions(order.status)
                .iter()
                .filter_map(|s| quick_action_label(*s))
                .collect();
            crate::ui::json::emit(&serde_json::json!({
                "event": "data",
                "command": "show",
                "workOrder": order,
                "service": store.service_name_for(order),
                "quickActions": actions,
            }))?;
        } else {
            print!(
                "{}",
                OrderDetailView::new(order, store.services()).render(ui.color, ui.unicode)
            );
        }
        return Ok(());
    }

    if let Some(service) = store.service(&id) {
        if ui.json() {
            crate::ui::json::emit(&serde_json::json!({
                "event": "data",
                "command": "show",
                "service": service,
            }))?;
        } else {
            print!(
                "{}",
                ServicesView::new(std::slice::from_ref(service)).render(ui.color, ui.unicode)
            );
        }
        return Ok(());
    }

    bail!("no work order or service with id '{}'", id)
}
