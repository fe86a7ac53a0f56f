//! Interactive menu loop

use anyhow::Result;
use dialoguer::theme::Theme;
use dialoguer::{Confirm, FuzzySelect, Select};
use paintshop::config::Config;
use paintshop::domain::policies::{quick_action_label, quick_actions};
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::domain::services::{service_distribution, status_distribution, ReportKind};
use paintshop::{EntityId, EntityStore, Service, View, WorkOrder};

use super::forms;
use super::state::{MenuAction, SessionState};
use crate::commands::export::{export_use_case, render_outcome, run_export};
use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::theme::{colors, prompt_theme};
use crate::ui::views::analytics::AnalyticsView;
use crate::ui::views::dashboard::render_dashboard;
use crate::ui::views::orders::{OrderDetailView, OrdersView};
use crate::ui::views::services::ServicesView;

pub fn run_session<C, G>(store: &mut EntityStore<C, G>, config: &Config, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let theme = prompt_theme(ui.color);
    let mut state = SessionState::new();

    loop {
        println!();
        print!("{}", render_view(store, &state, ui));

        let actions = state.actions();
        let labels: Vec<String> = actions.iter().map(MenuAction::label).collect();
        let Some(choice) = Select::with_theme(&*theme)
            .with_prompt("O que deseja fazer?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            if state.view == View::Dashboard {
                return Ok(());
            }
            state.apply(MenuAction::Back);
            continue;
        };
        let action = actions[choice];

        match action {
            MenuAction::AddService => add_service(store, &*theme, ui)?,
            MenuAction::EditService => edit_service(store, &*theme, ui)?,
            MenuAction::DeleteService => delete_service(store, &*theme, ui)?,
            MenuAction::AddOrder => add_order(store, &*theme, ui)?,
            MenuAction::EditOrder => edit_order(store, &state, &*theme, ui)?,
            MenuAction::OrderActions => order_actions(store, &state, &*theme, ui)?,
            MenuAction::Filter => state.criteria = forms::filter_form(&*theme, &state.criteria)?,
            MenuAction::Export(kind) => export(store, config, &state, kind, ui)?,
            other => {
                if !state.apply(other) {
                    return Ok(());
                }
            }
        }
    }
}

fn render_view<C, G>(store: &EntityStore<C, G>, state: &SessionState, ui: &UiContext) -> String
where
    C: Clock,
    G: IdGenerator,
{
    match state.view {
        View::Dashboard => {
            render_dashboard(store.services(), store.work_orders(), ui.color, ui.unicode)
        }
        View::Services => ServicesView::new(store.services()).render(ui.color, ui.unicode),
        View::WorkOrders => {
            let visible = state.visible_orders(store.work_orders());
            OrdersView::new(&visible, store.services(), &state.criteria)
                .render(ui.color, ui.unicode)
        }
        View::Analytics => {
            let by_service = service_distribution(store.services(), store.work_orders());
            let by_status = status_distribution(store.work_orders());
            AnalyticsView::new(&by_service, &by_status).render(ui.color, ui.unicode)
        }
    }
}

fn notify(ui: &UiContext, message: &str, ok: bool) {
    let color = if ok { colors::SUCCESS } else { colors::ERROR };
    println!("{}", ColoredText::colored(message, color).render(ui.color));
}

fn pick_service(theme: &dyn Theme, services: &[Service]) -> Result<Option<EntityId>> {
    if services.is_empty() {
        println!("Nenhum serviço cadastrado.");
        return Ok(None);
    }
    let labels: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
    let choice = FuzzySelect::with_theme(theme)
        .with_prompt("Serviço")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| services[i].id.clone()))
}

fn pick_order(theme: &dyn Theme, orders: &[&WorkOrder]) -> Result<Option<EntityId>> {
    if orders.is_empty() {
        println!("Nenhuma ordem de serviço encontrada.");
        return Ok(None);
    }
    let labels: Vec<String> = orders
        .iter()
        .map(|o| {
            format!(
                "{} - {} [{}] ({})",
                o.client_name,
                o.item_description,
                o.status.label(),
                o.id
            )
        })
        .collect();
    let choice = FuzzySelect::with_theme(theme)
        .with_prompt("Ordem de Serviço")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| orders[i].id.clone()))
}

fn add_service<C, G>(store: &mut EntityStore<C, G>, theme: &dyn Theme, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let draft = forms::service_form(theme, None)?;
    match draft.validate() {
        Ok(()) => {
            let service = store.add_service(draft);
            notify(ui, &format!("Serviço \"{}\" adicionado.", service.name), true);
        }
        Err(e) => notify(ui, &format!("Serviço não salvo: {}", e), false),
    }
    Ok(())
}

fn edit_service<C, G>(store: &mut EntityStore<C, G>, theme: &dyn Theme, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let Some(id) = pick_service(theme, store.services())? else {
        return Ok(());
    };
    let Some(current) = store.service(&id).cloned() else {
        return Ok(());
    };
    let draft = forms::service_form(theme, Some(&current))?;
    match draft.validate() {
        Ok(()) => {
            store.update_service(draft.into_service(id));
            notify(ui, "Serviço atualizado.", true);
        }
        Err(e) => notify(ui, &format!("Serviço não salvo: {}", e), false),
    }
    Ok(())
}

fn delete_service<C, G>(
    store: &mut EntityStore<C, G>,
    theme: &dyn Theme,
    ui: &UiContext,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let Some(id) = pick_service(theme, store.services())? else {
        return Ok(());
    };
    let name = store
        .service(&id)
        .map(|s| s.name.clone())
        .unwrap_or_default();
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Excluir o serviço \"{}\"?", name))
        .default(false)
        .interact()?;
    if confirmed && store.delete_service(&id) {
        notify(ui, "Serviço excluído.", true);
    }
    Ok(())
}

fn add_order<C, G>(store: &mut EntityStore<C, G>, theme: &dyn Theme, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let Some(draft) = forms::work_order_form(theme, store.services(), None)? else {
        return Ok(());
    };
    match draft.validate() {
        Ok(()) => {
            let order = store.add_work_order(draft);
            notify(ui, &format!("Ordem {} criada.", order.id), true);
        }
        Err(e) => notify(ui, &format!("Ordem não salva: {}", e), false),
    }
    Ok(())
}

fn edit_order<C, G>(
    store: &mut EntityStore<C, G>,
    state: &SessionState,
    theme: &dyn Theme,
    ui: &UiContext,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let visible = state.visible_orders(store.work_orders());
    let Some(id) = pick_order(theme, &visible)? else {
        return Ok(());
    };
    let Some(current) = store.work_order(&id).cloned() else {
        return Ok(());
    };
    let Some(draft) = forms::work_order_form(theme, store.services(), Some(&current))? else {
        return Ok(());
    };
    match draft.validate() {
        Ok(()) => {
            store.update_work_order(current.with_draft(draft));
            notify(ui, "Ordem atualizada.", true);
        }
        Err(e) => notify(ui, &format!("Ordem não salva: {}", e), false),
    }
    Ok(())
}

fn order_actions<C, G>(
    store: &mut EntityStore<C, G>,
    state: &SessionState,
    theme: &dyn Theme,
    ui: &UiContext,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let visible = state.visible_orders(store.work_orders());
    let Some(id) = pick_order(theme, &visible)? else {
        return Ok(());
    };
    let Some(order) = store.work_order(&id) else {
        return Ok(());
    };
    print!(
        "{}",
        OrderDetailView::new(order, store.services()).render(ui.color, ui.unicode)
    );

    let targets = quick_actions(order.status);
    if targets.is_empty() {
        return Ok(());
    }
    let mut labels: Vec<&str> = targets
        .iter()
        .filter_map(|s| quick_action_label(*s))
        .collect();
    labels.push("Voltar");
    let choice = Select::with_theme(theme)
        .with_prompt("Ações Rápidas")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    if let Some(target) = targets.get(choice) {
        if let Some(updated) = store.transition_work_order(&id, *target) {
            notify(
                ui,
                &format!("Ordem {} agora está {}.", updated.id, updated.status.label()),
                true,
            );
        }
    }
    Ok(())
}

fn export<C, G>(
    store: &EntityStore<C, G>,
    config: &Config,
    state: &SessionState,
    kind: ReportKind,
    ui: &UiContext,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let use_case = export_use_case(config, None, false);
    let outcome = run_export(store, &use_case, kind, &state.criteria)?;
    print!("{}", render_outcome(&outcome, ui));
    Ok(())
}
