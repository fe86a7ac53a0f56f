//! Interactive command module
//!
//! Menu-driven console over the session store: dashboard, service catalog,
//! work-order list with filters and quick actions, analytics and export.

mod forms;
mod menu;
mod state;

use anyhow::Result;
use paintshop::config::Config;
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::EntityStore;

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;

pub fn cmd_interactive<C, G>(store: &mut EntityStore<C, G>, config: &Config, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    if ui.json() {
        crate::ui::json::emit(&serde_json::json!({
            "event": "data",
            "command": "interactive",
            "services": store.services().len(),
            "workOrders": store.work_orders().len(),
        }))?;
        return Ok(());
    }

    if !ui.can_prompt() {
        println!("No command provided.");
        println!("Try: `paintshop orders` or `paintshop --help`");
        return Ok(());
    }

    print_banner(ui);
    menu::run_session(store, config, ui)
}

fn print_banner(ui: &UiContext) {
    println!(
        "{}",
        ColoredText::plain("Paintshop - Ordens de Serviço e Catálogo")
            .bold()
            .render(ui.color)
    );
    println!("Esc volta ao menu anterior.");
}
