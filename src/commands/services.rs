use anyhow::Result;
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::EntityStore;

use crate::ui::context::UiContext;
use crate::ui::views::services::ServicesView;

pub fn cmd_services<C, G>(store: &EntityStore<C, G>, ui: &UiContext) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    if ui.json() {
        crate::ui::json::emit(&serde_json::json!({
            "event": "data",
            "command": "services",
            "services": store.services(),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        ServicesView::new(store.services()).render(ui.color, ui.unicode)
    );
    Ok(())
}
