use paintshop::domain::services::status_distribution;
use paintshop::{Service, WorkOrder};

use crate::ui::text::ColoredText;
use crate::ui::theme::{status_color, status_icon};

/// Landing screen: catalog size and orders per status
pub fn render_dashboard(
    services: &[Service],
    orders: &[WorkOrder],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = ColoredText::plain("Painel").bold().render(supports_color);
    out.push('\n');
    out.push_str(&format!(
        "{} serviço(s) no catálogo, {} ordem(ns) de serviço\n",
        services.len(),
        orders.len()
    ));
    for row in status_distribution(orders) {
        out.push_str(&format!(
            "  {} {:<14}{}\n",
            ColoredText::colored(status_icon(row.status, supports_unicode), status_color(row.status))
                .render(supports_color),
            row.name,
            row.value
        ));
    }
    out
}
