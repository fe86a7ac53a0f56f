use paintshop::domain::policies::{quick_action_label, quick_actions};
use paintshop::domain::services::{service_name, UNKNOWN_SERVICE};
use paintshop::{CalendarZone, FilterCriteria, Service, WorkOrder};

use crate::ui::table::{cell, Table};
use crate::ui::text::{format_price, truncate_end, ColoredText};
use crate::ui::theme::{colors, icons, icons_ascii, status_color, status_icon};

/// Human summary of the active filters, `None` when nothing is filtered
pub fn describe_filters(criteria: &FilterCriteria) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(name) = criteria.client_name.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("cliente contém \"{}\"", name));
    }
    if let Some(color) = criteria.paint_color.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("cor contém \"{}\"", color));
    }
    if let Some(status) = criteria.status {
        parts.push(format!("status = {}", status.label()));
    }
    if let Some(from) = criteria.created_from {
        parts.push(format!("criado desde {}", from));
    }
    if let Some(to) = criteria.created_to {
        parts.push(format!("criado até {}", to));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

pub struct OrdersView<'a> {
    orders: &'a [&'a WorkOrder],
    services: &'a [Service],
    criteria: &'a FilterCriteria,
}

impl<'a> OrdersView<'a> {
    pub fn new(
        orders: &'a [&'a WorkOrder],
        services: &'a [Service],
        criteria: &'a FilterCriteria,
    ) -> Self {
        Self {
            orders,
            services,
            criteria,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::plain("Ordens de Serviço")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        if let Some(filters) = describe_filters(self.criteria) {
            out.push_str(
                &ColoredText::colored(format!("Filtros: {}", filters), colors::INFO)
                    .render(supports_color),
            );
            out.push('\n');
        }

        if self.orders.is_empty() {
            out.push_str(
                &ColoredText::colored("Nenhuma ordem de serviço encontrada.", colors::DIM)
                    .render(supports_color),
            );
            out.push('\n');
            return out;
        }

        let mut table = Table::new([
            "ID", "Cliente", "Item", "Serviço", "Cor", "Fotos", "Status", "Criado",
        ]);
        for order in self.orders {
            let badge = format!(
                "{} {}",
                status_icon(order.status, supports_unicode),
                order.status.label()
            );
            table.add_row(vec![
                cell(order.id.to_string(), None),
                cell(order.client_name.clone(), None),
                cell(truncate_end(&order.item_description, 28), None),
                cell(
                    service_name(self.services, &order.service_id).unwrap_or(UNKNOWN_SERVICE),
                    None,
                ),
                cell(order.paint_color.clone().unwrap_or_default(), None),
                cell(order.photos.len().to_string(), None),
                cell(badge, Some(status_color(order.status))),
                cell(
                    self.criteria.zone.day(order.created_at).format("%Y-%m-%d").to_string(),
                    None,
                ),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out.push_str(&format!("{} ordem(ns)\n", self.orders.len()));
        out
    }
}

pub struct OrderDetailView<'a> {
    order: &'a WorkOrder,
    services: &'a [Service],
    zone: CalendarZone,
}

impl<'a> OrderDetailView<'a> {
    pub fn new(order: &'a WorkOrder, services: &'a [Service]) -> Self {
        Self {
            order,
            services,
            zone: CalendarZone::default(),
        }
    }

    pub fn in_zone(mut self, zone: CalendarZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let order = self.order;
        let service = self.services.iter().find(|s| s.id == order.service_id);
        let zone = self.zone;
        let day = |d: chrono::DateTime<chrono::Utc>| {
            zone.local_time(d).format("%Y-%m-%d %H:%M").to_string()
        };
        let na = || "N/A".to_string();

        let mut out = String::new();
        out.push_str(
            &ColoredText::plain(format!("{} - {}", order.client_name, order.item_description))
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        out.push_str(
            &ColoredText::colored(
                format!(
                    "{} {}",
                    status_icon(order.status, supports_unicode),
                    order.status.label()
                ),
                status_color(order.status),
            )
            .render(supports_color),
        );
        out.push_str(&format!("  ({})\n\n", order.id));

        let mut table = Table::new(["Campo", "Valor"]);
        let rows = [
            (
                "Serviço Realizado",
                service.map(|s| s.name.clone()).unwrap_or_else(na),
            ),
            (
                "Cor da Tinta",
                order
                    .paint_color
                    .clone()
                    .unwrap_or_else(|| "Não especificada".to_string()),
            ),
            (
                "Preço",
                order
                    .price
                    .map(|p| format_price(Some(p)))
                    .unwrap_or_else(|| "Não especificado".to_string()),
            ),
            (
                "Descrição do Serviço",
                service.map(|s| s.description.clone()).unwrap_or_else(na),
            ),
            ("Data de Criação", day(order.created_at)),
            (
                "Início Agendado",
                order
                    .scheduled_start_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(na),
            ),
            ("Início Efetivo", order.started_at.map(day).unwrap_or_else(na)),
            (
                "Data de Conclusão",
                order.completed_at.map(day).unwrap_or_else(na),
            ),
            ("Fotos", order.photos.len().to_string()),
        ];
        for (label, value) in rows {
            table.add_plain_row([label.to_string(), value]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));

        let actions: Vec<&str> = quick_actions(order.status)
            .iter()
            .filter_map(|s| quick_action_label(*s))
            .collect();
        if !actions.is_empty() {
            let arrow = if supports_unicode {
                icons::ARROW
            } else {
                icons_ascii::ARROW
            };
            out.push_str(&format!(
                "{} Ações Rápidas: {}\n",
                arrow,
                actions.join(" | ")
            ));
        }
        out
    }
}
