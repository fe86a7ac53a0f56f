use paintshop::Service;

use crate::ui::table::{Align, Table};
use crate::ui::text::{truncate_end, ColoredText};
use crate::ui::theme::colors;

pub struct ServicesView<'a> {
    services: &'a [Service],
}

impl<'a> ServicesView<'a> {
    pub fn new(services: &'a [Service]) -> Self {
        Self { services }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::plain("Gerenciamento de Serviços")
                .bold()
                .render(supports_color),
        );
        out.push('\n');

        if self.services.is_empty() {
            out.push_str(
                &ColoredText::colored("Nenhum serviço cadastrado.", colors::DIM)
                    .render(supports_color),
            );
            out.push('\n');
            return out;
        }

        let mut table = Table::new(["ID", "Nome", "Descrição", "Fotos", "Duração (h)"])
            .align(3, Align::Right)
            .align(4, Align::Right);
        for service in self.services {
            table.add_plain_row([
                service.id.to_string(),
                service.name.clone(),
                truncate_end(&service.description, 48),
                service.photos.len().to_string(),
                service.estimated_duration_hours.to_string(),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop::{EntityId, NewService};

    #[test]
    fn empty_catalog_message() {
        let out = ServicesView::new(&[]).render(false, true);
        assert!(out.contains("Nenhum serviço cadastrado."));
    }

    #[test]
    fn lists_services_in_catalog_order() {
        let services = vec![
            NewService::new("Aplicação de Primer", "Fundo", 2).into_service(EntityId::new("1")),
            NewService::new("Polimento Técnico", "Brilho", 5).into_service(EntityId::new("4")),
        ];

        let out = ServicesView::new(&services).render(false, false);

        let primer = out.find("Aplicação de Primer").unwrap();
        let polimento = out.find("Polimento Técnico").unwrap();
        assert!(primer < polimento);
    }
}
