use paintshop::domain::services::{ServiceCount, StatusCount};
use paintshop::{HeaderMapping, Record};

use crate::ui::table::Table;
use crate::ui::text::{visible_width, ColoredText};
use crate::ui::theme::{colors, icons, icons_ascii, status_color};

const BAR_WIDTH: usize = 30;

pub struct AnalyticsView<'a> {
    by_service: &'a [ServiceCount],
    by_status: &'a [StatusCount],
}

impl<'a> AnalyticsView<'a> {
    pub fn new(by_service: &'a [ServiceCount], by_status: &'a [StatusCount]) -> Self {
        Self {
            by_service,
            by_status,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::plain("Análises e Relatórios")
                .bold()
                .render(supports_color),
        );
        out.push_str("\n\n");

        out.push_str(&ColoredText::plain("Distribuição de Serviços").bold().render(supports_color));
        out.push('\n');
        let rows: Vec<(String, usize, Option<crossterm::style::Color>)> = self
            .by_service
            .iter()
            .map(|r| (r.name.clone(), r.count, Some(colors::ACCENT)))
            .collect();
        out.push_str(&bar_chart(&rows, supports_color, supports_unicode));
        out.push('\n');

        out.push_str(
            &ColoredText::plain("Status das Ordens de Serviço")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        let total: usize = self.by_status.iter().map(|r| r.value).sum();
        let rows: Vec<(String, usize, Option<crossterm::style::Color>)> = self
            .by_status
            .iter()
            .map(|r| {
                let pct = if total == 0 { 0 } else { r.value * 100 / total };
                (
                    format!("{} {}%", r.name, pct),
                    r.value,
                    Some(status_color(r.status)),
                )
            })
            .collect();
        out.push_str(&bar_chart(&rows, supports_color, supports_unicode));
        out
    }
}

/// Horizontal bars scaled to the largest value
pub fn bar_chart(
    rows: &[(String, usize, Option<crossterm::style::Color>)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let label_width = rows.iter().map(|r| visible_width(&r.0)).max().unwrap_or(0);
    let max = rows.iter().map(|r| r.1).max().unwrap_or(0);
    let glyph = if supports_unicode {
        icons::BAR
    } else {
        icons_ascii::BAR
    };

    let mut out = String::new();
    for (label, value, color) in rows {
        let len = if max == 0 { 0 } else { value * BAR_WIDTH / max };
        let bar = glyph.repeat(len);
        let bar = match color {
            Some(c) => ColoredText::colored(bar, *c).render(supports_color),
            None => bar,
        };
        out.push_str(&format!(
            "  {}{} {} {}\n",
            label,
            " ".repeat(label_width - visible_width(label)),
            bar,
            value
        ));
    }
    out
}

/// Any report rendered as a table, columns in header order
pub struct ReportView<'a> {
    title: &'a str,
    headers: &'a HeaderMapping,
    records: &'a [Record],
}

impl<'a> ReportView<'a> {
    pub fn new(title: &'a str, headers: &'a HeaderMapping, records: &'a [Record]) -> Self {
        Self {
            title,
            headers,
            records,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = ColoredText::plain(self.title).bold().render(supports_color);
        out.push('\n');
        if self.records.is_empty() {
            out.push_str(
                &ColoredText::colored("Sem dados.", colors::DIM).render(supports_color),
            );
            out.push('\n');
            return out;
        }

        let mut table = Table::new(self.headers.labels());
        for record in self.records {
            table.add_plain_row(self.headers.keys().map(|key| record.get(key).to_string()));
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}
