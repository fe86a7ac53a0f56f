use anyhow::Result;
use paintshop::domain::ports::{Clock, IdGenerator};
use paintshop::domain::services::{report_records, CellValue, ReportKind};
use paintshop::presentation::FilterArgs;
use paintshop::{filter_and_sort, EntityStore, FilterCriteria, HeaderMapping, Record, WorkOrder};
use serde_json::{Map, Value};

use crate::ui::context::UiContext;
use crate::ui::views::analytics::ReportView;

/// Orders a report covers: the filtered list for `Orders`, everything else unfiltered
pub fn report_orders<'a>(
    kind: ReportKind,
    orders: &'a [WorkOrder],
    criteria: &FilterCriteria,
) -> Vec<&'a WorkOrder> {
    match kind {
        ReportKind::Orders => filter_and_sort(orders, criteria),
        _ => orders.iter().collect(),
    }
}

/// One JSON object per record, keyed by column label
pub fn record_json(record: &Record, headers: &HeaderMapping) -> Value {
    let mut row = Map::new();
    for (key, label) in headers.keys().zip(headers.labels()) {
        let value = match record.get(key) {
            CellValue::Text(s) => Value::from(s.as_str()),
            CellValue::Integer(n) => Value::from(*n),
            CellValue::Number(n) => Value::from(*n),
            CellValue::Absent => Value::Null,
        };
        row.insert(label.to_string(), value);
    }
    Value::Object(row)
}

pub fn cmd_report<C, G>(
    store: &EntityStore<C, G>,
    ui: &UiContext,
    kind: ReportKind,
    filter: &FilterArgs,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    let criteria = filter.criteria();
    let orders = report_orders(kind, store.work_orders(), &criteria);
    let records = report_records(kind, store.services(), &orders, criteria.zone)?;
    let headers = kind.headers();

    if ui.json() {
        let rows: Vec<Value> = records.iter().map(|r| record_json(r, &headers)).collect();
        crate::ui::json::emit(&serde_json::json!({
            "event": "data",
            "command": "report",
            "title": kind.title(),
            "filename": kind.filename(),
            "rows": rows,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        ReportView::new(kind.title(), &headers, &records).render(ui.color, ui.unicode)
    );
    Ok(())
}
