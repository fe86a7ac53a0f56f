use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use paintshop::application::ExportOutcome;
use paintshop::config::Config;
use paintshop::domain::ports::{Clock, ExportSink, IdGenerator};
use paintshop::domain::services::ReportKind;
use paintshop::presentation::factory::{create_stdout_export_use_case, DynExportUseCase};
use paintshop::presentation::{create_export_use_case, FilterArgs};
use paintshop::{EntityStore, ExportUseCase, FilterCriteria};

use crate::commands::report::report_orders;
use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::theme::{colors, icons, icons_ascii};

pub struct ExportArgs<'a> {
    pub kind: ReportKind,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub filter: &'a FilterArgs,
}

/// Pick the sink: `--stdout`, then `--output`, then `[export] directory`
pub fn export_use_case(config: &Config, output: Option<PathBuf>, stdout: bool) -> DynExportUseCase {
    if stdout {
        return create_stdout_export_use_case();
    }
    let directory = output.unwrap_or_else(|| config.export.directory.clone());
    create_export_use_case(&directory)
}

/// Export one report through `use_case`
pub fn run_export<C, G, S>(
    store: &EntityStore<C, G>,
    use_case: &ExportUseCase<S>,
    kind: ReportKind,
    criteria: &FilterCriteria,
) -> Result<ExportOutcome>
where
    C: Clock,
    G: IdGenerator,
    S: ExportSink,
{
    let orders = report_orders(kind, store.work_orders(), criteria);
    use_case
        .export_report(kind, store.services(), &orders)
        .with_context(|| format!("failed to export {}", kind.filename()))
}

pub fn render_outcome(outcome: &ExportOutcome, ui: &UiContext) -> String {
    let (icon, color) = match outcome {
        ExportOutcome::Delivered { .. } => (
            if ui.unicode {
                icons::SUCCESS
            } else {
                icons_ascii::SUCCESS
            },
            colors::SUCCESS,
        ),
        ExportOutcome::NothingToExport => (
            if ui.unicode {
                icons::WARNING
            } else {
                icons_ascii::WARNING
            },
            colors::WARNING,
        ),
    };
    format!(
        "{} {}\n",
        ColoredText::colored(icon, color).render(ui.color),
        outcome.notice()
    )
}

pub fn outcome_json(outcome: &ExportOutcome) -> serde_json::Value {
    match outcome {
        ExportOutcome::NothingToExport => serde_json::json!({
            "event": "export",
            "status": "nothing_to_export",
            "message": outcome.notice(),
        }),
        ExportOutcome::Delivered {
            filename,
            location,
            rows,
        } => serde_json::json!({
            "event": "export",
            "status": "delivered",
            "filename": filename,
            "location": location,
            "rows": rows,
        }),
    }
}

pub fn cmd_export<C, G>(
    store: &EntityStore<C, G>,
    config: &Config,
    ui: &UiContext,
    args: ExportArgs<'_>,
) -> Result<()>
where
    C: Clock,
    G: IdGenerator,
{
    if args.stdout && ui.json() {
        bail!("--stdout cannot be combined with --json");
    }

    let use_case = export_use_case(config, args.output, args.stdout);
    let outcome = run_export(store, &use_case, args.kind, &args.filter.criteria())?;

    if ui.json() {
        crate::ui::json::emit(&outcome_json(&outcome))?;
    } else if args.stdout {
        eprint!("{}", render_outcome(&outcome, ui));
    } else {
        print!("{}", render_outcome(&outcome, ui));
    }
    Ok(())
}
