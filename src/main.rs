//! Paintshop CLI - work orders and service catalog for a finishing workshop
//!
//! Usage: paintshop [COMMAND]
//!
//! Commands:
//!   services  List the service catalog
//!   orders    List work orders (with filters)
//!   show      Show one work order or service
//!   report    Print an analytics report
//!   export    Export a report as CSV
//!   demo      Run a scripted work-order lifecycle
//!
//! Without a command the interactive console opens.

mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;

use paintshop::config::Config;
use paintshop::presentation::output::{effective_verbosity, init_logging, log_config_warnings};
use paintshop::presentation::{create_store, Cli, Commands};

use crate::commands::export::ExportArgs;
use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let (mut config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;
    if cli.no_seed {
        config.session.seed = false;
    }

    init_logging(effective_verbosity(config.output.verbosity, cli.verbose));
    log_config_warnings(&warnings);

    let ui = UiContext::new(cli.json, cli.color, &config);
    let mut store = create_store(&config, ui.json());

    match cli.command {
        None => commands::interactive::cmd_interactive(&mut store, &config, &ui),
        Some(Commands::Services) => commands::services::cmd_services(&store, &ui),
        Some(Commands::Orders { filter }) => commands::orders::cmd_orders(&store, &ui, &filter),
        Some(Commands::Show { id }) => commands::orders::cmd_show(&store, &ui, &id),
        Some(Commands::Report { kind, filter }) => {
            commands::report::cmd_report(&store, &ui, kind, &filter)
        }
        Some(Commands::Export {
            kind,
            output,
            stdout,
            filter,
        }) => commands::export::cmd_export(
            &store,
            &config,
            &ui,
            ExportArgs {
                kind,
                output,
                stdout,
                filter: &filter,
            },
        ),
        Some(Commands::Demo) => commands::demo::cmd_demo(&mut store, &ui),
    }
}
