//! Scenario: using the binary from a shell
//!
//! Journey: a user lists the catalog, narrows the order list, exports a
//! report into the configured directory and scripts the demo in JSON mode.

use crate::common::*;

/// SCENARIO: seeded catalog and filtered orders as JSON
#[test]
fn scenario_list_and_filter_json() {
    let env = TestEnv::new();

    let result = env.run(&["services", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines[0]["command"], "services");
    assert_eq!(lines[0]["services"].as_array().unwrap().len(), 4);

    let result = env.run(&["orders", "--status", "canceled", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines[0]["shown"], 1);
    assert_eq!(lines[0]["orders"][0]["id"], "wo-5");
}

/// SCENARIO: date filters read creation days on the user's clock
#[test]
fn scenario_date_filter_follows_local_time_zone() {
    let env = TestEnv::new();
    let args = ["orders", "--to", "2023-10-31", "--json"];

    // wo-1 is created at 2023-11-01 00:00 UTC, still Oct 31 at UTC-3
    let result = env.run_with_env(&args, &[("TZ", "BRT3")]);
    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines[0]["shown"], 1);
    assert_eq!(lines[0]["orders"][0]["id"], "wo-1");

    let result = env.run(&args);
    assert_eq!(result.json_lines()[0]["shown"], 0);
}

/// SCENARIO: orders table newest first
#[test]
fn scenario_orders_text_newest_first() {
    let env = TestEnv::new();
    let result = env.run(&["orders", "--color", "never"]);

    assert!(result.success, "{}", result.combined_output());
    let newest = result.stdout.find("Pedro Martins").unwrap();
    let oldest = result.stdout.find("João Silva").unwrap();
    assert!(newest < oldest);
    assert!(result.stdout.contains("5 ordem(ns)"));
}

/// SCENARIO: export follows [export] directory, --output overrides it
#[test]
fn scenario_export_directory() {
    let env = TestEnv::new().with_project_config(EXPORT_DIR_CONFIG);

    let result = env.run(&["export", "status"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("relatorios/status_ordens_servico.csv").exists());

    let result = env.run(&["export", "catalog", "--output", "outro"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env
        .read("outro/lista_de_servicos.csv")
        .starts_with("Nome,Descrição,Duração Estimada (h)\n"));
}

/// SCENARIO: CSV to stdout
#[test]
fn scenario_export_to_stdout() {
    let env = TestEnv::new();
    let result = env.run(&["export", "status", "--stdout"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with("Status,Quantidade\nPendente,2\n"));
}

/// SCENARIO: empty session has nothing to export
#[test]
fn scenario_empty_session_export_notice() {
    let env = TestEnv::new().with_project_config(EMPTY_SESSION_CONFIG);
    let result = env.run(&["export", "orders", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines[0]["status"], "nothing_to_export");
    assert!(!env.project_path("ordens_servico.csv").exists());
}

/// SCENARIO: demo streams store events before its summary
#[test]
fn scenario_demo_json_events() {
    let env = TestEnv::new();
    let result = env.run(&["--no-seed", "demo", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    let events: Vec<&str> = lines
        .iter()
        .filter_map(|l| l["event"].as_str())
        .collect();
    assert_eq!(
        events,
        vec![
            "service_added",
            "work_order_added",
            "work_order_updated",
            "work_order_updated",
            "work_order_added",
            "work_order_updated",
            "data",
        ]
    );
    let steps = lines[6]["steps"].as_array().unwrap();
    assert_eq!(steps[2]["status"], "completed");
}

/// SCENARIO: unknown config keys warn but do not fail
#[test]
fn scenario_config_typo_warns() {
    let env = TestEnv::new().with_project_config("[session]\nsed = false\n");
    let result = env.run(&["services", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key"), "{}", result.stderr);
    assert!(result.stderr.contains("did you mean 'seed'?"), "{}", result.stderr);
    assert_eq!(result.json_lines()[0]["services"].as_array().unwrap().len(), 4);
}

/// SCENARIO: without a terminal and without a command, guidance is printed
#[test]
fn scenario_no_command_without_terminal() {
    let env = TestEnv::new();
    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("No command provided."));
}

/// SCENARIO: unknown ids fail with a clear message
#[test]
fn scenario_show_unknown_id() {
    let env = TestEnv::new();
    let result = env.run(&["show", "wo-99"]);

    assert!(!result.success);
    assert!(result.stderr.contains("no work order or service with id 'wo-99'"));
}
