//! CONTRACT: in JSON mode every stdout line is a JSON object with an "event".

use crate::common::*;

fn assert_ndjson(env: &TestEnv, args: &[&str]) {
    let result = env.run(args);
    assert!(result.success, "{:?}: {}", args, result.combined_output());
    let lines = result.json_lines();
    assert!(!lines.is_empty(), "{:?} printed nothing", args);
    for line in lines {
        assert!(line["event"].is_string(), "{:?}: {}", args, line);
    }
}

#[test]
fn contract_every_command_emits_ndjson() {
    let env = TestEnv::new();
    assert_ndjson(&env, &["services", "--json"]);
    assert_ndjson(&env, &["orders", "--json", "--client", "a"]);
    assert_ndjson(&env, &["show", "wo-1", "--json"]);
    assert_ndjson(&env, &["show", "3", "--json"]);
    assert_ndjson(&env, &["report", "status", "--json"]);
    assert_ndjson(&env, &["export", "services", "--json", "-o", "out"]);
    assert_ndjson(&env, &["demo", "--json"]);
    assert_ndjson(&env, &["--json"]);
}

#[test]
fn contract_json_report_rows_are_keyed_by_label() {
    let env = TestEnv::new();
    let result = env.run(&["report", "services", "--json"]);
    let lines = result.json_lines();
    assert_eq!(lines[0]["rows"][1]["Serviço"], "Pintura Base (Laca)");
    assert_eq!(lines[0]["rows"][1]["Quantidade"], 2);
}

#[test]
fn contract_json_and_stdout_export_conflict() {
    let env = TestEnv::new();
    let result = env.run(&["export", "status", "--stdout", "--json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("--stdout cannot be combined with --json"));
}
