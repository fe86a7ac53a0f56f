//! CONTRACT: configuration precedence and failure modes.

use crate::common::*;

fn service_count(result: &TestResult) -> usize {
    result.json_lines()[0]["services"]
        .as_array()
        .map(|a| a.len())
        .unwrap_or(0)
}

#[test]
fn contract_project_config_disables_seed() {
    let env = TestEnv::new().with_project_config(EMPTY_SESSION_CONFIG);
    let result = env.run(&["services", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(service_count(&result), 0);
}

#[test]
fn contract_env_overrides_project_config() {
    let env = TestEnv::new().with_project_config(EMPTY_SESSION_CONFIG);
    let result = env.run_with_env(&["services", "--json"], &[("PAINTSHOP_SEED", "true")]);
    assert_eq!(service_count(&result), 4);
}

#[test]
fn contract_user_config_is_used_without_project_config() {
    let env = TestEnv::new();
    let dir = env.config_home.path().join("paintshop");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), EMPTY_SESSION_CONFIG).unwrap();

    let result = env.run(&["services", "--json"]);
    assert_eq!(service_count(&result), 0);
}

#[test]
fn contract_missing_explicit_config_fails() {
    let env = TestEnv::new();
    let result = env.run(&["--config", "nao-existe.toml", "services"]);
    assert!(!result.success);
}

#[test]
fn contract_invalid_value_fails_with_file_name() {
    let env = TestEnv::new().with_project_config("[output]\ncolor = \"rainbow\"\n");
    let result = env.run(&["services"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid config in"), "{}", result.stderr);
    assert!(result.stderr.contains("paintshop.toml"), "{}", result.stderr);
}
