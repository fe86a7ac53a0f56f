//! Test environment for running the paintshop binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a paintshop CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {l:?}: {e}")))
            .collect()
    }
}

/// Isolated working directory and config home
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            config_home: tempfile::tempdir().expect("create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_paintshop")),
        }
    }

    /// Write `./paintshop.toml`
    pub fn with_project_config(self, content: &str) -> Self {
        std::fs::write(self.project_path("paintshop.toml"), content).expect("write config");
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("TZ", "UTC")
            .env_remove("RUST_LOG")
            .env_remove("PAINTSHOP_SEED")
            .env_remove("PAINTSHOP_EXPORT_DIR")
            .env_remove("PAINTSHOP_VERBOSITY")
            .env_remove("PAINTSHOP_COLOR");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute paintshop"))
    }

    pub fn read(&self, relative: &str) -> String {
        read_file(&self.project_path(relative))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}
