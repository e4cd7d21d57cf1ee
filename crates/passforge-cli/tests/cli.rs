use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.tmp.path().join("passforge.toml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("passforge").expect("binary built");
        cmd.current_dir(self.tmp.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

#[test]
fn requirements_lists_policy() {
    TestEnv::new()
        .cmd()
        .arg("requirements")
        .assert()
        .success()
        .stdout(contains("Minimum 8 characters total"))
        .stdout(contains("!#$%^&+=*()"));
}

#[test]
fn validate_json_reports_valid_counts() {
    TestEnv::new()
        .cmd()
        .args(["validate", "--lowercase", "2", "--uppercase", "2", "--symbols", "2", "--numbers", "2", "--json"])
        .assert()
        .success()
        .stdout(contains("\"valid\": true"))
        .stdout(contains("\"violations\": []"));
}

#[test]
fn validate_fails_with_violations() {
    TestEnv::new()
        .cmd()
        .args(["validate", "--lowercase", "1", "--uppercase", "1", "--symbols", "1", "--numbers", "1"])
        .assert()
        .failure()
        .stdout(contains("Total: 4 characters (need at least 8)"))
        .stderr(contains("PolicyRejected"));
}

#[test]
fn negative_counts_are_invalid_arguments() {
    TestEnv::new()
        .cmd()
        .args(["validate", "--lowercase", "-1"])
        .assert()
        .failure()
        .stderr(contains("InvalidArgument"));
}

#[test]
fn generate_prints_requested_number_of_passwords() {
    let output = TestEnv::new()
        .cmd()
        .args(["generate", "--lowercase", "3", "--uppercase", "3", "--symbols", "2", "--numbers", "2", "--count", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.len() == 10));
}

#[test]
fn generate_refuses_counts_that_fail_policy() {
    TestEnv::new()
        .cmd()
        .args(["generate", "--symbols", "0"])
        .assert()
        .failure()
        .stderr(contains("Symbols: 0 (need at least 1)"));
}

#[test]
fn interactive_session_reads_stdin() {
    TestEnv::new()
        .cmd()
        .arg("interactive")
        .write_stdin("2\n2\n2\n2\n")
        .assert()
        .success()
        .stdout(contains("YOUR SECURE PASSWORD"));
}

#[test]
fn init_config_writes_once() {
    let env = TestEnv::new();
    env.cmd().arg("init-config").assert().success();
    let content = fs::read_to_string(env.config_path()).expect("config written");
    assert!(content.contains("max_attempts = 3"));

    env.cmd().arg("init-config").assert().failure();
}

#[test]
fn invalid_settings_are_rejected() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "[prompt]\nmin_count = 9\nmax_count = 3\n").expect("write config");
    env.cmd().arg("requirements").assert().failure().stderr(contains("Invalid"));
}

#[test]
fn json_log_file_records_session_events() {
    let env = TestEnv::new();
    let log_path = env.tmp.path().join("passforge.log");
    fs::write(
        env.config_path(),
        format!(
            "[logging]\nlevel = \"info\"\nformat = \"json\"\nfile = '{}'\n",
            log_path.display()
        ),
    )
    .expect("write config");

    env.cmd().arg("requirements").assert().success();

    let content = fs::read_to_string(&log_path).expect("log file written");
    let events: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).expect("json log line"))
        .collect();
    assert!(
        events
            .iter()
            .any(|event| event["fields"]["event"] == "session_started")
    );
    assert!(
        events
            .iter()
            .any(|event| event["fields"]["event"] == "session_finished")
    );
}
