//! CLI smoke tests for the userbase-server binary: configuration validation,
//! help output and basic command behavior.

use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_userbase_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_userbase-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute userbase-server")
}

#[test]
fn help_lists_commands_and_options() {
    let output = run_userbase_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("userbase-server") || stdout.contains("Userbase"));
    assert!(stdout.contains("Usage:") || stdout.contains("USAGE:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_prints_a_number() {
    let output = run_userbase_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("userbase-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn unknown_subcommand_fails() {
    let output = run_userbase_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid") || stderr.contains("unexpected"),
        "Should report the invalid command: {stderr}"
    );
}

#[test]
fn missing_config_file_fails() {
    let output = run_userbase_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found") || stderr.contains("Config"),
        "Should mention the missing config file: {stderr}"
    );
}

#[test]
fn invalid_yaml_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    std::fs::write(&config_path, "server: [unclosed").expect("Failed to write file");

    let output = run_userbase_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");
}

#[test]
fn valid_config_passes_check() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("valid.yaml");
    let home_dir = temp_dir.path().join("home");

    let config_content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 8087

database:
  url: "sqlite::memory:"

logging:
  default:
    console_level: error
    file: ""
    file_level: info
"#,
        home_dir.to_string_lossy().replace('\\', "/")
    );

    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_userbase_server(&["--config", config_path.to_str().unwrap(), "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
    }

    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
}

#[test]
fn print_config_emits_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("cfg.yaml");
    let home_dir = temp_dir.path().join("home");

    let config_content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 9091

logging:
  default:
    console_level: error
    file: ""
"#,
        home_dir.to_string_lossy().replace('\\', "/")
    );

    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_userbase_server(&[
        "--config",
        config_path.to_str().unwrap(),
        "--print-config",
    ]);

    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"));
    assert!(stdout.contains("port: 9091"));
}
