//! Integration tests for config warning behavior.
//!
//! These tests verify that the CLI properly warns users when config files have errors.

use std::fs;
use std::process::Command;

/// Test that an invalid config file produces a warning in stderr but the command still runs.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".winstash");
    fs::create_dir_all(&config_dir).expect("Failed to create .winstash dir");

    fs::write(config_dir.join("config.toml"), "invalid toml [[[")
        .expect("Failed to write invalid config");

    let output = Command::new(env!("CARGO_BIN_EXE_winstash"))
        .env("HOME", temp_dir.path())
        .env("WINSTASH_STORE_FILE", temp_dir.path().join("workspaces.json"))
        .arg("list")
        .output()
        .expect("Failed to execute winstash");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
}

/// Test that a zero timeout is rejected like a parse error.
#[test]
fn test_config_warning_on_invalid_values() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".winstash");
    fs::create_dir_all(&config_dir).expect("Failed to create .winstash dir");

    fs::write(config_dir.join("config.toml"), "[restore]\ntimeout_secs = 0\n")
        .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_winstash"))
        .env("HOME", temp_dir.path())
        .env("WINSTASH_STORE_FILE", temp_dir.path().join("workspaces.json"))
        .arg("list")
        .output()
        .expect("Failed to execute winstash");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}

/// Test that a valid config file does not produce warnings.
#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".winstash");
    fs::create_dir_all(&config_dir).expect("Failed to create .winstash dir");

    fs::write(
        config_dir.join("config.toml"),
        r#"
[capture]
overwrite = false

[restore]
timeout_secs = 5
"#,
    )
    .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_winstash"))
        .env("HOME", temp_dir.path())
        .env("WINSTASH_STORE_FILE", temp_dir.path().join("workspaces.json"))
        .arg("list")
        .output()
        .expect("Failed to execute winstash");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(
        !stderr.contains("Warning"),
        "Expected no warning for valid config, got: {}",
        stderr
    );
}

/// Test that `storage.path` in config relocates the store when the env override is absent.
#[test]
fn test_storage_path_from_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".winstash");
    fs::create_dir_all(&config_dir).expect("Failed to create .winstash dir");

    let store = temp_dir.path().join("elsewhere.json");
    fs::write(
        &store,
        r#"{"desk": {"win0": {"size": [1, 1], "position": [0, 0], "executable": "xterm", "cwd": "/"}}}"#,
    )
    .unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("[storage]\npath = {:?}\n", store.display().to_string()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_winstash"))
        .env("HOME", temp_dir.path())
        .env_remove("WINSTASH_STORE_FILE")
        .arg("list")
        .output()
        .expect("Failed to execute winstash");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("desk (1 window(s))"), "got: {}", stdout);
}
