//! End-to-end tests for `knightpad config`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults_json() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["exists"], false);
    assert!(result["path"].as_str().unwrap().ends_with("config.toml"));
    assert_eq!(result["keypad"]["keys"], 18);
    assert_eq!(result["keypad"]["vowels"], "AEIO");
    assert_eq!(result["counting"]["cost_model"], "arrival");
    assert_eq!(result["counting"]["max_vowels"], 2);
}

#[test]
fn test_config_show_human_readable() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keypad (18 keys):"));
    assert!(stdout.contains("not created, using defaults"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let config_path = temp_dir.path().join("config.toml");
    assert!(config_path.exists(), "config.toml should be written");

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keypad]"));
    assert!(content.contains("[counting]"));
    assert!(content.contains("ABCDE"));

    let show = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(show.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&show.stdout))
            .expect("Should parse JSON output");
    assert_eq!(result["exists"], true);
}

#[test]
fn test_config_init_refuses_overwrite() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let first = isolated_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(first.status.code(), Some(0));

    let second = isolated_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(second.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = isolated_command(&["config", "init", "--force"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(forced.status.code(), Some(0));
}

#[test]
fn test_user_config_drives_count() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    small_keypad_config()
        .save_to(&temp_dir.path().join("config.toml"))
        .expect("Failed to write config");

    let output = isolated_command(&["count", "--length", "3"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "48");
}

#[test]
fn test_invalid_user_config_fails() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "[keypad]\nrows = [\"AA\"]\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'A'"), "Should name the duplicate: {stderr}");
}
