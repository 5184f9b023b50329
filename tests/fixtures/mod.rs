//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use knightpad::config::{Config, CountingConfig, KeypadConfig};
use knightpad::models::{CostModel, Keypad};
use knightpad::services::PathCounter;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the knightpad binary
pub fn knightpad_bin() -> String {
    std::env::var("CARGO_BIN_EXE_knightpad")
        .unwrap_or_else(|_| "target/release/knightpad".to_string())
}

/// Creates a Command whose config directory is `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(knightpad_bin());
    cmd.env("KNIGHTPAD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Counter for the reference keypad.
pub fn canonical_counter(model: CostModel) -> PathCounter {
    PathCounter::new(Keypad::canonical().unwrap(), model)
}

/// Hand-computed counts on the reference keypad: `SMALL_COUNTS[length][m]`
/// for lengths 0..=6 and budgets 0..=3.
pub const SMALL_COUNTS: [[u64; 4]; 7] = [
    [0, 0, 0, 0],
    [18, 18, 18, 18],
    [40, 60, 60, 60],
    [120, 194, 214, 214],
    [354, 630, 732, 732],
    [1070, 2006, 2486, 2588],
    [3180, 6458, 8392, 8916],
];

/// Reference counts with at most two vowels.
pub const REFERENCE_COUNTS: [(u64, u64); 3] = [
    (10, 1_013_398),
    (16, 1_195_650_888),
    (32, 129_891_093_550_589_788),
];

/// A 3 x 4 keypad with one blocked corner and three vowels.
pub fn small_keypad_config() -> Config {
    Config {
        keypad: KeypadConfig {
            rows: vec!["ABCD".to_string(), "EFGH".to_string(), "IJK.".to_string()],
            blocked: '.',
            vowels: "AEI".to_string(),
        },
        counting: CountingConfig {
            cost_model: CostModel::Arrival,
            max_vowels: 1,
        },
    }
}

/// A 3 x 3 keypad where ten knight moves run from one vowel to another.
pub fn vowel_chain_keypad_config() -> Config {
    Config {
        keypad: KeypadConfig {
            rows: vec!["ABC".to_string(), "DEF".to_string(), "GHI".to_string()],
            blocked: '_',
            vowels: "ABCFGH".to_string(),
        },
        counting: CountingConfig::default(),
    }
}

/// Counts on [`vowel_chain_keypad_config`]: `VOWEL_CHAIN_COUNTS[length - 1][m]`
/// for lengths 1..=7 and budgets 0..=4.
pub const VOWEL_CHAIN_COUNTS: [[u64; 5]; 7] = [
    [9, 9, 9, 9, 9],
    [2, 6, 16, 16, 16],
    [2, 8, 14, 32, 32],
    [2, 10, 20, 32, 64],
    [2, 12, 28, 48, 70],
    [2, 14, 38, 70, 108],
    [2, 16, 50, 100, 164],
];

/// Writes `config` to a temp file and returns its path and the owning dir.
pub fn write_temp_config(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("keypad.toml");
    config.save_to(&path).expect("Failed to write config");
    (path, temp_dir)
}

/// Writes raw TOML to a temp file and returns its path and the owning dir.
pub fn write_temp_toml(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("keypad.toml");
    std::fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}
