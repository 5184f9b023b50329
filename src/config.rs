//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the keypad definition
//! and counting defaults in TOML format with platform-specific directory
//! resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{
    BLOCKED_CELL, CANONICAL_ROWS, CANONICAL_VOWELS, CONFIG_DIR_ENV, CONFIG_DIR_NAME,
    DEFAULT_MAX_VOWELS,
};
use crate::models::{CostModel, Keypad, KeypadError};
use crate::services::PathCounter;

/// Keypad layout configuration.
///
/// Each entry of `rows` is one grid row; every character is a key symbol
/// except `blocked`, which marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadConfig {
    /// Grid rows, top to bottom
    pub rows: Vec<String>,
    /// Marker for cells without a key
    #[serde(default = "default_blocked")]
    pub blocked: char,
    /// Symbols counted as vowels
    #[serde(default)]
    pub vowels: String,
}

fn default_blocked() -> char {
    BLOCKED_CELL
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            rows: CANONICAL_ROWS.iter().map(ToString::to_string).collect(),
            blocked: BLOCKED_CELL,
            vowels: CANONICAL_VOWELS.to_string(),
        }
    }
}

impl KeypadConfig {
    /// Builds the keypad described by this configuration.
    pub fn build(&self) -> Result<Keypad, KeypadError> {
        Keypad::from_rows(&self.rows, self.blocked, &self.vowels)
    }
}

/// Counting defaults applied when a command does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingConfig {
    /// Which step pays for a vowel
    #[serde(default)]
    pub cost_model: CostModel,
    /// Default vowel budget
    #[serde(default = "default_max_vowels")]
    pub max_vowels: usize,
}

fn default_max_vowels() -> usize {
    DEFAULT_MAX_VOWELS
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            cost_model: CostModel::default(),
            max_vowels: default_max_vowels(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$KNIGHTPAD_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/Knightpad/config.toml`
/// - macOS: `~/Library/Application Support/Knightpad/config.toml`
/// - Windows: `%APPDATA%\Knightpad\config.toml`
///
/// # Validation
///
/// - keypad rows must be non-empty and of equal width
/// - at least one cell must hold a key, and symbols must be unique
/// - every vowel must appear on the keypad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Keypad layout
    #[serde(default)]
    pub keypad: KeypadConfig,
    /// Counting defaults
    #[serde(default)]
    pub counting: CountingConfig,
}

impl Config {
    /// Creates a new Config describing the reference keypad.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honouring `KNIGHTPAD_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid keypad in config file: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validates configuration values by building the keypad.
    pub fn validate(&self) -> Result<()> {
        self.keypad.build()?;
        Ok(())
    }

    /// Builds a counter for the configured keypad and cost model.
    pub fn build_counter(&self) -> Result<PathCounter> {
        self.build_counter_with(self.counting.cost_model)
    }

    /// Builds a counter for the configured keypad with an explicit cost model.
    pub fn build_counter_with(&self, cost_model: CostModel) -> Result<PathCounter> {
        let keypad = self.keypad.build().context("Invalid keypad configuration")?;
        Ok(PathCounter::new(keypad, cost_model))
    }
}
