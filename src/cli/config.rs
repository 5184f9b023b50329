//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Write the default configuration file
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write the default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    exists: bool,
    keypad: KeypadOutput,
    counting: CountingOutput,
}

#[derive(Serialize, Debug)]
struct KeypadOutput {
    rows: Vec<String>,
    blocked: char,
    vowels: String,
    keys: usize,
}

#[derive(Serialize, Debug)]
struct CountingOutput {
    cost_model: String,
    max_vowels: usize,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?;
        let keys = config
            .keypad
            .build()
            .map_err(|e| CliError::validation(format!("Invalid keypad configuration: {e}")))?
            .key_count();

        let output = ConfigOutput {
            path: path.to_string_lossy().to_string(),
            exists: Config::exists(),
            keypad: KeypadOutput {
                rows: config.keypad.rows.clone(),
                blocked: config.keypad.blocked,
                vowels: config.keypad.vowels.clone(),
                keys,
            },
            counting: CountingOutput {
                cost_model: config.counting.cost_model.to_string(),
                max_vowels: config.counting.max_vowels,
            },
        };

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?;

        if Config::exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Configuration");
    println!("=============");
    println!();
    let origin = if output.exists { "" } else { " (not created, using defaults)" };
    println!("File: {}{}", output.path, origin);
    println!();
    println!("Keypad ({} keys):", output.keypad.keys);
    for row in &output.keypad.rows {
        println!("  {row}");
    }
    println!("  Blocked cell: {}", output.keypad.blocked);
    println!("  Vowels:       {}", output.keypad.vowels);
    println!();
    println!("Counting:");
    println!("  Cost model: {}", output.counting.cost_model);
    println!("  Max vowels: {}", output.counting.max_vowels);
}
