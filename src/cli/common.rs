//! Shared CLI types: errors, exit codes and keypad selection.

use crate::config::Config;
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was understood but rejected (bad value, failed check, overflow)
    ValidationFailed = 1,
    /// A file could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// A rejected input or failed check (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// A file or configuration problem (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Where the keypad definition comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct KeypadSource {
    /// Keypad definition file (TOML); defaults to the user config
    #[arg(long, value_name = "FILE")]
    pub keypad: Option<PathBuf>,
}

impl KeypadSource {
    /// Loads the configuration named by `--keypad`, or the user config.
    pub fn load_config(&self) -> CliResult<Config> {
        match &self.keypad {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Keypad file not found: {}",
                        path.display()
                    )));
                }
                Config::load_from(path)
                    .map_err(|e| CliError::io(format!("Failed to load keypad: {e:#}")))
            }
            None => Config::load()
                .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}"))),
        }
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
    }

    #[test]
    fn test_missing_keypad_file_is_io_error() {
        let source = KeypadSource {
            keypad: Some(PathBuf::from("/nonexistent/knightpad/keypad.toml")),
        };
        let err = source.load_config().unwrap_err();
        assert_eq!(err.exit_code, ExitCode::IoError);
        assert!(err.message.contains("not found"));
    }
}
