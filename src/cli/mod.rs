//! CLI command handlers for Knightpad.
//!
//! Every subcommand is a clap `Args` struct with an `execute` method that
//! prints to stdout and returns a [`CliError`] carrying the exit code.

pub mod common;
pub mod config;
pub mod count;
pub mod moves;
pub mod table;
pub mod verify;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, KeypadSource};
pub use config::ConfigArgs;
pub use count::CountArgs;
pub use moves::MovesArgs;
pub use table::TableArgs;
pub use verify::VerifyArgs;
