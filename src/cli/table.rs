//! Table command: counts for several lengths at one budget.

use crate::cli::common::{print_json, CliError, CliResult, KeypadSource};
use crate::constants::DEFAULT_TABLE_LENGTHS;
use clap::Args;
use serde::Serialize;

/// Print sequence counts for a list of lengths
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Comma-separated sequence lengths (default: 10,16,32)
    #[arg(short, long, value_name = "N,N,...", value_delimiter = ',')]
    pub lengths: Vec<u64>,

    /// Maximum number of vowel keys per sequence (defaults to the config value)
    #[arg(short, long, value_name = "N")]
    pub max_vowels: Option<usize>,

    #[command(flatten)]
    pub source: KeypadSource,

    /// Output rows as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the table
#[derive(Serialize, Debug)]
struct TableRow {
    length: u64,
    max_vowels: usize,
    count: u64,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.source.load_config()?;
        let max_vowels = self.max_vowels.unwrap_or(config.counting.max_vowels);
        let counter = config
            .build_counter()
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let lengths: &[u64] = if self.lengths.is_empty() {
            &DEFAULT_TABLE_LENGTHS
        } else {
            &self.lengths
        };

        let rows = lengths
            .iter()
            .map(|&length| {
                counter
                    .count_sequences(length, max_vowels)
                    .map(|count| TableRow {
                        length,
                        max_vowels,
                        count,
                    })
                    .map_err(|e| CliError::validation(e.to_string()))
            })
            .collect::<CliResult<Vec<_>>>()?;

        if self.json {
            return print_json(&rows);
        }

        for row in &rows {
            println!(
                "Length {} maxVowels {}: {}",
                row.length, row.max_vowels, row.count
            );
        }
        Ok(())
    }
}
