//! Count command: number of sequences for one length and budget.

use crate::cli::common::{print_json, CliError, CliResult, KeypadSource};
use crate::models::CostModel;
use clap::Args;
use serde::Serialize;

/// Count knight-move sequences of a given length
#[derive(Debug, Clone, Args)]
pub struct CountArgs {
    /// Number of keys in each sequence
    #[arg(short, long, value_name = "N")]
    pub length: u64,

    /// Maximum number of vowel keys per sequence (defaults to the config value)
    #[arg(short, long, value_name = "N")]
    pub max_vowels: Option<usize>,

    /// Which step pays for a vowel: arrival or departure
    #[arg(long, value_name = "MODEL")]
    pub cost_model: Option<CostModel>,

    #[command(flatten)]
    pub source: KeypadSource,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable count result
#[derive(Serialize, Debug)]
struct CountOutput {
    length: u64,
    max_vowels: usize,
    cost_model: CostModel,
    keys: usize,
    count: u64,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.source.load_config()?;
        let max_vowels = self.max_vowels.unwrap_or(config.counting.max_vowels);
        let cost_model = self.cost_model.unwrap_or(config.counting.cost_model);

        let counter = config
            .build_counter_with(cost_model)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        let count = counter
            .count_sequences(self.length, max_vowels)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            print_json(&CountOutput {
                length: self.length,
                max_vowels,
                cost_model,
                keys: counter.key_count(),
                count,
            })
        } else {
            println!("{count}");
            Ok(())
        }
    }
}
