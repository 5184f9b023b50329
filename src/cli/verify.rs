//! Verify command: cross-check every counting strategy on short sequences.

use crate::cli::common::{print_json, CliError, CliResult, KeypadSource};
use crate::constants::MAX_VERIFY_LENGTH;
use crate::models::CostModel;
use crate::services::{cross_check, CrossCheck};
use clap::Args;
use serde::Serialize;

/// Compare squaring, stepwise, grouped-list and brute-force counts
#[derive(Debug, Clone, Args)]
pub struct VerifyArgs {
    /// Longest sequence to enumerate (at most 12)
    #[arg(long, value_name = "N", default_value_t = 6)]
    pub max_length: usize,

    /// Largest vowel budget to check
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    pub max_vowels: usize,

    /// Check only this cost model (default: both)
    #[arg(long, value_name = "MODEL")]
    pub cost_model: Option<CostModel>,

    #[command(flatten)]
    pub source: KeypadSource,

    /// Output every comparison as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct VerifyOutput {
    cost_model: CostModel,
    passed: bool,
    checks: Vec<CrossCheck>,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self) -> CliResult<()> {
        if self.max_length > MAX_VERIFY_LENGTH {
            return Err(CliError::validation(format!(
                "--max-length {} is too long to enumerate (maximum {MAX_VERIFY_LENGTH})",
                self.max_length
            )));
        }
        let config = self.source.load_config()?;
        let models: Vec<CostModel> = match self.cost_model {
            Some(model) => vec![model],
            None => CostModel::ALL.to_vec(),
        };

        let mut reports = Vec::with_capacity(models.len());
        for model in models {
            let counter = config
                .build_counter_with(model)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            let checks = cross_check(&counter, self.max_length, self.max_vowels)
                .map_err(|e| CliError::validation(e.to_string()))?;
            reports.push(VerifyOutput {
                cost_model: model,
                passed: checks.iter().all(CrossCheck::agrees),
                checks,
            });
        }

        if self.json {
            print_json(&reports)?;
        } else {
            for report in &reports {
                let status = if report.passed { "✓" } else { "✗" };
                println!(
                    "{} {} model: {} comparisons",
                    status,
                    report.cost_model,
                    report.checks.len()
                );
                for check in report.checks.iter().filter(|c| !c.agrees()) {
                    println!(
                        "  length {} maxVowels {}: squared {} stepwise {} grouped {} enumerated {}",
                        check.length,
                        check.max_vowels,
                        check.squared,
                        check.stepwise,
                        check.grouped,
                        check.enumerated
                    );
                }
            }
        }

        if reports.iter().all(|r| r.passed) {
            Ok(())
        } else {
            Err(CliError::validation("Counting strategies disagree"))
        }
    }
}
