//! Moves command: print the knight-move graph of the keypad.

use crate::cli::common::{print_json, CliError, CliResult, KeypadSource};
use crate::models::{CostModel, KeypadGraph};
use clap::Args;
use serde::Serialize;

/// Show legal knight moves and their costs
#[derive(Debug, Clone, Args)]
pub struct MovesArgs {
    /// Only show moves leaving this key
    #[arg(short, long, value_name = "SYMBOL")]
    pub key: Option<char>,

    /// Which step pays for a vowel: arrival or departure
    #[arg(long, value_name = "MODEL")]
    pub cost_model: Option<CostModel>,

    #[command(flatten)]
    pub source: KeypadSource,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct KeyMoves {
    symbol: char,
    row: usize,
    col: usize,
    vowel: bool,
    moves: Vec<MoveOutput>,
}

#[derive(Serialize, Debug)]
struct MoveOutput {
    to: char,
    cost: usize,
}

impl MovesArgs {
    /// Execute the moves command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.source.load_config()?;
        let keypad = config
            .keypad
            .build()
            .map_err(|e| CliError::io(format!("Invalid keypad configuration: {e}")))?;
        let cost_model = self.cost_model.unwrap_or(config.counting.cost_model);
        let graph = KeypadGraph::build(&keypad, cost_model);

        let selected: Vec<usize> = match self.key {
            Some(symbol) => vec![keypad.index_of(symbol).ok_or_else(|| {
                CliError::validation(format!("Key '{symbol}' is not on the keypad"))
            })?],
            None => (0..keypad.key_count()).collect(),
        };

        let output: Vec<KeyMoves> = selected
            .into_iter()
            .filter_map(|index| {
                let key = keypad.key(index)?;
                let moves = graph
                    .moves_from(index)
                    .iter()
                    .filter_map(|m| {
                        Some(MoveOutput {
                            to: keypad.key(m.to)?.symbol,
                            cost: m.cost,
                        })
                    })
                    .collect();
                Some(KeyMoves {
                    symbol: key.symbol,
                    row: key.position.row,
                    col: key.position.col,
                    vowel: key.is_vowel,
                    moves,
                })
            })
            .collect();

        if self.json {
            return print_json(&output);
        }

        if self.key.is_none() {
            print!("{keypad}");
            println!();
        }
        for entry in &output {
            let marker = if entry.vowel { " (vowel)" } else { "" };
            let targets: Vec<String> = entry
                .moves
                .iter()
                .map(|m| format!("{}:{}", m.to, m.cost))
                .collect();
            println!("{}{} -> {}", entry.symbol, marker, targets.join(" "));
        }
        println!();
        println!(
            "{} keys, {} moves ({} cost model)",
            keypad.key_count(),
            graph.move_count(),
            cost_model
        );
        Ok(())
    }
}
