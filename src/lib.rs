//! Knight-move sequence counting library.
//!
//! Counts the sequences of a given length that a chess knight can type on a
//! fixed keypad while visiting at most a given number of vowel keys. Counts
//! are exact and computed in `O(log length)` compositions of cost-bucketed
//! transition matrices.
//!
//! ```
//! use knightpad::models::{CostModel, Keypad};
//! use knightpad::services::PathCounter;
//!
//! let counter = PathCounter::new(Keypad::canonical().unwrap(), CostModel::Arrival);
//! assert_eq!(counter.count_sequences(10, 2).unwrap(), 1_013_398);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
