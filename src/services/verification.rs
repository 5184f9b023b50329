//! Agreement checks between the counting strategies.

use serde::Serialize;

use super::brute_force::enumerate_sequences;
use super::path_counter::{CountError, PathCounter};

/// Counts of one `(length, max_vowels)` pair under every strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCheck {
    /// Sequence length
    pub length: usize,
    /// Vowel budget
    pub max_vowels: usize,
    /// Exponentiation by squaring over matrix families
    pub squared: u64,
    /// One matrix composition per move
    pub stepwise: u64,
    /// One grouped-list step per move
    pub grouped: u64,
    /// Depth-first enumeration
    pub enumerated: u64,
}

impl CrossCheck {
    /// True when every strategy returned the same count.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.squared == self.stepwise
            && self.squared == self.grouped
            && self.squared == self.enumerated
    }
}

/// Runs every strategy for lengths `0..=max_length` and budgets
/// `0..=max_vowels`.
pub fn cross_check(
    counter: &PathCounter,
    max_length: usize,
    max_vowels: usize,
) -> Result<Vec<CrossCheck>, CountError> {
    let mut checks = Vec::with_capacity((max_length + 1) * (max_vowels + 1));
    for length in 0..=max_length {
        let len = length as u64;
        for m in 0..=max_vowels {
            checks.push(CrossCheck {
                length,
                max_vowels: m,
                squared: counter.count_sequences(len, m)?,
                stepwise: counter.count_sequences_stepwise(len, m)?,
                grouped: counter.count_sequences_grouped(len, m)?,
                enumerated: enumerate_sequences(counter.graph(), length, m),
            });
        }
    }
    Ok(checks)
}
