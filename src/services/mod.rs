//! Service layer for counting logic.
//!
//! This module contains the sequence counters and the cross-checks that
//! validate them against each other.

pub mod brute_force;
pub mod path_counter;
pub mod verification;

use std::sync::OnceLock;

use crate::models::{CostModel, Keypad, KeypadError};

// Re-export commonly used types and functions
pub use brute_force::enumerate_sequences;
pub use path_counter::{CountError, PathCounter};
pub use verification::{cross_check, CrossCheck};

/// Process-wide counter for the canonical keypad under the arrival model.
///
/// Built on first call; later calls (from any thread) share the same
/// instance.
pub fn canonical_counter() -> Result<&'static PathCounter, KeypadError> {
    static COUNTER: OnceLock<Result<PathCounter, KeypadError>> = OnceLock::new();
    COUNTER
        .get_or_init(|| {
            Keypad::canonical().map(|keypad| PathCounter::new(keypad, CostModel::Arrival))
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Counts sequences on the canonical keypad.
///
/// ```
/// assert_eq!(knightpad::services::count_sequences(10, 2).unwrap(), 1_013_398);
/// ```
pub fn count_sequences(length: u64, max_vowels: usize) -> anyhow::Result<u64> {
    Ok(canonical_counter()?.count_sequences(length, max_vowels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_canonical_counter_is_shared() {
        let first = canonical_counter().unwrap();
        let second = canonical_counter().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_concurrent_queries() {
        let handles: Vec<_> = [10u64, 16, 32]
            .into_iter()
            .map(|length| thread::spawn(move || count_sequences(length, 2).unwrap()))
            .collect();
        let counts: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1_013_398, 1_195_650_888, 129_891_093_550_589_788]);
    }
}
