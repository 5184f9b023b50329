//! Exhaustive enumeration of knight sequences, for cross-checking.
//!
//! Walks every sequence depth-first and counts vowel keys directly, without
//! any cost model. Exponential in `length`; only meant for short sequences.

use crate::models::KeypadGraph;

/// Counts sequences of `length` keys with at most `max_vowels` vowel keys by
/// walking every one of them.
///
/// Follows the same conventions as the matrix counter: `length == 0` yields
/// 0 and `length == 1` yields the key count.
pub fn enumerate_sequences(graph: &KeypadGraph, length: usize, max_vowels: usize) -> u64 {
    match length {
        0 => 0,
        1 => graph.key_count() as u64,
        _ => (0..graph.key_count())
            .map(|start| {
                let vowels = usize::from(graph.is_vowel(start));
                if vowels > max_vowels {
                    0
                } else {
                    walk(graph, start, length - 1, vowels, max_vowels)
                }
            })
            .sum(),
    }
}

fn walk(graph: &KeypadGraph, key: usize, moves_left: usize, vowels: usize, max_vowels: usize) -> u64 {
    if moves_left == 0 {
        return 1;
    }
    graph
        .moves_from(key)
        .iter()
        .map(|m| {
            let vowels = vowels + usize::from(graph.is_vowel(m.to));
            if vowels > max_vowels {
                0
            } else {
                walk(graph, m.to, moves_left - 1, vowels, max_vowels)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostModel, Keypad};

    #[test]
    fn test_enumeration_matches_hand_counts() {
        let keypad = Keypad::canonical().unwrap();
        let graph = KeypadGraph::build(&keypad, CostModel::Arrival);
        assert_eq!(enumerate_sequences(&graph, 0, 2), 0);
        assert_eq!(enumerate_sequences(&graph, 1, 0), 18);
        // every move, with no vowel restriction
        assert_eq!(enumerate_sequences(&graph, 2, 2), 60);
        // moves between consonants only
        assert_eq!(enumerate_sequences(&graph, 2, 0), 40);
        assert_eq!(enumerate_sequences(&graph, 6, 3), 8916);
    }

    #[test]
    fn test_enumeration_ignores_cost_model() {
        let keypad = Keypad::canonical().unwrap();
        let arrival = KeypadGraph::build(&keypad, CostModel::Arrival);
        let departure = KeypadGraph::build(&keypad, CostModel::Departure);
        for length in 0..=5 {
            for m in 0..=2 {
                assert_eq!(
                    enumerate_sequences(&arrival, length, m),
                    enumerate_sequences(&departure, length, m)
                );
            }
        }
    }
}
