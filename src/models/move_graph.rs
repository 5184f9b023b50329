//! Knight-move graph of a keypad.
//!
//! Every key is connected to the keys one knight step away. Each move carries
//! a cost (0 or 1) under the selected [`CostModel`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::keypad::Keypad;

/// The eight knight offsets `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Where the vowel charge of a sequence is attributed.
///
/// Both models count the same sequences (total vowel keys within budget);
/// they differ in which step pays for a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostModel {
    /// A move costs 1 when it lands on a vowel; the first key pays on entry.
    #[default]
    Arrival,
    /// A move costs 1 when it leaves a vowel; the last key pays at the end.
    Departure,
}

impl CostModel {
    /// All models, in display order.
    pub const ALL: [Self; 2] = [Self::Arrival, Self::Departure];

    /// Lowercase name as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Departure => "departure",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "departure" => Ok(Self::Departure),
            other => Err(format!(
                "Invalid cost model '{other}'. Must be 'arrival' or 'departure'"
            )),
        }
    }
}

/// One legal knight move between two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Origin key index
    pub from: usize,
    /// Destination key index
    pub to: usize,
    /// Budget units charged for this move
    pub cost: usize,
}

/// All legal knight moves of a keypad, grouped by origin key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadGraph {
    cost_model: CostModel,
    /// `moves[k]` lists the moves leaving key `k`
    moves: Vec<Vec<Move>>,
    vowels: Vec<bool>,
}

impl KeypadGraph {
    /// Enumerates every legal knight move of `keypad` and costs it under `cost_model`.
    pub fn build(keypad: &Keypad, cost_model: CostModel) -> Self {
        let vowels: Vec<bool> = keypad.keys().iter().map(|k| k.is_vowel).collect();

        let moves = keypad
            .keys()
            .iter()
            .enumerate()
            .map(|(from, key)| {
                KNIGHT_OFFSETS
                    .iter()
                    .filter_map(|&(d_row, d_col)| {
                        let target = key
                            .position
                            .offset(d_row, d_col, keypad.rows(), keypad.cols())?;
                        let to = keypad.key_index_at(target)?;
                        let charged = match cost_model {
                            CostModel::Arrival => vowels[to],
                            CostModel::Departure => vowels[from],
                        };
                        Some(Move {
                            from,
                            to,
                            cost: usize::from(charged),
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            cost_model,
            moves,
            vowels,
        }
    }

    /// The cost model moves were costed under.
    #[must_use]
    pub const fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    /// Number of keys (graph vertices).
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.moves.len()
    }

    /// Moves leaving key `key`.
    #[must_use]
    pub fn moves_from(&self, key: usize) -> &[Move] {
        self.moves.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Every move of the graph.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().flatten()
    }

    /// Total number of moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.iter().map(Vec::len).sum()
    }

    /// Highest single-move cost present in the graph (0 when there are no moves).
    #[must_use]
    pub fn max_move_cost(&self) -> usize {
        self.moves().map(|m| m.cost).max().unwrap_or(0)
    }

    /// Cost charged when a sequence starts on `key`.
    #[must_use]
    pub fn entry_cost(&self, key: usize) -> usize {
        match self.cost_model {
            CostModel::Arrival => usize::from(self.vowels[key]),
            CostModel::Departure => 0,
        }
    }

    /// Cost charged when a sequence ends on `key`.
    #[must_use]
    pub fn terminal_cost(&self, key: usize) -> usize {
        match self.cost_model {
            CostModel::Arrival => 0,
            CostModel::Departure => usize::from(self.vowels[key]),
        }
    }

    /// Whether key `key` is a vowel.
    #[must_use]
    pub fn is_vowel(&self, key: usize) -> bool {
        self.vowels[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(model: CostModel) -> (Keypad, KeypadGraph) {
        let keypad = Keypad::canonical().unwrap();
        let graph = KeypadGraph::build(&keypad, model);
        (keypad, graph)
    }

    fn destinations(keypad: &Keypad, graph: &KeypadGraph, symbol: char) -> Vec<(char, usize)> {
        let from = keypad.index_of(symbol).unwrap();
        let mut dests: Vec<(char, usize)> = graph
            .moves_from(from)
            .iter()
            .map(|m| (keypad.key(m.to).unwrap().symbol, m.cost))
            .collect();
        dests.sort_unstable();
        dests
    }

    #[test]
    fn test_arrival_moves_from_a() {
        let (keypad, graph) = canonical(CostModel::Arrival);
        // A reaches only H and L, neither a vowel
        assert_eq!(destinations(&keypad, &graph, 'A'), vec![('H', 0), ('L', 0)]);
    }

    #[test]
    fn test_arrival_moves_from_h() {
        let (keypad, graph) = canonical(CostModel::Arrival);
        assert_eq!(
            destinations(&keypad, &graph, 'H'),
            vec![('1', 0), ('3', 0), ('A', 1), ('E', 1), ('K', 0), ('O', 1)]
        );
    }

    #[test]
    fn test_arrival_moves_from_3() {
        let (keypad, graph) = canonical(CostModel::Arrival);
        assert_eq!(
            destinations(&keypad, &graph, '3'),
            vec![('H', 0), ('J', 0), ('L', 0)]
        );
    }

    #[test]
    fn test_departure_charges_origin() {
        let (keypad, graph) = canonical(CostModel::Departure);
        assert_eq!(destinations(&keypad, &graph, 'A'), vec![('H', 1), ('L', 1)]);
        assert_eq!(
            destinations(&keypad, &graph, 'H'),
            vec![('1', 0), ('3', 0), ('A', 0), ('E', 0), ('K', 0), ('O', 0)]
        );
    }

    #[test]
    fn test_move_counts() {
        let (_, graph) = canonical(CostModel::Arrival);
        assert_eq!(graph.key_count(), 18);
        assert_eq!(graph.move_count(), 60);
        assert_eq!(graph.max_move_cost(), 1);
        assert!(graph.moves().all(|m| m.from != m.to));
    }

    #[test]
    fn test_moves_are_symmetric() {
        let (_, graph) = canonical(CostModel::Arrival);
        for m in graph.moves() {
            assert!(graph.moves_from(m.to).iter().any(|back| back.to == m.from));
        }
    }

    #[test]
    fn test_entry_and_terminal_costs() {
        let (keypad, arrival) = canonical(CostModel::Arrival);
        let departure = KeypadGraph::build(&keypad, CostModel::Departure);
        let a = keypad.index_of('A').unwrap();
        let b = keypad.index_of('B').unwrap();

        assert_eq!(arrival.entry_cost(a), 1);
        assert_eq!(arrival.entry_cost(b), 0);
        assert_eq!(arrival.terminal_cost(a), 0);
        assert_eq!(departure.entry_cost(a), 0);
        assert_eq!(departure.terminal_cost(a), 1);
        assert_eq!(departure.terminal_cost(b), 0);
    }

    #[test]
    fn test_isolated_key_has_no_moves() {
        let keypad = Keypad::from_rows(&["AB"], '_', "A").unwrap();
        let graph = KeypadGraph::build(&keypad, CostModel::Arrival);
        assert_eq!(graph.move_count(), 0);
        assert!(graph.moves_from(0).is_empty());
        assert_eq!(graph.max_move_cost(), 0);
    }

    #[test]
    fn test_cost_model_parse() {
        assert_eq!("arrival".parse::<CostModel>(), Ok(CostModel::Arrival));
        assert_eq!("Departure".parse::<CostModel>(), Ok(CostModel::Departure));
        assert!("landing".parse::<CostModel>().is_err());
        assert_eq!(CostModel::default(), CostModel::Arrival);
    }
}
