//! Knight-sequence counting by exponentiation of cost-bucketed families.
//!
//! # Algorithm
//!
//! For a sequence of `length` keys there are `length - 1` moves. The
//! single-move family `B` (one matrix per move cost) is raised to that power
//! under [`TransitionFamily::compose`] by repeated squaring, pruning anything
//! over budget at every step. The result is seeded with the entry family (a
//! `1 x numKeys` row per first-key cost), corrected by the terminal reduction
//! and summed.
//!
//! # Range
//!
//! Counts are `u64`. Every product and sum is checked; a result that does not
//! fit is reported as [`CountError::Overflow`]. On the canonical keypad the
//! unconstrained count fits up to length 34 and the `max_vowels = 2` count up
//! to length 36.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, trace, warn};

use crate::models::{
    ArithmeticOverflow, CostModel, CountMatrix, GroupedMoves, Keypad, KeypadGraph,
    TransitionFamily,
};

/// Failure of a counting query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// The count (or an intermediate path count) exceeds `u64::MAX`
    Overflow {
        /// Requested sequence length
        length: u64,
        /// Requested vowel budget
        max_vowels: usize,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { length, max_vowels } => write!(
                f,
                "sequence count for length {length} with at most {max_vowels} vowels exceeds the 64-bit range"
            ),
        }
    }
}

impl std::error::Error for CountError {}

/// Counts knight-move sequences on one keypad under one cost model.
///
/// The counter is immutable after construction and can be shared between
/// threads; each query allocates its own intermediate families. The per-cost
/// single-move matrices are built on first use.
#[derive(Debug)]
pub struct PathCounter {
    keypad: Keypad,
    graph: KeypadGraph,
    /// `single_moves[c]` marks every move of cost exactly `c`
    single_moves: OnceLock<Vec<CountMatrix>>,
}

impl PathCounter {
    /// Creates a counter for `keypad`, costing moves under `cost_model`.
    pub fn new(keypad: Keypad, cost_model: CostModel) -> Self {
        let graph = KeypadGraph::build(&keypad, cost_model);
        debug!(
            keys = graph.key_count(),
            moves = graph.move_count(),
            %cost_model,
            "built keypad graph"
        );
        Self {
            keypad,
            graph,
            single_moves: OnceLock::new(),
        }
    }

    /// The keypad being counted.
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The knight-move graph derived from the keypad.
    #[must_use]
    pub const fn graph(&self) -> &KeypadGraph {
        &self.graph
    }

    /// Number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.graph.key_count()
    }

    fn single_move_matrices(&self) -> &[CountMatrix] {
        self.single_moves.get_or_init(|| {
            let n = self.key_count();
            let mut by_cost = vec![CountMatrix::zeros(n, n); self.graph.max_move_cost() + 1];
            for m in self.graph.moves() {
                by_cost[m.cost].set(m.from, m.to, 1);
            }
            trace!(costs = by_cost.len(), "built single-move matrices");
            by_cost
        })
    }

    /// Single-move family with `max_vowels + 1` buckets.
    ///
    /// Bucket `b` has a 1 at `(from, to)` when the move `from -> to` costs `b`.
    #[must_use]
    pub fn base_family(&self, max_vowels: usize) -> TransitionFamily {
        let n = self.key_count();
        let buckets = bucket_count(max_vowels);
        let single = self.single_move_matrices();
        let matrices = (0..buckets)
            .map(|cost| {
                single
                    .get(cost)
                    .cloned()
                    .unwrap_or_else(|| CountMatrix::zeros(n, n))
            })
            .collect();
        TransitionFamily::from_buckets(matrices)
    }

    /// Entry family: a `1 x numKeys` row per bucket marking the first key,
    /// bucketed by the cost of starting there.
    #[must_use]
    pub fn entry_family(&self, max_vowels: usize) -> TransitionFamily {
        let n = self.key_count();
        let buckets = bucket_count(max_vowels);
        let mut family = TransitionFamily::zeros(buckets, 1, n);
        for key in 0..n {
            let cost = self.graph.entry_cost(key);
            if cost < buckets {
                family.bucket_mut(cost).set(0, key, 1);
            }
        }
        family
    }

    /// Drops, from the last bucket, every sequence whose terminal key would
    /// push it over budget. Identity under [`CostModel::Arrival`].
    fn apply_terminal_reduction(&self, family: &mut TransitionFamily) {
        let last = family.bucket_count() - 1;
        let bucket = family.bucket_mut(last);
        for key in 0..self.key_count() {
            if self.graph.terminal_cost(key) > 0 {
                bucket.clear_column(key);
            }
        }
    }

    /// Raises `base` to `exponent` by squaring, least-significant bit first.
    /// `exponent == 0` yields the identity family.
    pub fn power(
        base: &TransitionFamily,
        exponent: u64,
    ) -> Result<TransitionFamily, ArithmeticOverflow> {
        let mut result: Option<TransitionFamily> = None;
        let mut square = base.clone();
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = Some(match result {
                    None => square.clone(),
                    Some(acc) => acc.compose(&square)?,
                });
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.compose(&square)?;
                trace!(remaining, "squared transition family");
            }
        }

        let (n, _) = base.shape();
        Ok(result.unwrap_or_else(|| TransitionFamily::identity(base.bucket_count(), n)))
    }

    /// Number of sequences of `length` keys that contain at most `max_vowels`
    /// vowel keys.
    ///
    /// `length == 0` yields 0; `length == 1` yields the key count regardless
    /// of the budget.
    pub fn count_sequences(&self, length: u64, max_vowels: usize) -> Result<u64, CountError> {
        if let Some(trivial) = self.trivial_count(length) {
            return Ok(trivial);
        }
        let budget = effective_budget(length, max_vowels);
        let overflow = |_| {
            warn!(length, max_vowels, "sequence count overflowed u64");
            CountError::Overflow { length, max_vowels }
        };

        let moves = Self::power(&self.base_family(budget), length - 1).map_err(overflow)?;
        let mut last_keys = self
            .entry_family(budget)
            .compose(&moves)
            .map_err(overflow)?;
        self.apply_terminal_reduction(&mut last_keys);
        let count = last_keys.total().map_err(overflow)?;

        debug!(length, max_vowels, count, "counted sequences");
        Ok(count)
    }

    /// Same result as [`count_sequences`](Self::count_sequences), composing
    /// the single-move family `length - 1` times without squaring.
    pub fn count_sequences_stepwise(
        &self,
        length: u64,
        max_vowels: usize,
    ) -> Result<u64, CountError> {
        if let Some(trivial) = self.trivial_count(length) {
            return Ok(trivial);
        }
        let budget = effective_budget(length, max_vowels);
        let overflow = |_| CountError::Overflow { length, max_vowels };

        let base = self.base_family(budget);
        let mut last_keys = self.entry_family(budget);
        for _ in 1..length {
            last_keys = last_keys.compose(&base).map_err(overflow)?;
        }
        self.apply_terminal_reduction(&mut last_keys);
        last_keys.total().map_err(overflow)
    }

    /// Same result as [`count_sequences`](Self::count_sequences), walking the
    /// grouped destination lists one move at a time.
    pub fn count_sequences_grouped(
        &self,
        length: u64,
        max_vowels: usize,
    ) -> Result<u64, CountError> {
        if let Some(trivial) = self.trivial_count(length) {
            return Ok(trivial);
        }
        let budget = effective_budget(length, max_vowels);
        let buckets = bucket_count(budget);
        let overflow = |_| CountError::Overflow { length, max_vowels };

        let grouped = GroupedMoves::build(&self.graph, buckets);
        let mut counts: Vec<Vec<u64>> = (0..self.key_count())
            .map(|key| {
                let mut row = vec![0u64; buckets];
                if let Some(cell) = row.get_mut(self.graph.entry_cost(key)) {
                    *cell = 1;
                }
                row
            })
            .collect();
        for _ in 1..length {
            counts = grouped.advance(&counts).map_err(overflow)?;
        }

        counts
            .iter()
            .enumerate()
            .flat_map(|(key, row)| {
                let terminal = self.graph.terminal_cost(key);
                row.iter()
                    .enumerate()
                    .filter(move |(spent, _)| spent + terminal < buckets)
                    .map(|(_, &ways)| ways)
            })
            .try_fold(0u64, u64::checked_add)
            .ok_or(CountError::Overflow { length, max_vowels })
    }

    fn trivial_count(&self, length: u64) -> Option<u64> {
        match length {
            0 => Some(0),
            1 => Some(self.key_count() as u64),
            _ => None,
        }
    }
}

/// `K = max_vowels + 1`.
fn bucket_count(max_vowels: usize) -> usize {
    max_vowels.saturating_add(1)
}

/// A sequence of `length` keys holds at most `length` vowels, so larger
/// budgets are equivalent to `length`.
fn effective_budget(length: u64, max_vowels: usize) -> usize {
    usize::try_from(length).map_or(max_vowels, |len| max_vowels.min(len))
}
