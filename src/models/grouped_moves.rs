//! Per-key destination lists grouped by move cost.
//!
//! This is the adjacency-list form of a single-move transition family: for
//! every origin key, bucket `b` lists the keys reachable by one move of cost
//! `b`. Walking it step by step gives the same counts as the matrix form.

use super::count_matrix::ArithmeticOverflow;
use super::move_graph::KeypadGraph;

/// Destination keys of every origin key, bucketed by move cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedMoves {
    bucket_count: usize,
    /// `groups[from][cost]` lists destination key indices
    groups: Vec<Vec<Vec<usize>>>,
}

impl GroupedMoves {
    /// Groups the moves of `graph` into `bucket_count` cost buckets.
    /// Moves costing `bucket_count` or more are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    #[must_use]
    pub fn build(graph: &KeypadGraph, bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "grouped moves need at least one bucket");
        let groups = (0..graph.key_count())
            .map(|from| {
                let mut buckets = vec![Vec::new(); bucket_count];
                for m in graph.moves_from(from) {
                    if let Some(bucket) = buckets.get_mut(m.cost) {
                        bucket.push(m.to);
                    }
                }
                buckets
            })
            .collect();
        Self {
            bucket_count,
            groups,
        }
    }

    /// Number of cost buckets.
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Destinations of `from` reachable by one move costing `cost`.
    #[must_use]
    pub fn group(&self, from: usize, cost: usize) -> &[usize] {
        &self.groups[from][cost]
    }

    /// Number of destinations of `from` across every bucket.
    #[must_use]
    pub fn destination_count(&self, from: usize) -> usize {
        self.groups[from].iter().map(Vec::len).sum()
    }

    /// Advances per-key bucket counts by one move.
    ///
    /// `counts[key][b]` is the number of partial sequences ending on `key`
    /// with accumulated cost `b`. Results that would reach `bucket_count`
    /// are dropped.
    pub fn advance(&self, counts: &[Vec<u64>]) -> Result<Vec<Vec<u64>>, ArithmeticOverflow> {
        let k = self.bucket_count;
        let mut next = vec![vec![0u64; k]; self.groups.len()];

        for (from, by_cost) in counts.iter().enumerate() {
            for (spent, &ways) in by_cost.iter().enumerate() {
                if ways == 0 {
                    continue;
                }
                for (cost, destinations) in self.groups[from].iter().enumerate() {
                    let total = spent + cost;
                    if total >= k {
                        break;
                    }
                    for &to in destinations {
                        let cell = &mut next[to][total];
                        *cell = cell.checked_add(ways).ok_or(ArithmeticOverflow)?;
                    }
                }
            }
        }

        Ok(next)
    }
}
