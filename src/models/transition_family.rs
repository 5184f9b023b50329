//! Cost-bucketed transition families and their composition.
//!
//! A family holds `K` matrices of identical shape. Bucket `b` counts the
//! paths whose accumulated cost is exactly `b`; anything that would cost `K`
//! or more is never stored.

use super::count_matrix::{ArithmeticOverflow, CountMatrix};

/// `K` same-shaped count matrices indexed by accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionFamily {
    buckets: Vec<CountMatrix>,
}

impl TransitionFamily {
    /// Creates a family of `bucket_count` zero matrices of shape `rows x cols`.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    #[must_use]
    pub fn zeros(bucket_count: usize, rows: usize, cols: usize) -> Self {
        assert!(bucket_count > 0, "a transition family needs at least one bucket");
        Self {
            buckets: vec![CountMatrix::zeros(rows, cols); bucket_count],
        }
    }

    /// The neutral element of [`compose`](Self::compose): identity at cost 0.
    #[must_use]
    pub fn identity(bucket_count: usize, n: usize) -> Self {
        let mut family = Self::zeros(bucket_count, n, n);
        family.buckets[0] = CountMatrix::identity(n);
        family
    }

    /// Wraps existing matrices as buckets `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is empty or the matrices differ in shape.
    #[must_use]
    pub fn from_buckets(buckets: Vec<CountMatrix>) -> Self {
        assert!(!buckets.is_empty(), "a transition family needs at least one bucket");
        let first = (buckets[0].rows(), buckets[0].cols());
        assert!(
            buckets.iter().all(|m| (m.rows(), m.cols()) == first),
            "all buckets of a transition family must share one shape"
        );
        Self { buckets }
    }

    /// Number of buckets `K`.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Shape `(rows, cols)` shared by every bucket.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.buckets[0].rows(), self.buckets[0].cols())
    }

    /// Matrix of bucket `cost`.
    #[must_use]
    pub fn bucket(&self, cost: usize) -> &CountMatrix {
        &self.buckets[cost]
    }

    /// Mutable matrix of bucket `cost`.
    pub fn bucket_mut(&mut self, cost: usize) -> &mut CountMatrix {
        &mut self.buckets[cost]
    }

    /// Iterates over the buckets in cost order.
    pub fn buckets(&self) -> impl Iterator<Item = &CountMatrix> {
        self.buckets.iter()
    }

    /// Concatenation: paths of `self` followed by paths of `other`.
    ///
    /// `C[i + j] += self[i] * other[j]` for every `i + j < K`; pairs whose
    /// combined cost reaches `K` are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the bucket counts differ or the shapes do not chain.
    pub fn compose(&self, other: &Self) -> Result<Self, ArithmeticOverflow> {
        let k = self.bucket_count();
        assert_eq!(
            k,
            other.bucket_count(),
            "cannot compose families with different bucket counts"
        );
        let (rows, _) = self.shape();
        let (_, cols) = other.shape();
        let mut composed = Self::zeros(k, rows, cols);

        for (i, left) in self.buckets().enumerate() {
            if left.is_zero() {
                continue;
            }
            for (j, right) in other.buckets().take(k - i).enumerate() {
                if right.is_zero() {
                    continue;
                }
                let product = left.checked_mul(right)?;
                composed.buckets[i + j].checked_add_assign(&product)?;
            }
        }

        Ok(composed)
    }

    /// Sum of every entry of every bucket.
    pub fn total(&self) -> Result<u64, ArithmeticOverflow> {
        self.buckets().try_fold(0u64, |acc, m| {
            acc.checked_add(m.total()?).ok_or(ArithmeticOverflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(buckets: &[&[Vec<u64>]]) -> TransitionFamily {
        TransitionFamily::from_buckets(buckets.iter().map(|b| CountMatrix::from_rows(b)).collect())
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = family(&[&[vec![0, 1], vec![1, 0]], &[vec![1, 0], vec![0, 1]]]);
        let id = TransitionFamily::identity(2, 2);
        assert_eq!(a.compose(&id).unwrap(), a);
        assert_eq!(id.compose(&a).unwrap(), a);
    }

    #[test]
    fn test_costs_add() {
        // one cost-0 edge 0->1 and one cost-1 edge 1->0
        let a = family(&[
            &[vec![0, 1], vec![0, 0]],
            &[vec![0, 0], vec![1, 0]],
            &[vec![0, 0], vec![0, 0]],
        ]);
        let aa = a.compose(&a).unwrap();
        // 0->1->0 costs 1, 1->0->1 costs 1
        assert!(aa.bucket(0).is_zero());
        assert_eq!(aa.bucket(1), &CountMatrix::from_rows(&[vec![1, 0], vec![0, 1]]));
        assert!(aa.bucket(2).is_zero());
    }

    #[test]
    fn test_over_budget_pairs_are_dropped() {
        // every path costs 1 per step; with K = 2 two steps exceed the budget
        let a = family(&[&[vec![0]], &[vec![1]]]);
        let aa = a.compose(&a).unwrap();
        assert_eq!(aa.total(), Ok(0));

        let b = family(&[&[vec![0]], &[vec![1]], &[vec![0]]]);
        let bb = b.compose(&b).unwrap();
        assert_eq!(bb.bucket(2).get(0, 0), 1);
        assert_eq!(bb.total(), Ok(1));
    }

    #[test]
    fn test_row_vector_composition_keeps_shape() {
        let entry = family(&[&[vec![1, 0]], &[vec![0, 1]]]);
        let step = family(&[&[vec![0, 1], vec![1, 0]], &[vec![0, 0], vec![0, 0]]]);
        let next = entry.compose(&step).unwrap();
        assert_eq!(next.shape(), (1, 2));
        assert_eq!(next.bucket(0).row(0), &[0, 1]);
        assert_eq!(next.bucket(1).row(0), &[1, 0]);
    }

    #[test]
    fn test_total_sums_buckets_in_cost_order() {
        let a = family(&[
            &[vec![1, 2], vec![0, 0]],
            &[vec![0, 0], vec![3, 0]],
            &[vec![0, 0], vec![0, 4]],
        ]);
        let per_bucket: Vec<u64> = a.buckets().map(|m| m.total().unwrap()).collect();
        assert_eq!(per_bucket, vec![3, 3, 4]);
        assert_eq!(a.total(), Ok(10));
    }

    #[test]
    #[should_panic(expected = "different bucket counts")]
    fn test_mismatched_bucket_counts_panic() {
        let a = TransitionFamily::identity(2, 2);
        let b = TransitionFamily::identity(3, 2);
        let _ = a.compose(&b);
    }
}
