//! The `ClusteringResult` is the full lineage of partitions of a clustering.

use std::{collections::HashMap, sync::Arc};

use crate::utils;

use super::{Cluster, ClusterSet};

/// A single merge in the dendrogram, in the numbering used by `SciPy`'s
/// linkage matrices.
///
/// The initial clusters are numbered `0..m` in the order of the first
/// `ClusterSet`, and the cluster created by the `i`-th merge is numbered
/// `m + i`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Merge {
    /// The number of the first (canonically smaller) parent.
    pub cluster_a: usize,
    /// The number of the second parent.
    pub cluster_b: usize,
    /// The dissimilarity at which the merge occurred.
    pub dissimilarity: f64,
    /// The number of instances in the merged cluster.
    pub size: usize,
}

/// The ordered sequence of `ClusterSet`s produced by a clustering.
///
/// The first `ClusterSet` holds the initial clusters and every following one
/// holds exactly one cluster fewer, so the last one holds the single root
/// `Cluster`. Iteration goes in merge order and can be reversed to walk from
/// the root down to the leaves.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::module_name_repetitions)]
pub struct ClusteringResult<I> {
    /// The partitions, from the initial clusters to the root.
    cluster_sets: Vec<ClusterSet<I>>,
}

impl<I> ClusteringResult<I> {
    /// Starts a result from the initial partition.
    pub(crate) fn new(initial: ClusterSet<I>, capacity: usize) -> Self {
        let mut cluster_sets = Vec::with_capacity(capacity);
        cluster_sets.push(initial);
        Self { cluster_sets }
    }

    /// Appends the partition produced by the next merge.
    pub(crate) fn push(&mut self, cluster_set: ClusterSet<I>) {
        self.cluster_sets.push(cluster_set);
    }

    /// Returns the number of `ClusterSet`s, i.e. the number of merges plus one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cluster_sets.len()
    }

    /// Always `false`; a result holds at least its initial partition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cluster_sets.is_empty()
    }

    /// Returns the `ClusterSet` at the given step.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&ClusterSet<I>> {
        self.cluster_sets.get(step)
    }

    /// Returns an iterator over the `ClusterSet`s in merge order.
    pub fn iter(&self) -> core::slice::Iter<'_, ClusterSet<I>> {
        self.cluster_sets.iter()
    }

    /// Returns the initial partition.
    #[must_use]
    pub fn first(&self) -> &ClusterSet<I> {
        &self.cluster_sets[0]
    }

    /// Returns the root `Cluster`, which holds every instance.
    #[must_use]
    pub fn single_cluster(&self) -> &Cluster<I> {
        self.cluster_sets
            .last()
            .and_then(|set| set.get(0))
            .unwrap_or_else(|| unreachable!("A clustering result always ends with one cluster"))
    }

    /// Returns the dissimilarity of every `ClusterSet`, in merge order.
    #[must_use]
    pub fn dissimilarities(&self) -> Vec<f64> {
        self.cluster_sets.iter().map(ClusterSet::dissimilarity).collect()
    }

    /// Returns the steps whose dissimilarity is lower than that of the step
    /// before, beyond [`EPSILON`](crate::utils::EPSILON).
    ///
    /// Reducible linkages (single, complete, average and Ward's) never
    /// produce inversions.
    #[must_use]
    pub fn inversions(&self) -> Vec<usize> {
        self.cluster_sets
            .windows(2)
            .enumerate()
            .filter(|(_, w)| utils::is_inversion(w[0].dissimilarity(), w[1].dissimilarity()))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Whether the dissimilarities never decrease from one step to the next.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.inversions().is_empty()
    }

    /// Returns the `ClusterSet` with exactly `k` clusters.
    ///
    /// # Errors
    ///
    /// If `k` is zero or larger than the number of initial clusters.
    pub fn cut(&self, k: usize) -> Result<&ClusterSet<I>, String> {
        let m = self.first().len();
        if k == 0 || k > m {
            return Err(format!("Cannot cut {m} initial clusters into {k} clusters"));
        }
        Ok(&self.cluster_sets[m - k])
    }

    /// Returns the coarsest `ClusterSet` formed at or below the given
    /// dissimilarity.
    ///
    /// If the threshold is below the dissimilarity of the initial partition,
    /// the initial partition is returned.
    #[must_use]
    pub fn at_dissimilarity(&self, threshold: f64) -> &ClusterSet<I> {
        self.cluster_sets
            .iter()
            .rev()
            .find(|set| set.dissimilarity() <= threshold + utils::EPSILON)
            .unwrap_or_else(|| self.first())
    }

    /// Returns the merges in order, numbered as in a `SciPy` linkage matrix.
    #[must_use]
    pub fn merges(&self) -> Vec<Merge> {
        let mut numbers = self
            .first()
            .shared()
            .iter()
            .enumerate()
            .map(|(i, c)| (Arc::as_ptr(c), i))
            .collect::<HashMap<_, _>>();

        let mut merges = Vec::with_capacity(self.len() - 1);
        for set in &self.cluster_sets[1..] {
            let merged = set
                .shared()
                .iter()
                .find(|c| !numbers.contains_key(&Arc::as_ptr(*c)))
                .unwrap_or_else(|| unreachable!("Every step creates exactly one cluster"));
            let (a, b) = merged
                .shared_parents()
                .unwrap_or_else(|| unreachable!("Merged clusters have parents"));
            let number_of = |c: &Arc<Cluster<I>>| {
                numbers
                    .get(&Arc::as_ptr(c))
                    .copied()
                    .unwrap_or_else(|| unreachable!("Parents are numbered before their child"))
            };

            merges.push(Merge {
                cluster_a: number_of(a),
                cluster_b: number_of(b),
                dissimilarity: merged.dissimilarity(),
                size: merged.cardinality(),
            });
            numbers.insert(Arc::as_ptr(merged), numbers.len());
        }

        merges
    }
}

impl<I> core::ops::Index<usize> for ClusteringResult<I> {
    type Output = ClusterSet<I>;

    fn index(&self, step: usize) -> &Self::Output {
        &self.cluster_sets[step]
    }
}

impl<'a, I> IntoIterator for &'a ClusteringResult<I> {
    type Item = &'a ClusterSet<I>;
    type IntoIter = core::slice::Iter<'a, ClusterSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cluster_sets.iter()
    }
}

impl<I> IntoIterator for ClusteringResult<I> {
    type Item = ClusterSet<I>;
    type IntoIter = std::vec::IntoIter<ClusterSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cluster_sets.into_iter()
    }
}

impl<I: core::fmt::Display> core::fmt::Display for ClusteringResult<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for set in &self.cluster_sets {
            writeln!(f, "{set}")?;
        }
        Ok(())
    }
}
