//! Agglomerative nesting: the stepwise merge driver that builds a dendrogram.

use core::hash::Hash;
use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    linkage::{Linkage, ParLinkage},
    Cluster, ClusterSet, ClusteringResult,
};

/// Which of several equally minimal dissimilarities wins a merge step.
///
/// Candidate pairs `(a, b)` of active slots, with `b < a`, are scanned in
/// ascending order of `a` and then of `b`. Slots hold the initial clusters in
/// input order followed by merged clusters in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The first minimal pair in scan order wins.
    #[default]
    First,
    /// The last minimal pair in scan order wins.
    Last,
}

impl TieBreak {
    /// Whether a candidate dissimilarity replaces the current best.
    fn replaces(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::First => candidate < best,
            Self::Last => candidate <= best,
        }
    }
}

/// Agglomerative hierarchical clustering with a pluggable linkage criterion.
///
/// Starting from `m` clusters, the two closest clusters under the linkage
/// are merged `m - 1` times until a single cluster remains. Each cluster's
/// dissimilarity to every other cluster is computed exactly once, so a full
/// run makes `O(m²)` linkage calls and uses `O(m²)` memory.
///
/// The driver holds no state between runs.
///
/// Linkages that are not reducible, such as `CentroidLinkage`, can merge at a
/// lower dissimilarity than the step before. Such inversions are logged at
/// `warn` and listed by [`ClusteringResult::inversions`].
///
/// # Example
///
/// ```rust
/// use aglomera::{linkage::SingleLinkage, metric::AbsoluteDifference, Agnes};
///
/// let agnes = Agnes::new(SingleLinkage::new(AbsoluteDifference));
/// let result = agnes.cluster_instances([1, 2, 4, 8]).unwrap();
///
/// assert_eq!(result.len(), 4);
/// assert_eq!(result[1].dissimilarity(), 1.0);
/// assert_eq!(result.single_cluster().instances(), &[1, 2, 4, 8]);
/// assert_eq!(result.single_cluster().dissimilarity(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Agnes<L> {
    /// The linkage criterion.
    linkage: L,
    /// The rule for equally minimal dissimilarities.
    tie_break: TieBreak,
}

/// The working state of one clustering run.
struct Slots<I> {
    /// The initial clusters followed by the merged ones; merged-away slots
    /// are `None`.
    clusters: Vec<Option<Arc<Cluster<I>>>>,
    /// The lower-triangular dissimilarity matrix. Row `a` holds the linkage
    /// between slot `a` and every earlier slot, and is emptied once slot `a`
    /// is merged away.
    matrix: Vec<Vec<f64>>,
    /// The indices of the occupied slots, in ascending order.
    active: Vec<usize>,
}

impl<I> Slots<I> {
    /// Returns the shared clusters in the occupied slots.
    fn active_clusters(&self) -> Vec<Arc<Cluster<I>>> {
        self.active.iter().filter_map(|&s| self.clusters[s].clone()).collect()
    }

    /// Appends a cluster in a new slot along with its row of the matrix.
    fn push(&mut self, cluster: Arc<Cluster<I>>, row: Vec<(usize, f64)>) {
        let slot = self.clusters.len();
        let mut dissimilarities = vec![f64::NAN; slot];
        for (j, d) in row {
            dissimilarities[j] = d;
        }
        self.clusters.push(Some(cluster));
        self.matrix.push(dissimilarities);
        self.active.push(slot);
    }

    /// Finds the pair of occupied slots with the minimal dissimilarity.
    ///
    /// `NaN` dissimilarities never win. If every pair is `NaN`, the first
    /// pair in scan order is returned with a `NaN` dissimilarity.
    fn closest_pair(&self, tie_break: TieBreak) -> (usize, usize, f64) {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, &a) in self.active.iter().enumerate() {
            for &b in &self.active[..i] {
                let d = self.matrix[a][b];
                if d.is_nan() {
                    continue;
                }
                if best.map_or(true, |(_, _, m)| tie_break.replaces(d, m)) {
                    best = Some((a, b, d));
                }
            }
        }

        best.unwrap_or_else(|| {
            ftlog::warn!("No comparable dissimilarity among {} clusters.", self.active.len());
            (self.active[1], self.active[0], f64::NAN)
        })
    }

    /// Removes two clusters from their slots and frees their matrix rows.
    fn take_pair(&mut self, a: usize, b: usize) -> Option<(Arc<Cluster<I>>, Arc<Cluster<I>>)> {
        self.active.retain(|&s| s != a && s != b);
        self.matrix[a] = Vec::new();
        self.matrix[b] = Vec::new();
        self.clusters[a].take().zip(self.clusters[b].take())
    }
}

impl<L> Agnes<L> {
    /// Creates a new `Agnes` with the given linkage criterion and the
    /// `First` tie-break rule.
    #[must_use]
    pub const fn new(linkage: L) -> Self {
        Self {
            linkage,
            tie_break: TieBreak::First,
        }
    }

    /// Sets the rule for equally minimal dissimilarities.
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns the linkage criterion.
    #[must_use]
    pub const fn linkage(&self) -> &L {
        &self.linkage
    }

    /// Returns the rule for equally minimal dissimilarities.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Clusters a set of instances, starting from singletons at
    /// dissimilarity 0.
    ///
    /// Duplicate instances are collapsed into one singleton, and the
    /// singletons are ordered by the instance order.
    ///
    /// # Errors
    ///
    /// If there are no instances.
    pub fn cluster_instances<I, It>(&self, instances: It) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone,
        It: IntoIterator<Item = I>,
        L: Linkage<I>,
    {
        self.cluster_clusters(singletons(instances), 0.0)
    }

    /// Continues clustering from an existing partition, using its
    /// dissimilarity as the floor of the initial `ClusterSet`.
    ///
    /// # Errors
    ///
    /// If the partition is empty.
    pub fn cluster_set<I>(&self, cluster_set: &ClusterSet<I>) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone,
        L: Linkage<I>,
    {
        self.run(cluster_set.shared().to_vec(), cluster_set.dissimilarity(), |c, slots| {
            self.row(c, slots)
        })
    }

    /// Clusters an arbitrary sequence of clusters, tagging the initial
    /// `ClusterSet` with the given dissimilarity.
    ///
    /// # Errors
    ///
    /// If there are no clusters.
    pub fn cluster_clusters<I, It>(&self, clusters: It, dissimilarity: f64) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone,
        It: IntoIterator<Item = Cluster<I>>,
        L: Linkage<I>,
    {
        let clusters = clusters.into_iter().map(Arc::new).collect();
        self.run(clusters, dissimilarity, |c, slots| self.row(c, slots))
    }

    /// Computes the dissimilarities from a new cluster to every occupied slot.
    fn row<I>(&self, cluster: &Cluster<I>, slots: &Slots<I>) -> Vec<(usize, f64)>
    where
        L: Linkage<I>,
    {
        slots
            .active
            .iter()
            .filter_map(|&j| slots.clusters[j].as_ref().map(|other| (j, other)))
            .map(|(j, other)| (j, self.linkage.distance(cluster, other)))
            .collect()
    }

    /// The merge loop shared by the sequential and parallel entry points.
    ///
    /// `row` computes the dissimilarities from a new cluster to the occupied
    /// slots.
    fn run<I, F>(&self, initial: Vec<Arc<Cluster<I>>>, floor: f64, row: F) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone,
        F: Fn(&Cluster<I>, &Slots<I>) -> Vec<(usize, f64)>,
        L: Linkage<I>,
    {
        let m = initial.len();
        if m == 0 {
            return Err("Cannot cluster an empty collection of clusters".to_string());
        }
        ftlog::info!(
            "Clustering {m} clusters with {} linkage and {:?} tie-break.",
            self.linkage.name(),
            self.tie_break
        );

        let mut result = ClusteringResult::new(ClusterSet::from_shared(initial.clone(), floor), m);

        let mut slots = Slots {
            clusters: Vec::with_capacity(2 * m - 1),
            matrix: Vec::with_capacity(2 * m - 1),
            active: Vec::with_capacity(m),
        };
        for cluster in initial {
            let dissimilarities = row(&cluster, &slots);
            slots.push(cluster, dissimilarities);
        }

        let mut previous = floor;
        for step in 1..m {
            let (a, b, d) = slots.closest_pair(self.tie_break);
            if crate::utils::is_inversion(previous, d) {
                ftlog::warn!(
                    "Step {step}/{}: {} linkage merged at {d:.6}, below the previous {previous:.6}.",
                    m - 1,
                    self.linkage.name()
                );
            }
            previous = d;
            let (parent_a, parent_b) = slots
                .take_pair(a, b)
                .unwrap_or_else(|| unreachable!("Active slots are always occupied"));
            ftlog::debug!("Step {step}/{}: merging slots {b} and {a} at {d:.6}", m - 1);

            let merged = Arc::new(Cluster::merged(parent_a, parent_b, d));
            let dissimilarities = row(&merged, &slots);
            slots.push(merged, dissimilarities);

            result.push(ClusterSet::from_shared(slots.active_clusters(), d));
        }

        Ok(result)
    }
}

impl<L> Agnes<L> {
    /// Parallel version of [`Agnes::cluster_instances`](Agnes::cluster_instances).
    ///
    /// Merge steps run in sequence. Within a step, the dissimilarities from
    /// the new cluster to the other clusters are computed in parallel. The
    /// result is identical to that of the sequential version.
    ///
    /// # Errors
    ///
    /// See [`Agnes::cluster_instances`](Agnes::cluster_instances).
    pub fn par_cluster_instances<I, It>(&self, instances: It) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone + Send + Sync,
        It: IntoIterator<Item = I>,
        L: ParLinkage<I>,
    {
        self.par_cluster_clusters(singletons(instances), 0.0)
    }

    /// Parallel version of [`Agnes::cluster_set`](Agnes::cluster_set).
    ///
    /// # Errors
    ///
    /// See [`Agnes::cluster_set`](Agnes::cluster_set).
    pub fn par_cluster_set<I>(&self, cluster_set: &ClusterSet<I>) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone + Send + Sync,
        L: ParLinkage<I>,
    {
        self.run(cluster_set.shared().to_vec(), cluster_set.dissimilarity(), |c, slots| {
            self.par_row(c, slots)
        })
    }

    /// Parallel version of [`Agnes::cluster_clusters`](Agnes::cluster_clusters).
    ///
    /// # Errors
    ///
    /// See [`Agnes::cluster_clusters`](Agnes::cluster_clusters).
    pub fn par_cluster_clusters<I, It>(&self, clusters: It, dissimilarity: f64) -> Result<ClusteringResult<I>, String>
    where
        I: Ord + Hash + Clone + Send + Sync,
        It: IntoIterator<Item = Cluster<I>>,
        L: ParLinkage<I>,
    {
        let clusters = clusters.into_iter().map(Arc::new).collect();
        self.run(clusters, dissimilarity, |c, slots| self.par_row(c, slots))
    }

    /// Parallel version of `row`.
    fn par_row<I>(&self, cluster: &Cluster<I>, slots: &Slots<I>) -> Vec<(usize, f64)>
    where
        I: Send + Sync,
        L: ParLinkage<I>,
    {
        slots
            .active
            .par_iter()
            .filter_map(|&j| slots.clusters[j].as_ref().map(|other| (j, other)))
            .map(|(j, other)| (j, self.linkage.par_distance(cluster, other)))
            .collect()
    }
}

/// Wraps each unique instance in a singleton `Cluster`, in instance order.
fn singletons<I: Ord + Hash + Clone, It: IntoIterator<Item = I>>(instances: It) -> Vec<Cluster<I>> {
    let mut instances = instances.into_iter().collect::<Vec<_>>();
    instances.sort();
    instances.dedup();
    instances.into_iter().map(Cluster::new).collect()
}
