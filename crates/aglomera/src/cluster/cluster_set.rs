//! A `ClusterSet` is one horizontal cut of the dendrogram.

use std::sync::Arc;

use super::Cluster;

/// An immutable partition of the instances into `Cluster`s, tagged with the
/// dissimilarity at which it was formed.
///
/// The clusters are shared with the other `ClusterSet`s of a
/// [`ClusteringResult`](super::ClusteringResult), so keeping many of them
/// around is cheap.
///
/// # Example
///
/// ```rust
/// use aglomera::{Cluster, ClusterSet};
///
/// let set = ClusterSet::new(vec![Cluster::from_instances([1, 2], 0.5), Cluster::new(3)], 0.5);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.cluster_of(&2), Some(0));
/// assert_eq!(set.labels(&[3, 1, 4]), vec![Some(1), Some(0), None]);
/// assert_eq!(set.to_string(), "0.500\t{(1;2), (3)}");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::module_name_repetitions)]
pub struct ClusterSet<I> {
    /// The clusters in the partition.
    clusters: Vec<Arc<Cluster<I>>>,
    /// The dissimilarity at which the partition was formed.
    dissimilarity: f64,
}

impl<I> ClusterSet<I> {
    /// Creates a new `ClusterSet` from owned clusters.
    #[must_use]
    pub fn new(clusters: Vec<Cluster<I>>, dissimilarity: f64) -> Self {
        Self::from_shared(clusters.into_iter().map(Arc::new).collect(), dissimilarity)
    }

    /// Creates a new `ClusterSet` from shared clusters.
    #[must_use]
    pub const fn from_shared(clusters: Vec<Arc<Cluster<I>>>, dissimilarity: f64) -> Self {
        Self { clusters, dissimilarity }
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the dissimilarity at which the partition was formed.
    #[must_use]
    pub const fn dissimilarity(&self) -> f64 {
        self.dissimilarity
    }

    /// Returns the cluster at the given position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cluster<I>> {
        self.clusters.get(index).map(AsRef::as_ref)
    }

    /// Returns an iterator over the clusters.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Cluster<I>> + ExactSizeIterator {
        self.clusters.iter().map(AsRef::as_ref)
    }

    /// Returns the shared handles to the clusters.
    #[must_use]
    pub fn shared(&self) -> &[Arc<Cluster<I>>] {
        &self.clusters
    }

    /// Returns the total number of instances over all clusters.
    #[must_use]
    pub fn num_instances(&self) -> usize {
        self.clusters.iter().map(|c| c.cardinality()).sum()
    }
}

impl<I: Ord + core::hash::Hash + Clone> ClusterSet<I> {
    /// Returns the position of the cluster holding the given instance.
    #[must_use]
    pub fn cluster_of(&self, instance: &I) -> Option<usize> {
        self.clusters.iter().position(|c| c.contains(instance))
    }

    /// Returns the position of the cluster holding each of the given
    /// instances, or `None` for instances outside the partition.
    ///
    /// These flat labels are what most cluster-validity indices consume.
    #[must_use]
    pub fn labels(&self, instances: &[I]) -> Vec<Option<usize>> {
        instances.iter().map(|i| self.cluster_of(i)).collect()
    }
}

impl<I> core::ops::Index<usize> for ClusterSet<I> {
    type Output = Cluster<I>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clusters[index]
    }
}

impl<'a, I> IntoIterator for &'a ClusterSet<I> {
    type Item = &'a Cluster<I>;
    type IntoIter = core::iter::Map<core::slice::Iter<'a, Arc<Cluster<I>>>, fn(&'a Arc<Cluster<I>>) -> &'a Cluster<I>>;

    fn into_iter(self) -> Self::IntoIter {
        let unshare: fn(&'a Arc<Cluster<I>>) -> &'a Cluster<I> = |c| c.as_ref();
        self.clusters.iter().map(unshare)
    }
}

impl<I: PartialEq> PartialEq for ClusterSet<I> {
    fn eq(&self, other: &Self) -> bool {
        crate::utils::approx_eq(self.dissimilarity, other.dissimilarity) && self.clusters == other.clusters
    }
}

impl<I: core::fmt::Display> core::fmt::Display for ClusterSet<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.3}\t{{", self.dissimilarity)?;
        for (i, cluster) in self.clusters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cluster}")?;
        }
        write!(f, "}}")
    }
}
