//! Centroid functions and the `CentroidLinkage`.

use crate::{
    metric::{Metric, ParMetric},
    utils, Cluster, DataPoint,
};

use super::{Linkage, ParLinkage};

/// A function that computes or picks a representative instance of a cluster.
///
/// Returns `None` for empty clusters. Any closure
/// `Fn(&Cluster<I>) -> Option<I>` is a `Centroid`.
pub trait Centroid<I> {
    /// Returns the representative instance of the cluster.
    fn centroid(&self, cluster: &Cluster<I>) -> Option<I>;
}

impl<I, F: Fn(&Cluster<I>) -> Option<I>> Centroid<I> for F {
    fn centroid(&self, cluster: &Cluster<I>) -> Option<I> {
        self(cluster)
    }
}

/// The coordinate-wise arithmetic mean of the points in a cluster.
///
/// The centroid is a synthetic point with the id `"centroid"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Centroid<DataPoint> for Mean {
    #[allow(clippy::cast_precision_loss)]
    fn centroid(&self, cluster: &Cluster<DataPoint>) -> Option<DataPoint> {
        let first = cluster.instances().first()?;
        let mut sums = vec![0.0; first.dimensionality()];
        for point in cluster {
            for (s, &x) in sums.iter_mut().zip(point.coordinates()) {
                *s += x;
            }
        }

        let n = cluster.cardinality() as f64;
        Some(DataPoint::new("centroid", sums.into_iter().map(|s| s / n).collect()))
    }
}

/// The medoid of a cluster: the member with the smallest sum of distances to
/// all other members.
///
/// Ties go to the smallest member under the instance order.
#[derive(Debug, Clone)]
pub struct Medoid<M> {
    /// The metric used to find the medoid.
    metric: M,
}

impl<M> Medoid<M> {
    /// Creates a new `Medoid` with the given metric.
    #[must_use]
    pub const fn new(metric: M) -> Self {
        Self { metric }
    }
}

impl<I: Clone, M: Metric<I>> Centroid<I> for Medoid<M> {
    fn centroid(&self, cluster: &Cluster<I>) -> Option<I> {
        let sums = cluster
            .iter()
            .map(|a| cluster.iter().map(|b| self.metric.distance(a, b)).sum::<f64>())
            .collect::<Vec<_>>();
        utils::arg_min(&sums).map(|(i, _)| cluster.instances()[i].clone())
    }
}

/// The distance between the centroids of the two clusters.
///
/// This costs two centroid computations and one metric call per invocation.
/// It is not reducible, so the merge dissimilarities of a clustering with
/// this linkage are not guaranteed to be monotonic.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct CentroidLinkage<M, C> {
    /// The metric between instances.
    metric: M,
    /// The centroid function.
    centroid: C,
}

impl<M, C> CentroidLinkage<M, C> {
    /// Creates a new `CentroidLinkage` with the given metric and centroid
    /// function.
    #[must_use]
    pub const fn new(metric: M, centroid: C) -> Self {
        Self { metric, centroid }
    }

    /// Returns the metric between instances.
    #[must_use]
    pub const fn metric(&self) -> &M {
        &self.metric
    }
}

/// Computes the metric distance between the centroids of two clusters.
pub(super) fn centroid_distance<I, M: Metric<I>, C: Centroid<I>>(
    metric: &M,
    centroid: &C,
    cluster1: &Cluster<I>,
    cluster2: &Cluster<I>,
) -> f64 {
    match (centroid.centroid(cluster1), centroid.centroid(cluster2)) {
        (Some(a), Some(b)) => metric.distance(&a, &b),
        _ => f64::NAN,
    }
}

/// Parallel version of `centroid_distance` that computes both centroids
/// concurrently.
pub(super) fn par_centroid_distance<I, M, C>(metric: &M, centroid: &C, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64
where
    I: Send + Sync,
    M: ParMetric<I>,
    C: Centroid<I> + Sync,
{
    match rayon::join(|| centroid.centroid(cluster1), || centroid.centroid(cluster2)) {
        (Some(a), Some(b)) => metric.par_distance(&a, &b),
        _ => f64::NAN,
    }
}

impl<I, M: Metric<I>, C: Centroid<I>> Linkage<I> for CentroidLinkage<M, C> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        centroid_distance(&self.metric, &self.centroid, cluster1, cluster2)
    }

    fn name(&self) -> &'static str {
        "centroid"
    }
}

impl<I, M, C> ParLinkage<I> for CentroidLinkage<M, C>
where
    I: Send + Sync,
    M: ParMetric<I>,
    C: Centroid<I> + Send + Sync,
{
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        par_centroid_distance(&self.metric, &self.centroid, cluster1, cluster2)
    }
}
