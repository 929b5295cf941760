//! Ward's minimum-variance linkage.

use crate::{
    metric::{Metric, ParMetric},
    Cluster,
};

use super::{
    centroid::{centroid_distance, par_centroid_distance},
    size_weight, Centroid, Linkage, ParLinkage,
};

/// Ward's minimum-variance linkage.
///
/// The squared distance between the centroids of the two clusters, weighted
/// by `|c1| · |c2| / (|c1| + |c2|)`. With the `Euclidean` metric and the
/// `Mean` centroid, this is the increase in the within-cluster sum of squares
/// caused by merging the two clusters.
///
/// # Example
///
/// ```rust
/// use aglomera::{
///     linkage::{Mean, WardsLinkage},
///     metric::Euclidean,
///     Cluster, DataPoint, Linkage,
/// };
///
/// let a = Cluster::from_instances([DataPoint::new("a", vec![0.0]), DataPoint::new("b", vec![2.0])], 2.0);
/// let b = Cluster::new(DataPoint::new("c", vec![4.0]));
///
/// // Centroids at 1 and 4, sizes 2 and 1: 3² · 2 / 3.
/// let linkage = WardsLinkage::new(Euclidean, Mean);
/// assert!((linkage.distance(&a, &b) - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WardsLinkage<M, C> {
    /// The metric between instances.
    metric: M,
    /// The centroid function.
    centroid: C,
}

impl<M, C> WardsLinkage<M, C> {
    /// Creates a new `WardsLinkage` with the given metric and centroid
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

impl<I, M: Metric<I>, C: Centroid<I>> Linkage<I> for WardsLinkage<M, C> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        let d = centroid_distance(&self.metric, &self.centroid, cluster1, cluster2);
        d * d * size_weight(cluster1, cluster2)
    }

    fn name(&self) -> &'static str {
        "ward"
    }
}

impl<I, M, C> ParLinkage<I> for WardsLinkage<M, C>
where
    I: Send + Sync,
    M: ParMetric<I>,
    C: Centroid<I> + Send + Sync,
{
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        let d = par_centroid_distance(&self.metric, &self.centroid, cluster1, cluster2);
        d * d * size_weight(cluster1, cluster2)
    }
}
