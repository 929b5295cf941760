//! Average linkage, also known as UPGMA.

use rayon::prelude::*;

use crate::{
    metric::{Metric, ParMetric},
    Cluster,
};

use super::{Linkage, ParLinkage};

/// The mean distance over all pairs of instances, one from each cluster.
///
/// Row sums are added in the same order by the sequential and parallel
/// versions, so both give bit-identical results.
#[derive(Debug, Clone)]
pub struct AverageLinkage<M> {
    /// The metric between instances.
    metric: M,
}

impl<M> AverageLinkage<M> {
    /// Creates a new `AverageLinkage` with the given metric.
    #[must_use]
    pub const fn new(metric: M) -> Self {
        Self { metric }
    }

    /// Returns the metric between instances.
    #[must_use]
    pub const fn metric(&self) -> &M {
        &self.metric
    }
}

/// Divides a sum of cross distances by the size of the cross product.
#[allow(clippy::cast_precision_loss)]
fn mean<I>(sum: f64, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
    sum / (cluster1.cardinality() * cluster2.cardinality()) as f64
}

impl<I, M: Metric<I>> Linkage<I> for AverageLinkage<M> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        let sum = cluster1
            .iter()
            .map(|a| cluster2.iter().map(|b| self.metric.distance(a, b)).sum::<f64>())
            .sum::<f64>();
        mean(sum, cluster1, cluster2)
    }

    fn name(&self) -> &'static str {
        "average"
    }
}

impl<I: Send + Sync, M: ParMetric<I>> ParLinkage<I> for AverageLinkage<M> {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        let sum = cluster1
            .instances()
            .par_iter()
            .map(|a| cluster2.iter().map(|b| self.metric.par_distance(a, b)).sum::<f64>())
            .collect::<Vec<_>>()
            .into_iter()
            .sum::<f64>();
        mean(sum, cluster1, cluster2)
    }
}
