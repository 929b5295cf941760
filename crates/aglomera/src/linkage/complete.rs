//! Complete linkage, also known as farthest-neighbor linkage.

use rayon::prelude::*;

use crate::{
    metric::{Metric, ParMetric},
    Cluster,
};

use super::{cross_distances, Linkage, ParLinkage};

/// The maximum distance between any instance of one cluster and any instance
/// of the other.
///
/// Complete linkage produces compact clusters but is sensitive to outliers.
#[derive(Debug, Clone)]
pub struct CompleteLinkage<M> {
    /// The metric between instances.
    metric: M,
}

impl<M> CompleteLinkage<M> {
    /// Creates a new `CompleteLinkage` with the given metric.
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

impl<I, M: Metric<I>> Linkage<I> for CompleteLinkage<M> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        cross_distances(&self.metric, cluster1, cluster2)
            .reduce(f64::max)
            .unwrap_or(f64::NAN)
    }

    fn name(&self) -> &'static str {
        "complete"
    }
}

impl<I: Send + Sync, M: ParMetric<I>> ParLinkage<I> for CompleteLinkage<M> {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        cluster1
            .instances()
            .par_iter()
            .flat_map(|a| cluster2.instances().par_iter().map(move |b| self.metric.par_distance(a, b)))
            .reduce_with(f64::max)
            .unwrap_or(f64::NAN)
    }
}
