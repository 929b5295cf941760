//! Single linkage, also known as nearest-neighbor linkage.

use rayon::prelude::*;

use crate::{
    metric::{Metric, ParMetric},
    Cluster,
};

use super::{cross_distances, Linkage, ParLinkage};

/// The minimum distance between any instance of one cluster and any instance
/// of the other.
///
/// Single linkage tends to chain clusters together along elongated shapes.
#[derive(Debug, Clone)]
pub struct SingleLinkage<M> {
    /// The metric between instances.
    metric: M,
}

impl<M> SingleLinkage<M> {
    /// Creates a new `SingleLinkage` with the given metric.
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

impl<I, M: Metric<I>> Linkage<I> for SingleLinkage<M> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        cross_distances(&self.metric, cluster1, cluster2)
            .reduce(f64::min)
            .unwrap_or(f64::NAN)
    }

    fn name(&self) -> &'static str {
        "single"
    }
}

impl<I: Send + Sync, M: ParMetric<I>> ParLinkage<I> for SingleLinkage<M> {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        cluster1
            .instances()
            .par_iter()
            .flat_map(|a| cluster2.instances().par_iter().map(move |b| self.metric.par_distance(a, b)))
            .reduce_with(f64::min)
            .unwrap_or(f64::NAN)
    }
}
