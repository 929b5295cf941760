//! Minimum-energy linkage.

use rayon::prelude::*;

use crate::{
    metric::{Metric, ParMetric},
    Cluster,
};

use super::{size_weight, Linkage, ParLinkage};

/// Minimum-energy linkage, based on the energy distance of Székely and Rizzo.
///
/// ```text
/// D(A, B) = |A||B| / (|A| + |B|) · (2 E(A, B) - E(A, A) - E(B, B))
/// E(X, Y) = 1 / (|X||Y|) · Σ_{x ∈ X, y ∈ Y} d(x, y)^α
/// ```
///
/// The exponent `α` must lie in `(0, 2]`. With `α = 2` and the `Euclidean`
/// metric this is twice the Ward's linkage of the two clusters.
///
/// The exponent applies to each pairwise distance before averaging, not to
/// the sum of distances. Raising the sum, `(Σ d)^α / (|X||Y|)`, would make
/// `E` depend on the cluster sizes through the power and lose both the
/// non-negativity of the energy distance and its reduction to Ward's linkage.
#[derive(Debug, Clone)]
pub struct MinimumEnergyLinkage<M> {
    /// The metric between instances.
    metric: M,
    /// The exponent applied to every distance.
    exponent: f64,
}

impl<M> MinimumEnergyLinkage<M> {
    /// Creates a new `MinimumEnergyLinkage` with an exponent of 1.
    #[must_use]
    pub const fn new(metric: M) -> Self {
        Self { metric, exponent: 1.0 }
    }

    /// Creates a new `MinimumEnergyLinkage` with the given exponent.
    ///
    /// # Errors
    ///
    /// If the exponent is not in `(0, 2]`.
    pub fn with_exponent(metric: M, exponent: f64) -> Result<Self, String> {
        if exponent > 0.0 && exponent <= 2.0 {
            Ok(Self { metric, exponent })
        } else {
            Err(format!("The distance exponent must be in (0, 2]. Got {exponent}"))
        }
    }

    /// Returns the metric between instances.
    #[must_use]
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Returns the distance exponent.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Raises a distance to the exponent.
    fn power(&self, d: f64) -> f64 {
        if (self.exponent - 1.0).abs() < f64::EPSILON {
            d
        } else {
            d.powf(self.exponent)
        }
    }

    /// Combines the three mean energies into the weighted energy distance.
    #[allow(clippy::cast_precision_loss)]
    fn combine<I>(cross: f64, within1: f64, within2: f64, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        let (n1, n2) = (cluster1.cardinality() as f64, cluster2.cardinality() as f64);
        let e12 = cross / (n1 * n2);
        let e11 = within1 / (n1 * n1);
        let e22 = within2 / (n2 * n2);
        size_weight(cluster1, cluster2) * (2.0 * e12 - e11 - e22)
    }
}

impl<M> MinimumEnergyLinkage<M> {
    /// Sum of the powered distances over all ordered pairs of two clusters.
    fn cross_sum<I>(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64
    where
        M: Metric<I>,
    {
        cluster1
            .iter()
            .map(|a| cluster2.iter().map(|b| self.power(self.metric.distance(a, b))).sum::<f64>())
            .sum()
    }

    /// Sum of the powered distances over all ordered pairs within a cluster.
    ///
    /// Only the upper triangle is computed.
    fn within_sum<I>(&self, cluster: &Cluster<I>) -> f64
    where
        M: Metric<I>,
    {
        let instances = cluster.instances();
        let upper = instances
            .iter()
            .enumerate()
            .map(|(i, a)| {
                instances[(i + 1)..]
                    .iter()
                    .map(|b| self.power(self.metric.distance(a, b)))
                    .sum::<f64>()
            })
            .sum::<f64>();
        2.0 * upper
    }

    /// Parallel version of `cross_sum`.
    fn par_cross_sum<I: Send + Sync>(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64
    where
        M: ParMetric<I>,
    {
        cluster1
            .instances()
            .par_iter()
            .map(|a| cluster2.iter().map(|b| self.power(self.metric.par_distance(a, b))).sum::<f64>())
            .collect::<Vec<_>>()
            .into_iter()
            .sum()
    }

    /// Parallel version of `within_sum`.
    fn par_within_sum<I: Send + Sync>(&self, cluster: &Cluster<I>) -> f64
    where
        M: ParMetric<I>,
    {
        let instances = cluster.instances();
        let upper = instances
            .par_iter()
            .enumerate()
            .map(|(i, a)| {
                instances[(i + 1)..]
                    .iter()
                    .map(|b| self.power(self.metric.par_distance(a, b)))
                    .sum::<f64>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .sum::<f64>();
        2.0 * upper
    }
}

impl<I, M: Metric<I>> Linkage<I> for MinimumEnergyLinkage<M> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        if cluster1.is_empty() || cluster2.is_empty() {
            return f64::NAN;
        }
        let cross = self.cross_sum(cluster1, cluster2);
        let within1 = self.within_sum(cluster1);
        let within2 = self.within_sum(cluster2);
        Self::combine(cross, within1, within2, cluster1, cluster2)
    }

    fn name(&self) -> &'static str {
        "minimum-energy"
    }
}

impl<I: Send + Sync, M: ParMetric<I>> ParLinkage<I> for MinimumEnergyLinkage<M> {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        if cluster1.is_empty() || cluster2.is_empty() {
            return f64::NAN;
        }
        let cross = self.par_cross_sum(cluster1, cluster2);
        let within1 = self.par_within_sum(cluster1);
        let within2 = self.par_within_sum(cluster2);
        Self::combine(cross, within1, within2, cluster1, cluster2)
    }
}
