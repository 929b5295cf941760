//! Linkage criteria measure the dissimilarity between two clusters.
//!
//! | Linkage | Dissimilarity | Effect |
//! |---------|---------------|--------|
//! | Single | min(d(a,b)) for a∈A, b∈B | Chaining; elongated clusters |
//! | Complete | max(d(a,b)) | Compact clusters; sensitive to outliers |
//! | Average | mean(d(a,b)) | Balanced compromise (UPGMA) |
//! | Centroid | d(c(A), c(B)) | Constant number of metric calls |
//! | Ward | d(c(A), c(B))² · \|A\|\|B\| / (\|A\|+\|B\|) | Minimizes within-cluster variance |
//! | Minimum-Energy | e-distance with exponent α ∈ (0, 2] | Generalizes Ward |
//!
//! Every linkage wraps a [`Metric`](crate::Metric). The centroid-based
//! linkages also take a [`Centroid`] function to pick or compute a
//! representative instance for each cluster.
//!
//! Empty clusters have an undefined dissimilarity, which is reported as `NaN`.

mod average;
mod centroid;
mod complete;
mod minimum_energy;
mod single;
mod wards;

pub use average::AverageLinkage;
pub use centroid::{Centroid, CentroidLinkage, Mean, Medoid};
pub use complete::CompleteLinkage;
pub use minimum_energy::MinimumEnergyLinkage;
pub use single::SingleLinkage;
pub use wards::WardsLinkage;

use crate::{metric::Metric, Cluster};

/// A `Linkage` criterion computes the dissimilarity between two clusters.
///
/// Implementations must be pure functions of the two clusters.
///
/// # Example
///
/// ```rust
/// use aglomera::{linkage::SingleLinkage, metric::AbsoluteDifference, Cluster, Linkage};
///
/// let linkage = SingleLinkage::new(AbsoluteDifference);
/// let a = Cluster::from_instances([1, 2], 1.0);
/// let b = Cluster::from_instances([6, 9], 3.0);
///
/// assert_eq!(linkage.distance(&a, &b), 4.0);
/// ```
pub trait Linkage<I> {
    /// Computes the dissimilarity between two clusters.
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64;

    /// The name of the linkage criterion.
    fn name(&self) -> &str;
}

/// Parallel version of [`Linkage`](crate::linkage::Linkage).
#[allow(clippy::module_name_repetitions)]
pub trait ParLinkage<I: Send + Sync>: Linkage<I> + Send + Sync {
    /// Parallel version of [`Linkage::distance`](crate::linkage::Linkage::distance).
    ///
    /// The default implementation calls the non-parallel version.
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        self.distance(cluster1, cluster2)
    }
}

impl<I, L: Linkage<I> + ?Sized> Linkage<I> for &L {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        (**self).distance(cluster1, cluster2)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<I: Send + Sync, L: ParLinkage<I> + ?Sized> ParLinkage<I> for &L {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        (**self).par_distance(cluster1, cluster2)
    }
}

impl<I, L: Linkage<I> + ?Sized> Linkage<I> for Box<L> {
    fn distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        (**self).distance(cluster1, cluster2)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<I: Send + Sync, L: ParLinkage<I> + ?Sized> ParLinkage<I> for Box<L> {
    fn par_distance(&self, cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
        (**self).par_distance(cluster1, cluster2)
    }
}

/// Returns the metric distances over the cross product of two clusters.
fn cross_distances<'a, I, M: Metric<I>>(
    metric: &'a M,
    cluster1: &'a Cluster<I>,
    cluster2: &'a Cluster<I>,
) -> impl Iterator<Item = f64> + 'a {
    cluster1
        .iter()
        .flat_map(move |a| cluster2.iter().map(move |b| metric.distance(a, b)))
}

/// Returns `|c1| · |c2| / (|c1| + |c2|)`, the weight shared by Ward's and
/// minimum-energy linkages.
#[allow(clippy::cast_precision_loss)]
fn size_weight<I>(cluster1: &Cluster<I>, cluster2: &Cluster<I>) -> f64 {
    let (n1, n2) = (cluster1.cardinality() as f64, cluster2.cardinality() as f64);
    n1 * n2 / (n1 + n2)
}
