//! The `Metric` trait is used for all dissimilarity computations between
//! instances.

use std::sync::Arc;

mod absolute_difference;
mod cached;
mod euclidean;
mod fn_metric;
mod macros;
mod manhattan;
mod squared_euclidean;

pub use absolute_difference::AbsoluteDifference;
pub use cached::CachedMetric;
pub use euclidean::Euclidean;
pub use fn_metric::FnMetric;
pub use manhattan::Manhattan;
pub use squared_euclidean::SquaredEuclidean;

use macros::{impl_metric_block, impl_par_metric_block};

/// The `Metric` trait is used for all dissimilarity computations between
/// instances.
///
/// Dissimilarities are expected to be symmetric and non-negative, with
/// `d(a, a) = 0`. None of these is enforced.
///
/// # Type Parameters
///
/// - `I`: The type of the instances.
///
/// # Example
///
/// The following is an example of a `Metric` implementation for the Hamming
/// distance between two sequences of bytes.
///
/// ```rust
/// use aglomera::metric::{Metric, ParMetric};
///
/// struct Hamming;
///
/// impl<I: AsRef<[u8]>> Metric<I> for Hamming {
///     fn distance(&self, a: &I, b: &I) -> f64 {
///         let count = a.as_ref().iter().zip(b.as_ref()).filter(|(x, y)| x != y).count();
///         count as f64
///     }
///
///     fn name(&self) -> &str {
///         "hamming"
///     }
///
///     fn has_symmetry(&self) -> bool {
///         true
///     }
///
///     fn is_expensive(&self) -> bool {
///         false
///     }
/// }
///
/// impl<I: AsRef<[u8]> + Send + Sync> ParMetric<I> for Hamming {}
///
/// let metric = Hamming;
/// assert_eq!(metric.distance(b"hello", b"world"), 4.0);
/// ```
pub trait Metric<I> {
    /// Call the metric on two instances.
    fn distance(&self, a: &I, b: &I) -> f64;

    /// The name of the metric.
    fn name(&self) -> &str;

    /// Whether the metric is symmetric.
    ///
    /// Symmetry is defined as `d(a, b) = d(b, a)` for all instances `a` and
    /// `b`. Only symmetric metrics can be cached in a triangular table.
    fn has_symmetry(&self) -> bool;

    /// Whether the metric is expensive to compute.
    ///
    /// We say that a metric is expensive if it costs more than linear time in
    /// the size of the instances to compute the distance between them.
    fn is_expensive(&self) -> bool;
}

/// Parallel version of [`Metric`](crate::metric::Metric).
///
/// Any metric that can be shared across threads may be used from the
/// parallel parts of the clustering algorithm.
#[allow(clippy::module_name_repetitions)]
pub trait ParMetric<I: Send + Sync>: Metric<I> + Send + Sync {
    /// Parallel version of [`Metric::distance`](crate::metric::Metric::distance).
    ///
    /// The default implementation calls the non-parallel version of the
    /// distance function.
    fn par_distance(&self, a: &I, b: &I) -> f64 {
        self.distance(a, b)
    }
}

impl<I, M: Metric<I> + ?Sized> Metric<I> for &M {
    impl_metric_block!();
}

impl<I: Send + Sync, M: ParMetric<I> + ?Sized> ParMetric<I> for &M {
    impl_par_metric_block!();
}

impl<I, M: Metric<I> + ?Sized> Metric<I> for Box<M> {
    impl_metric_block!();
}

impl<I: Send + Sync, M: ParMetric<I> + ?Sized> ParMetric<I> for Box<M> {
    impl_par_metric_block!();
}

impl<I, M: Metric<I> + ?Sized> Metric<I> for Arc<M> {
    impl_metric_block!();
}

impl<I: Send + Sync, M: ParMetric<I> + ?Sized> ParMetric<I> for Arc<M> {
    impl_par_metric_block!();
}
