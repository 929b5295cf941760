//! The `SquaredEuclidean` distance.

use super::{Metric, ParMetric};

/// The squared `Euclidean` distance.
///
/// This is not a metric in the strict sense since it does not obey the
/// triangle inequality, but it is the natural dissimilarity for centroid
/// linkages on coordinate data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl<I: AsRef<[f64]>> Metric<I> for SquaredEuclidean {
    fn distance(&self, a: &I, b: &I) -> f64 {
        distances::vectors::euclidean_sq::<f64, f64>(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &'static str {
        "squared-euclidean"
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn is_expensive(&self) -> bool {
        false
    }
}

impl<I: AsRef<[f64]> + Send + Sync> ParMetric<I> for SquaredEuclidean {}
