//! The `Euclidean` distance metric.

use super::{Metric, ParMetric};

/// The `Euclidean` distance metric.
///
/// Works on any instance that can be viewed as a slice of `f64` coordinates.
/// Coordinates past the end of the shorter instance are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<I: AsRef<[f64]>> Metric<I> for Euclidean {
    fn distance(&self, a: &I, b: &I) -> f64 {
        distances::vectors::euclidean::<f64, f64>(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn is_expensive(&self) -> bool {
        false
    }
}

impl<I: AsRef<[f64]> + Send + Sync> ParMetric<I> for Euclidean {}
