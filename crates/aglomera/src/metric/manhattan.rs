//! The `Manhattan` distance metric.

use super::{Metric, ParMetric};

/// The `Manhattan` distance metric, also known as the city block distance.
///
/// This is a distance metric that measures the distance between two points in a
/// grid based on the sum of the absolute differences of their coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<I: AsRef<[f64]>> Metric<I> for Manhattan {
    fn distance(&self, a: &I, b: &I) -> f64 {
        distances::vectors::manhattan(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn is_expensive(&self) -> bool {
        false
    }
}

impl<I: AsRef<[f64]> + Send + Sync> ParMetric<I> for Manhattan {}
