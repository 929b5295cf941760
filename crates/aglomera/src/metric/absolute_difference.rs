//! The `AbsoluteDifference` metric.

use distances::Number;

use super::{Metric, ParMetric};

/// The `AbsoluteDifference` metric measures the absolute difference between two
/// values. It is meant to be used with scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteDifference;

impl<T: Number + Copy> Metric<T> for AbsoluteDifference {
    fn distance(&self, a: &T, b: &T) -> f64 {
        (a.as_f64() - b.as_f64()).abs()
    }

    fn name(&self) -> &'static str {
        "absolute-difference"
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn is_expensive(&self) -> bool {
        false
    }
}

impl<T: Number + Copy> ParMetric<T> for AbsoluteDifference {}
